//! Paragraph extraction for the document formats found in a corpus.
//!
//! `.docx` files yield one paragraph per `w:p` element of `word/document.xml`.
//! Every other file is read as UTF-8 text with one paragraph per line.

use crate::error::{Error, Result};
use quick_xml::events::Event;
use std::io::Read;
use std::path::Path;

/// Maximum decompressed bytes read from `word/document.xml` (zip-bomb protection).
const MAX_XML_ENTRY_BYTES: u64 = 50 * 1024 * 1024;

pub fn read_paragraphs(path: &Path) -> Result<Vec<String>> {
    let is_docx = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("docx"))
        .unwrap_or(false);
    if is_docx {
        let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
        docx_paragraphs(&bytes).map_err(|reason| Error::Docx { path: path.to_path_buf(), reason })
    } else {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(text_paragraphs(&text))
    }
}

pub fn text_paragraphs(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

pub fn docx_paragraphs(bytes: &[u8]) -> std::result::Result<Vec<String>, String> {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).map_err(|e| e.to_string())?;
    let entry = archive.by_name("word/document.xml").map_err(|e| e.to_string())?;
    let mut xml = Vec::new();
    entry.take(MAX_XML_ENTRY_BYTES).read_to_end(&mut xml).map_err(|e| e.to_string())?;
    if xml.len() as u64 >= MAX_XML_ENTRY_BYTES {
        return Err("word/document.xml exceeds size limit".to_string());
    }
    paragraphs_from_document_xml(&xml)
}

fn is_body_child(body_depth: Option<usize>, depth: usize) -> bool {
    body_depth.is_some_and(|body| depth == body + 1)
}

/// Only `w:p` elements directly under `w:body` are paragraphs. Table cells are skipped, and
/// paragraphs nested inside a body paragraph (text boxes) contribute no text.
fn paragraphs_from_document_xml(xml: &[u8]) -> std::result::Result<Vec<String>, String> {
    let mut reader = quick_xml::Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut in_text = false;
    let mut depth = 0usize;
    let mut body_depth: Option<usize> = None;
    // `w:p` elements open inside `current`
    let mut nested = 0usize;
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                depth += 1;
                match e.local_name().as_ref() {
                    b"body" => body_depth = Some(depth),
                    b"p" if current.is_some() => nested += 1,
                    b"p" if is_body_child(body_depth, depth) => current = Some(String::new()),
                    b"t" => in_text = true,
                    _ => {}
                }
            }
            Ok(Event::End(e)) => {
                match e.local_name().as_ref() {
                    b"p" if nested > 0 => nested -= 1,
                    b"p" => {
                        if let Some(p) = current.take() {
                            paragraphs.push(p);
                        }
                    }
                    b"t" => in_text = false,
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"p" if current.is_none() && is_body_child(body_depth, depth + 1) => {
                    paragraphs.push(String::new())
                }
                b"tab" | b"br" if nested == 0 => {
                    if let Some(p) = current.as_mut() {
                        p.push(' ');
                    }
                }
                _ => {}
            },
            Ok(Event::Text(te)) if in_text && nested == 0 => {
                if let Some(p) = current.as_mut() {
                    p.push_str(te.unescape().map_err(|e| e.to_string())?.as_ref());
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }
        buf.clear();
    }
    Ok(paragraphs)
}
