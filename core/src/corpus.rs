//! Corpus enumeration and paragraph access.
//!
//! A corpus is a two-level tree: `root/<category>/<document>`. The category of a
//! document is the name of the directory that contains it.

use crate::error::{Error, Result};
use crate::extract;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub type DocId = u32;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub id: DocId,
    pub path: PathBuf,
    pub category: String,
    pub word_count: u32,
    pub paragraph_count: u32,
}

impl Document {
    /// Basename of the document path, used in reports.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub path: PathBuf,
    pub category: String,
}

/// Where documents and their paragraph text come from.
///
/// `entries` must return the same order every time it is called; document ids are
/// assigned from that order.
pub trait CorpusSource {
    fn entries(&self) -> Result<Vec<CorpusEntry>>;
    fn paragraphs(&self, path: &Path) -> Result<Vec<String>>;
}

#[derive(Debug, Clone)]
pub struct DirectoryCorpus {
    root: PathBuf,
}

impl DirectoryCorpus {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_ignored(name: &str) -> bool {
    name.starts_with('.') || name.starts_with("~$")
}

impl CorpusSource for DirectoryCorpus {
    fn entries(&self) -> Result<Vec<CorpusEntry>> {
        if !self.root.is_dir() {
            return Err(Error::io(
                &self.root,
                std::io::Error::new(std::io::ErrorKind::NotFound, "corpus root is not a directory"),
            ));
        }
        let mut entries = Vec::new();
        let walker = WalkDir::new(&self.root).min_depth(2).max_depth(2).sort_by_file_name();
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if is_ignored(&name) {
                continue;
            }
            let category = entry
                .path()
                .parent()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            entries.push(CorpusEntry { path: entry.path().to_path_buf(), category });
        }
        tracing::debug!(
            root = %self.root.display(),
            documents = entries.len(),
            "enumerated corpus"
        );
        Ok(entries)
    }

    fn paragraphs(&self, path: &Path) -> Result<Vec<String>> {
        extract::read_paragraphs(path)
    }
}

/// A corpus held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    entries: Vec<CorpusEntry>,
    texts: HashMap<PathBuf, Vec<String>>,
}

impl MemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document at `<category>/<name>`. Re-adding a path replaces its paragraphs.
    pub fn add<I, S>(&mut self, category: &str, name: &str, paragraphs: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let path = Path::new(category).join(name);
        if !self.texts.contains_key(&path) {
            self.entries.push(CorpusEntry { path: path.clone(), category: category.to_string() });
        }
        self.texts.insert(path, paragraphs.into_iter().map(Into::into).collect());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CorpusSource for MemoryCorpus {
    fn entries(&self) -> Result<Vec<CorpusEntry>> {
        Ok(self.entries.clone())
    }

    fn paragraphs(&self, path: &Path) -> Result<Vec<String>> {
        self.texts
            .get(path)
            .cloned()
            .ok_or_else(|| Error::UnknownDocument(path.display().to_string()))
    }
}
