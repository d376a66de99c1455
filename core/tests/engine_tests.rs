use search_core::{Analyzer, DirectoryCorpus, EngineConfig, Relevance, SearchEngine, StopWords};
use std::fs;
use std::io::Write;
use std::path::Path;

fn words(term: &str, count: usize, total: usize) -> String {
    let mut out = vec![term; count];
    out.extend(std::iter::repeat("filler").take(total - count));
    out.join(" ")
}

fn write_doc(root: &Path, category: &str, name: &str, text: &str) {
    let dir = root.join(category);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), text).unwrap();
}

/// Heisman 0-4, NFL 5-14, NHL 15-29, Stanford 30-34 once sorted.
fn build_corpus(root: &Path) {
    for i in 0..5 {
        write_doc(root, "Heisman", &format!("h{i:02}.txt"), &words("nhl", 1, 40));
    }
    for i in 0..10 {
        write_doc(root, "NFL", &format!("f{i:02}.txt"), &words("nhl", 1, 20));
    }
    for i in 0..15 {
        write_doc(root, "NHL", &format!("n{i:02}.txt"), &words("nhl", i + 2, 20));
    }
    for i in 0..5 {
        write_doc(root, "Stanford", &format!("s{i:02}.txt"), &words("cardinal", 3, 20));
    }
}

fn engine(root: &Path) -> SearchEngine<DirectoryCorpus> {
    let analyzer = Analyzer::new(StopWords::from_words(["the", "and", "of"]));
    SearchEngine::build(DirectoryCorpus::new(root), analyzer, EngineConfig::default()).unwrap()
}

#[test]
fn assigns_dense_ids_in_corpus_order() {
    let dir = tempfile::tempdir().unwrap();
    build_corpus(dir.path());
    let engine = engine(dir.path());
    let docs = engine.index().documents();
    assert_eq!(docs.len(), 35);
    assert!(docs.iter().enumerate().all(|(i, d)| d.id as usize == i));
    assert_eq!(docs[0].category, "Heisman");
    assert_eq!(docs[5].file_name(), "f00.txt");
    assert_eq!(docs[34].category, "Stanford");
    assert_eq!(docs[15].word_count, 20);
    assert_eq!(docs[15].paragraph_count, 1);
}

#[test]
fn threshold_cut_and_precision_recall() {
    let dir = tempfile::tempdir().unwrap();
    build_corpus(dir.path());
    let engine = engine(dir.path());

    let report = engine.search("NHL").unwrap();
    assert_eq!(report.terms, vec!["nhl".to_string()]);
    assert_eq!(report.matched, 30);
    assert!(report.threshold.is_some());

    // 15 NHL, 10 NFL ties newest first, then the last Heisman document stops the scan.
    assert_eq!(report.hits.len(), 26);
    assert!(report.hits[..15].iter().all(|h| h.category == "NHL"));
    assert_eq!(report.hits[0].file_name, "n14.txt");
    let nfl: Vec<&str> = report.hits[15..25].iter().map(|h| h.file_name.as_str()).collect();
    assert_eq!(nfl, (0..10).rev().map(|i| format!("f{i:02}.txt")).collect::<Vec<_>>());
    assert_eq!(report.hits[25].file_name, "h04.txt");
    assert!(report.hits.windows(2).all(|w| w[0].score >= w[1].score));

    let Relevance::Measured(m) = &report.relevance else { panic!("nhl maps to the NHL category") };
    assert_eq!((m.true_positives, m.selected, m.relevant), (15, 26, 15));
    let text = report.to_string();
    assert!(text.contains("PRECISION: 57.69%\n"));
    assert!(text.contains("RECALL: 100.00%\n"));
    assert_eq!(text.matches("-----------\n").count(), 26);
}

#[test]
fn fewer_than_twenty_matches_selects_all() {
    let dir = tempfile::tempdir().unwrap();
    build_corpus(dir.path());
    let engine = engine(dir.path());

    let report = engine.search("cardinal").unwrap();
    assert_eq!(report.matched, 5);
    assert_eq!(report.threshold, None);
    assert_eq!(report.hits.len(), 5);
    assert_eq!(report.relevance, Relevance::NotComputable);
    assert!(report.to_string().contains("Precision could not be calculated."));
}

#[test]
fn unknown_and_stop_words_yield_empty_report() {
    let dir = tempfile::tempdir().unwrap();
    build_corpus(dir.path());
    let engine = engine(dir.path());

    for query in ["the and of", "zamboni", "", "?!"] {
        let report = engine.search(query).unwrap();
        assert!(report.hits.is_empty(), "{query}");
        assert_eq!(report.relevance, Relevance::NotComputable);
        assert!(report.to_string().contains("NO MATCHING DOCUMENTS"));
    }
}

fn docx(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| {
            if p.is_empty() {
                "<w:p/>".to_string()
            } else {
                format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>")
            }
        })
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );
    let mut out = std::io::Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut out);
        zip.start_file("word/document.xml", zip::write::SimpleFileOptions::default()).unwrap();
        zip.write_all(xml.as_bytes()).unwrap();
        zip.finish().unwrap();
    }
    out.into_inner()
}

#[test]
fn reads_docx_documents() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("NikLidstrom")).unwrap();
    fs::write(
        root.join("NikLidstrom/career.docx"),
        docx(&[
            "Career overview",
            "",
            "Lidstrom captained Detroit.",
            "Lidstrom won the Norris seven times.",
        ]),
    )
    .unwrap();
    write_doc(root, "NHL", "league.txt", "The league office\nNo defenseman here");

    let engine = engine(root);
    let career = &engine.index().documents()[1];
    assert_eq!(career.file_name(), "career.docx");
    assert_eq!(career.paragraph_count, 3);

    let report = engine.search("Lidstrom Norris").unwrap();
    assert_eq!(report.hits.len(), 1);
    let snippet = &report.hits[0].snippet;
    assert_eq!(snippet.paragraph, 3);
    assert_eq!(snippet.text, "Lidstrom won the Norris seven times.");
    assert!(snippet.also_relevant.is_empty());

    let Relevance::Measured(m) = &report.relevance else {
        panic!("lidstrom is a category trigger")
    };
    assert_eq!(m.category, "NikLidstrom");
    assert_eq!((m.precision, m.recall), (1.0, 1.0));
}

#[test]
fn corpus_read_failure_aborts_build() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(dir.path(), "NHL", "broken.docx", "not a zip archive");
    let result = SearchEngine::build(
        DirectoryCorpus::new(dir.path()),
        Analyzer::default(),
        EngineConfig::default(),
    );
    assert!(matches!(result, Err(search_core::Error::Docx { .. })));
}
