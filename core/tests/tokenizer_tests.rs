use search_core::tokenizer::{normalize_query, Analyzer, StopWords};

#[test]
fn it_normalizes_and_stems() {
    let analyzer = Analyzer::default();
    let terms: Vec<String> = normalize_query("Running Runners RUN! The café's menu.")
        .iter()
        .filter_map(|t| analyzer.term_for_token(t))
        .collect();
    // Stemming to "run" should appear
    assert!(terms.contains(&"run".to_string()));
    // Accents fold before punctuation is stripped
    assert!(terms.contains(&analyzer.stem("cafes")));
}

#[test]
fn it_filters_stopwords() {
    let analyzer = Analyzer::default();
    let terms: Vec<String> = normalize_query("The quick brown fox and the lazy dog")
        .iter()
        .filter_map(|t| analyzer.term_for_token(t))
        .collect();
    assert!(!terms.contains(&"the".to_string()));
    assert!(!terms.contains(&"and".to_string()));
    assert!(terms.contains(&"fox".to_string()));
}

#[test]
fn it_loads_stopwords_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stopWords.txt");
    std::fs::write(&path, "the\nAnd\n\n  of  \r\n").unwrap();
    let stopwords = StopWords::load(&path).unwrap();
    assert_eq!(stopwords.len(), 3);
    assert!(stopwords.contains("and"));
    assert!(stopwords.contains("of"));

    assert!(StopWords::load(dir.path().join("missing.txt")).is_err());
}
