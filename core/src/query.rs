use crate::index::InvertedIndex;
use crate::tokenizer::{normalize_query, Analyzer};

/// Turn a raw query into index terms.
///
/// Stop words and words whose stem is not in the vocabulary are dropped. Repeated words
/// are kept, each one contributes to scoring.
pub fn process_query(analyzer: &Analyzer, index: &InvertedIndex, query: &str) -> Vec<String> {
    let mut terms = Vec::new();
    for token in normalize_query(query) {
        match analyzer.term_for_token(&token) {
            Some(term) if index.contains_term(&term) => terms.push(term),
            Some(term) => tracing::debug!(%token, %term, "dropping out-of-vocabulary query term"),
            None => tracing::debug!(%token, "dropping stop word"),
        }
    }
    terms
}
