use crate::corpus::DocId;
use crate::index::InvertedIndex;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredDocument {
    pub doc_id: DocId,
    pub score: f64,
}

/// Occurrences normalized by document length.
pub fn tf(occurrences: usize, word_count: u32) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    occurrences as f64 / word_count as f64
}

pub fn idf(corpus_size: usize, df: usize) -> f64 {
    if df == 0 {
        return 0.0;
    }
    (corpus_size as f64 / df as f64).log10()
}

/// Sum TF-IDF contributions per document.
///
/// Output keeps first-encounter order: query terms in order, each term's postings walked
/// newest document first.
pub fn score_terms(index: &InvertedIndex, terms: &[String]) -> Vec<ScoredDocument> {
    let n = index.num_docs();
    let mut scored: Vec<ScoredDocument> = Vec::new();
    let mut slot: HashMap<DocId, usize> = HashMap::new();

    for term in terms {
        let Some(postings) = index.postings(term) else { continue };
        let idf = idf(n, postings.len());
        for p in postings.iter().rev() {
            let word_count = index.document(p.doc_id).map_or(0, |d| d.word_count);
            let contrib = tf(p.occurrences(), word_count) * idf;
            match slot.get(&p.doc_id) {
                Some(&i) => scored[i].score += contrib,
                None => {
                    slot.insert(p.doc_id, scored.len());
                    scored.push(ScoredDocument { doc_id: p.doc_id, score: contrib });
                }
            }
        }
    }
    scored
}
