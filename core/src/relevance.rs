//! Precision and recall against the category a query is known to target.

use crate::config::CategoryRule;
use crate::index::InvertedIndex;
use crate::score::ScoredDocument;
use crate::tokenizer::{normalize_word, Analyzer};
use serde::Serialize;

/// Ordered `term -> category` triggers. Keywords are analyzed like query words so they
/// compare against stemmed query terms.
#[derive(Debug, Clone, Default)]
pub struct CategoryTable {
    rules: Vec<(String, String)>,
}

impl CategoryTable {
    pub fn new(rules: &[CategoryRule], analyzer: &Analyzer) -> Self {
        let rules = rules
            .iter()
            .map(|r| {
                let token = normalize_word(&r.keyword);
                (analyzer.stem(&token), r.category.clone())
            })
            .collect();
        Self { rules }
    }

    /// First rule, in table order, whose term appears in `terms`.
    pub fn classify(&self, terms: &[String]) -> Option<&str> {
        self.rules
            .iter()
            .find(|(term, _)| terms.iter().any(|t| t == term))
            .map(|(_, category)| category.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub category: String,
    pub true_positives: usize,
    pub selected: usize,
    pub relevant: usize,
    /// Fraction in `[0, 1]`.
    pub precision: f64,
    /// Fraction in `[0, 1]`.
    pub recall: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Relevance {
    Measured(Measurement),
    NotComputable,
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

pub fn evaluate(
    table: &CategoryTable,
    terms: &[String],
    selected: &[ScoredDocument],
    index: &InvertedIndex,
) -> Relevance {
    let Some(category) = table.classify(terms) else {
        return Relevance::NotComputable;
    };
    let in_category = |doc_id| index.document(doc_id).is_some_and(|d| d.category == category);
    let true_positives = selected.iter().filter(|s| in_category(s.doc_id)).count();
    let relevant = index.documents().iter().filter(|d| d.category == category).count();
    Relevance::Measured(Measurement {
        category: category.to_string(),
        true_positives,
        selected: selected.len(),
        relevant,
        precision: ratio(true_positives, selected.len()),
        recall: ratio(true_positives, relevant),
    })
}
