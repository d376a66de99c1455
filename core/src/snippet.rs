//! Snippet extraction: pick the paragraph where the query terms cluster and cut a short
//! excerpt from it.

use crate::corpus::DocId;
use crate::index::InvertedIndex;
use serde::Serialize;

/// Where the query terms land inside one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphHits {
    /// Lowest-numbered paragraph with the most occurrences.
    pub best: u32,
    pub occurrences: usize,
    /// Sorted within-paragraph word numbers of the occurrences in `best`.
    pub word_positions: Vec<u32>,
    /// Other paragraphs with the same occurrence count as `best`, ascending.
    pub also_relevant: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub paragraph: u32,
    pub text: String,
    pub truncated: bool,
    pub also_relevant: Vec<u32>,
}

/// Returns `None` when none of `terms` occur in the document.
pub fn locate(index: &InvertedIndex, doc_id: DocId, terms: &[String]) -> Option<ParagraphHits> {
    let postings: Vec<_> = terms.iter().filter_map(|t| index.posting(t, doc_id)).collect();

    let mut paragraphs: Vec<u32> = postings
        .iter()
        .flat_map(|p| p.positions.iter().map(|pos| pos.paragraph))
        .collect();
    if paragraphs.is_empty() {
        return None;
    }
    paragraphs.sort_unstable();

    // Run lengths over the sorted list.
    let mut runs: Vec<(u32, usize)> = Vec::new();
    for p in paragraphs {
        match runs.last_mut() {
            Some((last, count)) if *last == p => *count += 1,
            _ => runs.push((p, 1)),
        }
    }
    let mut best = runs[0];
    for &run in &runs[1..] {
        if run.1 > best.1 {
            best = run;
        }
    }
    let (best_paragraph, occurrences) = best;
    let also_relevant = runs
        .iter()
        .filter(|&&(p, count)| count == occurrences && p != best_paragraph)
        .map(|&(p, _)| p)
        .collect();

    let mut word_positions: Vec<u32> = postings
        .iter()
        .flat_map(|p| p.positions.iter())
        .filter(|pos| pos.paragraph == best_paragraph)
        .map(|pos| pos.paragraph_word)
        .collect();
    word_positions.sort_unstable();

    Some(ParagraphHits { best: best_paragraph, occurrences, word_positions, also_relevant })
}

fn ends_sentence(word: &str) -> bool {
    let trimmed = word
        .trim_end_matches(|c: char| matches!(c, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}'));
    trimmed.ends_with(['.', '?', '!'])
}

/// Cut the excerpt for `hits` out of the best paragraph's text.
pub fn render(hits: &ParagraphHits, paragraph_text: &str, max_words: usize) -> Snippet {
    let words: Vec<&str> = paragraph_text.split_whitespace().collect();
    let snippet = |text: String, truncated: bool| Snippet {
        paragraph: hits.best,
        text,
        truncated,
        also_relevant: hits.also_relevant.clone(),
    };

    if words.len() <= max_words {
        return snippet(paragraph_text.trim().to_string(), false);
    }

    let first = hits.word_positions.first().copied().unwrap_or(1).max(1);
    let last = hits.word_positions.last().copied().unwrap_or(first).max(first);
    let start = (first as usize - 1).min(words.len() - 1);
    let end = (start + max_words).min(words.len());
    let span = (last - first) as usize;

    if span >= max_words {
        return snippet(words[start..end].join(" "), true);
    }

    // The span fits; stop at the first sentence end at or after the last occurrence.
    let last_index = last as usize - 1;
    let stop = (start..end).find(|&i| i >= last_index && ends_sentence(words[i]));
    match stop {
        Some(i) => snippet(words[start..=i].join(" "), false),
        None => snippet(words[start..end].join(" "), false),
    }
}
