use crate::corpus::{DocId, Document};
use crate::tokenizer::Analyzer;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// One occurrence of a term. All counters are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    /// Word number within the whole document.
    pub word: u32,
    /// Word number within the paragraph.
    pub paragraph_word: u32,
    pub paragraph: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub positions: Vec<Position>, // scan order
}

impl Posting {
    pub fn occurrences(&self) -> usize {
        self.positions.len()
    }
}

/// Term -> postings plus the document arena. Postings of a term are sorted by `doc_id`.
#[derive(Debug, Default, Serialize)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<Posting>>,
    docs: Vec<Document>,
}

impl InvertedIndex {
    pub fn postings(&self, term: &str) -> Option<&[Posting]> {
        self.postings.get(term).map(Vec::as_slice)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Posting of `term` for one document, if the document contains it.
    pub fn posting(&self, term: &str, doc_id: DocId) -> Option<&Posting> {
        let list = self.postings.get(term)?;
        list.binary_search_by_key(&doc_id, |p| p.doc_id).ok().map(|i| &list[i])
    }

    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, Vec::len)
    }

    pub fn document(&self, doc_id: DocId) -> Option<&Document> {
        self.docs.get(doc_id as usize)
    }

    pub fn documents(&self) -> &[Document] {
        &self.docs
    }

    pub fn num_docs(&self) -> usize {
        self.docs.len()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.postings.len()
    }
}

/// Builds an [`InvertedIndex`] one document at a time.
///
/// Documents receive ids in the order they are added, so a term's most recent posting is
/// always the only one that can belong to the document being scanned.
pub struct IndexBuilder<'a> {
    analyzer: &'a Analyzer,
    postings: HashMap<String, Vec<Posting>>,
    docs: Vec<Document>,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(analyzer: &'a Analyzer) -> Self {
        Self { analyzer, postings: HashMap::new(), docs: Vec::new() }
    }

    pub fn add_document<I, S>(&mut self, path: PathBuf, category: String, paragraphs: I) -> DocId
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let doc_id = self.docs.len() as DocId;
        self.docs.push(Document { id: doc_id, path, category, word_count: 0, paragraph_count: 0 });

        let mut word: u32 = 0;
        let mut paragraph: u32 = 0;
        for text in paragraphs {
            let text = text.as_ref();
            if text.trim().is_empty() {
                continue;
            }
            paragraph += 1;
            for (i, raw) in text.split_whitespace().enumerate() {
                word += 1;
                let Some(term) = self.analyzer.term(raw) else { continue };
                let position = Position { word, paragraph_word: i as u32 + 1, paragraph };
                self.record(term, doc_id, position);
            }
        }

        let doc = &mut self.docs[doc_id as usize];
        doc.word_count = word;
        doc.paragraph_count = paragraph;
        doc_id
    }

    fn record(&mut self, term: String, doc_id: DocId, position: Position) {
        let list = self.postings.entry(term).or_default();
        match list.last_mut() {
            Some(active) if active.doc_id == doc_id => active.positions.push(position),
            _ => list.push(Posting { doc_id, positions: vec![position] }),
        }
    }

    pub fn finish(self) -> InvertedIndex {
        InvertedIndex { postings: self.postings, docs: self.docs }
    }
}
