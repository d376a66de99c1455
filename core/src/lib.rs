//! Paragraph-aware TF-IDF search over a categorized document corpus.
//!
//! The index is built once from a [`CorpusSource`] and is read-only afterwards. Each
//! query is analyzed, scored, cut at a relative threshold, and reported with a snippet
//! from the paragraph where its terms cluster plus precision/recall for queries that
//! target a known category.

pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod extract;
pub mod index;
pub mod query;
pub mod relevance;
pub mod report;
pub mod score;
pub mod select;
pub mod snippet;
pub mod tokenizer;

pub use config::{CategoryRule, EngineConfig, SelectionConfig, SnippetConfig};
pub use corpus::{CorpusEntry, CorpusSource, DirectoryCorpus, DocId, Document, MemoryCorpus};
pub use engine::SearchEngine;
pub use error::{Error, Result};
pub use index::{IndexBuilder, InvertedIndex, Position, Posting};
pub use relevance::{CategoryTable, Measurement, Relevance};
pub use report::{Hit, QueryReport};
pub use score::ScoredDocument;
pub use snippet::Snippet;
pub use tokenizer::{Analyzer, StopWords};
