use crate::config::EngineConfig;
use crate::corpus::{CorpusSource, Document};
use crate::error::{Error, Result};
use crate::index::{IndexBuilder, InvertedIndex};
use crate::query::process_query;
use crate::relevance::{evaluate, CategoryTable};
use crate::report::{Hit, QueryReport};
use crate::score::{score_terms, ScoredDocument};
use crate::select::select;
use crate::snippet::{locate, render, Snippet};
use crate::tokenizer::Analyzer;

/// Index built once from a corpus source, then queried read-only.
pub struct SearchEngine<S: CorpusSource> {
    source: S,
    analyzer: Analyzer,
    index: InvertedIndex,
    categories: CategoryTable,
    config: EngineConfig,
}

impl<S: CorpusSource> SearchEngine<S> {
    /// Read every document of `source` and build the index. Any read failure aborts the build.
    pub fn build(source: S, analyzer: Analyzer, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let entries = source.entries()?;
        let mut builder = IndexBuilder::new(&analyzer);
        for entry in entries {
            let paragraphs = source.paragraphs(&entry.path)?;
            let doc_id = builder.add_document(entry.path, entry.category, paragraphs);
            tracing::trace!(doc_id, "indexed document");
        }
        let index = builder.finish();
        tracing::info!(
            num_docs = index.num_docs(),
            num_terms = index.vocabulary_size(),
            stopwords = analyzer.stopwords().len(),
            "index build complete"
        );
        let categories = CategoryTable::new(&config.categories, &analyzer);
        Ok(Self { source, analyzer, index, categories, config })
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    pub fn terms(&self, query: &str) -> Vec<String> {
        process_query(&self.analyzer, &self.index, query)
    }

    pub fn search(&self, query: &str) -> Result<QueryReport> {
        let terms = self.terms(query);
        let selection = select(score_terms(&self.index, &terms), &self.config.selection);
        tracing::debug!(
            query,
            ?terms,
            matched = selection.matched,
            selected = selection.documents.len(),
            "query scored"
        );

        let mut hits = Vec::with_capacity(selection.documents.len());
        for scored in &selection.documents {
            hits.push(self.hit(scored, &terms)?);
        }
        let relevance = evaluate(&self.categories, &terms, &selection.documents, &self.index);

        Ok(QueryReport {
            query: query.to_string(),
            terms,
            matched: selection.matched,
            threshold: selection.threshold,
            hits,
            relevance,
        })
    }

    fn hit(&self, scored: &ScoredDocument, terms: &[String]) -> Result<Hit> {
        let doc = self
            .index
            .document(scored.doc_id)
            .ok_or_else(|| Error::UnknownDocument(format!("doc id {}", scored.doc_id)))?;
        let snippet = self.snippet(doc, terms)?;
        Ok(Hit {
            doc_id: doc.id,
            file_name: doc.file_name(),
            category: doc.category.clone(),
            score: scored.score,
            paragraph_count: doc.paragraph_count,
            word_count: doc.word_count,
            snippet,
        })
    }

    fn snippet(&self, doc: &Document, terms: &[String]) -> Result<Snippet> {
        let hits = locate(&self.index, doc.id, terms)
            .ok_or_else(|| Error::NoTermOccurrences { path: doc.path.clone() })?;
        // Paragraph numbers count non-blank paragraphs, same as the builder.
        let paragraphs = self.source.paragraphs(&doc.path)?;
        let text = paragraphs
            .iter()
            .filter(|p| !p.trim().is_empty())
            .nth(hits.best as usize - 1)
            .ok_or_else(|| Error::MissingParagraph {
                path: doc.path.clone(),
                paragraph: hits.best,
            })?;
        Ok(render(&hits, text, self.config.snippet.max_words))
    }
}
