use anyhow::{Context, Result};
use clap::ValueEnum;
use search_core::{
    Analyzer, CorpusSource, DirectoryCorpus, EngineConfig, QueryReport, SearchEngine, StopWords,
};
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Load stop words and config, then index the corpus directory.
pub fn open_engine(
    corpus: &Path,
    stopwords: Option<&Path>,
    config: Option<&Path>,
) -> Result<SearchEngine<DirectoryCorpus>> {
    let stopwords = match stopwords {
        Some(path) => StopWords::load(path)
            .with_context(|| format!("loading stop words from {}", path.display()))?,
        None => StopWords::english(),
    };
    let config = match config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    SearchEngine::build(DirectoryCorpus::new(corpus), Analyzer::new(stopwords), config)
        .with_context(|| format!("indexing corpus at {}", corpus.display()))
}

pub fn write_report<W: Write>(
    out: &mut W,
    report: &QueryReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{report}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Answer queries read line by line from `input` until an empty line or end of input.
/// Returns the number of queries answered.
pub fn run_session<S, R, P, W>(
    engine: &SearchEngine<S>,
    input: R,
    prompt: &mut P,
    out: &mut W,
    format: OutputFormat,
) -> Result<usize>
where
    S: CorpusSource,
    R: BufRead,
    P: Write,
    W: Write,
{
    let mut answered = 0;
    let mut lines = input.lines();
    loop {
        write!(prompt, "Enter your query: ")?;
        prompt.flush()?;
        let Some(line) = lines.next() else { break };
        let line = line.context("reading query")?;
        let query = line.trim();
        if query.is_empty() {
            break;
        }
        let report = engine.search(query).with_context(|| format!("answering query {query:?}"))?;
        write_report(out, &report, format)?;
        answered += 1;
    }
    tracing::info!(answered, "session finished");
    Ok(answered)
}

pub fn write_stats<S: CorpusSource, W: Write>(out: &mut W, engine: &SearchEngine<S>) -> Result<()> {
    let index = engine.index();
    let mut categories: BTreeMap<&str, usize> = BTreeMap::new();
    for doc in index.documents() {
        *categories.entry(doc.category.as_str()).or_insert(0) += 1;
    }
    writeln!(out, "DOCUMENTS: {}", index.num_docs())?;
    writeln!(out, "VOCABULARY: {}", index.vocabulary_size())?;
    writeln!(out, "STOP WORDS: {}", engine.analyzer().stopwords().len())?;
    for (category, count) in categories {
        writeln!(out, "CATEGORY {category}: {count}")?;
    }
    Ok(())
}

/// Writes everything to both sinks.
pub struct Tee<A, B> {
    first: A,
    second: B,
}

impl<A: Write, B: Write> Tee<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Write, B: Write> Write for Tee<A, B> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.first.write_all(buf)?;
        self.second.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.first.flush()?;
        self.second.flush()
    }
}
