use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use search_core::{DirectoryCorpus, SearchEngine};
use searcher::{open_engine, run_session, write_report, write_stats, OutputFormat, Tee};
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "searcher")]
#[command(
    about = "Search a categorized document corpus with TF-IDF ranking and paragraph snippets",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct IndexArgs {
    /// Corpus directory laid out as <category>/<document>
    #[arg(long)]
    corpus: PathBuf,
    /// Stop-word list, one word per line (built-in English list when omitted)
    #[arg(long)]
    stopwords: Option<PathBuf>,
    /// TOML file with selection, snippet and category settings
    #[arg(long)]
    config: Option<PathBuf>,
}

impl IndexArgs {
    fn open(&self) -> Result<SearchEngine<DirectoryCorpus>> {
        open_engine(&self.corpus, self.stopwords.as_deref(), self.config.as_deref())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for queries on stdin until an empty line or end of input
    Interactive {
        #[command(flatten)]
        index: IndexArgs,
        /// File receiving every report of the session
        #[arg(long, default_value = "results.txt")]
        output: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Answer the given queries and exit
    Query {
        #[command(flatten)]
        index: IndexArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        #[arg(required = true)]
        queries: Vec<String>,
    },
    /// Print corpus and vocabulary statistics
    Stats {
        #[command(flatten)]
        index: IndexArgs,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Interactive { index, output, format } => {
            let engine = index.open()?;
            let file =
                File::create(&output).with_context(|| format!("creating {}", output.display()))?;
            let mut out = Tee::new(BufWriter::new(file), io::stdout().lock());
            let stdin = io::stdin();
            let answered = if stdin.is_terminal() {
                run_session(&engine, stdin.lock(), &mut io::stderr(), &mut out, format)?
            } else {
                run_session(&engine, stdin.lock(), &mut io::sink(), &mut out, format)?
            };
            tracing::info!(answered, output = %output.display(), "reports written");
        }
        Commands::Query { index, format, queries } => {
            let engine = index.open()?;
            let mut out = io::stdout().lock();
            for query in &queries {
                let report =
                    engine.search(query).with_context(|| format!("answering query {query:?}"))?;
                write_report(&mut out, &report, format)?;
            }
        }
        Commands::Stats { index } => {
            let engine = index.open()?;
            write_stats(&mut io::stdout().lock(), &engine)?;
        }
    }
    Ok(())
}
