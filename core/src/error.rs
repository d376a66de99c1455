use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to enumerate corpus: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to extract paragraphs from {path}: {reason}")]
    Docx { path: PathBuf, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("document {path} has no paragraph #{paragraph}")]
    MissingParagraph { path: PathBuf, paragraph: u32 },

    #[error("document {path} contains none of the query terms")]
    NoTermOccurrences { path: PathBuf },

    #[error("unknown document: {0}")]
    UnknownDocument(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
