use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("trace holds no complete temperature/pressure reading")]
    EmptyTrace,

    #[error("no finite altitude could be derived from the trace")]
    NoFiniteAltitude,

    #[error("render error: {0}")]
    Render(String),

    #[error("export error: {0}")]
    Export(String),

    #[error("display error: {0}")]
    Display(String),
}

impl TraceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TraceError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, TraceError>;
