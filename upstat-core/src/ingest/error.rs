use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the input source itself. Any of these aborts the run.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("log file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied reading log file: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },

    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading log file {path} at line {line}: {source}")]
    Read {
        path: PathBuf,
        line: u64,
        #[source]
        source: io::Error,
    },
}

impl IngestError {
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Open { path, source },
        }
    }

    pub fn read(path: impl Into<PathBuf>, line: u64, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            line,
            source,
        }
    }
}

/// Why a single line was counted as errored. Never fatal.
#[derive(Debug, Error)]
pub enum LineError {
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}
