use std::path::PathBuf;

use thiserror::Error;

/// Faults raised while loading configuration or writing run output.
#[derive(Debug, Error)]
pub enum EveError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: expected a JSON object at top level", .path.display())]
    NotAnObject { path: PathBuf },
}

impl EveError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EveError::Io { path: path.into(), source }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        EveError::Json { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, EveError>;
