//! Error types for the cardsort library.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for cardsort operations.
#[derive(Debug, Error)]
pub enum CardSortError {
    /// The input export does not exist. Reported before any processing starts.
    #[error("{} not found. Please ensure it is in the root directory.", .path.display())]
    InputNotFound { path: PathBuf },

    /// Error reading, creating, or writing a file or directory.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document parsed as JSON but is not an array of card objects.
    #[error("Parse error in '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    /// JSON serialization/deserialization error.
    #[error("JSON error in '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CardSortError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Attach `path` to errors raised while parsing bytes that came from it.
    pub(crate) fn in_file(self, path: &Path) -> Self {
        match self {
            Self::Parse { message, .. } => Self::Parse {
                path: path.to_path_buf(),
                message,
            },
            Self::Json { source, .. } => Self::json(path, source),
            other => other,
        }
    }
}

/// Result type alias for cardsort operations.
pub type Result<T> = std::result::Result<T, CardSortError>;
