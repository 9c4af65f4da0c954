//! Error types for sn2md-core

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using sn2md-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a conversion run
#[derive(Error, Debug)]
pub enum Error {
    /// IO error on a specific path
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Export document is not valid JSON or has the wrong shape
    #[error("Invalid export document: {0}")]
    Json(#[from] serde_json::Error),

    /// A note references a tag that is not in the export
    #[error("Note {note} references unknown tag {tag}")]
    UnknownTag { note: String, tag: String },

    /// A note timestamp does not match `YYYY-MM-DDTHH:MM:SS.ffffffZ`
    #[error("Invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp { value: String, reason: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
