//! Failure taxonomy for media store operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when creating or listing media files.
#[derive(Debug, Error)]
pub enum MediaError {
    /// Filesystem access failed.
    #[error("io error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The blocking worker running the filesystem operation vanished.
    #[error("media worker did not complete: {source}")]
    WorkerGone {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl MediaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
