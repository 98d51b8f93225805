//! Error types for tree building

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for fallible tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Failures that abort a traversal.
///
/// Permission errors while listing a directory never show up here; the
/// builder treats those directories as empty.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Listing a directory failed for a reason other than missing permissions.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The working directory could not be determined.
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),
}

impl TreeError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = TreeError::io(
            "/some/dir",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/some/dir"), "got: {}", msg);
        assert!(msg.contains("gone"), "got: {}", msg);
    }
}
