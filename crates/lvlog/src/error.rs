//! Error types returned by logger initialization.

use std::io;
use std::path::PathBuf;

/// Errors produced while configuring a [`LevelLogger`](crate::LevelLogger).
///
/// Write operations never fail; only initialization reports errors.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Numeric severity outside `0..=3`.
    #[error("wrong level number: {0}")]
    InvalidLevel(i64),

    /// Level name other than `DEBUG`, `INFO`, `WARNING` or `ERROR`.
    #[error("log-level can only be DEBUG, INFO, WARNING, ERROR (got {0:?})")]
    UnknownLevelName(String),

    /// The log file could not be opened read-write.
    #[error("failed to open log file {}: {source}", .path.display())]
    FileOpen {
        /// Path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl LogError {
    /// Creates a [`LogError::FileOpen`] with path context.
    pub fn file_open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn invalid_level_mentions_number() {
        assert_eq!(
            LogError::InvalidLevel(5).to_string(),
            "wrong level number: 5"
        );
    }

    #[test]
    fn file_open_keeps_source() {
        let error = LogError::file_open(
            "/var/log/app.log",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(
            error.to_string(),
            "failed to open log file /var/log/app.log: no such file"
        );
        let source = error.source().expect("source is attached");
        assert_eq!(source.to_string(), "no such file");
    }
}
