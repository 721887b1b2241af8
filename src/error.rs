//! Top-level error type for a route file rewrite.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::routing::RouteError;
use crate::source::SourceError;

/// Category of a [`RewriteError`], for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RouteShape,
    Read,
    Parse,
    Write,
    Config,
    Watch,
}

/// Any failure while regenerating a route file.
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("route list has the wrong shape: {0}")]
    Routes(#[from] RouteError),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse route module: {0}")]
    Parse(#[from] SourceError),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("file watch failed: {0}")]
    Watch(#[from] notify::Error),
}

impl RewriteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RewriteError::Routes(_) => ErrorKind::RouteShape,
            RewriteError::Read { .. } => ErrorKind::Read,
            RewriteError::Parse(_) => ErrorKind::Parse,
            RewriteError::Write { .. } => ErrorKind::Write,
            RewriteError::Config(_) => ErrorKind::Config,
            RewriteError::Watch(_) => ErrorKind::Watch,
        }
    }
}

/// Result type for rewrite operations.
pub type RewriteResult<T> = Result<T, RewriteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_and_kind() {
        let err = RewriteError::from(RouteError::NotASequence { found: "a string" });
        assert_eq!(err.kind(), ErrorKind::RouteShape);
        assert_eq!(
            err.to_string(),
            "route list has the wrong shape: expected a sequence of routes, found a string"
        );

        let err = RewriteError::Read {
            path: PathBuf::from("router.js"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.kind(), ErrorKind::Read);
        assert_eq!(err.to_string(), "failed to read router.js: gone");
    }
}
