//! Error types for loading and validating alignment inputs

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for morphmap operations
///
/// Alignment itself never fails: rules degrade to coarser ranges and report
/// [`AlignDiagnostic`](crate::diagnostics::AlignDiagnostic)s. These errors
/// cover the boundary, where trees, fixtures and configuration come in.
#[derive(Debug, Error)]
pub enum MorphError {
    /// A tree references a node that does not exist or has broken spans
    #[error("Invalid tree: {message}")]
    InvalidTree { message: String },

    /// A fixture document could not be decoded
    #[error("Fixture error: {message}")]
    FixtureError { message: String },

    /// A provenance record points at something that cannot be resolved
    #[error("Provenance error: {message}")]
    ProvenanceError { message: String },

    /// Configuration loading or validation errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Tree,
    Fixture,
    Provenance,
    Config,
    Io,
}

impl MorphError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MorphError::InvalidTree { .. } => ErrorKind::Tree,
            MorphError::FixtureError { .. } => ErrorKind::Fixture,
            MorphError::ProvenanceError { .. } => ErrorKind::Provenance,
            MorphError::ConfigError { .. } => ErrorKind::Config,
            MorphError::IoError { .. } => ErrorKind::Io,
        }
    }

    /// Check if processing can continue with other inputs after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Provenance | ErrorKind::Fixture)
    }

    /// Create an invalid tree error
    pub fn invalid_tree(message: impl Into<String>) -> Self {
        Self::InvalidTree {
            message: message.into(),
        }
    }

    /// Create a fixture error
    pub fn fixture_error(message: impl Into<String>) -> Self {
        Self::FixtureError {
            message: message.into(),
        }
    }

    /// Create a provenance error
    pub fn provenance_error(message: impl Into<String>) -> Self {
        Self::ProvenanceError {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(MorphError::invalid_tree("x").kind(), ErrorKind::Tree);
        assert_eq!(MorphError::config_error("x").kind(), ErrorKind::Config);
        assert_eq!(
            MorphError::io_error("a.json", std::io::Error::other("boom")).kind(),
            ErrorKind::Io
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(MorphError::provenance_error("dangling").is_recoverable());
        assert!(!MorphError::invalid_tree("cycle").is_recoverable());
        assert!(!MorphError::config_error("bad").is_recoverable());
    }

    #[test]
    fn test_display() {
        let err = MorphError::invalid_tree("node 3 out of bounds");
        assert_eq!(err.to_string(), "Invalid tree: node 3 out of bounds");
    }
}
