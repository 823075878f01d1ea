//! Error types for signet-core.
//!
//! All fallible operations in this crate return [`SignetResult`]. Errors are
//! typed so callers can tell usage mistakes from filesystem failures without
//! matching on message strings.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result alias used across the Signet crates.
pub type SignetResult<T> = Result<T, SignetError>;

/// Error raised by signet-core operations.
#[derive(Debug, Error)]
pub enum SignetError {
    /// Filesystem failure while opening, reading, or rewriting a file.
    #[error("i/o error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A caller-provided value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// File bytes could not be converted with the selected encoding.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// An existing signature block is present but structurally broken.
    #[error("malformed signature block in {path}: {reason}")]
    MalformedSignatureBlock { path: PathBuf, reason: String },
}

impl SignetError {
    /// I/O error with path context.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    pub fn malformed_signature_block(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::MalformedSignatureBlock {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let err = SignetError::io(
            "/tmp/missing.ps1",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("/tmp/missing.ps1"));
    }

    #[test]
    fn io_error_keeps_the_source() {
        let err = SignetError::io(
            "x",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let SignetError::Io { source, .. } = &err else {
            panic!("expected io variant");
        };
        assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
    }
}
