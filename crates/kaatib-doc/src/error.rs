//! Error types for document buffer operations.
//!
//! Strongly-typed errors for the two ways a document operation can fail:
//! no usable target path could be resolved, or the underlying storage I/O
//! failed. Validity of the buffer and of supplied text is the type system's
//! job and has no error variants here.
//!
//! We avoid carrying `std::io::Error` inside variants so errors stay
//! `Clone + PartialEq` and easy to assert on in tests.

use std::io;

use thiserror::Error;

/// Errors that can occur during document buffer operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// No usable file name or folder could be resolved
    ///
    /// Raised when the document's file name is empty, or when no folder was
    /// supplied, none is stored, and the working directory could not be used
    /// (unavailable, or its rendered path exceeds the allotted size).
    #[error("invalid file path: {reason}")]
    InvalidFilePath {
        /// Why path resolution failed
        reason: String,
    },

    /// Underlying storage I/O failed (read or write)
    #[error("file error: {0}")]
    Io(String),
}

impl From<io::Error> for DocumentError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_lower_to_messages() {
        let err: DocumentError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err, DocumentError::Io("gone".to_string()));
    }

    #[test]
    fn display_names_the_failure() {
        let err = DocumentError::InvalidFilePath { reason: "empty file name".to_string() };
        assert_eq!(err.to_string(), "invalid file path: empty file name");
    }
}
