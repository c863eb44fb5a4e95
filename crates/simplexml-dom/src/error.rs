//! Error types for XML document parsing and writing.

use thiserror::Error;

/// Errors that can occur when parsing, querying or writing a document.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Malformed XML or a failure while writing events.
    #[error("XML error: {0}")]
    Xml(String),

    /// The input contained no root element.
    #[error("no root element found in XML")]
    NoRoot,

    /// A selector expression could not be understood.
    #[error("invalid selector: {0:?}")]
    InvalidSelector(String),
}

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, Error>;
