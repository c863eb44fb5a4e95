//! Error types for encoding and decoding.

use simplexml_dom::Element;
use thiserror::Error;

/// Boxed source error carried by conversion failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when mapping values to XML and back.
///
/// Every error aborts the whole call; there are no partial results.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error on the sink or source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input was not well-formed XML.
    #[error("malformed XML: {0}")]
    Parse(#[source] simplexml_dom::Error),

    /// The document could not be written.
    #[error("failed to write XML: {0}")]
    Write(#[source] simplexml_dom::Error),

    /// The root element does not name the expected type.
    #[error("wrong root node: expected <{expected}>, found <{found}>")]
    WrongRoot { expected: String, found: String },

    /// Map entry elements could not be paired up.
    #[error("unpaired map entries in <{tag}>: {reason}")]
    MapPairing { tag: String, reason: String },

    /// An absent value cannot become a document root.
    #[error("cannot serialize an absent {type_name} as a document root")]
    AbsentRoot { type_name: &'static str },

    /// Element text could not be converted to the target scalar type,
    /// or a scalar could not be rendered as text.
    #[error("cannot convert {text:?} in <{tag}> to {type_name}: {source}")]
    Conversion {
        tag: String,
        type_name: &'static str,
        text: String,
        #[source]
        source: BoxError,
    },

    /// A value of the target type could not be constructed.
    #[error("cannot instantiate {type_name}: {reason}")]
    Instantiation { type_name: &'static str, reason: String },

    /// A decoded object rejected its own field values.
    #[error("validation of {type_name} failed: {source}")]
    Validation {
        type_name: &'static str,
        #[source]
        source: ValidationError,
    },
}

/// Coarse classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Sink or source failure.
    Io,
    /// Malformed input XML.
    Parse,
    /// Document shape does not fit the target type.
    Schema,
    /// Scalar text conversion failure.
    Conversion,
    /// Target value could not be constructed.
    Instantiation,
    /// Object-level validation failure.
    Validation,
}

impl Error {
    /// Build a conversion error for the text of `element`.
    pub fn conversion(
        element: &Element,
        type_name: &'static str,
        text: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Conversion {
            tag: element.tag().to_string(),
            type_name,
            text: text.into(),
            source: source.into(),
        }
    }

    /// The kind of failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) | Self::Write(_) => ErrorKind::Io,
            Self::Parse(_) => ErrorKind::Parse,
            Self::WrongRoot { .. } | Self::MapPairing { .. } | Self::AbsentRoot { .. } => ErrorKind::Schema,
            Self::Conversion { .. } => ErrorKind::Conversion,
            Self::Instantiation { .. } => ErrorKind::Instantiation,
            Self::Validation { .. } => ErrorKind::Validation,
        }
    }

    pub(crate) fn from_parse(err: simplexml_dom::Error) -> Self {
        match err {
            simplexml_dom::Error::Io(e) => Self::Io(e),
            other => Self::Parse(other),
        }
    }

    pub(crate) fn from_write(err: simplexml_dom::Error) -> Self {
        match err {
            simplexml_dom::Error::Io(e) => Self::Io(e),
            other => Self::Write(other),
        }
    }
}

/// Returned by [`Validate`](crate::Validate) implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Create a validation error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// The validation message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
