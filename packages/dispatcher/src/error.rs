//! Error types for the dispatcher.
//!
//! Decode failures are transparent: a handler that fails to decode a payload
//! returns the decoder's own diagnostic, without added context.

use thiserror::Error;

/// Main error type for the dispatcher library.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No registered handler recognized the payload.
    #[error("no handler found for the given XML")]
    NoHandler,

    /// Payload bytes are not valid UTF-8.
    #[error(transparent)]
    InvalidEncoding(#[from] std::str::Utf8Error),

    /// Payload is not well-formed XML.
    #[error(transparent)]
    XmlParse(#[from] roxmltree::Error),

    /// IO error while reading a payload.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// One or more payloads in a batch failed.
    #[error("{failed} of {total} payloads failed")]
    PayloadsFailed { failed: usize, total: usize },
}

impl DispatchError {
    /// Whether this is the "no handler found" failure.
    #[must_use]
    pub fn is_unhandled(&self) -> bool {
        matches!(self, Self::NoHandler)
    }

    /// Whether a matched handler failed to decode the payload.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::InvalidEncoding(_) | Self::XmlParse(_))
    }
}

/// Result type alias for dispatcher operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
