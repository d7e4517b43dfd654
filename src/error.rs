//! Error types for annotext.
//!
//! An unrecognized attribute type is not an error anywhere in this crate: the decoder turns
//! it into a generic placeholder and carries on.

use thiserror::Error;

/// Result type for annotext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for annotext operations.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Span bounds violated: negative offset or start after end.
    #[error("Invalid span: {start}..{end}")]
    InvalidSpan { start: i64, end: i64 },

    /// Structural violation found while decoding a document.
    #[error("Malformed document at '{path}': {reason}")]
    MalformedDocument { path: String, reason: String },

    /// A builder was asked to produce an attribute or container it cannot represent.
    #[error("Invalid attribute '{type_name}': {reason}")]
    InvalidAttribute { type_name: String, reason: String },

    /// No rendering registered under the requested name.
    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    /// The textual rendering could not be parsed or produced.
    #[error("{format} syntax error: {message}")]
    Syntax { format: String, message: String },

    /// The process-wide type registry was already set up.
    #[error("Type registry already initialized")]
    RegistryAlreadyInitialized,
}

impl Error {
    /// Create a malformed document error.
    #[must_use]
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid attribute error.
    #[must_use]
    pub fn invalid_attribute(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a syntax error for the named rendering.
    #[must_use]
    pub fn syntax(format: impl Into<String>, message: impl ToString) -> Self {
        Self::Syntax {
            format: format.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display_names_path() {
        let err = Error::malformed("attributes.token.items", "expected a sequence");
        assert_eq!(
            err.to_string(),
            "Malformed document at 'attributes.token.items': expected a sequence"
        );
    }

    #[test]
    fn test_invalid_span_display() {
        let err = Error::InvalidSpan { start: 5, end: 3 };
        assert_eq!(err.to_string(), "Invalid span: 5..3");
    }
}
