//! Error types for the text crate.

use thiserror::Error;

/// Errors returned by the text primitives.
///
/// Every operation is a total function over well-formed input, so the only
/// failure is caller misuse: a zero step or width, a negative column index,
/// a malformed column label, or an absent value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// An argument is outside the domain of the operation.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

impl TextError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        TextError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for text operations.
pub type Result<T> = std::result::Result<T, TextError>;
