//! Error types for the helper functions

use thiserror::Error;

/// Errors raised by the generic helpers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Text does not contain a number: '{input}'")]
    NoNumber { input: String },

    #[error("Failed to parse '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("Empty value of parsed name")]
    EmptyName,

    #[error("Unknown key name: {name}")]
    UnknownKey { name: String },

    #[error("Composite key '{key}' has no segment for '{name}'")]
    MissingSegment { key: String, name: String },
}

/// Result type alias for helper operations
pub type Result<T> = std::result::Result<T, CommonError>;

impl CommonError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Reasons an INN or SNILS identifier is rejected
///
/// The display text is meant to be shown to the person who typed the value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Wrong inn length: {inn} (must be 10 or 12 characters)")]
    InnLength { inn: String },

    #[error("Incorrect INN: \"{inn}\"")]
    InnChecksum { inn: String },

    #[error("Entrepreneur with inn: \"{inn}\" kpp cannot be specified: \"{kpp}\"")]
    InnWithKpp { inn: String, kpp: String },

    #[error("SNILS value cannot be empty.")]
    EmptySnils,

    #[error("The SNILS value must consist only of numbers.")]
    SnilsNotNumeric,

    #[error("SNILS value must contain 11 digits.")]
    SnilsLength,

    #[error("Invalid SNILS checksum.")]
    SnilsChecksum,
}
