//! Error types for the datatools core library

use thiserror::Error;

/// Result type alias for datatools operations
pub type Result<T> = std::result::Result<T, DatatoolsError>;

/// Main error type for datatools operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatatoolsError {
    /// A date string matched none of the accepted formats
    #[error("Failed to parse date '{input}': {reason}")]
    Parse { input: String, reason: String },

    /// An argument is outside the documented domain of the operation
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DatatoolsError {
    /// Create a parse error for the given input
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let error = DatatoolsError::parse("31/12/2024", "input contains invalid characters");

        assert!(error.to_string().contains("Failed to parse date"));
        assert!(error.to_string().contains("31/12/2024"));
        assert!(error.to_string().contains("invalid characters"));
    }

    #[test]
    fn test_invalid_argument_helper() {
        let error = DatatoolsError::invalid_argument("month offset out of range");

        match error {
            DatatoolsError::InvalidArgument { message } => {
                assert_eq!(message, "month offset out of range");
            }
            _ => panic!("Expected InvalidArgument error"),
        }
    }

    #[test]
    fn test_configuration_helper() {
        let error = DatatoolsError::configuration("DATATOOLS_DEFAULT_END is not a date");

        assert!(error.to_string().starts_with("Configuration error"));
        assert!(error.to_string().contains("DATATOOLS_DEFAULT_END"));
    }

    #[test]
    fn test_errors_compare_by_value() {
        assert_eq!(
            DatatoolsError::invalid_argument("x"),
            DatatoolsError::InvalidArgument {
                message: "x".to_string()
            }
        );
        assert_ne!(
            DatatoolsError::invalid_argument("x"),
            DatatoolsError::configuration("x")
        );
    }
}
