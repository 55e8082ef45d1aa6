//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Required field is absent from the request body
    Missing { field: &'static str },

    /// Field is present but empty/blank
    Empty { field: &'static str },

    /// Numeric field outside its allowed range
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    /// Field references an entity that does not exist
    UnknownReference { field: &'static str, value: String },

    /// Request body could not be parsed
    InvalidBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::OutOfRange { field, min, max } => {
                write!(f, "{} must be between {} and {}", field, min, max)
            }
            Self::UnknownReference { field, value } => {
                write!(f, "unknown {} '{}'", field, value)
            }
            Self::InvalidBody { reason } => write!(f, "invalid request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::OutOfRange {
            field: "difficulty",
            min: 1,
            max: 5,
        };
        assert_eq!(err.to_string(), "difficulty must be between 1 and 5");

        let err = ValidationError::Missing { field: "answer" };
        assert_eq!(err.to_string(), "answer is required");
    }
}
