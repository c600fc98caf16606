//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is absent or empty
    Required { field: &'static str },

    /// Field is present and non-empty but not a string
    NotAString { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{} is required", field),
            Self::NotAString { field } => write!(f, "{} must be a string", field),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Required { field: "Name" };
        assert_eq!(err.to_string(), "Name is required");

        let err = ValidationError::NotAString { field: "Name" };
        assert_eq!(err.to_string(), "Name must be a string");
    }
}
