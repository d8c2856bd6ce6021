//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Required field was not supplied
    Missing { field: &'static str },

    /// Uploaded file name does not end in `.csv`
    NotCsv,

    /// Input could not be parsed into the expected type
    Malformed { field: &'static str, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::NotCsv => write!(f, "File must be a CSV"),
            Self::Malformed { field, reason } => write!(f, "invalid {}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(ValidationError::NotCsv.to_string(), "File must be a CSV");
        assert_eq!(
            ValidationError::Missing { field: "file" }.to_string(),
            "file is required"
        );
    }
}
