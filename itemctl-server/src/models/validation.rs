//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is missing or empty
    Required { field: &'static str },

    /// Multipart upload without the expected file part
    MissingFile { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => {
                let mut chars = field.chars();
                match chars.next() {
                    Some(first) => {
                        write!(f, "{}{} field is required.", first.to_uppercase(), chars.as_str())
                    }
                    None => write!(f, "field is required."),
                }
            }
            Self::MissingFile { .. } => write!(f, "No file uploaded."),
        }
    }
}

impl std::error::Error for ValidationError {}
