//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid {kind}: {value:?}")]
    InvalidIdentifier {
        kind: &'static str,
        value: String,
    },

    #[error("Invalid date {value:?}: expected MM/DD/YYYY")]
    InvalidDate {
        value: String,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    pub fn invalid_identifier(kind: &'static str, value: impl Into<String>) -> Self {
        CoreError::InvalidIdentifier {
            kind,
            value: value.into(),
        }
    }

    pub fn invalid_date(value: impl Into<String>) -> Self {
        CoreError::InvalidDate { value: value.into() }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        CoreError::Configuration(message.into())
    }
}
