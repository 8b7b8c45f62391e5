//! Owner domain errors
//!
//! Age bounds can be rejected for two distinct reasons: the value is not an
//! integer at all (a type mismatch), or it is an integer that makes no sense
//! as an age range (a domain error). Callers distinguish them with
//! [`PartyError::is_type_mismatch`] and [`PartyError::is_domain_error`].

use thiserror::Error;

/// Errors that can occur while generating owner data
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PartyError {
    /// An age bound was not an integer
    #[error("Age bound `{field}` must be an integer, got {value:?}")]
    AgeTypeMismatch {
        field: &'static str,
        value: String,
    },

    /// An age bound was negative
    #[error("Age bound `{field}` must not be negative, got {value}")]
    NegativeAge {
        field: &'static str,
        value: i64,
    },

    /// The minimum age exceeds the maximum age
    #[error("Minimum age {minimum} is greater than maximum age {maximum}")]
    InvertedAgeRange {
        minimum: i64,
        maximum: i64,
    },

    /// An age bound reaches outside the supported calendar
    #[error("Age bound `{field}` of {value} years is outside the supported calendar")]
    AgeOutOfRange {
        field: &'static str,
        value: i64,
    },
}

impl PartyError {
    /// Creates an AgeTypeMismatch error for a raw input value
    pub fn type_mismatch(field: &'static str, value: impl Into<String>) -> Self {
        PartyError::AgeTypeMismatch {
            field,
            value: value.into(),
        }
    }

    /// True for errors caused by a bound that is not an integer
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, PartyError::AgeTypeMismatch { .. })
    }

    /// True for errors caused by an integer bound outside the valid domain
    pub fn is_domain_error(&self) -> bool {
        !self.is_type_mismatch()
    }
}
