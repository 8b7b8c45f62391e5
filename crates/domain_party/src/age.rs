//! Age ranges for birth date generation

use serde_json::Value;
use std::num::IntErrorKind;

use crate::error::PartyError;

/// Youngest owner age used when no range is given
pub const DEFAULT_MINIMUM_AGE: u32 = 18;

/// Oldest owner age used when no range is given
pub const DEFAULT_MAXIMUM_AGE: u32 = 63;

const MINIMUM_FIELD: &str = "minimum_age";
const MAXIMUM_FIELD: &str = "maximum_age";

/// An inclusive range of whole-year ages
///
/// Always satisfies `minimum <= maximum`; the constructors reject anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    minimum: u32,
    maximum: u32,
}

impl AgeRange {
    /// Creates a range from integer bounds
    ///
    /// # Errors
    ///
    /// * `NegativeAge` if either bound is below zero
    /// * `InvertedAgeRange` if `minimum > maximum`
    /// * `AgeOutOfRange` if a bound does not fit a `u32`
    pub fn new(minimum: i64, maximum: i64) -> Result<Self, PartyError> {
        let min = non_negative(MINIMUM_FIELD, minimum)?;
        let max = non_negative(MAXIMUM_FIELD, maximum)?;
        if minimum > maximum {
            return Err(PartyError::InvertedAgeRange { minimum, maximum });
        }
        Ok(Self { minimum: min, maximum: max })
    }

    /// Creates a range from textual bounds, e.g. query parameters
    ///
    /// Anything that is not an integer literal (`"18.5"`, `"sixty"`) is a
    /// type mismatch, checked for both bounds before any range check.
    pub fn parse(minimum: &str, maximum: &str) -> Result<Self, PartyError> {
        let minimum = parse_bound(MINIMUM_FIELD, minimum)?;
        let maximum = parse_bound(MAXIMUM_FIELD, maximum)?;
        Self::new(minimum, maximum)
    }

    /// Like [`AgeRange::parse`], substituting defaults for missing bounds
    pub fn with_bounds(minimum: Option<&str>, maximum: Option<&str>) -> Result<Self, PartyError> {
        let minimum = match minimum {
            Some(raw) => parse_bound(MINIMUM_FIELD, raw)?,
            None => i64::from(DEFAULT_MINIMUM_AGE),
        };
        let maximum = match maximum {
            Some(raw) => parse_bound(MAXIMUM_FIELD, raw)?,
            None => i64::from(DEFAULT_MAXIMUM_AGE),
        };
        Self::new(minimum, maximum)
    }

    /// Creates a range from untyped JSON values
    ///
    /// Only JSON integers are accepted; floats (even `18.0`), strings, booleans
    /// and null are type mismatches.
    pub fn from_json(minimum: &Value, maximum: &Value) -> Result<Self, PartyError> {
        let minimum = json_bound(MINIMUM_FIELD, minimum)?;
        let maximum = json_bound(MAXIMUM_FIELD, maximum)?;
        Self::new(minimum, maximum)
    }

    pub fn minimum(&self) -> u32 {
        self.minimum
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    /// Returns true if `age` lies within the range
    pub fn contains(&self, age: i64) -> bool {
        age >= i64::from(self.minimum) && age <= i64::from(self.maximum)
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        Self {
            minimum: DEFAULT_MINIMUM_AGE,
            maximum: DEFAULT_MAXIMUM_AGE,
        }
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<u32, PartyError> {
    if value < 0 {
        return Err(PartyError::NegativeAge { field, value });
    }
    u32::try_from(value).map_err(|_| PartyError::AgeOutOfRange { field, value })
}

/// Integer literals too large for an `i64` are still integers: they fail the
/// range checks rather than the type check.
fn parse_bound(field: &'static str, raw: &str) -> Result<i64, PartyError> {
    raw.trim().parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::NegOverflow => PartyError::NegativeAge { field, value: i64::MIN },
        IntErrorKind::PosOverflow => PartyError::AgeOutOfRange { field, value: i64::MAX },
        _ => PartyError::type_mismatch(field, raw),
    })
}

fn json_bound(field: &'static str, value: &Value) -> Result<i64, PartyError> {
    match value {
        Value::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(v), _) => Ok(v),
            (None, Some(_)) => Err(PartyError::AgeOutOfRange { field, value: i64::MAX }),
            (None, None) => Err(PartyError::type_mismatch(field, n.to_string())),
        },
        other => Err(PartyError::type_mismatch(field, other.to_string())),
    }
}
