//! Strongly-typed identifiers for generated records
//!
//! Policy numbers and VINs travel as plain strings on the wire, but inside the
//! workspace they are newtypes so a value of one kind can never be mistaken for
//! the other, and so parsed input is always checked against the format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Literal prefix of every policy number
pub const POLICY_NUMBER_PREFIX: &str = "PL";

/// Number of decimal digits following the policy number prefix
pub const POLICY_NUMBER_DIGITS: usize = 9;

/// Number of trailing uppercase letters in a policy number
pub const POLICY_NUMBER_LETTERS: usize = 2;

/// Total length of a policy number
pub const POLICY_NUMBER_LENGTH: usize =
    POLICY_NUMBER_PREFIX.len() + POLICY_NUMBER_DIGITS + POLICY_NUMBER_LETTERS;

/// Length of a Vehicle Identification Number
pub const VIN_LENGTH: usize = 17;

/// Symbols allowed in a VIN: uppercase letters without I, O and Q, then digits
pub const VIN_ALPHABET: &[u8; 33] = b"ABCDEFGHJKLMNPRSTUVWXYZ0123456789";

macro_rules! define_code {
    ($name:ident, $kind:literal, $validate:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Wraps a value produced by a generator that already guarantees
            /// the format. Checked in debug builds only.
            pub fn new_unchecked(value: impl Into<String>) -> Self {
                let value = value.into();
                debug_assert!($validate(&value), "malformed {}: {:?}", $kind, value);
                Self(value)
            }

            /// Returns the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the human readable name of this identifier kind
            pub fn kind() -> &'static str {
                $kind
            }

            /// Returns true when `value` is well formed for this kind
            pub fn is_valid(value: &str) -> bool {
                $validate(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if $validate(s) {
                    Ok(Self(s.to_string()))
                } else {
                    Err(CoreError::invalid_identifier($kind, s))
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                if $validate(&value) {
                    Ok(Self(value))
                } else {
                    Err(CoreError::invalid_identifier($kind, value))
                }
            }
        }

        impl From<$name> for String {
            fn from(code: $name) -> String {
                code.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

fn is_policy_number(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != POLICY_NUMBER_LENGTH || !value.starts_with(POLICY_NUMBER_PREFIX) {
        return false;
    }
    let (digits, letters) = bytes[POLICY_NUMBER_PREFIX.len()..].split_at(POLICY_NUMBER_DIGITS);
    digits.iter().all(u8::is_ascii_digit) && letters.iter().all(u8::is_ascii_uppercase)
}

fn is_vin(value: &str) -> bool {
    value.len() == VIN_LENGTH && value.bytes().all(|b| VIN_ALPHABET.contains(&b))
}

define_code!(PolicyNumber, "policy number", is_policy_number);
define_code!(Vin, "VIN", is_vin);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_number_length_constant() {
        assert_eq!(POLICY_NUMBER_LENGTH, 13);
    }

    #[test]
    fn test_vin_alphabet_excludes_ambiguous_letters() {
        for b in [b'I', b'O', b'Q'] {
            assert!(!VIN_ALPHABET.contains(&b));
        }
        assert_eq!(VIN_ALPHABET.len(), 33);
    }

    #[test]
    fn test_policy_number_parsing() {
        let parsed: PolicyNumber = "PL000123456AB".parse().unwrap();
        assert_eq!(parsed.as_str(), "PL000123456AB");
    }

    #[test]
    fn test_vin_rejects_letter_o() {
        assert!("1HGCM82633A00435O".parse::<Vin>().is_err());
    }
}
