//! Core Kernel - Foundational types shared by every generator crate
//!
//! This crate provides the building blocks used across the domain modules:
//! - A process-wide, lazily initialized random source that can also be
//!   constructed explicitly (seeded or from entropy) and injected
//! - Strongly typed identifiers for policy numbers and VINs
//! - `MM/DD/YYYY` date formatting, parsing and age arithmetic

pub mod random;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use random::FakeSource;
pub use temporal::{format_us_date, parse_us_date, today, whole_years_between, years_before, US_DATE_FORMAT};
pub use identifiers::{PolicyNumber, Vin, POLICY_NUMBER_PREFIX, VIN_ALPHABET, VIN_LENGTH};
pub use error::CoreError;
