//! Owner Data Domain
//!
//! Generates the owner half of an insurance record: a plausible person with
//! a birth date inside a requested age range, a single-line US postal address
//! and a mobile phone number.
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use core_kernel::FakeSource;
//! use domain_party::{AgeRange, Owner};
//!
//! let source = FakeSource::seeded(42);
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let owner = source
//!     .with_rng(|rng| Owner::generate(rng, today, AgeRange::default()))
//!     .unwrap();
//!
//! assert!(!owner.first_name.is_empty());
//! assert_eq!(owner.phone.len(), 15);
//! ```

pub mod owner;
pub mod address;
pub mod age;
pub mod error;

pub use owner::{
    Owner, generate_first_name, generate_last_name, generate_birth_date,
    generate_address, generate_phone, MOBILE_PREFIXES, PHONE_COUNTRY_CODE,
};
pub use address::Address;
pub use age::{AgeRange, DEFAULT_MAXIMUM_AGE, DEFAULT_MINIMUM_AGE};
pub use error::PartyError;
