//! Owner field generators
//!
//! Each generator takes the random generator explicitly and performs its own
//! draws, so no two fields ever share a draw and a seeded generator yields a
//! reproducible owner.

use chrono::{Duration, NaiveDate};
use core_kernel::temporal::{self, years_before};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::age::AgeRange;
use crate::error::PartyError;

/// Country calling code prepended to every phone number
pub const PHONE_COUNTRY_CODE: &str = "+48";

/// Two-digit mobile network prefixes a phone number may start with
pub const MOBILE_PREFIXES: [u8; 13] = [45, 50, 51, 53, 57, 60, 66, 69, 72, 73, 78, 79, 88];

/// The owner section of an insurance record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub first_name: String,
    pub last_name: String,
    #[serde(with = "temporal::us_date")]
    pub birth_date: NaiveDate,
    pub address: String,
    pub phone: String,
}

impl Owner {
    /// Generates every owner field once
    ///
    /// # Errors
    ///
    /// Only the birth date can fail; see [`generate_birth_date`].
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        today: NaiveDate,
        ages: AgeRange,
    ) -> Result<Self, PartyError> {
        Ok(Self {
            first_name: generate_first_name(rng),
            last_name: generate_last_name(rng),
            birth_date: generate_birth_date(rng, today, ages)?,
            address: generate_address(rng),
            phone: generate_phone(rng),
        })
    }
}

/// Generates a first name
pub fn generate_first_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    FirstName().fake_with_rng(rng)
}

/// Generates a last name
pub fn generate_last_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    LastName().fake_with_rng(rng)
}

/// Generates a birth date whose whole-year age on `today` lies within `ages`
///
/// The date is drawn uniformly from the half-open window
/// `(today - (maximum + 1) years, today - minimum years]`.
///
/// # Errors
///
/// Returns `AgeOutOfRange` if the window reaches outside the calendar.
pub fn generate_birth_date<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    ages: AgeRange,
) -> Result<NaiveDate, PartyError> {
    let latest = years_before(today, ages.minimum()).ok_or(PartyError::AgeOutOfRange {
        field: "minimum_age",
        value: i64::from(ages.minimum()),
    })?;
    let earliest = ages
        .maximum()
        .checked_add(1)
        .and_then(|years| years_before(today, years))
        .and_then(|date| date.succ_opt())
        .ok_or(PartyError::AgeOutOfRange {
            field: "maximum_age",
            value: i64::from(ages.maximum()),
        })?;

    let span = (latest - earliest).num_days();
    Ok(earliest + Duration::days(rng.gen_range(0..=span)))
}

/// Generates a single-line street address ending in `<STATE> <ZIP>`
pub fn generate_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    Address::fake(rng).single_line()
}

/// Generates a mobile number shaped `+48 PPX DDD DDD`
pub fn generate_phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix = MOBILE_PREFIXES[rng.gen_range(0..MOBILE_PREFIXES.len())];
    let digit = rng.gen_range(0..10u8);
    let middle = rng.gen_range(0..1000u16);
    let last = rng.gen_range(0..1000u16);
    format!("{PHONE_COUNTRY_CODE} {prefix}{digit} {middle:03} {last:03}")
}
