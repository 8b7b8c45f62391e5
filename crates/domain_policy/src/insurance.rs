//! Insurance term generation

use chrono::{Duration, NaiveDate};
use core_kernel::temporal::{self, format_us_date};
use serde::{Deserialize, Serialize};

/// Length of every insurance term, in days
///
/// A fixed offset: leap years get no extra day.
pub const POLICY_TERM_DAYS: i64 = 365;

/// The insurance section of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceTerm {
    #[serde(with = "temporal::us_date")]
    pub start_date: NaiveDate,
    #[serde(with = "temporal::us_date")]
    pub end_date: NaiveDate,
}

impl InsuranceTerm {
    /// A term beginning on `today`
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            start_date: today,
            end_date: today + Duration::days(POLICY_TERM_DAYS),
        }
    }

    /// Length of the term in days
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// Start date of a term beginning on `today`, as `MM/DD/YYYY`
pub fn generate_start_date(today: NaiveDate) -> String {
    format_us_date(InsuranceTerm::starting(today).start_date)
}

/// End date of a term beginning on `today`, as `MM/DD/YYYY`
pub fn generate_end_date(today: NaiveDate) -> String {
    format_us_date(InsuranceTerm::starting(today).end_date)
}
