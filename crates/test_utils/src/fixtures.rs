//! Pre-built Test Fixtures
//!
//! Fixed reference dates keep date-dependent assertions stable, and the
//! bound tables mirror the age ranges exercised throughout the suite.

use chrono::NaiveDate;
use core_kernel::FakeSource;
use std::sync::Arc;

/// Seed used by tests that only need some reproducible source
pub const DEFAULT_TEST_SEED: u64 = 0x5EED;

/// Age ranges that must be accepted
pub const VALID_AGE_BOUNDS: &[(i64, i64)] = &[
    (0, 0),
    (0, 1),
    (0, 100),
    (1, 10),
    (18, 18),
    (18, 63),
    (20, 30),
    (25, 40),
    (50, 60),
    (63, 63),
    (90, 100),
];

/// Integer age ranges that must be rejected as domain errors
pub const DOMAIN_ERROR_BOUNDS: &[(i64, i64)] = &[(-1, 63), (18, -5), (-10, -1), (100, 50)];

/// Integer literals beyond `i64` that must be rejected as domain errors
pub const OVERFLOWING_AGE_BOUNDS: &[(&str, &str)] = &[
    ("-99999999999999999999", "63"),
    ("18", "-99999999999999999999"),
    ("0", "99999999999999999999"),
    ("99999999999999999999", "63"),
];

/// Textual age bounds that must be rejected as type mismatches
pub const TYPE_MISMATCH_BOUNDS: &[(&str, &str)] = &[
    ("one", "63"),
    ("18", "sixty-three"),
    ("18.5", "63"),
    ("two", "fife"),
    ("64", "ten"),
    ("sixty-three", "22"),
    ("1.5", "6.3"),
];

/// Fixture for temporal test data
pub struct DateFixtures;

impl DateFixtures {
    /// An ordinary mid-year date
    pub fn mid_year() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    /// A leap day
    pub fn leap_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// The last day of a year
    pub fn new_years_eve() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
    }
}

/// Creates a shareable seeded source
pub fn seeded_source(seed: u64) -> Arc<FakeSource> {
    Arc::new(FakeSource::seeded(seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bounds_are_ordered() {
        for (min, max) in VALID_AGE_BOUNDS {
            assert!(0 <= *min && min <= max);
        }
    }

    #[test]
    fn test_domain_error_bounds_are_invalid() {
        for (min, max) in DOMAIN_ERROR_BOUNDS {
            assert!(*min < 0 || *max < 0 || min > max);
        }
    }
}
