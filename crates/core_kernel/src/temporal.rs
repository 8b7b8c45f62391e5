//! Calendar helpers for generated records
//!
//! Every date in a generated record is a plain calendar date rendered as
//! `MM/DD/YYYY`. Ages are whole elapsed years, the way a birthday is counted.

use chrono::{Datelike, Local, Months, NaiveDate};

use crate::error::CoreError;

/// `strftime` pattern for the `MM/DD/YYYY` format
pub const US_DATE_FORMAT: &str = "%m/%d/%Y";

/// Returns the current local calendar date
///
/// Evaluated on every call, never cached.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Formats a date as `MM/DD/YYYY`
pub fn format_us_date(date: NaiveDate) -> String {
    date.format(US_DATE_FORMAT).to_string()
}

/// Parses a `MM/DD/YYYY` date
pub fn parse_us_date(value: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(value, US_DATE_FORMAT).map_err(|_| CoreError::invalid_date(value))
}

/// Returns the same calendar day `years` years before `date`
///
/// February 29 clamps to February 28 when the target year is not a leap year.
/// Returns `None` when the result leaves the representable calendar.
pub fn years_before(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    let months = years.checked_mul(12)?;
    date.checked_sub_months(Months::new(months))
}

/// Number of whole years elapsed between `start` and `end`
///
/// Negative when `end` precedes `start`.
pub fn whole_years_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut years = end.year() - start.year();
    if (end.month(), end.day()) < (start.month(), start.day()) {
        years -= 1;
    }
    years
}

/// Serde adapter rendering a `NaiveDate` as `MM/DD/YYYY`
///
/// ```rust,ignore
/// #[serde(with = "core_kernel::temporal::us_date")]
/// pub start_date: NaiveDate,
/// ```
pub mod us_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_us_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_us_date(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_pads_month_and_day() {
        assert_eq!(format_us_date(date(2024, 3, 7)), "03/07/2024");
    }

    #[test]
    fn test_leap_day_clamps() {
        assert_eq!(years_before(date(2024, 2, 29), 1), Some(date(2023, 2, 28)));
    }

    #[test]
    fn test_age_before_birthday() {
        assert_eq!(whole_years_between(date(2000, 6, 15), date(2024, 6, 14)), 23);
        assert_eq!(whole_years_between(date(2000, 6, 15), date(2024, 6, 15)), 24);
    }
}
