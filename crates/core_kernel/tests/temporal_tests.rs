//! Unit tests for the calendar helpers

use chrono::NaiveDate;
use core_kernel::temporal::us_date;
use core_kernel::{format_us_date, parse_us_date, whole_years_between, years_before};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Stamped {
    #[serde(with = "us_date")]
    on: NaiveDate,
}

#[test]
fn test_parse_us_date() {
    assert_eq!(parse_us_date("12/31/1999").unwrap(), date(1999, 12, 31));
}

#[test]
fn test_parse_rejects_iso_format() {
    assert!(parse_us_date("1999-12-31").is_err());
}

#[test]
fn test_parse_rejects_impossible_day() {
    assert!(parse_us_date("02/30/2024").is_err());
}

#[test]
fn test_years_before_zero_is_identity() {
    assert_eq!(years_before(date(2024, 5, 1), 0), Some(date(2024, 5, 1)));
}

#[test]
fn test_years_before_out_of_calendar() {
    assert_eq!(years_before(date(2024, 5, 1), u32::MAX), None);
    assert_eq!(years_before(date(2024, 5, 1), 10_000_000), None);
}

#[test]
fn test_leap_day_birthday_counts_on_march_first() {
    let birth = date(2004, 2, 29);
    assert_eq!(whole_years_between(birth, date(2025, 2, 28)), 20);
    assert_eq!(whole_years_between(birth, date(2025, 3, 1)), 21);
}

#[test]
fn test_negative_when_end_precedes_start() {
    assert_eq!(whole_years_between(date(2024, 1, 2), date(2024, 1, 1)), -1);
}

#[test]
fn test_serde_adapter() {
    let stamped = Stamped { on: date(2024, 1, 9) };
    let json = serde_json::to_string(&stamped).unwrap();
    assert_eq!(json, r#"{"on":"01/09/2024"}"#);
    let back: Stamped = serde_json::from_str(&json).unwrap();
    assert_eq!(back, stamped);
}

proptest! {
    #[test]
    fn years_before_has_exact_age(days in 0i64..40_000, years in 0u32..120) {
        let today = date(1990, 1, 1) + chrono::Duration::days(days);
        let anniversary = years_before(today, years).unwrap();
        prop_assert_eq!(whole_years_between(anniversary, today), years as i32);
    }

    #[test]
    fn formatted_dates_parse_back(days in 0i64..60_000) {
        let d = date(1950, 1, 1) + chrono::Duration::days(days);
        let s = format_us_date(d);
        prop_assert_eq!(s.len(), 10);
        prop_assert_eq!(parse_us_date(&s).unwrap(), d);
    }
}
