//! Tests for the insurance term generators

use chrono::NaiveDate;
use core_kernel::today;
use domain_policy::{generate_end_date, generate_start_date, InsuranceTerm, POLICY_TERM_DAYS};
use proptest::prelude::*;
use test_utils::*;

#[test]
fn test_start_date_is_today() {
    let now = today();
    assert_eq!(generate_start_date(now), now.format("%m/%d/%Y").to_string());
}

#[test]
fn test_end_date_is_365_days_later() {
    let start = DateFixtures::mid_year();
    assert_eq!(generate_end_date(start), "06/15/2025");
}

#[test]
fn test_leap_year_still_365_days() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert_eq!(generate_end_date(start), "12/31/2024");
}

#[test]
fn test_leap_day_start() {
    assert_eq!(generate_start_date(DateFixtures::leap_day()), "02/29/2024");
    assert_eq!(generate_end_date(DateFixtures::leap_day()), "02/28/2025");
}

#[test]
fn test_term_serializes_as_us_dates() {
    let term = InsuranceTerm::starting(DateFixtures::new_years_eve());
    let json = serde_json::to_value(term).unwrap();
    assert_eq!(json["start_date"], "12/31/2023");
    assert_eq!(json["end_date"], "12/30/2024");
}

proptest! {
    #[test]
    fn term_is_always_365_days(start in today_strategy()) {
        let term = InsuranceTerm::starting(start);
        prop_assert_eq!(term.days(), POLICY_TERM_DAYS);

        let parsed_start = assert_us_date(&generate_start_date(start));
        let parsed_end = assert_us_date(&generate_end_date(start));
        prop_assert_eq!((parsed_end - parsed_start).num_days(), 365);
    }
}
