//! Property-Based Test Generators
//!
//! Provides proptest strategies for seeds, reference dates and age bounds.

use chrono::NaiveDate;
use proptest::prelude::*;

/// Strategy for random source seeds
pub fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Strategy for reference dates between 2000 and 2099, leap days included
pub fn today_strategy() -> impl Strategy<Value = NaiveDate> {
    prop_oneof![
        (2000i32..2100i32, 1u32..=365u32)
            .prop_map(|(year, ordinal)| NaiveDate::from_yo_opt(year, ordinal).unwrap()),
        (0i32..25i32).prop_map(|n| NaiveDate::from_ymd_opt(2000 + 4 * n, 2, 29).unwrap()),
    ]
}

/// Strategy for valid age bounds (`0 <= min <= max <= 120`)
pub fn valid_age_bounds_strategy() -> impl Strategy<Value = (i64, i64)> {
    (0i64..=120i64, 0i64..=120i64).prop_map(|(a, b)| (a.min(b), a.max(b)))
}

/// Strategy for bounds where the minimum exceeds the maximum
pub fn inverted_age_bounds_strategy() -> impl Strategy<Value = (i64, i64)> {
    (1i64..=200i64, 0i64..200i64).prop_map(|(gap, max)| (max + gap, max))
}

/// Strategy for bounds where at least one side is negative
pub fn negative_age_bounds_strategy() -> impl Strategy<Value = (i64, i64)> {
    prop_oneof![
        (-1000i64..0i64, 0i64..120i64),
        (0i64..120i64, -1000i64..0i64),
        (-1000i64..0i64, -1000i64..0i64),
    ]
}

/// Strategy for textual bounds that are not integers
pub fn non_integer_bound_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..200u32, 1u32..10u32).prop_map(|(whole, frac)| format!("{whole}.{frac}")),
        "[a-z]{1,12}",
        Just(String::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_bounds_are_ordered((min, max) in valid_age_bounds_strategy()) {
            prop_assert!(0 <= min && min <= max);
        }

        #[test]
        fn inverted_bounds_are_inverted((min, max) in inverted_age_bounds_strategy()) {
            prop_assert!(min > max && max >= 0);
        }

        #[test]
        fn non_integer_bounds_do_not_parse(raw in non_integer_bound_strategy()) {
            prop_assert!(raw.trim().parse::<i64>().is_err());
        }
    }
}
