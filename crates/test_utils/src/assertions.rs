//! Custom Test Assertions
//!
//! Format checks for every field of a generated record, with failure
//! messages that show the offending value.

use chrono::NaiveDate;
use core_kernel::{parse_us_date, whole_years_between, VIN_ALPHABET};
use serde_json::Value;

/// Two-digit prefixes allowed right after the country code
pub const ALLOWED_PHONE_PREFIXES: [&str; 13] = [
    "45", "50", "51", "53", "57", "60", "66", "69", "72", "73", "78", "79", "88",
];

/// Asserts that a policy number is `PL` + 9 digits + 2 uppercase letters
pub fn assert_policy_number_format(value: &str) {
    assert_eq!(value.len(), 13, "Policy number length mismatch: {value:?}");
    assert!(value.starts_with("PL"), "Policy number prefix mismatch: {value:?}");
    assert!(
        value[2..11].bytes().all(|b| b.is_ascii_digit()),
        "Policy number middle is not 9 digits: {value:?}"
    );
    assert!(
        value[11..].bytes().all(|b| b.is_ascii_uppercase()),
        "Policy number does not end in two uppercase letters: {value:?}"
    );
}

/// Asserts that a VIN has 17 characters from the allowed alphabet
pub fn assert_vin_format(value: &str) {
    assert_eq!(value.len(), 17, "VIN length mismatch: {value:?}");
    for b in value.bytes() {
        assert!(
            VIN_ALPHABET.contains(&b),
            "VIN contains invalid character {:?}: {value:?}",
            b as char
        );
    }
}

/// Asserts that a phone number matches `+48 DDD DDD DDD` with an allowed prefix
pub fn assert_phone_format(value: &str) {
    assert_eq!(value.len(), 15, "Phone length mismatch: {value:?}");
    let parts: Vec<&str> = value.split(' ').collect();
    assert_eq!(parts.len(), 4, "Phone should have four space separated groups: {value:?}");
    assert_eq!(parts[0], "+48", "Phone country code mismatch: {value:?}");
    for group in &parts[1..] {
        assert!(
            group.len() == 3 && group.bytes().all(|b| b.is_ascii_digit()),
            "Phone group {group:?} is not three digits: {value:?}"
        );
    }
    assert!(
        ALLOWED_PHONE_PREFIXES.contains(&&parts[1][..2]),
        "Phone prefix {:?} is not allowed: {value:?}",
        &parts[1][..2]
    );
}

/// Asserts that an address is a single line ending in `<ST> <ZIP5>` with a house number
pub fn assert_address_format(value: &str) {
    assert!(!value.is_empty(), "Address is empty");
    assert!(!value.contains('\n'), "Address spans multiple lines: {value:?}");
    assert!(
        value.bytes().any(|b| b.is_ascii_digit()),
        "Address has no house number: {value:?}"
    );

    let tokens: Vec<&str> = value.split_whitespace().collect();
    assert!(tokens.len() >= 2, "Address too short: {value:?}");
    let zip = tokens[tokens.len() - 1];
    let state = tokens[tokens.len() - 2];
    assert!(
        zip.len() == 5 && zip.bytes().all(|b| b.is_ascii_digit()),
        "Address does not end in a 5 digit postal code: {value:?}"
    );
    assert!(
        state.len() == 2 && state.bytes().all(|b| b.is_ascii_uppercase()),
        "Address state code is not two uppercase letters: {value:?}"
    );
}

/// Asserts that a string is a `MM/DD/YYYY` date and returns it
pub fn assert_us_date(value: &str) -> NaiveDate {
    assert_eq!(value.len(), 10, "Date is not MM/DD/YYYY: {value:?}");
    match parse_us_date(value) {
        Ok(date) => date,
        Err(e) => panic!("Date {value:?} does not parse: {e}"),
    }
}

/// Asserts that the whole-year age of `birth` on `today` is within `[min, max]`
pub fn assert_age_within(birth: NaiveDate, today: NaiveDate, min: i64, max: i64) {
    let age = i64::from(whole_years_between(birth, today));
    assert!(
        min <= age && age <= max,
        "Generated age {age} is not in the range {min}-{max}. Birth date: {birth}, today: {today}"
    );
}

/// Asserts that a JSON value has exactly the insurance record shape with
/// every field present, non-empty and well formed
pub fn assert_record_json(record: &Value) {
    let root = record.as_object().expect("record should be a JSON object");
    let mut keys: Vec<&str> = root.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["car", "insurance", "owner", "policy_number"]);

    assert_policy_number_format(string_field(record, "/policy_number"));

    let owner = record["owner"].as_object().expect("owner should be an object");
    assert_eq!(owner.len(), 5, "owner has unexpected fields: {owner:?}");
    assert!(!string_field(record, "/owner/first_name").is_empty());
    assert!(!string_field(record, "/owner/last_name").is_empty());
    assert_us_date(string_field(record, "/owner/birth_date"));
    assert_address_format(string_field(record, "/owner/address"));
    assert_phone_format(string_field(record, "/owner/phone"));

    let car = record["car"].as_object().expect("car should be an object");
    assert_eq!(car.len(), 1, "car has unexpected fields: {car:?}");
    assert_vin_format(string_field(record, "/car/vin"));

    let insurance = record["insurance"].as_object().expect("insurance should be an object");
    assert_eq!(insurance.len(), 2, "insurance has unexpected fields: {insurance:?}");
    let start = assert_us_date(string_field(record, "/insurance/start_date"));
    let end = assert_us_date(string_field(record, "/insurance/end_date"));
    assert_eq!((end - start).num_days(), 365, "Insurance term is not 365 days");
}

fn string_field<'a>(record: &'a Value, pointer: &str) -> &'a str {
    record
        .pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("missing string field {pointer} in {record}"))
}
