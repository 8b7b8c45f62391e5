//! Tests for core_kernel error types

use core_kernel::error::CoreError;

#[test]
fn test_invalid_identifier_message() {
    let error = CoreError::invalid_identifier("VIN", "ABC");
    assert_eq!(error.to_string(), "Invalid VIN: \"ABC\"");
}

#[test]
fn test_invalid_date_message() {
    let error = CoreError::invalid_date("2024-01-01");
    assert!(error.to_string().contains("MM/DD/YYYY"));
}

#[test]
fn test_configuration_error() {
    let error = CoreError::configuration("port out of range");

    match error {
        CoreError::Configuration(msg) => assert_eq!(msg, "port out of range"),
        _ => panic!("Expected Configuration error"),
    }
}
