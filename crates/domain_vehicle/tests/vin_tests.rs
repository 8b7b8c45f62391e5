//! Tests for the VIN generator

use domain_vehicle::{generate_vin, Car};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use test_utils::*;

#[test]
fn test_vin_length() {
    let mut rng = StdRng::seed_from_u64(DEFAULT_TEST_SEED);
    let vin = generate_vin(&mut rng);
    assert_eq!(vin.as_str().len(), 17, "VIN length should be 17, but got {}", vin.as_str().len());
}

#[test]
fn test_generated_vin_parses() {
    let mut rng = StdRng::seed_from_u64(DEFAULT_TEST_SEED);
    let vin = generate_vin(&mut rng);
    assert_eq!(vin.as_str().parse::<core_kernel::Vin>().unwrap(), vin);
}

#[test]
fn test_alphabet_is_covered() {
    let mut rng = StdRng::seed_from_u64(DEFAULT_TEST_SEED);
    let seen: HashSet<char> = (0..500)
        .flat_map(|_| generate_vin(&mut rng).as_str().chars().collect::<Vec<_>>())
        .collect();
    assert_eq!(seen.len(), 33);
    assert!(!seen.contains(&'I') && !seen.contains(&'O') && !seen.contains(&'Q'));
}

#[test]
fn test_car_serializes_vin_as_string() {
    let mut rng = StdRng::seed_from_u64(4);
    let car = Car::generate(&mut rng);
    let json = serde_json::to_value(&car).unwrap();
    assert_vin_format(json["vin"].as_str().unwrap());
}

proptest! {
    #[test]
    fn vin_allowed_chars(seed in seed_strategy()) {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_vin_format(generate_vin(&mut rng).as_str());
    }
}
