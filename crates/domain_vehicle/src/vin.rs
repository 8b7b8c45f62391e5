//! Vehicle Identification Numbers

use core_kernel::{Vin, VIN_ALPHABET, VIN_LENGTH};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The car section of an insurance record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub vin: Vin,
}

impl Car {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self { vin: generate_vin(rng) }
    }
}

/// Generates a 17 character VIN
///
/// Each character is drawn independently and uniformly from digits and
/// uppercase letters, excluding I, O and Q.
pub fn generate_vin<R: Rng + ?Sized>(rng: &mut R) -> Vin {
    let vin: String = (0..VIN_LENGTH)
        .map(|_| VIN_ALPHABET[rng.gen_range(0..VIN_ALPHABET.len())] as char)
        .collect();
    Vin::new_unchecked(vin)
}
