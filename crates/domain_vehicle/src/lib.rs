//! Vehicle Domain
//!
//! Generates the car section of an insurance record.

pub mod vin;

pub use vin::{generate_vin, Car};
