//! Address types

use fake::faker::address::en::{BuildingNumber, CityName, SecondaryAddress, StateAbbr, StreetName};
use fake::Fake;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Smallest ZIP code handed out
const MIN_ZIP: u32 = 501;

/// Largest ZIP code handed out
const MAX_ZIP: u32 = 99_950;

/// Share of addresses carrying an apartment or suite line
const SECONDARY_LINE_PROBABILITY: f64 = 0.25;

/// A US postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl Address {
    /// Creates a new address
    pub fn new(
        line1: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            line1: line1.into(),
            line2: None,
            city: city.into(),
            state: state.into(),
            postal_code: postal_code.into(),
        }
    }

    /// Draws a random address: house number and street, sometimes an
    /// apartment or suite line, then city, state abbreviation and a five
    /// digit ZIP code
    pub fn fake<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let building: String = BuildingNumber().fake_with_rng(rng);
        let street: String = StreetName().fake_with_rng(rng);
        let line2: Option<String> = if rng.gen_bool(SECONDARY_LINE_PROBABILITY) {
            Some(SecondaryAddress().fake_with_rng(rng))
        } else {
            None
        };
        let city: String = CityName().fake_with_rng(rng);
        let state: String = StateAbbr().fake_with_rng(rng);
        let zip = rng.gen_range(MIN_ZIP..=MAX_ZIP);

        Self {
            line2,
            ..Self::new(format!("{building} {street}"), city, state, format!("{zip:05}"))
        }
    }

    /// Formats address for display, one component per line
    pub fn format(&self) -> String {
        let mut lines = vec![self.line1.clone()];
        if let Some(l2) = &self.line2 {
            lines.push(l2.clone());
        }
        lines.push(format!("{}, {} {}", self.city, self.state, self.postal_code));
        lines.join("\n")
    }

    /// Formats address on a single line, line breaks replaced by `, `
    pub fn single_line(&self) -> String {
        self.format().lines().collect::<Vec<_>>().join(", ")
    }
}
