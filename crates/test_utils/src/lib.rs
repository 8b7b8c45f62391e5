//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the generator test suite.
//!
//! # Modules
//!
//! - `fixtures`: Fixed dates, seeded sources and canonical age-bound tables
//! - `assertions`: Format assertions for every generated field
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use assertions::*;
pub use generators::*;
