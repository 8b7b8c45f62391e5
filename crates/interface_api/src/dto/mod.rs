//! Request and response bodies

use serde::{Deserialize, Serialize};

/// Optional owner age bounds for `GET /generate`
///
/// Kept as raw text so non-integer input is reported as a type mismatch
/// rather than rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateQuery {
    pub minimum_age: Option<String>,
    pub maximum_age: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
