//! Policy domain errors

use domain_party::PartyError;
use thiserror::Error;

/// Errors that can occur while assembling a record
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The owner section could not be generated
    #[error("Owner generation failed: {0}")]
    Owner(#[from] PartyError),
}
