//! Record generation handler

use axum::{
    extract::{Query, State},
    Json,
};
use domain_party::AgeRange;
use domain_policy::InsuranceRecord;

use crate::dto::GenerateQuery;
use crate::{error::ApiError, AppState};

/// Generates one fictitious insurance record
///
/// Without query parameters the owner is between 18 and 63 years old.
/// `minimum_age` and `maximum_age` override either bound; a bound that is not
/// an integer is a bad request, an impossible range a validation error.
pub async fn generate_record(
    State(state): State<AppState>,
    Query(query): Query<GenerateQuery>,
) -> Result<Json<InsuranceRecord>, ApiError> {
    let ages = AgeRange::with_bounds(query.minimum_age.as_deref(), query.maximum_age.as_deref())?;
    let record = state.generator.generate_with(ages)?;
    Ok(Json(record))
}
