//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain_party::PartyError;
use domain_policy::PolicyError;
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<PartyError> for ApiError {
    fn from(err: PartyError) -> Self {
        if err.is_type_mismatch() {
            ApiError::BadRequest(err.to_string())
        } else {
            ApiError::Validation(err.to_string())
        }
    }
}

impl From<PolicyError> for ApiError {
    fn from(err: PolicyError) -> Self {
        match err {
            PolicyError::Owner(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_is_bad_request() {
        let response = ApiError::from(PartyError::type_mismatch("minimum_age", "18.5")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_domain_errors_are_unprocessable() {
        let errors = [
            PartyError::NegativeAge { field: "minimum_age", value: -1 },
            PartyError::InvertedAgeRange { minimum: 100, maximum: 50 },
            PartyError::AgeOutOfRange { field: "maximum_age", value: i64::MAX },
        ];
        for err in errors {
            let response = ApiError::from(PolicyError::Owner(err)).into_response();
            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        }
    }
}
