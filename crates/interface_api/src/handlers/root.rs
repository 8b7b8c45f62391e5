//! Welcome handler

use axum::Json;

use crate::dto::WelcomeResponse;

/// Message returned by `GET /`
pub const WELCOME_MESSAGE: &str = "Welcome to the Car Insurance Generator API!";

/// Root endpoint, confirms the API is running
pub async fn read_root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}
