//! HTTP API Layer
//!
//! This crate exposes the record generator over HTTP using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Welcome message, record generation, health
//! - **Middleware**: Request logging
//! - **DTOs**: Query parameters and fixed response bodies
//! - **Error Handling**: Consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(RecordGenerator::shared());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{middleware as axum_middleware, routing::get, Router};
use domain_policy::RecordGenerator;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{generate, health, root};
use crate::middleware::request_logging_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub generator: RecordGenerator,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `generator` - Record generator holding the injected random source
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(generator: RecordGenerator) -> Router {
    let state = AppState { generator };

    Router::new()
        .route("/", get(root::read_root))
        .route("/generate", get(generate::generate_record))
        .route("/health", get(health::health_check))
        .layer(axum_middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
