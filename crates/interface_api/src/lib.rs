//! HTTP API Layer
//!
//! This crate provides the REST API for the discount engine using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for health and discount determination
//! - **Middleware**: Tracing and request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config)?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use core_kernel::CoreError;
use domain_discount::DiscountService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{discount, health};
use crate::middleware::request_logging_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: DiscountService,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
///
/// # Errors
///
/// Returns an error if the configured evaluation clock is invalid
pub fn create_router(config: ApiConfig) -> Result<Router, CoreError> {
    let service = DiscountService::new(config.clock()?);
    Ok(router_with_service(service))
}

/// Creates the API router around an existing discount service
pub fn router_with_service(service: DiscountService) -> Router {
    let state = AppState { service };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let api_routes = Router::new()
        .route("/discounts", post(discount::determine_discount))
        .route("/discounts/percentage", post(discount::determine_percentage));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
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
