//! Health check handlers

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Date discounts are currently evaluated at, reported by readiness only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_date: Option<NaiveDate>,
}

impl HealthResponse {
    fn new(status: &'static str, evaluation_date: Option<NaiveDate>) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            evaluation_date,
        }
    }
}

/// Liveness: the process answers
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("healthy", None))
}

/// Readiness: the evaluation clock can be read
pub async fn readiness_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::new("ready", Some(state.service.evaluation_date())))
}
