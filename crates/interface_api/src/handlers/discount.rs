//! Discount handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{info, warn};

use domain_discount::ProductValidator;

use crate::dto::discount::*;
use crate::{error::ApiError, AppState};

/// Determines the discount for a customer's products
///
/// Unreadable bodies are rejected as bad requests. Products are validated
/// next; any validation error rejects the whole request. The clock is read
/// once so validation and evaluation share the same date.
pub async fn determine_discount(
    State(state): State<AppState>,
    payload: Result<Json<DiscountRequest>, JsonRejection>,
) -> Result<Json<DiscountResponse>, ApiError> {
    let Json(request) = payload?;
    let evaluation_date = state.service.evaluation_date();

    let validation = ProductValidator::validate_all(&request.products, evaluation_date);
    for warning in &validation.warnings {
        warn!(%warning, "Product validation warning");
    }
    if !validation.is_valid {
        return Err(ApiError::validation(
            format!("{} invalid product field(s)", validation.errors.len()),
            validation.errors,
        ));
    }

    let outcome = domain_discount::evaluate(&request.products, evaluation_date);

    info!(
        products = request.products.len(),
        discount = %outcome.discount,
        %evaluation_date,
        "Discount determined"
    );

    Ok(Json(DiscountResponse::from(outcome).with_warnings(validation.warnings)))
}

/// Determines the discount percentage of a single product
pub async fn determine_percentage(
    State(state): State<AppState>,
    payload: Result<Json<PercentageRequest>, JsonRejection>,
) -> Result<Json<PercentageResponse>, ApiError> {
    let Json(request) = payload?;
    let evaluation_date = state.service.evaluation_date();

    let validation = ProductValidator::validate(&request.product, evaluation_date);
    if !validation.is_valid {
        return Err(ApiError::validation("Invalid product", validation.errors));
    }

    let percentage = domain_discount::rules::determine_discount_percentage(&request.product, evaluation_date);

    Ok(Json(PercentageResponse {
        product_name: request.product.product_name().to_string(),
        product_type: request.product.product_type(),
        percentage,
        evaluation_date,
    }))
}
