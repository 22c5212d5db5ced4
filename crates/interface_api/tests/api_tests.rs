//! API Tests
//!
//! This module exercises the router in-process:
//! - Health and readiness endpoints
//! - Discount determination over JSON product lists
//! - Validation and malformed request handling
//!
//! # Test Organization
//!
//! - `health` - Health endpoints
//! - `discounts` - Discount determination
//! - `percentage` - Single product percentage
//! - `errors` - Rejected requests

use std::str::FromStr;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use interface_api::router_with_service;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use test_utils::DateFixtures;
use tower::ServiceExt;

fn app() -> Router {
    router_with_service(DateFixtures::service())
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(request).await
}

fn decimal(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().unwrap()).unwrap()
}

// ============================================================================
// HEALTH TESTS
// ============================================================================

mod health {
    use super::*;

    /// Health check reports healthy
    #[tokio::test]
    async fn test_health_check() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(body.get("evaluation_date").is_none());
    }

    /// Readiness check reports the evaluation date in use
    #[tokio::test]
    async fn test_readiness_check() {
        let request = Request::builder().uri("/health/ready").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
        assert_eq!(body["evaluation_date"], "2024-06-15");
    }
}

// ============================================================================
// DISCOUNT TESTS
// ============================================================================

mod discounts {
    use super::*;

    /// Annuity mortgage of 360 months with commission 500 gives 18
    #[tokio::test]
    async fn test_annuity_mortgage() {
        let (status, body) = post_json(
            "/api/v1/discounts",
            json!({
                "products": [{
                    "product_type": "MORTGAGE",
                    "product_name": "ANNUITY",
                    "start_date": "2024-01-01",
                    "yearly_commission": "500",
                    "duration_in_months": 360
                }]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(decimal(&body["discount"]), dec!(18));
        assert_eq!(decimal(&body["total_percentage"]), dec!(3.6));
        assert_eq!(body["evaluation_date"], "2024-06-15");
        assert_eq!(body["products"][0]["product_type"], "MORTGAGE");
    }

    /// Mixed portfolio with commission above the cap
    #[tokio::test]
    async fn test_mixed_portfolio() {
        let (status, body) = post_json(
            "/api/v1/discounts",
            json!({
                "products": [
                    {
                        "product_type": "PENSION",
                        "product_name": "pension",
                        "start_date": "2000-01-01",
                        "end_date": "2022-01-01",
                        "yearly_commission": "1000",
                        "monthly_deposit": "400"
                    },
                    {
                        "product_type": "LIFE_INSURANCE",
                        "product_name": "lifeInsurance",
                        "start_date": "2010-01-01",
                        "yearly_commission": "500",
                        "insured_amount": "200000",
                        "birthdate_insured_customer": "1970-01-01"
                    },
                    {
                        "product_type": "NON_LIFE_INSURANCE",
                        "product_name": "NL",
                        "start_date": "2020-01-01",
                        "yearly_commission": "1000"
                    }
                ]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(decimal(&body["total_commission"]), dec!(2500));
        assert_eq!(decimal(&body["total_percentage"]), dec!(6));
        assert_eq!(decimal(&body["discount"]), dec!(60));
        assert_eq!(body["products"].as_array().unwrap().len(), 3);
    }

    /// Commissions at the decimal maximum are capped rather than overflowing
    #[tokio::test]
    async fn test_maximum_commissions() {
        let pension = json!({
            "product_type": "PENSION",
            "product_name": "pension",
            "start_date": "2024-01-01",
            "yearly_commission": Decimal::MAX.to_string(),
            "monthly_deposit": "300"
        });
        let (status, body) =
            post_json("/api/v1/discounts", json!({ "products": [pension.clone(), pension] })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(decimal(&body["total_commission"]), Decimal::MAX);
        assert_eq!(decimal(&body["discount"]), dec!(60));
    }

    /// An empty product list gives zero
    #[tokio::test]
    async fn test_empty_products() {
        let (status, body) = post_json("/api/v1/discounts", json!({ "products": [] })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(decimal(&body["discount"]), Decimal::ZERO);
    }

    /// Missing optional fields are accepted and reported as warnings
    #[tokio::test]
    async fn test_missing_insured_amount_is_warning() {
        let (status, body) = post_json(
            "/api/v1/discounts",
            json!({
                "products": [{
                    "product_type": "LIFE_INSURANCE",
                    "product_name": "lifeInsurance",
                    "start_date": "2010-01-01",
                    "yearly_commission": "500"
                }]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(decimal(&body["discount"]), Decimal::ZERO);
        assert_eq!(body["warnings"].as_array().unwrap().len(), 1);
    }
}

// ============================================================================
// PERCENTAGE TESTS
// ============================================================================

mod percentage {
    use super::*;

    /// Open-ended pension with deposit 300 earns 3
    #[tokio::test]
    async fn test_pension_percentage() {
        let (status, body) = post_json(
            "/api/v1/discounts/percentage",
            json!({
                "product": {
                    "product_type": "PENSION",
                    "product_name": "pension",
                    "start_date": "2024-01-01",
                    "monthly_deposit": "300"
                }
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(decimal(&body["percentage"]), dec!(3));
        assert_eq!(body["product_type"], "PENSION");
    }
}

// ============================================================================
// ERROR TESTS
// ============================================================================

mod errors {
    use super::*;

    /// Invalid products are rejected with their positions
    #[tokio::test]
    async fn test_validation_error() {
        let (status, body) = post_json(
            "/api/v1/discounts",
            json!({
                "products": [{
                    "product_type": "NON_LIFE_INSURANCE",
                    "product_name": " ",
                    "start_date": "2024-01-01",
                    "yearly_commission": "-5"
                }]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");

        let details = body["details"].as_array().unwrap();
        assert_eq!(details.len(), 2);
        assert!(details.iter().all(|d| d.as_str().unwrap().starts_with("products[0]: ")));
    }

    /// Future birthdates are rejected against the evaluation date
    #[tokio::test]
    async fn test_future_birthdate() {
        let (status, body) = post_json(
            "/api/v1/discounts",
            json!({
                "products": [{
                    "product_type": "LIFE_INSURANCE",
                    "product_name": "lifeInsurance",
                    "start_date": "2024-01-01",
                    "insured_amount": "150000",
                    "birthdate_insured_customer": "2030-01-01"
                }]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
    }

    /// Unknown product types are rejected before evaluation
    #[tokio::test]
    async fn test_unknown_product_type() {
        let (status, body) = post_json(
            "/api/v1/discounts",
            json!({
                "products": [{
                    "product_type": "CAR_LEASE",
                    "product_name": "lease",
                    "start_date": "2024-01-01"
                }]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
        assert!(body["message"].as_str().unwrap().contains("CAR_LEASE"));
    }

    /// Malformed JSON is rejected
    #[tokio::test]
    async fn test_malformed_json() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/discounts")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ not json"))
            .unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }
}
