//! Discount DTOs

use chrono::NaiveDate;
use domain_discount::{DiscountOutcome, Product, ProductDiscount, ProductType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct DiscountRequest {
    pub products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
pub struct PercentageRequest {
    pub product: Product,
}

#[derive(Debug, Serialize)]
pub struct DiscountResponse {
    pub discount: Decimal,
    pub total_commission: Decimal,
    pub total_percentage: Decimal,
    pub evaluation_date: NaiveDate,
    pub products: Vec<ProductDiscount>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl DiscountResponse {
    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }
}

impl From<DiscountOutcome> for DiscountResponse {
    fn from(outcome: DiscountOutcome) -> Self {
        Self {
            discount: outcome.discount,
            total_commission: outcome.total_commission,
            total_percentage: outcome.total_percentage,
            evaluation_date: outcome.evaluation_date,
            products: outcome.products,
            warnings: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PercentageResponse {
    pub product_name: String,
    pub product_type: ProductType,
    pub percentage: Decimal,
    pub evaluation_date: NaiveDate,
}
