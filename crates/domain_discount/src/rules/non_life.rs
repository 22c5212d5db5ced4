//! Non-life insurance discount rule

use rust_decimal::Decimal;

use crate::product::{NonLifeInsurance, Product};

/// Non-life insurances never earn a discount; absent products neither
pub fn determine_discount_percentage(_product: Option<&Product>) -> Decimal {
    Decimal::ZERO
}

/// Non-life insurances never earn a discount
pub fn discount_percentage(_non_life: &NonLifeInsurance) -> Decimal {
    Decimal::ZERO
}
