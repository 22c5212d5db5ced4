//! Per-product discount rules
//!
//! Each product type has its own rule mapping one product to a discount
//! percentage (percentage points, summed across products). The rules are
//! compiled in:
//!
//! | Product type       | Rule                                                          | Range   |
//! |--------------------|---------------------------------------------------------------|---------|
//! | Pension            | +2 open-ended or longer than 20 years, +1 deposit of 300+     | 0 to 3  |
//! | Mortgage           | 0.01 per month for a 360 month `ANNUITY`                      | 0, 3.6  |
//! | Life insurance     | 1 when insured for 100,000+, +2 when the insured is over 20   | 0, 1, 3 |
//! | Non-life insurance | never discounted                                              | 0       |
//!
//! Every rule module exposes a `discount_percentage` function on its own
//! variant and a `determine_discount_percentage` function on an optional
//! generic product, which yields zero for any other product type.

pub mod pension;
pub mod mortgage;
pub mod life_insurance;
pub mod non_life;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::product::Product;

/// Determines the discount percentage of a single product
///
/// Dispatches on the product variant; every variant has exactly one rule.
///
/// # Arguments
///
/// * `product` - The product to evaluate
/// * `evaluation_date` - Date age-dependent rules are evaluated against
pub fn determine_discount_percentage(product: &Product, evaluation_date: NaiveDate) -> Decimal {
    match product {
        Product::Pension(pension) => pension::discount_percentage(pension),
        Product::Mortgage(mortgage) => mortgage::discount_percentage(mortgage),
        Product::LifeInsurance(life) => life_insurance::discount_percentage(life, evaluation_date),
        Product::NonLifeInsurance(non_life) => non_life::discount_percentage(non_life),
    }
}
