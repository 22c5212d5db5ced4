//! Discount Domain
//!
//! This crate determines the discount a customer receives on the products
//! they hold (pensions, mortgages, life and non-life insurances).
//!
//! # Architecture
//!
//! The domain layer is infrastructure-agnostic and free of side effects:
//! - **Product model**: a closed enum over the four product variants
//! - **Rules**: one rule per product type mapping a product to a discount percentage
//! - **Aggregation**: percentages and yearly commissions summed over all products
//! - **Calculator**: commission floor, cap and rounding turning the totals into an amount
//! - **Validation**: checks for products received from outside the domain
//!
//! # Flow
//!
//! ```text
//! products -> per-product rule -> sum(percentage), sum(commission) -> calculate_discount -> amount
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use domain_discount::{determine_discount, PensionProduct, Product};
//! use rust_decimal_macros::dec;
//!
//! let pension: Product = PensionProduct::new("pension", NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
//!     .with_yearly_commission(dec!(100))
//!     .with_monthly_deposit(dec!(400))
//!     .with_end_date(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap())
//!     .into();
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! assert_eq!(determine_discount(&[pension], today), dec!(3));
//! ```

pub mod product;
pub mod rules;
pub mod calculator;
pub mod services;
pub mod validation;

pub use product::{
    LifeInsuranceProduct, MortgageProduct, NonLifeInsurance, PensionProduct, Product, ProductType,
};
pub use calculator::calculate_discount;
pub use services::{determine_discount, evaluate, DiscountOutcome, DiscountService, ProductDiscount};
pub use validation::{ProductValidator, ValidationResult};
