//! Discount domain services
//!
//! This module aggregates discount percentages and commissions across a
//! customer's products and hands the totals to the final calculator.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use core_kernel::{Clock, SystemClock};
use crate::calculator::calculate_discount;
use crate::product::{Product, ProductType};
use crate::rules;

/// Discount contribution of a single product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDiscount {
    pub product_name: String,
    pub product_type: ProductType,
    /// Discount percentage earned by this product
    pub percentage: Decimal,
    /// Yearly commission counted for this product (absent counts as zero)
    pub commission: Decimal,
}

/// Result of a discount evaluation, with the figures it was derived from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountOutcome {
    /// Final discount amount
    pub discount: Decimal,
    /// Sum of all yearly commissions
    pub total_commission: Decimal,
    /// Sum of all discount percentages
    pub total_percentage: Decimal,
    /// Date the rules were evaluated at
    pub evaluation_date: NaiveDate,
    /// Per-product contributions, in input order
    pub products: Vec<ProductDiscount>,
}

/// Sums amounts, saturating at the decimal bounds instead of overflowing
///
/// A saturated commission total is capped by the calculator anyway.
fn saturating_sum(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, |total, amount| total.saturating_add(amount))
}

/// Determines the discount amount for a list of products
///
/// Pure function of its inputs: the same products and evaluation date
/// always give the same amount, in any product order.
pub fn determine_discount(products: &[Product], evaluation_date: NaiveDate) -> Decimal {
    evaluate(products, evaluation_date).discount
}

/// Determines the discount amount together with its breakdown
#[instrument(skip_all, fields(products = products.len(), %evaluation_date))]
pub fn evaluate(products: &[Product], evaluation_date: NaiveDate) -> DiscountOutcome {
    let lines: Vec<ProductDiscount> = products
        .iter()
        .map(|product| {
            let percentage = rules::determine_discount_percentage(product, evaluation_date);
            debug!(
                product_name = product.product_name(),
                product_type = %product.product_type(),
                %percentage,
                "Determined product discount percentage"
            );

            ProductDiscount {
                product_name: product.product_name().to_string(),
                product_type: product.product_type(),
                percentage,
                commission: product.yearly_commission().unwrap_or(Decimal::ZERO),
            }
        })
        .collect();

    let total_percentage = saturating_sum(lines.iter().map(|line| line.percentage));
    let total_commission = saturating_sum(lines.iter().map(|line| line.commission));
    let discount = calculate_discount(Some(total_commission), Some(total_percentage));

    debug!(%total_commission, %total_percentage, %discount, "Determined discount");

    DiscountOutcome {
        discount,
        total_commission,
        total_percentage,
        evaluation_date,
        products: lines,
    }
}

/// Service determining customer discounts
///
/// Holds the clock supplying the evaluation date; the clock is read once
/// per evaluation so every rule sees the same date.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use chrono::NaiveDate;
/// use core_kernel::FixedClock;
/// use domain_discount::{DiscountService, MortgageProduct};
/// use rust_decimal_macros::dec;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let service = DiscountService::new(Arc::new(FixedClock::new(today)));
///
/// let mortgage = MortgageProduct::new("ANNUITY", today)
///     .with_yearly_commission(dec!(500))
///     .with_duration_in_months(360);
///
/// assert_eq!(service.determine_discount(&[mortgage.into()]), dec!(18));
/// ```
#[derive(Clone)]
pub struct DiscountService {
    clock: Arc<dyn Clock>,
}

impl DiscountService {
    /// Creates a new discount service
    ///
    /// # Arguments
    ///
    /// * `clock` - Source of the evaluation date
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Returns the date the next evaluation would use
    pub fn evaluation_date(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Determines the discount amount for a customer's products
    pub fn determine_discount(&self, products: &[Product]) -> Decimal {
        determine_discount(products, self.clock.today())
    }

    /// Determines the discount amount together with its breakdown
    pub fn evaluate(&self, products: &[Product]) -> DiscountOutcome {
        evaluate(products, self.clock.today())
    }
}

impl Default for DiscountService {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock::default()))
    }
}
