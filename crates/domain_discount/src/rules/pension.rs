//! Pension discount rule

use core_kernel::temporal::whole_years_between;
use core_kernel::DecimalExt;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::product::{PensionProduct, Product};

/// A pension must run strictly longer than this many years for the term bonus
pub const MINIMUM_TERM_YEARS: i32 = 20;

/// Monthly deposit (inclusive) that earns the deposit bonus
pub const MINIMUM_MONTHLY_DEPOSIT: Decimal = dec!(300);

/// Bonus for an open-ended or long-running pension
pub const TERM_DISCOUNT: Decimal = dec!(2);

/// Bonus for a high monthly deposit
pub const DEPOSIT_DISCOUNT: Decimal = dec!(1);

/// Determines the pension discount percentage of a generic product
///
/// Absent products and products of another type yield zero.
pub fn determine_discount_percentage(product: Option<&Product>) -> Decimal {
    product
        .and_then(Product::as_pension)
        .map_or(Decimal::ZERO, discount_percentage)
}

/// Determines the discount percentage of a pension
///
/// The term and deposit bonuses are independent, so the result is one of
/// 0, 1, 2 or 3.
pub fn discount_percentage(pension: &PensionProduct) -> Decimal {
    term_discount(pension) + deposit_discount(pension)
}

fn term_discount(pension: &PensionProduct) -> Decimal {
    let qualifies = match pension.end_date {
        None => true,
        Some(end_date) => whole_years_between(pension.start_date, end_date) > MINIMUM_TERM_YEARS,
    };

    if qualifies {
        TERM_DISCOUNT
    } else {
        Decimal::ZERO
    }
}

fn deposit_discount(pension: &PensionProduct) -> Decimal {
    match pension.monthly_deposit {
        Some(deposit) if deposit.is_at_least(MINIMUM_MONTHLY_DEPOSIT) => DEPOSIT_DISCOUNT,
        _ => Decimal::ZERO,
    }
}
