//! Life insurance discount rule

use chrono::NaiveDate;
use core_kernel::temporal::whole_years_between;
use core_kernel::DecimalExt;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::product::{LifeInsuranceProduct, Product};

/// Insured amount (inclusive) a life insurance needs to earn any discount
pub const MINIMUM_INSURED_AMOUNT: Decimal = dec!(100000);

/// The insured customer must be strictly older than this for the age bonus
pub const MINIMUM_AGE_YEARS: i32 = 20;

/// Discount for any eligible life insurance
pub const BASE_DISCOUNT: Decimal = dec!(1);

/// Additional discount for an adult insured customer
pub const AGE_DISCOUNT: Decimal = dec!(2);

/// Determines the life insurance discount percentage of a generic product
///
/// Absent products and products of another type yield zero.
pub fn determine_discount_percentage(product: Option<&Product>, evaluation_date: NaiveDate) -> Decimal {
    product
        .and_then(Product::as_life_insurance)
        .map_or(Decimal::ZERO, |life| discount_percentage(life, evaluation_date))
}

/// Determines the discount percentage of a life insurance
///
/// The insured amount gates both the base discount and the age bonus; an
/// ineligible policy earns nothing at all.
///
/// # Arguments
///
/// * `life` - The life insurance to evaluate
/// * `evaluation_date` - Date the insured customer's age is measured at
pub fn discount_percentage(life: &LifeInsuranceProduct, evaluation_date: NaiveDate) -> Decimal {
    if !is_eligible(life) {
        return Decimal::ZERO;
    }

    BASE_DISCOUNT + age_discount(life, evaluation_date)
}

fn is_eligible(life: &LifeInsuranceProduct) -> bool {
    life.insured_amount
        .is_some_and(|amount| amount.is_at_least(MINIMUM_INSURED_AMOUNT))
}

fn age_discount(life: &LifeInsuranceProduct, evaluation_date: NaiveDate) -> Decimal {
    match life.birthdate_insured_customer {
        Some(birthdate) if whole_years_between(birthdate, evaluation_date) > MINIMUM_AGE_YEARS => AGE_DISCOUNT,
        _ => Decimal::ZERO,
    }
}
