//! Mortgage discount rule

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::product::{MortgageProduct, Product};

/// Mortgage form eligible for a discount (case-sensitive)
pub const ELIGIBLE_PRODUCT_NAME: &str = "ANNUITY";

/// Duration an eligible mortgage must have
pub const ELIGIBLE_DURATION_IN_MONTHS: u32 = 360;

/// Discount percentage per month of duration
pub const DISCOUNT_PER_MONTH: Decimal = dec!(0.01);

/// Determines the mortgage discount percentage of a generic product
///
/// Absent products and products of another type yield zero.
pub fn determine_discount_percentage(product: Option<&Product>) -> Decimal {
    product
        .and_then(Product::as_mortgage)
        .map_or(Decimal::ZERO, discount_percentage)
}

/// Determines the discount percentage of a mortgage
///
/// Only a 360 month annuity mortgage qualifies, for `0.01 * 360 = 3.6`.
pub fn discount_percentage(mortgage: &MortgageProduct) -> Decimal {
    match mortgage.duration_in_months {
        Some(months)
            if mortgage.product_name == ELIGIBLE_PRODUCT_NAME
                && months == ELIGIBLE_DURATION_IN_MONTHS =>
        {
            DISCOUNT_PER_MONTH * Decimal::from(months)
        }
        _ => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn mortgage(name: &str, months: Option<u32>) -> MortgageProduct {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mortgage = MortgageProduct::new(name, start);
        match months {
            Some(months) => mortgage.with_duration_in_months(months),
            None => mortgage,
        }
    }

    #[test]
    fn test_annuity_of_360_months() {
        assert_eq!(discount_percentage(&mortgage("ANNUITY", Some(360))), dec!(3.6));
    }

    #[test]
    fn test_name_match_is_case_sensitive() {
        assert_eq!(discount_percentage(&mortgage("Annuity", Some(360))), Decimal::ZERO);
    }

    #[test]
    fn test_missing_duration() {
        assert_eq!(discount_percentage(&mortgage("ANNUITY", None)), Decimal::ZERO);
    }

    #[test]
    fn test_duration_must_match_exactly() {
        assert_eq!(discount_percentage(&mortgage("ANNUITY", Some(361))), Decimal::ZERO);
    }
}
