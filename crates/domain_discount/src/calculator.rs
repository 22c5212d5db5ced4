//! Final discount calculation
//!
//! Turns the aggregated yearly commission and discount percentage into a
//! discount amount.

use std::num::NonZeroU32;

use core_kernel::DecimalExt;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Commission (inclusive) below which no discount is granted
pub const MINIMUM_COMMISSION: Decimal = dec!(50);

/// Commission above this amount is capped
pub const MAXIMUM_COMMISSION: Decimal = dec!(1000);

/// Divisor turning the commission into the base one percentage point applies to
pub const COMMISSION_DIVISOR: NonZeroU32 = match NonZeroU32::new(100) {
    Some(divisor) => divisor,
    None => panic!("commission divisor must be non-zero"),
};

/// Calculates the discount amount
///
/// The commission is capped at [`MAXIMUM_COMMISSION`], rounded to whole
/// units, divided by 100 (rounded half-up again) and multiplied by the
/// percentage. The product is not rounded further.
///
/// # Arguments
///
/// * `commission` - Total yearly commission; absent means no discount
/// * `percentage` - Total discount percentage; absent acts as `1`
///
/// # Returns
///
/// The discount amount, zero when the commission is absent or below
/// [`MINIMUM_COMMISSION`]
///
/// # Example
///
/// ```rust
/// use domain_discount::calculator::calculate_discount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(calculate_discount(Some(dec!(500)), Some(dec!(3.6))), dec!(18));
/// assert_eq!(calculate_discount(Some(dec!(49.99)), Some(dec!(3))), dec!(0));
/// ```
pub fn calculate_discount(commission: Option<Decimal>, percentage: Option<Decimal>) -> Decimal {
    commission
        .filter(|commission| commission.is_at_least(MINIMUM_COMMISSION))
        .map(|commission| {
            commission
                .maximize_at(MAXIMUM_COMMISSION)
                .round_up()
                .divide_by(COMMISSION_DIVISOR)
                .multiply_by(percentage)
        })
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_commission() {
        assert_eq!(calculate_discount(None, Some(dec!(3))), Decimal::ZERO);
    }

    #[test]
    fn test_commission_floor_is_inclusive() {
        assert_eq!(calculate_discount(Some(dec!(50)), Some(dec!(3))), dec!(3));
        assert_eq!(calculate_discount(Some(dec!(49.99)), Some(dec!(3))), Decimal::ZERO);
    }

    #[test]
    fn test_commission_is_capped() {
        assert_eq!(calculate_discount(Some(dec!(1500)), Some(dec!(1))), dec!(10));
        assert_eq!(
            calculate_discount(Some(dec!(1000)), Some(dec!(3.6))),
            calculate_discount(Some(dec!(25000)), Some(dec!(3.6)))
        );
    }

    #[test]
    fn test_base_is_rounded_half_up() {
        // 149.5 -> 150 -> 1.5 -> 2
        assert_eq!(calculate_discount(Some(dec!(149.5)), Some(dec!(1))), dec!(2));
        // 149.4 -> 149 -> 1.49 -> 1
        assert_eq!(calculate_discount(Some(dec!(149.4)), Some(dec!(1))), dec!(1));
    }

    #[test]
    fn test_absent_percentage_is_neutral() {
        assert_eq!(calculate_discount(Some(dec!(500)), None), dec!(5));
    }

    #[test]
    fn test_result_is_not_rounded_after_multiply() {
        assert_eq!(calculate_discount(Some(dec!(100)), Some(dec!(3.6))), dec!(3.6));
    }
}
