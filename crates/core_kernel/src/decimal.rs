//! Decimal arithmetic helpers
//!
//! This module provides the small set of comparison, capping and rounding
//! operations every discount rule is written in terms of. All of them work
//! on `rust_decimal::Decimal`, never on floating point, and all of them are
//! total: no input makes them fail or panic.

use std::num::NonZeroU32;

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounding strategy used for every rounding step: halfway values move
/// away from zero (`2.5 -> 3`, `-2.5 -> -3`).
pub const HALF_UP: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Extension operations on `Decimal`
///
/// # Example
///
/// ```rust
/// use core_kernel::DecimalExt;
/// use rust_decimal_macros::dec;
/// use std::num::NonZeroU32;
///
/// let hundred = NonZeroU32::new(100).unwrap();
/// let amount = dec!(1250.40)
///     .maximize_at(dec!(1000))
///     .round_up()
///     .divide_by(hundred)
///     .multiply_by(Some(dec!(3.6)));
///
/// assert_eq!(amount, dec!(36));
/// ```
pub trait DecimalExt: Sized {
    /// Returns true if the value is greater than or equal to `threshold`
    fn is_at_least(&self, threshold: Decimal) -> bool;

    /// Caps the value at `cap`
    fn maximize_at(self, cap: Decimal) -> Decimal;

    /// Rounds to zero decimal places using round-half-up
    fn round_up(self) -> Decimal;

    /// Divides by `divisor`, rounding the quotient to zero decimal places
    /// using round-half-up
    fn divide_by(self, divisor: NonZeroU32) -> Decimal;

    /// Multiplies by `factor`; an absent factor acts as the neutral `1`
    fn multiply_by(self, factor: Option<Decimal>) -> Decimal;
}

impl DecimalExt for Decimal {
    fn is_at_least(&self, threshold: Decimal) -> bool {
        *self >= threshold
    }

    fn maximize_at(self, cap: Decimal) -> Decimal {
        self.min(cap)
    }

    fn round_up(self) -> Decimal {
        self.round_dp_with_strategy(0, HALF_UP)
    }

    fn divide_by(self, divisor: NonZeroU32) -> Decimal {
        (self / Decimal::from(divisor.get())).round_dp_with_strategy(0, HALF_UP)
    }

    fn multiply_by(self, factor: Option<Decimal>) -> Decimal {
        factor.unwrap_or(Decimal::ONE) * self
    }
}
