//! Common utility functions for tax calculations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-to-even
/// (banker's) rounding.
///
/// Values sitting exactly on a half cent go to the neighbouring even cent,
/// so `0.005` becomes `0.00` and `0.015` becomes `0.02`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_to_cents;
///
/// assert_eq!(round_to_cents(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_to_cents(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_to_cents(dec!(123.465)), dec!(123.46));
/// assert_eq!(round_to_cents(dec!(-0.125)), dec!(-0.12));
/// ```
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_to_cents_rounds_down_below_midpoint() {
        assert_eq!(round_to_cents(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn round_to_cents_rounds_up_above_midpoint() {
        assert_eq!(round_to_cents(dec!(123.456)), dec!(123.46));
    }

    #[test]
    fn round_to_cents_midpoint_goes_to_even_neighbour() {
        assert_eq!(round_to_cents(dec!(0.005)), dec!(0.00));
        assert_eq!(round_to_cents(dec!(0.015)), dec!(0.02));
        assert_eq!(round_to_cents(dec!(0.025)), dec!(0.02));
        assert_eq!(round_to_cents(dec!(1082.505)), dec!(1082.50));
    }

    #[test]
    fn round_to_cents_handles_negative_midpoint() {
        assert_eq!(round_to_cents(dec!(-123.455)), dec!(-123.46));
        assert_eq!(round_to_cents(dec!(-123.445)), dec!(-123.44));
    }

    #[test]
    fn round_to_cents_preserves_already_rounded_values() {
        assert_eq!(round_to_cents(dec!(123.45)), dec!(123.45));
        assert_eq!(round_to_cents(Decimal::ZERO), dec!(0.00));
    }

    #[test]
    fn round_to_cents_carries_into_whole_units() {
        assert_eq!(round_to_cents(dec!(999999.999)), dec!(1000000.00));
    }
}
