//! Common arithmetic helpers for tax calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero, following standard
/// financial conventions.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use timbre_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(2276400.004)), dec!(2276400.00));
/// assert_eq!(round_half_up(dec!(2276400.005)), dec!(2276400.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(636.184)), dec!(636.18));
    }

    #[test]
    fn rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(636.185)), dec!(636.19));
    }

    #[test]
    fn rounds_away_from_zero_for_negative_values() {
        assert_eq!(round_half_up(dec!(-636.185)), dec!(-636.19));
    }

    #[test]
    fn preserves_already_rounded_values() {
        assert_eq!(round_half_up(dec!(19085400)), dec!(19085400));
        assert_eq!(round_half_up(dec!(0.00)), dec!(0.00));
    }

    #[test]
    fn handles_high_precision_quotients() {
        // 1,000,000,000 / 42,412 carried to full precision, then rounded.
        let uvt = dec!(1000000000) / dec!(42412);
        assert_eq!(round_half_up(uvt), dec!(23578.23));
    }
}
