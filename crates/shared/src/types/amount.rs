//! Amount rounding helpers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal`; ledger comparisons happen at
//! two-decimal precision so repeated arithmetic cannot produce false
//! imbalances.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to two decimal places (cents), half away from zero.
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds an amount to a whole currency unit, half away from zero.
///
/// Used for VAT settlement amounts, which are reported in whole units
/// with the fractional remainder booked to a rounding account.
#[must_use]
pub fn round_whole(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(1.005), dec!(1.01))]
    #[case(dec!(1.004), dec!(1.00))]
    #[case(dec!(-1.005), dec!(-1.01))]
    #[case(dec!(0), dec!(0.00))]
    #[case(dec!(100), dec!(100.00))]
    fn test_round_cents(#[case] input: Decimal, #[case] expected: Decimal) {
        assert_eq!(round_cents(input), expected);
    }

    #[rstest]
    #[case(dec!(12.49), dec!(12))]
    #[case(dec!(12.50), dec!(13))]
    #[case(dec!(-12.50), dec!(-13))]
    #[case(dec!(-12.49), dec!(-12))]
    fn test_round_whole(#[case] input: Decimal, #[case] expected: Decimal) {
        assert_eq!(round_whole(input), expected);
    }
}
