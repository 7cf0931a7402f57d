//! Display-time currency formatting.
//!
//! Amounts stay exact [`Decimal`]s everywhere inside the core; rounding to
//! currency precision happens only here, at the presentation boundary, so
//! chained recomputation never accumulates rounding drift.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount as a USD price string, e.g. `"$24.43"`.
///
/// Rounds to 2 decimal places, half-up.
#[must_use]
pub fn display_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rounds_half_up() {
        // 24.4292 -> $24.43
        assert_eq!(display_usd(Decimal::new(24_4292, 4)), "$24.43");
        // exact midpoint rounds away from zero
        assert_eq!(display_usd(Decimal::new(1_005, 3)), "$1.01");
    }

    #[test]
    fn test_display_pads_to_two_places() {
        assert_eq!(display_usd(Decimal::new(5, 0)), "$5.00");
        assert_eq!(display_usd(Decimal::ZERO), "$0.00");
    }
}
