//! Pure order total computation.
//!
//! Totals are derived, never stored: recompute from the current cart on
//! every read. All arithmetic is exact [`Decimal`]; rounding to currency
//! precision happens only at display via [`crate::types::money::display_usd`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::LineItem;

/// Pricing parameters supplied by configuration, not computed by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    /// Tax rate as a decimal fraction, e.g. `0.08` for 8%.
    pub tax_rate: Decimal,
    /// Flat delivery fee charged on any non-empty cart.
    pub flat_delivery_fee: Decimal,
}

/// Derived cart totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum of line totals.
    pub subtotal: Decimal,
    /// `subtotal * tax_rate`.
    pub tax_amount: Decimal,
    /// Flat fee, or zero for an empty cart.
    pub delivery_fee: Decimal,
    /// `subtotal + tax_amount + delivery_fee`.
    pub total: Decimal,
}

/// Compute totals for a set of line items.
///
/// Pure: calling twice on the same input returns bit-identical results.
#[must_use]
pub fn compute_totals(items: &[LineItem], config: &PricingConfig) -> Totals {
    let subtotal: Decimal = items.iter().map(LineItem::line_total).sum();
    let tax_amount = subtotal * config.tax_rate;
    let delivery_fee = if items.is_empty() {
        Decimal::ZERO
    } else {
        config.flat_delivery_fee
    };
    let total = subtotal + tax_amount + delivery_fee;

    Totals {
        subtotal,
        tax_amount,
        delivery_fee,
        total,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::OptionSelections;
    use crate::types::ItemId;

    fn config() -> PricingConfig {
        PricingConfig {
            tax_rate: Decimal::new(8, 2),
            flat_delivery_fee: Decimal::new(500, 2),
        }
    }

    fn item(id: &str, unit_price: Decimal, quantity: u32) -> LineItem {
        LineItem {
            item_id: ItemId::new(id),
            name: id.to_owned(),
            unit_price,
            quantity,
            options: OptionSelections::new(),
        }
    }

    #[test]
    fn test_sample_cart_totals() {
        // Margherita Pizza 12.99 x1 + Coke 2.50 x2, 8% tax, $5.00 fee
        let items = vec![
            item("p1", Decimal::new(1299, 2), 1),
            item("d1", Decimal::new(250, 2), 2),
        ];

        let totals = compute_totals(&items, &config());

        assert_eq!(totals.subtotal, Decimal::new(1799, 2));
        assert_eq!(totals.tax_amount, Decimal::new(1_4392, 4));
        assert_eq!(totals.delivery_fee, Decimal::new(500, 2));
        assert_eq!(totals.total, Decimal::new(24_4292, 4));
        assert_eq!(crate::types::display_usd(totals.total), "$24.43");
    }

    #[test]
    fn test_empty_cart_has_no_delivery_fee() {
        let totals = compute_totals(&[], &config());

        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.tax_amount, Decimal::ZERO);
        assert_eq!(totals.delivery_fee, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn test_idempotent_on_unchanged_input() {
        let items = vec![item("p1", Decimal::new(1299, 2), 1)];

        let first = compute_totals(&items, &config());
        let second = compute_totals(&items, &config());

        assert_eq!(first, second);
    }

    #[test]
    fn test_subtotal_monotone_in_quantity() {
        let mut previous = Decimal::MIN;
        for quantity in 1..=20 {
            let items = vec![item("p1", Decimal::new(1299, 2), quantity)];
            let totals = compute_totals(&items, &config());
            assert!(totals.subtotal > previous);
            previous = totals.subtotal;
        }
    }

    #[test]
    fn test_zero_priced_item_still_charges_fee() {
        let items = vec![item("free", Decimal::ZERO, 3)];
        let totals = compute_totals(&items, &config());

        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.delivery_fee, Decimal::new(500, 2));
        assert_eq!(totals.total, Decimal::new(500, 2));
    }
}
