//! Re-ordering: turn a historical order back into a fresh cart.

use crate::cart::CartStore;
use crate::order::Order;

/// Build a fresh cart from a past order.
///
/// Every historical line item becomes a new slot with its id, name, options
/// and historical quantity preserved. Unit prices are carried over as they
/// were at purchase time and are deliberately not re-resolved against the
/// catalog; callers integrating a live catalog should re-price the cart
/// before confirming.
#[must_use]
pub fn from_order(order: &Order) -> CartStore {
    let mut cart = CartStore::new();
    for item in &order.items {
        cart.add_item(item.clone());
    }
    cart
}
