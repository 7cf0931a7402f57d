//! The cart: an ordered collection of selected menu items.
//!
//! A cart belongs to exactly one active session and is passed explicitly to
//! every caller; there is no shared global cart. Two entries occupy the same
//! *slot* iff their item id and option selections are equal; the same item
//! with different customizations is a distinct slot.
//!
//! The cart never caches totals. Callers recompute them from [`CartStore::snapshot`]
//! via [`crate::pricing::compute_totals`] on every read.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{ItemId, SlotId};

/// Option selections chosen for a customizable item, e.g.
/// `{"Size": "Large", "Crust": "Thin"}`.
///
/// Backed by a `BTreeMap` so equality and hashing are canonical: two
/// selections with the same entries compare equal regardless of the order
/// they were added in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionSelections(BTreeMap<String, String>);

impl OptionSelections {
    /// An empty selection (non-customized item).
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Record the chosen choice for an option group, replacing any previous
    /// choice for that group.
    pub fn select(&mut self, group: impl Into<String>, choice: impl Into<String>) {
        self.0.insert(group.into(), choice.into());
    }

    /// Returns `true` if no options were selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(group, choice)` pairs in canonical (key) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Deterministic encoding of the selections, e.g. `"Crust=Thin;Size=Large"`.
    ///
    /// Suitable for keys and display; independent of insertion order.
    #[must_use]
    pub fn canonical_key(&self) -> String {
        let mut out = String::new();
        for (group, choice) in &self.0 {
            if !out.is_empty() {
                out.push(';');
            }
            out.push_str(group);
            out.push('=');
            out.push_str(choice);
        }
        out
    }
}

impl FromIterator<(String, String)> for OptionSelections {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One priced line of a cart or order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Catalog id of the menu item.
    pub item_id: ItemId,
    /// Display name at the time the item was added.
    pub name: String,
    /// Unit price at the time the item was added. Non-negative.
    pub unit_price: Decimal,
    /// Number of units. At least 1 while the item is in a cart.
    pub quantity: u32,
    /// Chosen customizations, possibly empty.
    #[serde(default)]
    pub options: OptionSelections,
}

impl LineItem {
    /// `unit_price * quantity`, exact.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    fn same_slot(&self, other: &Self) -> bool {
        self.item_id == other.item_id && self.options == other.options
    }
}

/// A cart entry with its stable slot id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSlot {
    /// Stable identifier for this slot within the cart.
    pub id: SlotId,
    /// The item occupying the slot.
    pub item: LineItem,
}

/// Ordered collection of cart slots, unique by item id + option selections.
///
/// Invariant: no slot with `quantity == 0` persists; a decrement to zero
/// removes the slot. Mutations are applied sequentially relative to the
/// caller, so no partial updates are observable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartStore {
    slots: Vec<CartSlot>,
    next_slot: u64,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_slot: 0,
        }
    }

    /// Add an item to the cart.
    ///
    /// If a slot with the same identity (item id + options) exists, its
    /// quantity is incremented by `item.quantity`; otherwise a new slot is
    /// appended. Returns the id of the affected slot.
    ///
    /// Input is assumed pre-validated at the caller boundary:
    /// `item.quantity >= 1` and `item.unit_price >= 0`.
    pub fn add_item(&mut self, item: LineItem) -> SlotId {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.item.same_slot(&item)) {
            slot.item.quantity += item.quantity;
            return slot.id;
        }
        let id = SlotId::new(self.next_slot);
        self.next_slot += 1;
        self.slots.push(CartSlot { id, item });
        id
    }

    /// Replace the quantity of a slot.
    ///
    /// A quantity of `0` removes the slot, exactly like [`Self::remove_item`].
    /// Unknown slot ids are ignored.
    pub fn set_quantity(&mut self, slot: SlotId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(slot);
            return;
        }
        if let Some(entry) = self.slots.iter_mut().find(|s| s.id == slot) {
            entry.item.quantity = quantity;
        }
    }

    /// Remove a slot from the cart. A no-op if the slot is absent.
    pub fn remove_item(&mut self, slot: SlotId) {
        self.slots.retain(|s| s.id != slot);
    }

    /// An ordered copy of the current line items, for pricing or for
    /// persisting into an order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<LineItem> {
        self.slots.iter().map(|s| s.item.clone()).collect()
    }

    /// The current slots with their ids, in insertion order.
    #[must_use]
    pub fn slots(&self) -> &[CartSlot] {
        &self.slots
    }

    /// Number of distinct slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the cart has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Total number of units across all slots (the cart badge count).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.slots.iter().map(|s| s.item.quantity).sum()
    }
}
