//! External collaborator interfaces: catalog lookup and order persistence.
//!
//! The core consumes these but does not implement transport for them. The
//! one concrete type here, [`MenuIndex`], is an id-keyed index built once
//! per catalog load so that resolving an item is a map lookup rather than a
//! scan over every menu category on every cart mutation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::cart::{LineItem, OptionSelections};
use crate::order::Order;
use crate::pricing::Totals;
use crate::types::{ItemId, OrderId, RestaurantId};

/// Catalog lookup miss.
///
/// Recoverable: the UI refuses to add the item and explains why.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("menu item not found: {0}")]
pub struct ItemNotFoundError(pub ItemId);

/// How an option group is presented: pick exactly one, or any number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionGroupKind {
    Radio,
    Checkbox,
}

/// One selectable choice within an option group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionChoice {
    pub name: String,
    /// Price delta applied to the unit price when chosen.
    #[serde(default)]
    pub price_change: Option<Decimal>,
}

/// A customization group offered by a menu item, e.g. "Size" or "Toppings".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionGroup {
    pub label: String,
    pub kind: OptionGroupKind,
    pub choices: Vec<OptionChoice>,
}

/// A catalog entry as served by the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub customizable: bool,
    #[serde(default)]
    pub option_groups: Vec<OptionGroup>,
}

impl MenuItem {
    /// Resolve this catalog entry into a priceable cart line.
    ///
    /// Selected choices that carry a price change adjust the unit price;
    /// selections naming unknown groups or choices contribute nothing.
    #[must_use]
    pub fn to_line_item(&self, quantity: u32, options: OptionSelections) -> LineItem {
        let mut unit_price = self.price;
        for (group, choice) in options.iter() {
            let delta = self
                .option_groups
                .iter()
                .find(|g| g.label == group)
                .and_then(|g| g.choices.iter().find(|c| c.name == choice))
                .and_then(|c| c.price_change);
            if let Some(delta) = delta {
                unit_price += delta;
            }
        }

        LineItem {
            item_id: self.id.clone(),
            name: self.name.clone(),
            unit_price,
            quantity,
            options,
        }
    }
}

/// Catalog lookup, used by the cart's caller to resolve an id into a
/// priceable [`LineItem`] before calling [`crate::CartStore::add_item`].
pub trait Catalog {
    /// Look up a menu item by id.
    ///
    /// # Errors
    ///
    /// Returns [`ItemNotFoundError`] if the catalog has no such item.
    fn find_item(&self, id: &ItemId) -> Result<&MenuItem, ItemNotFoundError>;
}

/// Order persistence, used at checkout submission and by reorder.
pub trait OrderStore {
    /// Persist a new order from a cart snapshot and its totals.
    fn create_order(
        &mut self,
        restaurant: RestaurantId,
        restaurant_name: &str,
        items: Vec<LineItem>,
        totals: &Totals,
    ) -> Order;

    /// Load a previously created order.
    fn load_order(&self, id: OrderId) -> Option<Order>;
}

/// An id-keyed index over a restaurant's menu.
///
/// Built once per catalog load from `(category, items)` pairs; lookups are
/// O(1) afterwards. Category membership is irrelevant to resolution, so it
/// is not retained.
#[derive(Debug, Clone, Default)]
pub struct MenuIndex {
    by_id: HashMap<ItemId, MenuItem>,
}

impl MenuIndex {
    /// Build the index from a menu organized by category.
    ///
    /// Later duplicates of an id replace earlier ones.
    #[must_use]
    pub fn from_menu<C, I>(menu: C) -> Self
    where
        C: IntoIterator<Item = (String, I)>,
        I: IntoIterator<Item = MenuItem>,
    {
        let by_id = menu
            .into_iter()
            .flat_map(|(_, items)| items)
            .map(|item| (item.id.clone(), item))
            .collect();
        Self { by_id }
    }

    /// Number of indexed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns `true` if the index holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl Catalog for MenuIndex {
    fn find_item(&self, id: &ItemId) -> Result<&MenuItem, ItemNotFoundError> {
        self.by_id.get(id).ok_or_else(|| ItemNotFoundError(id.clone()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_menu() -> MenuIndex {
        MenuIndex::from_menu([
            (
                "Pizzas".to_owned(),
                vec![MenuItem {
                    id: ItemId::new("p1"),
                    name: "Margherita Pizza".to_owned(),
                    description: Some("Classic cheese and tomato.".to_owned()),
                    price: Decimal::new(1299, 2),
                    customizable: true,
                    option_groups: vec![OptionGroup {
                        label: "Size".to_owned(),
                        kind: OptionGroupKind::Radio,
                        choices: vec![
                            OptionChoice {
                                name: "Regular".to_owned(),
                                price_change: None,
                            },
                            OptionChoice {
                                name: "Large".to_owned(),
                                price_change: Some(Decimal::new(300, 2)),
                            },
                        ],
                    }],
                }],
            ),
            (
                "Drinks".to_owned(),
                vec![MenuItem {
                    id: ItemId::new("d1"),
                    name: "Coke".to_owned(),
                    description: None,
                    price: Decimal::new(250, 2),
                    customizable: false,
                    option_groups: Vec::new(),
                }],
            ),
        ])
    }

    #[test]
    fn test_index_spans_all_categories() {
        let index = sample_menu();
        assert_eq!(index.len(), 2);
        assert!(index.find_item(&ItemId::new("p1")).is_ok());
        assert!(index.find_item(&ItemId::new("d1")).is_ok());
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let index = sample_menu();
        let err = index.find_item(&ItemId::new("x9")).unwrap_err();
        assert_eq!(err, ItemNotFoundError(ItemId::new("x9")));
        assert_eq!(err.to_string(), "menu item not found: x9");
    }

    #[test]
    fn test_to_line_item_applies_price_change() {
        let index = sample_menu();
        let item = index.find_item(&ItemId::new("p1")).unwrap();

        let mut options = OptionSelections::new();
        options.select("Size", "Large");
        let line = item.to_line_item(1, options);

        assert_eq!(line.unit_price, Decimal::new(1599, 2));
    }

    #[test]
    fn test_to_line_item_ignores_unknown_selection() {
        let index = sample_menu();
        let item = index.find_item(&ItemId::new("p1")).unwrap();

        let mut options = OptionSelections::new();
        options.select("Size", "Gigantic");
        let line = item.to_line_item(2, options);

        assert_eq!(line.unit_price, Decimal::new(1299, 2));
        assert_eq!(line.quantity, 2);
    }
}
