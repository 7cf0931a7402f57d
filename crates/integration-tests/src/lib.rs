//! Integration tests for Foodie.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p foodie-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout_flow` - cart pricing, form validation, order creation
//! - `order_lifecycle` - status feed application and transition guards
//! - `reorder_flow` - rebuilding carts from historical orders
//!
//! The [`TestContext`] wires the core to mocked collaborators: an indexed
//! sample catalog and an in-memory order store.

use std::collections::HashMap;

use chrono::Utc;
use foodie_core::catalog::{MenuItem, OptionChoice, OptionGroup, OptionGroupKind};
use foodie_core::{
    CartStore, CheckoutForm, ItemId, LineItem, MenuIndex, OptionSelections, Order, OrderId,
    OrderStatus, OrderStore, PaymentMethod, PricingConfig, RestaurantId, Totals,
};
use rust_decimal::Decimal;

/// Mocked collaborators for a test session.
pub struct TestContext {
    pub catalog: MenuIndex,
    pub orders: InMemoryOrderStore,
    pub pricing: PricingConfig,
}

impl TestContext {
    /// A context over the Pizza Heaven sample menu with the standard
    /// 8% tax / $5.00 fee pricing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: sample_catalog(),
            orders: InMemoryOrderStore::default(),
            pricing: PricingConfig {
                tax_rate: Decimal::new(8, 2),
                flat_delivery_fee: Decimal::new(500, 2),
            },
        }
    }

    /// The standard sample cart: one Margherita Pizza and two Cokes.
    #[must_use]
    pub fn sample_cart(&self) -> CartStore {
        let mut cart = CartStore::new();
        cart.add_item(line_item("p1", "Margherita Pizza", Decimal::new(1299, 2), 1));
        cart.add_item(line_item("d1", "Coke", Decimal::new(250, 2), 2));
        cart
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a plain line item fixture.
#[must_use]
pub fn line_item(id: &str, name: &str, unit_price: Decimal, quantity: u32) -> LineItem {
    LineItem {
        item_id: ItemId::new(id),
        name: name.to_owned(),
        unit_price,
        quantity,
        options: OptionSelections::new(),
    }
}

/// A checkout form that passes every rule (cash payment).
#[must_use]
pub fn valid_checkout_form() -> CheckoutForm {
    CheckoutForm {
        full_name: "John Doe".to_owned(),
        street_address: "123 Main St".to_owned(),
        city: "Anytown".to_owned(),
        postal_code: "12345".to_owned(),
        phone_number: "+12345678900".to_owned(),
        payment_method: Some(PaymentMethod::Cash),
        card_number: None,
        expiry_date: None,
        cvv: None,
        delivery_instructions: None,
    }
}

fn sample_catalog() -> MenuIndex {
    MenuIndex::from_menu([
        (
            "Pizzas".to_owned(),
            vec![
                MenuItem {
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
                },
                MenuItem {
                    id: ItemId::new("p2"),
                    name: "Pepperoni Pizza".to_owned(),
                    description: Some("Loaded with pepperoni.".to_owned()),
                    price: Decimal::new(1499, 2),
                    customizable: true,
                    option_groups: Vec::new(),
                },
            ],
        ),
        (
            "Drinks".to_owned(),
            vec![MenuItem {
                id: ItemId::new("d1"),
                name: "Coke".to_owned(),
                description: Some("Refreshing Coca-Cola.".to_owned()),
                price: Decimal::new(250, 2),
                customizable: false,
                option_groups: Vec::new(),
            }],
        ),
    ])
}

/// In-memory [`OrderStore`] test double with sequential order numbers.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: HashMap<OrderId, Order>,
    placed: u32,
}

impl OrderStore for InMemoryOrderStore {
    fn create_order(
        &mut self,
        restaurant: RestaurantId,
        restaurant_name: &str,
        items: Vec<LineItem>,
        totals: &Totals,
    ) -> Order {
        let order = Order {
            id: OrderId::generate(),
            order_number: format!("ORD{}", 1001 + self.placed),
            placed_at: Utc::now(),
            restaurant,
            restaurant_name: restaurant_name.to_owned(),
            status: OrderStatus::Pending,
            items,
            total_amount: totals.total,
        };
        self.placed += 1;
        self.orders.insert(order.id, order.clone());
        order
    }

    fn load_order(&self, id: OrderId) -> Option<Order> {
        self.orders.get(&id).cloned()
    }
}
