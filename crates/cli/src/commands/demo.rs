//! The full mocked order flow, end to end.
//!
//! Builds a cart from a sample menu, computes totals, validates a checkout
//! form, places the order, drives a scripted status feed (including one
//! out-of-order update that the state machine rejects), and finally reorders
//! from the finished order.

use foodie_core::{
    Catalog, CheckoutForm, ItemId, MenuIndex, Order, OrderStatus, OrderStore, PaymentMethod,
    RestaurantId, catalog::{MenuItem, OptionChoice, OptionGroup, OptionGroupKind},
    compute_totals, display_usd, reorder, CartStore, OptionSelections,
};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::config::{self, ConfigError};
use crate::store::InMemoryOrderStore;

/// Errors that can occur while running the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A sample item was missing from the sample menu.
    #[error(transparent)]
    Catalog(#[from] foodie_core::ItemNotFoundError),

    /// The demo checkout form failed validation.
    #[error("demo checkout form invalid: {0:?}")]
    Checkout(Vec<foodie_core::ValidationError>),
}

/// The Pizza Heaven sample menu, indexed once.
fn sample_catalog() -> MenuIndex {
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
                    label: "Crust".to_owned(),
                    kind: OptionGroupKind::Radio,
                    choices: vec![
                        OptionChoice {
                            name: "Classic".to_owned(),
                            price_change: None,
                        },
                        OptionChoice {
                            name: "Thin".to_owned(),
                            price_change: None,
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
                description: Some("Refreshing Coca-Cola.".to_owned()),
                price: Decimal::new(250, 2),
                customizable: false,
                option_groups: Vec::new(),
            }],
        ),
    ])
}

fn sample_checkout_form() -> CheckoutForm {
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
        delivery_instructions: Some("Leave at front door.".to_owned()),
    }
}

/// Apply one status-feed event, logging rejected updates instead of failing.
///
/// Accepted updates are logged with the customer-facing tracker copy.
fn apply_feed_event(order: &mut Order, next: OrderStatus) {
    match order.apply_transition(next) {
        Ok(()) => tracing::info!(
            order = %order.order_number,
            status = %order.status,
            label = order.status.label(),
            "{}",
            order.status.description()
        ),
        Err(e) => tracing::warn!(order = %order.order_number, "Dropped stale status update: {e}"),
    }
}

/// Run the demo flow.
///
/// # Errors
///
/// Returns [`DemoError`] if configuration, catalog resolution, or the demo
/// checkout form fail; all of these indicate a broken fixture, not user input.
pub fn run() -> Result<(), DemoError> {
    let pricing = config::load_pricing()?;
    let catalog = sample_catalog();
    let mut orders = InMemoryOrderStore::new();

    // Build the cart the way the menu page would: resolve ids through the
    // catalog, then hand priceable line items to the store.
    let mut cart = CartStore::new();
    let pizza = catalog.find_item(&ItemId::new("p1"))?;
    cart.add_item(pizza.to_line_item(1, OptionSelections::new()));
    let coke = catalog.find_item(&ItemId::new("d1"))?;
    cart.add_item(coke.to_line_item(2, OptionSelections::new()));

    let totals = compute_totals(&cart.snapshot(), &pricing);
    tracing::info!(
        subtotal = %display_usd(totals.subtotal),
        tax = %display_usd(totals.tax_amount),
        delivery_fee = %display_usd(totals.delivery_fee),
        total = %display_usd(totals.total),
        "Cart priced"
    );

    let validated =
        foodie_core::checkout::validate(&sample_checkout_form()).map_err(DemoError::Checkout)?;
    tracing::info!(customer = %validated.full_name, "Checkout form valid");

    let mut order = orders.create_order(
        RestaurantId::new("1"),
        "Pizza Heaven",
        cart.snapshot(),
        &totals,
    );
    tracing::info!(order = %order.order_number, total = %display_usd(order.total_amount), "Order placed");

    // Scripted status feed, applied in arrival order. The second CONFIRMED
    // is stale and must be dropped by the transition guard.
    for next in [
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Confirmed,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ] {
        apply_feed_event(&mut order, next);
    }

    // Reorder from the delivered order: quantities and historical prices
    // carry over into a fresh cart.
    let again = reorder::from_order(&order);
    let again_totals = compute_totals(&again.snapshot(), &pricing);
    tracing::info!(
        items = again.item_count(),
        total = %display_usd(again_totals.total),
        "Reorder cart ready"
    );

    Ok(())
}
