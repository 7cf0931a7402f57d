//! Rebuilding a cart from a historical order.

#![allow(clippy::unwrap_used)]

use foodie_core::{
    Catalog, ItemId, OrderStatus, OrderStore, RestaurantId, compute_totals, reorder,
};
use foodie_integration_tests::{TestContext, line_item};
use rust_decimal::Decimal;

#[test]
fn test_reorder_preserves_quantities() {
    let mut ctx = TestContext::new();
    let cart = ctx.sample_cart();
    let totals = compute_totals(&cart.snapshot(), &ctx.pricing);

    let mut order = ctx.orders.create_order(
        RestaurantId::new("1"),
        "Pizza Heaven",
        cart.snapshot(),
        &totals,
    );
    for next in [
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ] {
        order.apply_transition(next).unwrap();
    }

    let again = reorder::from_order(&order);
    let snapshot = again.snapshot();

    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].quantity, 1);
    assert_eq!(snapshot[1].quantity, 2);
}

#[test]
fn test_reorder_ignores_catalog_price_drift() {
    let mut ctx = TestContext::new();

    // An order placed when the pizza cost 10.99.
    let historical = vec![line_item("p1", "Margherita Pizza", Decimal::new(1099, 2), 1)];
    let totals = compute_totals(&historical, &ctx.pricing);
    let order = ctx
        .orders
        .create_order(RestaurantId::new("1"), "Pizza Heaven", historical, &totals);

    // The catalog now lists it at 12.99.
    let current = ctx.catalog.find_item(&ItemId::new("p1")).unwrap();
    assert_eq!(current.price, Decimal::new(1299, 2));

    let again = reorder::from_order(&order);

    assert_eq!(again.snapshot()[0].unit_price, Decimal::new(1099, 2));
}

#[test]
fn test_reorder_via_order_store_load() {
    let mut ctx = TestContext::new();
    let cart = ctx.sample_cart();
    let totals = compute_totals(&cart.snapshot(), &ctx.pricing);

    let placed = ctx.orders.create_order(
        RestaurantId::new("1"),
        "Pizza Heaven",
        cart.snapshot(),
        &totals,
    );

    // The orders page loads by id, then reorders.
    let loaded = ctx.orders.load_order(placed.id).unwrap();
    let again = reorder::from_order(&loaded);

    assert_eq!(again.item_count(), cart.item_count());
    let again_totals = compute_totals(&again.snapshot(), &ctx.pricing);
    assert_eq!(again_totals, totals);
}
