//! In-memory order store backing the demo flow.

use std::collections::HashMap;

use chrono::Utc;
use foodie_core::{
    LineItem, Order, OrderId, OrderStatus, OrderStore, RestaurantId, Totals,
};

const FIRST_ORDER_NUMBER: u32 = 1001;

/// Keeps orders in a map and hands out sequential `ORD1001`-style numbers.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: HashMap<OrderId, Order>,
    placed: u32,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
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
            order_number: format!("ORD{}", FIRST_ORDER_NUMBER + self.placed),
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
