//! Placed orders and status transitions.
//!
//! An order is created once, at checkout submission. Its items and total are
//! immutable snapshots of the cart at that moment; only `status` changes
//! afterwards, exclusively through [`Order::apply_transition`]. Status-feed
//! updates arrive asynchronously from an external collaborator and are
//! applied in arrival order; an update that would repeat or regress the
//! status is rejected and dropped, never silently applied.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::LineItem;
use crate::types::{OrderId, OrderStatus, RestaurantId};

/// A status update that violates the transition table.
///
/// Recoverable: the caller drops the update and keeps the prior status,
/// logging it for operator visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid order status transition: {from} -> {to}")]
pub struct InvalidTransitionError {
    /// Status the order held when the update arrived.
    pub from: OrderStatus,
    /// The rejected target status.
    pub to: OrderStatus,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// Customer-facing order number, e.g. `ORD1001`.
    pub order_number: String,
    pub placed_at: DateTime<Utc>,
    pub restaurant: RestaurantId,
    pub restaurant_name: String,
    pub status: OrderStatus,
    /// Snapshot of the cart at submission time. Immutable.
    pub items: Vec<LineItem>,
    /// Snapshot of the cart total at submission time. Immutable.
    pub total_amount: Decimal,
}

impl Order {
    /// Apply a status update from the feed.
    ///
    /// The update is applied only if `self.status -> next` is a valid edge of
    /// the transition table; otherwise the order is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransitionError`] for same-state repeats, backward or
    /// skipping edges, and any update to an order in a terminal status.
    pub fn apply_transition(&mut self, next: OrderStatus) -> Result<(), InvalidTransitionError> {
        if self.status.can_transition_to(next) {
            self.status = next;
            Ok(())
        } else {
            Err(InvalidTransitionError {
                from: self.status,
                to: next,
            })
        }
    }

    /// Request cancellation.
    ///
    /// Cancellation is an ordinary transition subject to the same guard, so
    /// it is rejected once the order is out for delivery or terminal.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransitionError`] when the order can no longer be
    /// cancelled.
    pub fn cancel(&mut self) -> Result<(), InvalidTransitionError> {
        self.apply_transition(OrderStatus::Cancelled)
    }

    /// Whether the order still appears under the "active orders" tab.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }
}
