//! Order status and its state machine.
//!
//! Valid transitions (initial = `Pending`):
//!
//! ```text
//! PENDING          -> CONFIRMED | CANCELLED | FAILED
//! CONFIRMED        -> PREPARING | CANCELLED | FAILED
//! PREPARING        -> OUT_FOR_DELIVERY | CANCELLED | FAILED
//! OUT_FOR_DELIVERY -> DELIVERED | FAILED
//! DELIVERED        -> (terminal)
//! CANCELLED        -> (terminal)
//! FAILED           -> (terminal)
//! ```
//!
//! Terminality and valid edges are defined once here; call sites must not
//! re-derive them with ad hoc comparisons.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Waiting for the restaurant to confirm.
    #[default]
    Pending,
    /// Confirmed by the restaurant.
    Confirmed,
    /// The restaurant is preparing the order.
    Preparing,
    /// On its way to the customer.
    OutForDelivery,
    /// Delivered. Terminal.
    Delivered,
    /// Cancelled. Terminal.
    Cancelled,
    /// Failed. Terminal.
    Failed,
}

/// How a status should be rendered by a progress tracker.
///
/// Statuses on the canonical forward path map to a position on the progress
/// sequence; `Pending` and the abnormal terminal statuses are rendered as
/// distinct single-state views instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusView {
    /// Position on [`OrderStatus::PROGRESS_SEQUENCE`].
    Progress {
        /// Zero-based index into the progress sequence.
        index: usize,
    },
    /// Waiting for confirmation; not yet on the progress sequence.
    Pending,
    /// Cancelled single-state view.
    Cancelled,
    /// Failed single-state view.
    Failed,
}

impl OrderStatus {
    /// The canonical happy-path sequence rendered as a progress bar.
    pub const PROGRESS_SEQUENCE: [Self; 4] =
        [Self::Confirmed, Self::Preparing, Self::OutForDelivery, Self::Delivered];

    /// Returns `true` if no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled | Self::Failed)
    }

    /// Returns `true` if the edge `self -> next` is in the transition table.
    ///
    /// Same-state repeats and every edge out of a terminal state are invalid.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed | Self::Cancelled | Self::Failed)
                | (Self::Confirmed, Self::Preparing | Self::Cancelled | Self::Failed)
                | (Self::Preparing, Self::OutForDelivery | Self::Cancelled | Self::Failed)
                | (Self::OutForDelivery, Self::Delivered | Self::Failed)
        )
    }

    /// Zero-based position of this status on the progress sequence, if any.
    #[must_use]
    pub fn progress_index(self) -> Option<usize> {
        Self::PROGRESS_SEQUENCE.iter().position(|s| *s == self)
    }

    /// How a tracker should render this status.
    #[must_use]
    pub fn view(self) -> StatusView {
        match self {
            Self::Pending => StatusView::Pending,
            Self::Cancelled => StatusView::Cancelled,
            Self::Failed => StatusView::Failed,
            _ => self.progress_index().map_or(StatusView::Pending, |index| {
                StatusView::Progress { index }
            }),
        }
    }

    /// Short human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending Confirmation",
            Self::Confirmed => "Confirmed",
            Self::Preparing => "Preparing",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
            Self::Failed => "Failed",
        }
    }

    /// Customer-facing description of the status.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Pending => "Waiting for restaurant to confirm your order.",
            Self::Confirmed => "Your order has been confirmed by the restaurant.",
            Self::Preparing => "The restaurant is preparing your delicious meal.",
            Self::OutForDelivery => "Your order is on its way to you!",
            Self::Delivered => "Enjoy your meal! Your order has been delivered.",
            Self::Cancelled => "Your order has been cancelled.",
            Self::Failed => "There was an issue with your order. Please contact support.",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Preparing => "PREPARING",
            Self::OutForDelivery => "OUT_FOR_DELIVERY",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
            Self::Failed => "FAILED",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "PREPARING" => Ok(Self::Preparing),
            "OUT_FOR_DELIVERY" => Ok(Self::OutForDelivery),
            "DELIVERED" => Ok(Self::Delivered),
            "CANCELLED" => Ok(Self::Cancelled),
            "FAILED" => Ok(Self::Failed),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(OrderStatus::Failed.is_terminal());
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::OutForDelivery.is_terminal());
    }

    #[test]
    fn test_happy_path_edges() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Confirmed));
        assert!(OrderStatus::Confirmed.can_transition_to(OrderStatus::Preparing));
        assert!(OrderStatus::Preparing.can_transition_to(OrderStatus::OutForDelivery));
        assert!(OrderStatus::OutForDelivery.can_transition_to(OrderStatus::Delivered));
    }

    #[test]
    fn test_same_state_repeat_is_invalid() {
        assert!(!OrderStatus::Confirmed.can_transition_to(OrderStatus::Confirmed));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Pending));
    }

    #[test]
    fn test_no_backward_or_skip_edges() {
        assert!(!OrderStatus::Preparing.can_transition_to(OrderStatus::Confirmed));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Preparing));
        assert!(!OrderStatus::Confirmed.can_transition_to(OrderStatus::Delivered));
    }

    #[test]
    fn test_cancellation_window_closes_at_out_for_delivery() {
        assert!(OrderStatus::Preparing.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::OutForDelivery.can_transition_to(OrderStatus::Cancelled));
    }

    #[test]
    fn test_terminal_states_have_no_edges() {
        for from in [
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
            OrderStatus::Failed,
        ] {
            for to in [
                OrderStatus::Pending,
                OrderStatus::Confirmed,
                OrderStatus::Preparing,
                OrderStatus::OutForDelivery,
                OrderStatus::Delivered,
                OrderStatus::Cancelled,
                OrderStatus::Failed,
            ] {
                assert!(!from.can_transition_to(to), "{from} -> {to} should be invalid");
            }
        }
    }

    #[test]
    fn test_progress_index() {
        assert_eq!(OrderStatus::Confirmed.progress_index(), Some(0));
        assert_eq!(OrderStatus::Preparing.progress_index(), Some(1));
        assert_eq!(OrderStatus::OutForDelivery.progress_index(), Some(2));
        assert_eq!(OrderStatus::Delivered.progress_index(), Some(3));
        assert_eq!(OrderStatus::Pending.progress_index(), None);
        assert_eq!(OrderStatus::Cancelled.progress_index(), None);
    }

    #[test]
    fn test_views() {
        assert_eq!(
            OrderStatus::OutForDelivery.view(),
            StatusView::Progress { index: 2 }
        );
        assert_eq!(OrderStatus::Pending.view(), StatusView::Pending);
        assert_eq!(OrderStatus::Cancelled.view(), StatusView::Cancelled);
        assert_eq!(OrderStatus::Failed.view(), StatusView::Failed);
    }

    #[test]
    fn test_labels() {
        assert_eq!(OrderStatus::Pending.label(), "Pending Confirmation");
        assert_eq!(OrderStatus::Confirmed.label(), "Confirmed");
        assert_eq!(OrderStatus::Preparing.label(), "Preparing");
        assert_eq!(OrderStatus::OutForDelivery.label(), "Out for Delivery");
        assert_eq!(OrderStatus::Delivered.label(), "Delivered");
        assert_eq!(OrderStatus::Cancelled.label(), "Cancelled");
        assert_eq!(OrderStatus::Failed.label(), "Failed");
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            OrderStatus::Pending.description(),
            "Waiting for restaurant to confirm your order."
        );
        assert_eq!(
            OrderStatus::Confirmed.description(),
            "Your order has been confirmed by the restaurant."
        );
        assert_eq!(
            OrderStatus::Preparing.description(),
            "The restaurant is preparing your delicious meal."
        );
        assert_eq!(
            OrderStatus::OutForDelivery.description(),
            "Your order is on its way to you!"
        );
        assert_eq!(
            OrderStatus::Delivered.description(),
            "Enjoy your meal! Your order has been delivered."
        );
        assert_eq!(
            OrderStatus::Cancelled.description(),
            "Your order has been cancelled."
        );
        assert_eq!(
            OrderStatus::Failed.description(),
            "There was an issue with your order. Please contact support."
        );
    }

    #[test]
    fn test_serde_screaming_snake_case() {
        let json = serde_json::to_string(&OrderStatus::OutForDelivery).unwrap();
        assert_eq!(json, "\"OUT_FOR_DELIVERY\"");
        let parsed: OrderStatus = serde_json::from_str("\"PREPARING\"").unwrap();
        assert_eq!(parsed, OrderStatus::Preparing);
    }

    #[test]
    fn test_display_from_str_roundtrip() {
        let status: OrderStatus = "OUT_FOR_DELIVERY".parse().unwrap();
        assert_eq!(status, OrderStatus::OutForDelivery);
        assert_eq!(status.to_string(), "OUT_FOR_DELIVERY");
        assert!("SHIPPED".parse::<OrderStatus>().is_err());
    }
}
