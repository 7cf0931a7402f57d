//! Foodie Core - Cart, pricing, checkout and order-lifecycle logic.
//!
//! This crate is the business core behind the Foodie ordering flow:
//!
//! - [`cart`] - the mutable cart of selected menu items
//! - [`pricing`] - pure subtotal/tax/fee/total computation
//! - [`checkout`] - delivery-address and payment form validation
//! - [`order`] - placed orders and their status state machine
//! - [`reorder`] - turning a historical order back into a cart
//! - [`catalog`] - traits for the external catalog and order store
//!
//! # Architecture
//!
//! The core is synchronous and side-effect free: no I/O, no database access,
//! no HTTP clients. Rendering layers call in, mutate a cart or apply a status
//! update, and display whatever comes back. Every expected business failure
//! is a typed `Result` error, never a panic.
//!
//! Totals are derived, never stored: callers recompute them from the current
//! cart on every read via [`pricing::compute_totals`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod order;
pub mod pricing;
pub mod reorder;
pub mod types;

pub use cart::{CartStore, LineItem, OptionSelections};
pub use catalog::{Catalog, ItemNotFoundError, MenuIndex, MenuItem, OrderStore};
pub use checkout::{CheckoutForm, PaymentMethod, ValidatedForm, ValidationError};
pub use order::{InvalidTransitionError, Order};
pub use pricing::{PricingConfig, Totals, compute_totals};
pub use reorder::from_order;
pub use types::*;
