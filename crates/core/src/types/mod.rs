//! Core types for Foodie.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod status;

pub use id::*;
pub use money::display_usd;
pub use status::{OrderStatus, StatusView};
