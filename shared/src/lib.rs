//! Shared types for the storefront checkout core
//!
//! Common types used across crates: catalog models, cart line items,
//! order-level records, and the unified error model.

pub mod cart;
pub mod error;
pub mod models;
pub mod order;

// Re-exports
pub use cart::{LineItem, LineKey, ModifierSelection};
pub use error::{AppError, ErrorCode};
pub use order::{FulfillmentType, LineTotals, OrderTotals};
pub use serde::{Deserialize, Serialize};
