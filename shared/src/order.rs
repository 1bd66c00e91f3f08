//! Order-level types
//!
//! Derived totals plus the structured records handed to the storage
//! collaborator at checkout. Totals are recomputed from cart state on
//! every read and never mutated in place.

use crate::cart::LineKey;
use serde::{Deserialize, Serialize};

/// Fulfillment classification attached to an order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FulfillmentType {
    /// Served at the counter / in store
    #[default]
    DineIn,
    /// Picked up by the customer
    Pickup,
    /// Delivered; requires an address
    Delivery,
}

/// Order-level money figures
///
/// `grand_total` is the tax-inclusive, discount-already-applied amount
/// the customer pays; `subtotal + tax == grand_total` exactly at two
/// decimal places. The split is computed from the grand total by the
/// remainder method and is intentionally *not* reconciled against the
/// sum of per-line splits (receipts show per-line figures, ledgers show
/// these; both are independently consistent).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Tax-exclusive portion of the grand total
    pub subtotal: f64,
    /// Tax portion (IGV)
    pub tax: f64,
    /// Sum of per-line discounts against catalog prices
    pub discount_total: f64,
    /// Amount charged, tax-inclusive
    pub grand_total: f64,
}

/// Per-line money figures, derived on demand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineTotals {
    /// Tax-inclusive line amount charged
    pub line_gross: f64,
    /// Tax-exclusive portion of `line_gross`
    pub line_subtotal: f64,
    /// Tax portion; `line_subtotal + line_tax == line_gross` exactly
    pub line_tax: f64,
    /// Discount against the catalog price, floored at zero
    pub line_discount: f64,
}

/// Checkout metadata supplied by the calling workflow
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderMeta {
    pub fulfillment: FulfillmentType,
    /// Delivery address; required when `fulfillment` is `Delivery`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Free-text note from the customer or cashier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Client reference, when the order is attached to a known client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
}

/// One persisted order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineRecord {
    pub product_id: String,
    /// Product name snapshot at checkout time
    pub product_name: String,
    pub quantity: i32,
    /// Effective unit price charged (modifiers excluded)
    pub unit_price: f64,
    /// Undiscounted catalog unit price
    pub original_unit_price: f64,
    pub line_gross: f64,
    pub line_subtotal: f64,
    pub line_tax: f64,
    pub line_discount: f64,
    pub salsa_ids: Vec<String>,
    pub extra_ids: Vec<String>,
    pub beverage_ids: Vec<String>,
    /// Cart line identity, kept for cross-referencing with UI state
    pub line_key: LineKey,
}

/// Structured order record handed to the storage collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
    /// Draft order id (`ORD-{millis}`); the storage collaborator may
    /// replace it with a durable identifier
    pub id: String,
    pub fulfillment: FulfillmentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    pub subtotal: f64,
    pub tax: f64,
    pub discount_total: f64,
    pub total: f64,
    pub lines: Vec<OrderLineRecord>,
    /// Creation timestamp, epoch milliseconds
    pub created_at: i64,
}
