//! Checkout payload builder
//!
//! Serializes a cart snapshot plus order metadata into the structured
//! record handed to the storage collaborator. The builder never mutates
//! the cart; the calling workflow clears it only after the collaborator
//! reports success, so a failed persist leaves the session retryable.

use crate::cart::Cart;
use crate::error::CheckoutError;
use crate::pricing;
use crate::totals::compute_order_totals;
use shared::order::{FulfillmentType, OrderDraft, OrderLineRecord, OrderMeta};

/// Build the order record for a finalized cart
///
/// Rejects empty carts (checkout should already be disabled upstream) and
/// delivery orders without an address. Per-line figures are computed
/// independently of the order-level split, as persisted historically.
pub fn build_order_draft(
    cart: &Cart,
    tax_rate: f64,
    meta: OrderMeta,
) -> Result<OrderDraft, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    let address = normalize_text(meta.address);
    if meta.fulfillment == FulfillmentType::Delivery && address.is_none() {
        return Err(CheckoutError::MissingAddress);
    }

    let totals = compute_order_totals(cart, tax_rate)?;

    let mut lines = Vec::with_capacity(cart.len());
    for item in cart.items() {
        let line = pricing::line_totals(item, tax_rate)?;
        lines.push(OrderLineRecord {
            product_id: item.product_id.clone(),
            product_name: item.name.clone(),
            quantity: item.quantity,
            unit_price: item.effective_unit_price,
            original_unit_price: item.unit_base_price,
            line_gross: line.line_gross,
            line_subtotal: line.line_subtotal,
            line_tax: line.line_tax,
            line_discount: line.line_discount,
            salsa_ids: item.modifiers.salsas.clone(),
            extra_ids: item.modifiers.extras.iter().map(|m| m.id.clone()).collect(),
            beverage_ids: item
                .modifiers
                .beverages
                .iter()
                .map(|m| m.id.clone())
                .collect(),
            line_key: item.key.clone(),
        });
    }

    let now = chrono::Utc::now().timestamp_millis();
    Ok(OrderDraft {
        id: format!("ORD-{}", now),
        fulfillment: meta.fulfillment,
        address,
        note: normalize_text(meta.note),
        customer_id: meta.customer_id,
        customer_phone: meta.customer_phone,
        subtotal: totals.subtotal,
        tax: totals.tax,
        discount_total: totals.discount_total,
        total: totals.grand_total,
        lines,
        created_at: now,
    })
}

/// Trim free-text input; blank strings collapse to None
fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
