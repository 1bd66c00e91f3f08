//! Session cart aggregator
//!
//! One `Cart` per checkout session, owned by the caller and passed
//! explicitly to whatever layer needs it (no ambient globals). Lines merge
//! by configuration: the same product with the same modifier selection is
//! a single line whose quantity grows.
//!
//! Invariants after every mutation:
//! - no line has `quantity <= 0`
//! - no two lines share a [`LineKey`]
//! - validation happens before mutation; a returned error leaves the cart
//!   untouched

use crate::error::CheckoutError;
use crate::money::{self, MAX_QUANTITY, to_decimal, to_f64};
use crate::pricing;
use rust_decimal::Decimal;
use shared::cart::{LineItem, LineKey, ModifierSelection};
use shared::models::Product;

/// Ordered collection of cart lines (insertion order preserved for display)
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty session cart
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, key: &LineKey) -> Option<&LineItem> {
        self.items.iter().find(|item| item.key == *key)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Add a product with a modifier selection, merging into an existing
    /// line when the configuration matches
    ///
    /// Returns the key of the affected line.
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: i32,
        modifiers: ModifierSelection,
    ) -> Result<LineKey, CheckoutError> {
        money::validate_quantity(quantity)?;
        money::validate_price(product.price, "price")?;
        money::validate_selection(&modifiers)?;

        let key = LineKey::compute(&product.id, &modifiers);
        if let Some(existing) = self.items.iter().find(|i| i.key == key) {
            self.check_merged_quantity(existing.quantity, quantity)?;
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.key == key) {
            existing.quantity += quantity;
        } else {
            let unit_price = to_f64(to_decimal(product.price));
            self.items.push(LineItem {
                key: key.clone(),
                product_id: product.id.clone(),
                name: product.name.clone(),
                unit_base_price: unit_price,
                effective_unit_price: unit_price,
                quantity,
                modifiers,
            });
        }
        Ok(key)
    }

    /// Set a line's quantity; a non-positive quantity removes the line
    pub fn update_quantity(&mut self, key: &LineKey, quantity: i32) -> Result<(), CheckoutError> {
        if quantity <= 0 {
            // Reduction to zero is removal, never a retained zero-quantity line
            self.remove_item(key);
            return Ok(());
        }
        money::validate_quantity(quantity)?;
        let item = self
            .items
            .iter_mut()
            .find(|i| i.key == *key)
            .ok_or_else(|| CheckoutError::ItemNotFound(key.to_string()))?;
        item.quantity = quantity;
        Ok(())
    }

    /// Manually override a line's effective unit price (POS repricing)
    ///
    /// The catalog price (`unit_base_price`) is untouched, so the discount
    /// relative to it stays derivable.
    pub fn set_unit_price(&mut self, key: &LineKey, price: f64) -> Result<(), CheckoutError> {
        money::validate_price(price, "price")?;
        let item = self
            .items
            .iter_mut()
            .find(|i| i.key == *key)
            .ok_or_else(|| CheckoutError::ItemNotFound(key.to_string()))?;
        item.effective_unit_price = to_f64(to_decimal(price));
        Ok(())
    }

    /// Replace an existing line's configuration (edit flow)
    ///
    /// The old line is removed and the new configuration inserted at the
    /// end; if it collides with another existing line the two merge.
    /// Returns the key of the resulting line.
    pub fn replace_item(
        &mut self,
        key: &LineKey,
        product: &Product,
        quantity: i32,
        modifiers: ModifierSelection,
    ) -> Result<LineKey, CheckoutError> {
        money::validate_quantity(quantity)?;
        money::validate_price(product.price, "price")?;
        money::validate_selection(&modifiers)?;
        if self.get(key).is_none() {
            return Err(CheckoutError::ItemNotFound(key.to_string()));
        }

        let new_key = LineKey::compute(&product.id, &modifiers);
        if new_key != *key {
            if let Some(target) = self.items.iter().find(|i| i.key == new_key) {
                self.check_merged_quantity(target.quantity, quantity)?;
            }
        }

        self.remove_item(key);
        self.add_item(product, quantity, modifiers)
    }

    /// Remove a line; no-op when the key is absent
    pub fn remove_item(&mut self, key: &LineKey) {
        self.items.retain(|item| item.key != *key);
    }

    /// Empty the cart unconditionally
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all line quantities
    pub fn total_item_count(&self) -> i32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Tax-inclusive cart total: sum of rounded per-line gross amounts
    pub fn total_gross(&self) -> f64 {
        let total: Decimal = self.items.iter().map(pricing::line_gross_decimal).sum();
        to_f64(total)
    }

    fn check_merged_quantity(&self, existing: i32, added: i32) -> Result<(), CheckoutError> {
        let merged = existing.saturating_add(added);
        if merged > MAX_QUANTITY {
            return Err(CheckoutError::InvalidQuantity(format!(
                "merged quantity exceeds maximum allowed ({}), got {}",
                MAX_QUANTITY, merged
            )));
        }
        Ok(())
    }
}
