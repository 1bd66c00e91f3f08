//! Cart line item types
//!
//! A cart line is identified by its configuration, not by insertion
//! order: the same product with the same modifier selection always maps
//! to the same [`LineKey`], so repeated additions merge by quantity.

use crate::models::Modifier;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Modifier selection attached to one cart line
///
/// Salsas are free condiments and carry ids only; extras and beverages
/// are full [`Modifier`] snapshots so their prices survive catalog edits
/// made mid-session. The 0-3 salsa limit is a selection-time UI rule and
/// is not re-enforced here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModifierSelection {
    #[serde(default)]
    pub salsas: Vec<String>,
    #[serde(default)]
    pub extras: Vec<Modifier>,
    #[serde(default)]
    pub beverages: Vec<Modifier>,
}

impl ModifierSelection {
    pub fn is_empty(&self) -> bool {
        self.salsas.is_empty() && self.extras.is_empty() && self.beverages.is_empty()
    }
}

/// Content-addressed identity of a cart line
///
/// Computed as SHA-256 over a length-prefixed encoding of the product id
/// and the sorted modifier id sets. Length prefixes make the encoding
/// immune to separator characters appearing inside ids; sorting makes it
/// independent of selection order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey(String);

impl LineKey {
    /// Derive the key for a product + modifier selection
    pub fn compute(product_id: &str, selection: &ModifierSelection) -> Self {
        let mut hasher = Sha256::new();
        hash_component(&mut hasher, product_id.as_bytes());

        let mut salsas: Vec<&str> = selection.salsas.iter().map(String::as_str).collect();
        salsas.sort_unstable();
        hash_group(&mut hasher, &salsas);

        let mut extras: Vec<&str> = selection.extras.iter().map(|m| m.id.as_str()).collect();
        extras.sort_unstable();
        hash_group(&mut hasher, &extras);

        let mut beverages: Vec<&str> = selection.beverages.iter().map(|m| m.id.as_str()).collect();
        beverages.sort_unstable();
        hash_group(&mut hasher, &beverages);

        let digest = hasher.finalize();
        Self(hex::encode(&digest[..16]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn hash_component(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u32).to_le_bytes());
    hasher.update(bytes);
}

fn hash_group(hasher: &mut Sha256, ids: &[&str]) {
    hasher.update((ids.len() as u32).to_le_bytes());
    for id in ids {
        hash_component(hasher, id.as_bytes());
    }
}

/// One distinct row in a cart
///
/// Invariants (maintained by the cart aggregator):
/// - `quantity >= 1`; a line reduced to zero is removed, never retained
/// - `key` matches `(product_id, modifiers)` at all times
/// - `effective_unit_price` starts equal to `unit_base_price` and only
///   changes through an explicit POS price override
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub key: LineKey,
    pub product_id: String,
    /// Product name snapshot for display and persistence
    pub name: String,
    /// Undiscounted catalog unit price ("original price")
    pub unit_base_price: f64,
    /// Unit price actually charged (may be discounted at POS)
    pub effective_unit_price: f64,
    pub quantity: i32,
    pub modifiers: ModifierSelection,
}
