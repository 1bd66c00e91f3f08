//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
///
/// Catalog snapshot of a sellable product. `price` is the undiscounted
/// tax-inclusive catalog price ("original price"); POS overrides never
/// write back to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Undiscounted catalog price, tax-inclusive
    pub price: f64,
    /// Category reference (String ID)
    pub category_id: String,
    pub image: Option<String>,
    /// Whether free salsa condiments can be attached
    #[serde(default)]
    pub has_salsas: bool,
    /// Whether paid extras can be attached
    #[serde(default)]
    pub has_extras: bool,
    /// Whether beverages can be attached
    #[serde(default)]
    pub has_beverages: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}
