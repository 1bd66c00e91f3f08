//! Modifier Model

use serde::{Deserialize, Serialize};

/// Paid add-on attachable to a product line (extra or beverage)
///
/// Salsas are free condiments and are referenced by id only; they never
/// appear as `Modifier` values in a selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub id: String,
    pub name: String,
    /// Price in currency units, >= 0
    pub price: f64,
}

impl Modifier {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}
