//! Catalog item record and name sort-key extraction

use crate::core::error::ItemError;
use serde::{Deserialize, Serialize};

/// A single catalog record
///
/// Items are supplied once per session and never modified by the engine.
/// Field names serialize in camelCase (`inStock`) to match catalog data files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Display name, conventionally ending in a numeric token ("Product 42")
    pub name: String,

    /// Category label drawn from an open set
    pub category: String,

    /// Non-negative price
    pub price: f64,

    /// Whether the item is currently in stock
    pub in_stock: bool,
}

impl Item {
    /// Create a new item
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        in_stock: bool,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            in_stock,
        }
    }

    /// Numeric sort key taken from the last whitespace-separated token of the name
    ///
    /// Returns `None` when the name is empty or the token does not parse as a
    /// finite number. Callers decide how a missing key orders.
    pub fn name_key(&self) -> Option<f64> {
        name_key(&self.name)
    }

    /// Check the record invariants
    pub fn validate(&self) -> Result<(), ItemError> {
        if !self.price.is_finite() {
            return Err(ItemError::NonFinitePrice {
                name: self.name.clone(),
                price: self.price,
            });
        }
        if self.price < 0.0 {
            return Err(ItemError::NegativePrice {
                name: self.name.clone(),
                price: self.price,
            });
        }
        Ok(())
    }
}

/// Parse the trailing numeric token of `name`
pub fn name_key(name: &str) -> Option<f64> {
    name.split_whitespace()
        .next_back()
        .and_then(|token| token.parse::<f64>().ok())
        .filter(|n| n.is_finite())
        // "-0" and "0" must share one key
        .map(|n| n + 0.0)
}
