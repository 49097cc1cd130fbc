use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::expiry::StatusCategory;

/// Kind of tracked item. The three named kinds are what entry forms offer;
/// any other string round-trips through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductKind {
    FoodItem,
    Medicine,
    GroceryItem,
    Other(String),
}

impl ProductKind {
    pub fn as_str(&self) -> &str {
        match self {
            ProductKind::FoodItem => "Food Item",
            ProductKind::Medicine => "Medicine",
            ProductKind::GroceryItem => "Grocery Item",
            ProductKind::Other(s) => s,
        }
    }

    /// The kinds offered as choices when adding a record.
    pub fn all() -> &'static [ProductKind] {
        &[
            ProductKind::FoodItem,
            ProductKind::Medicine,
            ProductKind::GroceryItem,
        ]
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ProductKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Food Item" => ProductKind::FoodItem,
            "Medicine" => ProductKind::Medicine,
            "Grocery Item" => ProductKind::GroceryItem,
            _ => ProductKind::Other(s),
        }
    }
}

impl From<&str> for ProductKind {
    fn from(s: &str) -> Self {
        ProductKind::from(s.to_string())
    }
}

impl From<ProductKind> for String {
    fn from(kind: ProductKind) -> Self {
        match kind {
            ProductKind::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

/// A tracked inventory record. Field names mirror the persisted JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "type")]
    pub kind: ProductKind,
    /// Unique across the collection (case-sensitive); the record's natural key.
    pub name: String,
    pub quantity: u32,
    /// Calendar date, serialized as `YYYY-MM-DD`.
    pub expiry: NaiveDate,
    pub details: String,
    /// Tier computed when the record was added. Bulk-loaded records carry
    /// none; listings always recompute from `expiry`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusCategory>,
}
