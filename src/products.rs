//! Products

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product snapshot.
///
/// Fields are copied from the catalog at the moment a product enters the
/// cart or wishlist and are never re-synced with the source product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable product identifier
    pub id: String,

    /// Product name
    pub name: String,

    /// Product price; expected non-negative
    pub price: Decimal,

    /// Reference path to the product image
    #[serde(default)]
    pub image: Option<String>,

    /// Catalog category
    #[serde(default)]
    pub category: Option<String>,
}

impl Product {
    /// Creates a product snapshot with no image or category.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            image: None,
            category: None,
        }
    }
}
