//! Cart Line Items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::products::Product;

/// One cart entry: a product snapshot and the quantity of it selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Stable product identifier; unique within the cart
    pub id: String,

    /// Product name at time of add
    pub name: String,

    /// Product price at time of add
    pub price: Decimal,

    /// Image path at time of add
    #[serde(default)]
    pub image: Option<String>,

    /// Category at time of add
    #[serde(default)]
    pub category: Option<String>,

    /// Selected quantity; always at least 1 once in the cart. Persisted
    /// rows missing the field read back as 1.
    #[serde(default = "default_quantity")]
    pub quantity: u64,
}

fn default_quantity() -> u64 {
    1
}

impl From<&Product> for CartLineItem {
    fn from(product: &Product) -> Self {
        CartLineItem {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
            quantity: 1,
        }
    }
}

/// Returns the line item with the given product id, if present.
pub fn find_item<'a>(items: &'a [CartLineItem], id: &str) -> Option<&'a CartLineItem> {
    items.iter().find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn from_product_starts_at_quantity_one() {
        let product = Product::new("a", "Feed", Decimal::new(1000, 2));

        let item = CartLineItem::from(&product);

        assert_eq!(item.id, "a");
        assert_eq!(item.quantity, 1);
        assert_eq!(item.price, product.price);
    }

    #[test]
    fn missing_quantity_reads_back_as_one() -> TestResult {
        let raw = r#"[{"id":"a","name":"Feed","price":"10.00"}]"#;

        let items: Vec<CartLineItem> = serde_json::from_str(raw)?;

        assert_eq!(items.len(), 1);
        assert_eq!(find_item(&items, "a").map(|item| item.quantity), Some(1));

        Ok(())
    }

    #[test]
    fn find_item_misses_unknown_id() {
        let product = Product::new("a", "Feed", Decimal::new(1000, 2));
        let items = [CartLineItem::from(&product)];

        assert!(find_item(&items, "b").is_none());
    }
}
