//! Catalog Fixtures
//!
//! Sample farm-store catalog used by tests and examples, described in YAML
//! the same way the storefront receives products from the catalog API.

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::products::Product;

/// Embedded sample catalog.
pub const SAMPLE_CATALOG: &str = include_str!("fixtures/catalog.yaml");

/// Errors raised while loading a catalog fixture.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The YAML document could not be parsed.
    #[error(transparent)]
    Yaml(#[from] serde_norway::Error),

    /// A price string could not be parsed as a decimal amount.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// A price parsed to a negative amount.
    #[error("negative price: {0}")]
    NegativePrice(String),
}

/// Wrapper for products in YAML.
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Product fixtures, in catalog order.
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Stable product identifier
    pub id: String,

    /// Product name
    pub name: String,

    /// Product price (e.g., "12.50")
    pub price: String,

    /// Image path
    #[serde(default)]
    pub image: Option<String>,

    /// Catalog category
    #[serde(default)]
    pub category: Option<String>,
}

impl CatalogFixture {
    /// Parses a catalog from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError::Yaml`] if the document does not parse.
    pub fn from_yaml(raw: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(raw)?)
    }

    /// Converts every fixture into a product snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if any price is invalid or negative.
    pub fn snapshots(&self) -> Result<Vec<Product>, FixtureError> {
        self.products.iter().map(Product::try_from).collect()
    }
}

impl TryFrom<&ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: &ProductFixture) -> Result<Self, Self::Error> {
        let price = parse_price(&fixture.price)?;

        Ok(Product {
            id: fixture.id.clone(),
            name: fixture.name.clone(),
            price,
            image: fixture.image.clone(),
            category: fixture.category.clone(),
        })
    }
}

/// Parse a price string (e.g., "2.99") into a non-negative decimal amount.
///
/// # Errors
///
/// Returns a [`FixtureError::InvalidPrice`] if the string is not a decimal
/// number, or a [`FixtureError::NegativePrice`] if it parses below zero.
pub fn parse_price(raw: &str) -> Result<Decimal, FixtureError> {
    let amount = raw
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(raw.to_string()))?;

    if amount < Decimal::ZERO {
        return Err(FixtureError::NegativePrice(raw.to_string()));
    }

    Ok(amount)
}
