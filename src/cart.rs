//! Cart Store
//!
//! Owns the cart line-item collection and the transient cart-panel
//! visibility flag. Mutations apply to the in-memory collection first and
//! then write the whole collection through the injected repository; a
//! failed write propagates as an error without rolling back the in-memory
//! state. Notifications fire only after a successful write.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

use crate::{
    items::CartLineItem,
    notify::Notifier,
    products::Product,
    storage::{CollectionRepository, StorageError},
    totals::{cart_total, format_amount, total_items},
};

/// Errors raised by cart mutations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The product passed to a mutation has an empty identifier.
    #[error("product is missing an identifier")]
    MissingProductId,

    /// Wrapped persistence error. The in-memory collection keeps the
    /// applied mutation; only the write-through failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Cart Store
#[derive(Debug)]
pub struct CartStore<R, N> {
    items: Vec<CartLineItem>,
    repository: R,
    notifier: N,
    show_cart: bool,
}

impl<R, N> CartStore<R, N>
where
    R: CollectionRepository<CartLineItem>,
    N: Notifier,
{
    /// Loads the persisted cart.
    ///
    /// Unreadable or corrupt persisted data is logged and recovered as an
    /// empty collection; it is never surfaced to the caller.
    pub fn load(repository: R, notifier: N) -> Self {
        let items = repository.load().unwrap_or_else(|err| {
            warn!(error = %err, "discarding unreadable cart state");
            Vec::new()
        });

        CartStore {
            items,
            repository,
            notifier,
            show_cart: false,
        }
    }

    /// Adds one unit of `product` to the cart.
    ///
    /// An existing line item with the same id has its quantity incremented
    /// by 1 and keeps the snapshot fields captured when it was first added,
    /// even if the incoming product carries a newer price or name. A new
    /// product is appended with quantity 1.
    ///
    /// # Errors
    ///
    /// - [`CartError::MissingProductId`]: the product id is empty; nothing
    ///   is mutated.
    /// - [`CartError::Storage`]: the write-through failed; the in-memory
    ///   collection keeps the increment.
    pub fn add_to_cart(&mut self, product: &Product) -> Result<(), CartError> {
        if product.id.is_empty() {
            return Err(CartError::MissingProductId);
        }

        let message = if let Some(item) = self.items.iter_mut().find(|item| item.id == product.id)
        {
            item.quantity += 1;
            format!("Increased {} quantity in cart", item.name)
        } else {
            self.items.push(CartLineItem::from(product));
            format!("{} added to cart", product.name)
        };

        self.persist()?;
        self.notifier.success(&message);

        Ok(())
    }

    /// Removes the line item with the given product id.
    ///
    /// An unknown id is a silent no-op; the notification is raised only
    /// when a line item was actually removed.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError::Storage`] if the write-through failed.
    pub fn remove_from_cart(&mut self, id: &str) -> Result<(), CartError> {
        let Some(position) = self.items.iter().position(|item| item.id == id) else {
            return Ok(());
        };

        let removed = self.items.remove(position);

        self.persist()?;
        self.notifier
            .success(&format!("{} removed from cart", removed.name));

        Ok(())
    }

    /// Sets the quantity of the line item with the given product id.
    ///
    /// The quantity is an absolute set, not a delta. A quantity below 1
    /// removes the line item instead; quantities at or below zero are never
    /// persisted. An unknown id is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError::Storage`] if the write-through failed.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> Result<(), CartError> {
        let Ok(quantity @ 1..) = u64::try_from(quantity) else {
            return self.remove_from_cart(id);
        };

        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return Ok(());
        };

        item.quantity = quantity;

        self.persist()
    }

    /// Empties the cart unconditionally.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError::Storage`] if the write-through failed.
    pub fn clear_cart(&mut self) -> Result<(), CartError> {
        self.items.clear();

        self.persist()?;
        self.notifier.success("Cart cleared");

        Ok(())
    }

    /// The current line items, in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Sum of quantities across all line items.
    pub fn total_items(&self) -> u64 {
        total_items(&self.items)
    }

    /// Sum of `price * quantity` across all line items.
    pub fn cart_total(&self) -> Decimal {
        cart_total(&self.items)
    }

    /// The cart total formatted with exactly two decimal places.
    pub fn formatted_total(&self) -> String {
        format_amount(self.cart_total())
    }

    /// Whether the cart panel is visible.
    pub fn show_cart(&self) -> bool {
        self.show_cart
    }

    /// Shows or hides the cart panel. Independent of the collection's
    /// contents; mutations never toggle it.
    pub fn set_show_cart(&mut self, visible: bool) {
        self.show_cart = visible;
    }

    fn persist(&self) -> Result<(), CartError> {
        self.repository.save(&self.items)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{notify::NoopNotifier, storage::MemoryRepository};

    use super::*;

    fn feed() -> Product {
        Product::new("feed-1", "Layer Feed", Decimal::new(1000, 2))
    }

    fn store() -> CartStore<MemoryRepository<CartLineItem>, NoopNotifier> {
        CartStore::load(MemoryRepository::new(), NoopNotifier)
    }

    #[test]
    fn repeated_adds_increment_a_single_line_item() -> TestResult {
        let mut cart = store();

        cart.add_to_cart(&feed())?;
        cart.add_to_cart(&feed())?;
        cart.add_to_cart(&feed())?;

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_items(), 3);

        Ok(())
    }

    #[test]
    fn re_add_keeps_original_snapshot() -> TestResult {
        let mut cart = store();
        let mut repriced = feed();

        cart.add_to_cart(&feed())?;
        repriced.price = Decimal::new(9999, 2);
        repriced.name = "Renamed Feed".to_string();
        cart.add_to_cart(&repriced)?;

        let item = cart.items().first().cloned();

        assert_eq!(item.as_ref().map(|item| item.price), Some(Decimal::new(1000, 2)));
        assert_eq!(
            item.map(|item| item.name),
            Some("Layer Feed".to_string())
        );

        Ok(())
    }

    #[test]
    fn empty_product_id_is_rejected_without_mutation() {
        let mut cart = store();
        let nameless = Product::new("", "Mystery", Decimal::ONE);

        let result = cart.add_to_cart(&nameless);

        assert!(
            matches!(result, Err(CartError::MissingProductId)),
            "expected MissingProductId, got {result:?}"
        );
        assert!(cart.items().is_empty());
    }

    #[test]
    fn update_quantity_sets_absolute_value() -> TestResult {
        let mut cart = store();

        cart.add_to_cart(&feed())?;
        cart.add_to_cart(&feed())?;
        cart.update_quantity("feed-1", 7)?;

        assert_eq!(cart.total_items(), 7);

        Ok(())
    }

    #[test]
    fn update_quantity_for_unknown_id_changes_nothing() -> TestResult {
        let mut cart = store();

        cart.add_to_cart(&feed())?;
        cart.update_quantity("no-such-id", 4)?;

        assert_eq!(cart.total_items(), 1);

        Ok(())
    }

    #[test]
    fn remove_of_unknown_id_is_a_no_op() -> TestResult {
        let mut cart = store();

        cart.add_to_cart(&feed())?;
        cart.remove_from_cart("no-such-id")?;

        assert_eq!(cart.items().len(), 1);

        Ok(())
    }

    #[test]
    fn show_cart_is_independent_of_mutations() -> TestResult {
        let mut cart = store();

        assert!(!cart.show_cart());

        cart.set_show_cart(true);
        cart.add_to_cart(&feed())?;
        cart.clear_cart()?;

        assert!(cart.show_cart());

        Ok(())
    }
}
