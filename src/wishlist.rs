//! Wishlist Store
//!
//! Owns the set of wishlisted product snapshots, keyed by product id with
//! each id present at most once. Toggle is the only mutation; moving an
//! item into the cart is the caller's two-step job (add to cart, then
//! toggle off here), never an atomic operation of this store.

use thiserror::Error;
use tracing::warn;

use crate::{
    notify::Notifier,
    products::Product,
    storage::{CollectionRepository, StorageError},
};

/// Errors raised by wishlist mutations.
#[derive(Debug, Error)]
pub enum WishlistError {
    /// The product passed to a mutation has an empty identifier.
    #[error("product is missing an identifier")]
    MissingProductId,

    /// Wrapped persistence error. The in-memory collection keeps the
    /// applied mutation; only the write-through failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Wishlist Store
#[derive(Debug)]
pub struct WishlistStore<R, N> {
    items: Vec<Product>,
    repository: R,
    notifier: N,
}

impl<R, N> WishlistStore<R, N>
where
    R: CollectionRepository<Product>,
    N: Notifier,
{
    /// Loads the persisted wishlist.
    ///
    /// Unreadable or corrupt persisted data is logged and recovered as an
    /// empty collection; it is never surfaced to the caller.
    pub fn load(repository: R, notifier: N) -> Self {
        let items = repository.load().unwrap_or_else(|err| {
            warn!(error = %err, "discarding unreadable wishlist state");
            Vec::new()
        });

        WishlistStore {
            items,
            repository,
            notifier,
        }
    }

    /// Whether a product with the given id is wishlisted. Pure predicate,
    /// no side effects.
    pub fn is_in_wishlist(&self, id: &str) -> bool {
        self.items.iter().any(|product| product.id == id)
    }

    /// Toggles the product's membership, returning whether it is in the
    /// wishlist afterwards.
    ///
    /// A present id is removed; an absent one has the full snapshot
    /// appended. Toggling twice restores the prior membership, so callers
    /// needing "ensure present" semantics check [`Self::is_in_wishlist`]
    /// first.
    ///
    /// # Errors
    ///
    /// - [`WishlistError::MissingProductId`]: the product id is empty;
    ///   nothing is mutated.
    /// - [`WishlistError::Storage`]: the write-through failed; the
    ///   in-memory collection keeps the toggle.
    pub fn toggle_wishlist(&mut self, product: &Product) -> Result<bool, WishlistError> {
        if product.id.is_empty() {
            return Err(WishlistError::MissingProductId);
        }

        let (present, message) = if let Some(position) =
            self.items.iter().position(|entry| entry.id == product.id)
        {
            let removed = self.items.remove(position);
            (false, format!("{} removed from wishlist", removed.name))
        } else {
            self.items.push(product.clone());
            (true, format!("{} added to wishlist", product.name))
        };

        self.persist()?;
        self.notifier.success(&message);

        Ok(present)
    }

    /// The wishlisted product snapshots, in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    fn persist(&self) -> Result<(), WishlistError> {
        self.repository.save(&self.items)?;

        Ok(())
    }
}
