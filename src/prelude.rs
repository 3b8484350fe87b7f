//! Paddock prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CartError, CartStore},
    fixtures::{CatalogFixture, FixtureError, ProductFixture},
    items::{CartLineItem, find_item},
    notify::{NoopNotifier, Notifier, TracingNotifier},
    products::Product,
    storage::{CollectionRepository, JsonFileRepository, MemoryRepository, StorageError, keys},
    totals::{cart_total, format_amount, total_items},
    wishlist::{WishlistError, WishlistStore},
};
