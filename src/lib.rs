//! Paddock
//!
//! Client-side cart and wishlist state for a farm storefront. Two
//! self-contained stores each own one persisted collection, write the full
//! collection through a repository interface on every mutation, and raise
//! transient notifications through an injected collaborator. Derived values
//! are pure functions over the collections, recomputed on demand.

pub mod cart;
pub mod fixtures;
pub mod items;
pub mod notify;
pub mod prelude;
pub mod products;
pub mod storage;
pub mod totals;
pub mod wishlist;
