//! Storage
//!
//! Persistence interface for the cart and wishlist collections. Each store
//! keeps its whole collection under one fixed key; every mutation overwrites
//! that key with the full serialized collection (write-through, no
//! batching). An absent key is an empty collection, not an error.

use std::{
    cell::RefCell,
    fs,
    io::ErrorKind,
    marker::PhantomData,
    path::{Path, PathBuf},
    rc::Rc,
};

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Fixed storage keys used by the stores.
pub mod keys {
    /// Key holding the cart line-item collection.
    pub const CART_ITEMS: &str = "cartItems";

    /// Key holding the wishlist collection.
    pub const WISHLIST: &str = "wishlist";
}

/// Errors raised by persistence backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The persisted collection could not be read.
    #[error("failed to read persisted collection")]
    Read(#[source] std::io::Error),

    /// The persisted collection could not be written.
    #[error("failed to write persisted collection")]
    Write(#[source] std::io::Error),

    /// The persisted bytes are not a valid serialized collection.
    #[error("persisted collection is not valid JSON")]
    Corrupt(#[source] serde_json::Error),

    /// The in-memory collection could not be serialized.
    #[error("failed to serialize collection")]
    Serialize(#[source] serde_json::Error),
}

/// A collection persistence interface.
///
/// `load` is called once when a store starts; `save` is called after every
/// mutation with the full current collection.
pub trait CollectionRepository<T> {
    /// Loads the entire persisted collection.
    ///
    /// Backends return an empty vector when nothing has been persisted
    /// under their key yet.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read or holds
    /// data that does not deserialize.
    fn load(&self) -> Result<Vec<T>, StorageError>;

    /// Overwrites the persisted collection with `items`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if serialization or the write fails.
    fn save(&self, items: &[T]) -> Result<(), StorageError>;
}

/// File-backed repository storing one JSON document per storage key.
#[derive(Debug, Clone)]
pub struct JsonFileRepository<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> JsonFileRepository<T> {
    /// Creates a repository persisting under `key` inside `dir`.
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        JsonFileRepository {
            path: dir.as_ref().join(format!("{key}.json")),
            _marker: PhantomData,
        }
    }

    /// The file this repository reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> CollectionRepository<T> for JsonFileRepository<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Vec<T>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StorageError::Read(err)),
        };

        serde_json::from_str(&raw).map_err(StorageError::Corrupt)
    }

    fn save(&self, items: &[T]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items).map_err(StorageError::Serialize)?;

        fs::write(&self.path, raw).map_err(StorageError::Write)
    }
}

/// In-memory repository sharing its collection through a cloneable handle.
///
/// Clones are shallow and observe each other's saves, which lets a test
/// keep a handle on what a store persisted. `Rc` is sound here: the stores
/// run single-threaded within one UI event turn.
#[derive(Debug)]
pub struct MemoryRepository<T> {
    items: Rc<RefCell<Vec<T>>>,
}

impl<T> MemoryRepository<T> {
    /// Creates an empty in-memory repository.
    pub fn new() -> Self {
        MemoryRepository {
            items: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MemoryRepository<T> {
    fn clone(&self) -> Self {
        MemoryRepository {
            items: Rc::clone(&self.items),
        }
    }
}

impl<T: Clone> CollectionRepository<T> for MemoryRepository<T> {
    fn load(&self) -> Result<Vec<T>, StorageError> {
        Ok(self.items.borrow().clone())
    }

    fn save(&self, items: &[T]) -> Result<(), StorageError> {
        *self.items.borrow_mut() = items.to_vec();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn memory_clones_share_saves() -> TestResult {
        let repository = MemoryRepository::new();
        let handle = repository.clone();

        repository.save(&[1_u64, 2, 3])?;

        assert_eq!(handle.load()?, vec![1, 2, 3]);

        Ok(())
    }

    #[test]
    fn memory_starts_empty() -> TestResult {
        let repository: MemoryRepository<u64> = MemoryRepository::new();

        assert!(repository.load()?.is_empty());

        Ok(())
    }

    #[test]
    fn file_repository_absent_key_is_empty() -> TestResult {
        let dir = tempfile::tempdir()?;
        let repository: JsonFileRepository<u64> = JsonFileRepository::new(dir.path(), "missing");

        assert!(repository.load()?.is_empty());

        Ok(())
    }

    #[test]
    fn file_repository_overwrites_whole_collection() -> TestResult {
        let dir = tempfile::tempdir()?;
        let repository = JsonFileRepository::new(dir.path(), keys::CART_ITEMS);

        repository.save(&[10_u64, 20])?;
        repository.save(&[30_u64])?;

        assert_eq!(repository.load()?, vec![30]);

        Ok(())
    }

    #[test]
    fn file_repository_rejects_corrupt_content() -> TestResult {
        let dir = tempfile::tempdir()?;
        let repository: JsonFileRepository<u64> = JsonFileRepository::new(dir.path(), "bad");

        fs::write(repository.path(), "not-json")?;

        assert!(matches!(repository.load(), Err(StorageError::Corrupt(_))));

        Ok(())
    }
}
