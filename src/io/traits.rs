//! Storage trait for persisted assessment state.
//!
//! The scoring engine never touches storage. Callers read inputs, run the
//! engine, and write results through a [`KeyValueStore`], so the engine stays
//! a pure function of its arguments and tests can swap in an in-memory store.
//!
//! # Example
//!
//! ```rust
//! use tbap::io::{KeyValueStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.set("tbap_scores", "{}").unwrap();
//! assert_eq!(store.get("tbap_scores").unwrap().as_deref(), Some("{}"));
//! ```

use crate::core::Result;

/// String key-value store, modelled on browser local storage.
pub trait KeyValueStore: Send + Sync {
    /// Get a stored value by key, `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `Error::Storage` or `Error::FileSystem` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `Error::Storage` or `Error::FileSystem` if the write fails.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a single key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Remove every key.
    fn clear(&self) -> Result<()>;
}
