//! # Storage Layer
//!
//! Persistence is a plain string key-value store. The [`KeyValueStore`] trait is the
//! only thing the controller knows about storage; serialization of the product list
//! happens one level up, in [`crate::commands`].
//!
//! ## Keys
//!
//! Two independent entries make up the persisted snapshot (names configurable, see
//! [`StorageKeys`]):
//!
//! - `favoriteMessage`: the committed message, stored verbatim.
//! - `products`: the product sequence as a JSON array of `{image, title, price}`.
//!
//! There is no transaction across the two keys and no size limit. Inline image data
//! can make the product entry large.
//!
//! ## Implementations
//!
//! - [`mem_backend::MemStore`]: in-memory map, for tests. Can simulate write failures.
//! - [`fs_backend::FsStore`]: one file per key in a data directory, written atomically.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! ├── favoriteMessage     # message text
//! └── products            # JSON array
//! ```

use crate::error::Result;

pub mod fs_backend;
pub mod mem_backend;

pub const MESSAGE_KEY: &str = "favoriteMessage";
pub const PRODUCTS_KEY: &str = "products";

/// Abstract string-keyed storage.
///
/// Methods take `&self`: the application is single-threaded and backends use
/// interior mutability where they need it.
pub trait KeyValueStore {
    /// Read the value under `key`. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// The key names under which the snapshot is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub message: String,
    pub products: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            message: MESSAGE_KEY.to_string(),
            products: PRODUCTS_KEY.to_string(),
        }
    }
}
