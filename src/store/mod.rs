//! Durable key-value storage for the theme preference.
//!
//! - [`PreferenceStore`]: the single-key get/set contract the resolver needs
//! - [`MemoryStore`]: a map held in memory
//! - [`FileStore`]: a JSON object file that survives across runs
//!
//! The resolver only ever reads and sets. Removing a key is left to
//! external parties, which is why `remove` lives on the concrete stores
//! and not on the trait.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;

/// A durable string key-value store.
///
/// Each `set` is a single atomic write.
pub trait PreferenceStore {
    /// Reads `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::io;
    use std::path::PathBuf;

    use super::{MemoryStore, PreferenceStore};
    use crate::error::StoreError;

    /// Reads from an inner map but rejects every write.
    #[derive(Debug, Default)]
    pub(crate) struct ReadOnlyStore {
        pub(crate) inner: MemoryStore,
    }

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io {
                path: PathBuf::from("read-only"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "store is read-only"),
            })
        }
    }
}
