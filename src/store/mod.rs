//! Transient key-value store backing the metadata cache
//!
//! The checker only ever reads, writes, and deletes a single key; it never
//! enumerates entries. Hosts with their own cache infrastructure implement
//! [`TransientStore`] over it; [`MemoryStore`] and [`SqliteStore`] are the
//! bundled implementations.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use crate::error::StoreError;

/// Key-value store with per-entry time-to-live
///
/// Entries past their TTL behave as absent. Writing a key replaces any
/// previous entry for it.
#[cfg_attr(test, automock)]
pub trait TransientStore: Send + Sync {
    /// Look up a live entry, returning `None` if absent or expired
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store a value, replacing any existing entry under the key
    fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<(), StoreError>;

    /// Remove the entry under the key, if any
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}
