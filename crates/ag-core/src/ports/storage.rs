//! Key-value storage port - abstracts the persistent storage area
//!
//! Mirrors an extension's local storage area: values are JSON, reads take a
//! list of keys, writes take a map and replace each listed key wholesale.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::ports::errors::StorageError;

/// Key → JSON value map used for both reads and writes.
pub type StorageItems = Map<String, Value>;

#[async_trait]
pub trait KeyValueStoragePort: Send + Sync {
    /// Read the values stored under `keys`.
    ///
    /// Keys that were never written are simply absent from the result.
    async fn get(&self, keys: &[&str]) -> Result<StorageItems, StorageError>;

    /// Write every entry of `items`, replacing the previous value of each key.
    ///
    /// A write either lands completely or not at all.
    async fn set(&self, items: StorageItems) -> Result<(), StorageError>;
}
