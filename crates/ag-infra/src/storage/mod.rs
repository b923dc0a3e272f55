//! Key-value storage adapters.
//!
//! Both adapters keep the whole storage area as one JSON object and enforce
//! an optional byte quota on its serialized size, like an extension's local
//! storage area does.

mod json_file;
mod memory;

pub use json_file::FileKeyValueStorage;
pub use memory::InMemoryKeyValueStorage;

use ag_core::ports::{StorageError, StorageItems};

/// Default quota, matching the local storage area of browser extensions.
pub const DEFAULT_QUOTA_BYTES: u64 = 10 * 1024 * 1024;

/// `Some(0)` means unlimited.
fn normalize_quota(quota_bytes: Option<u64>) -> Option<u64> {
    quota_bytes.filter(|quota| *quota > 0)
}

fn ensure_within_quota(needed: usize, quota: Option<u64>) -> Result<(), StorageError> {
    match quota {
        Some(quota) if needed as u64 > quota => Err(StorageError::QuotaExceeded {
            needed: needed as u64,
            quota,
        }),
        _ => Ok(()),
    }
}

fn select_keys(all: &StorageItems, keys: &[&str]) -> StorageItems {
    keys.iter()
        .filter_map(|key| all.get(*key).map(|value| (key.to_string(), value.clone())))
        .collect()
}
