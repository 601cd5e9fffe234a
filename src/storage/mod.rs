//! Persistence for the drawn-number sequence.
//!
//! The store is a plain key/value blob store. The one record kept is the
//! full drawn sequence as a JSON array, rewritten wholesale on every change.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// Storage key for the drawn-number record.
pub const HISTORY_KEY: &str = "bingoDrawnNumbers";

/// Key/value blob store.
pub trait HistoryStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

impl<S: HistoryStore> HistoryStore for Rc<S> {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) {
        (**self).write(key, value)
    }
}

/// Overwrite the persisted record with the full drawn sequence.
pub fn save_history(store: &dyn HistoryStore, drawn: &[u16]) {
    match serde_json::to_string(drawn) {
        Ok(blob) => store.write(HISTORY_KEY, &blob),
        Err(err) => tracing::warn!(?err, "failed to encode drawn history"),
    }
}

/// Load and validate the persisted sequence.
///
/// Anything that does not decode to unique numbers in `1..=bound` is
/// treated as no history at all.
pub fn load_history(store: &dyn HistoryStore, bound: u16) -> Vec<u16> {
    let Some(blob) = store.read(HISTORY_KEY) else {
        return Vec::new();
    };
    let numbers: Vec<u16> = match serde_json::from_str(&blob) {
        Ok(numbers) => numbers,
        Err(err) => {
            tracing::warn!(?err, "discarding malformed drawn-history record");
            return Vec::new();
        }
    };
    let mut seen = HashSet::new();
    let consistent = numbers
        .iter()
        .all(|n| (1..=bound).contains(n) && seen.insert(*n));
    if !consistent {
        tracing::warn!(bound, "discarding inconsistent drawn-history record");
        return Vec::new();
    }
    numbers
}

/// Browser `localStorage` store.
#[cfg(feature = "web")]
pub struct LocalStorageStore;

#[cfg(feature = "web")]
impl LocalStorageStore {
    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

#[cfg(feature = "web")]
impl HistoryStore for LocalStorageStore {
    fn read(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            if let Err(err) = storage.set_item(key, value) {
                tracing::warn!(?err, "local storage write failed");
            }
        }
    }
}

/// In-memory store for native builds and tests.
#[derive(Default)]
pub struct MemoryStore {
    records: RefCell<HashMap<String, String>>,
}

impl HistoryStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.records.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.records
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
