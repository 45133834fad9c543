// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory key-value store fake for testing without filesystem I/O.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use switchcraft_core::store::{KeyValueStore, StoreError};
use switchcraft_core::Endpoint;

/// In-memory implementation of [`KeyValueStore`] for testing.
///
/// Clones share state, so a test can hand one clone to a switcher and
/// inspect the other. Call counts and failure injection let tests verify
/// persistence behavior.
///
/// # Example
///
/// ```
/// use switchcraft_dry_tests::InMemoryStore;
/// use switchcraft_core::{Config, Endpoint, Switchcraft};
///
/// let store = InMemoryStore::new();
/// let config = Config::new("k", vec![Endpoint::untitled("https://x.com")]);
/// let _switcher = Switchcraft::new(config, store.clone()).unwrap();
///
/// assert_eq!(store.save_count(), 1);
/// assert_eq!(store.endpoint("k"), Some(Endpoint::untitled("https://x.com")));
/// ```
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<Mutex<InMemoryStoreInner>>,
}

#[derive(Default)]
struct InMemoryStoreInner {
    data: HashMap<String, Vec<u8>>,
    load_count: usize,
    save_count: usize,
    fail_on_load: bool,
    fail_on_save: bool,
}

impl InMemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, InMemoryStoreInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Write raw bytes under `key` without touching the counters.
    pub fn seed_raw(&self, key: &str, data: &[u8]) {
        self.lock().data.insert(key.to_owned(), data.to_vec());
    }

    /// Write `endpoint` as a persisted selection under `key` without touching the counters.
    pub fn seed_endpoint(&self, key: &str, endpoint: &Endpoint) {
        let data = serde_json::to_vec(endpoint).unwrap_or_default();
        self.seed_raw(key, &data);
    }

    /// Raw bytes stored under `key`.
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.lock().data.get(key).cloned()
    }

    /// Decode the selection stored under `key`, if it is one.
    ///
    /// Reads the map directly, so the load counter is untouched.
    pub fn endpoint(&self, key: &str) -> Option<Endpoint> {
        let raw = self.raw(key)?;
        serde_json::from_slice(&raw).ok()
    }

    /// Configure the store to fail on load operations.
    pub fn set_fail_on_load(&self, fail: bool) {
        self.lock().fail_on_load = fail;
    }

    /// Configure the store to fail on save operations.
    pub fn set_fail_on_save(&self, fail: bool) {
        self.lock().fail_on_save = fail;
    }

    /// Number of `load_raw` attempts, failed ones included.
    pub fn load_count(&self) -> usize {
        self.lock().load_count
    }

    /// Number of `save_raw` attempts, failed ones included.
    pub fn save_count(&self) -> usize {
        self.lock().save_count
    }

    /// Return all keys currently present in the store.
    pub fn keys(&self) -> Vec<String> {
        self.lock().data.keys().cloned().collect()
    }

    /// Check if a key exists in the store.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().data.contains_key(key)
    }
}

impl KeyValueStore for InMemoryStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        let mut inner = self.lock();
        inner.load_count += 1;

        if inner.fail_on_load {
            return Err(StoreError::Other("simulated load failure".into()));
        }

        inner.data.get(key).cloned().ok_or(StoreError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), StoreError> {
        let mut inner = self.lock();
        inner.save_count += 1;

        if inner.fail_on_save {
            return Err(StoreError::Other("simulated save failure".into()));
        }

        inner.data.insert(key.to_string(), data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_save_load() {
        let store = InMemoryStore::new();
        store.save_raw("test", b"hello").unwrap();
        assert_eq!(store.load_raw("test").unwrap(), b"hello");
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load_count(), 1);
    }

    #[test]
    fn load_missing_key_returns_not_found() {
        let store = InMemoryStore::new();
        assert!(matches!(store.load_raw("missing"), Err(StoreError::NotFound)));
    }

    #[test]
    fn failure_injection_still_counts_attempts() {
        let store = InMemoryStore::new();
        store.set_fail_on_save(true);
        assert!(matches!(store.save_raw("k", b"v"), Err(StoreError::Other(_))));
        assert!(!store.contains_key("k"));
        store.set_fail_on_load(true);
        assert!(store.load_raw("k").is_err());
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load_count(), 1);
    }

    #[test]
    fn seeding_bypasses_counters() {
        let store = InMemoryStore::new();
        store.seed_endpoint("k", &Endpoint::titled("Prod \"eu\"", "https://x.com"));
        assert_eq!(store.save_count(), 0);
        assert_eq!(
            store.endpoint("k"),
            Some(Endpoint::titled("Prod \"eu\"", "https://x.com"))
        );
        let raw: serde_json::Value = serde_json::from_slice(&store.raw("k").unwrap()).unwrap();
        assert_eq!(raw["url"], "https://x.com");
    }

    #[test]
    fn seeded_untitled_endpoint_has_null_title() {
        let store = InMemoryStore::new();
        store.seed_endpoint("k", &Endpoint::untitled("https://x.com"));
        let raw: serde_json::Value = serde_json::from_slice(&store.raw("k").unwrap()).unwrap();
        assert!(raw["title"].is_null());
    }

    #[test]
    fn clone_shares_state_between_instances() {
        let store1 = InMemoryStore::new();
        let store2 = store1.clone();
        store1.save_raw("shared_key", b"shared_value").unwrap();
        assert_eq!(store2.load_raw("shared_key").unwrap(), b"shared_value");
        assert_eq!(store2.save_count(), 1);
        assert_eq!(store1.keys(), vec!["shared_key".to_owned()]);
    }
}
