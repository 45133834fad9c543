// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Key-value storage port and the selection record persisted through it.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::endpoint::Endpoint;

/// Storage port for raw blobs (keyed by logical name).
pub trait KeyValueStore {
    /// Load a raw blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, StoreError>;
    /// Persist a raw blob, replacing any previous value.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        (**self).load_raw(key)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), StoreError> {
        (**self).save_raw(key, data)
    }
}

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// Key cannot be mapped onto the backing storage.
    #[error("invalid key: {0:?}")]
    InvalidKey(String),
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Catch-all error variant.
    #[error("other: {0}")]
    Other(String),
}

/// Thin service that serializes values and delegates storage to a `KeyValueStore`.
pub struct StoreService<S> {
    store: S,
}

impl<S> StoreService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the inner store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S> StoreService<S>
where
    S: KeyValueStore,
{
    /// Load and deserialize a value for `key`. Returns `Ok(None)` if missing.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        match self.store.load_raw(key) {
            Ok(bytes) => {
                if bytes.is_empty() {
                    return Ok(None);
                }
                let value = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            Err(StoreError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Serialize and persist a value for `key`.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), StoreError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec(value)?;
        self.store.save_raw(key, &data)
    }
}

/// The persisted "currently selected endpoint", bound to one storage key.
pub struct SelectionStore<S> {
    service: StoreService<S>,
    key: String,
}

impl<S> SelectionStore<S>
where
    S: KeyValueStore,
{
    /// Bind `store` to the record stored under `key`.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            service: StoreService::new(store),
            key: key.into(),
        }
    }

    /// Storage key of the record.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the backing store.
    pub fn store(&self) -> &S {
        self.service.store()
    }

    /// Read the persisted selection.
    ///
    /// Missing, empty, undecodable or unreadable records all read as `None`;
    /// anything but a plain miss is logged.
    pub fn load(&self) -> Option<Endpoint> {
        match self.service.load::<Endpoint>(&self.key) {
            Ok(endpoint) => endpoint,
            Err(err) => {
                warn!(key = %self.key, %err, "discarding unreadable endpoint selection");
                None
            }
        }
    }

    /// Persist `endpoint` as the selection.
    pub fn save(&self, endpoint: &Endpoint) -> Result<(), StoreError> {
        self.service.save(&self.key, endpoint)
    }
}
