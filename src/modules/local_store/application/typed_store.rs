use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::local_store::application::ports::outgoing::{KeyValueStore, StoreError};

/// Typed JSON view over a [`KeyValueStore`].
///
/// Reads never fail: a missing key, a value that does not deserialize, or a
/// backend read error all come back as `None`. Writes do fail and the caller
/// decides what to do with the error.
#[derive(Clone)]
pub struct TypedStore {
    inner: Arc<dyn KeyValueStore>,
}

impl TypedStore {
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.inner
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.inner.get_item(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "Failed to read stored value");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "Stored value is not valid JSON for its type");
                None
            }
        }
    }

    pub async fn get_or<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        self.get(key).await.unwrap_or(fallback)
    }

    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw =
            serde_json::to_string(value).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.inner.set_item(key, raw).await
    }
}
