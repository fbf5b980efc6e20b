use serde::{de::DeserializeOwned, Serialize};

use crate::local_store::application::ports::outgoing::StoreError;
use crate::local_store::application::typed_store::TypedStore;

/// Singleton counterpart of `LocalCrud`: one JSON object under one key.
pub struct LocalDocument<T> {
    store: TypedStore,
    key: String,
    seed: Option<T>,
}

impl<T> LocalDocument<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    pub fn new(store: TypedStore, key: impl Into<String>, seed: Option<T>) -> Self {
        Self {
            store,
            key: key.into(),
            seed,
        }
    }

    pub async fn get(&self) -> Option<T> {
        match self.store.get::<T>(&self.key).await {
            Some(value) => Some(value),
            None => self.seed.clone(),
        }
    }

    /// Replaces the whole document.
    pub async fn save(&self, value: &T) -> Result<(), StoreError> {
        self.store.set(&self.key, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_store::adapter::outgoing::InMemoryKeyValueStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_seed_then_saved_value() {
        let store = TypedStore::new(Arc::new(InMemoryKeyValueStore::new()));
        let doc = LocalDocument::new(store, "settings", Some("seed".to_string()));

        assert_eq!(doc.get().await.as_deref(), Some("seed"));

        doc.save(&"saved".to_string()).await.unwrap();
        assert_eq!(doc.get().await.as_deref(), Some("saved"));
    }

    #[tokio::test]
    async fn test_no_seed_no_value() {
        let store = TypedStore::new(Arc::new(InMemoryKeyValueStore::new()));
        let doc: LocalDocument<String> = LocalDocument::new(store, "profile", None);

        assert!(doc.get().await.is_none());
    }
}
