use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// String key/value store holding whole serialized values per key.
///
/// Every write replaces the full value stored under the key; there is no
/// partial update and no isolation between concurrent writers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set_item(&self, key: &str, value: String) -> Result<(), StoreError>;

    async fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}
