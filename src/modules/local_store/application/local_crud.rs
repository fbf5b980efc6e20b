use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::local_store::application::ports::outgoing::StoreError;
use crate::local_store::application::typed_store::TypedStore;

/// A record that lives in a keyed collection. `id` is the CRUD key.
pub trait CrudItem: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocalCrudError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Invalid changes: {0}")]
    InvalidChanges(String),
}

/// Persistent collection stored as one JSON array under `key`.
///
/// Every mutation is a read-modify-write against the store, which stays the
/// source of truth; `data()` is only a cached view refreshed by mutations and
/// `refresh()`. Concurrent writers are last-write-wins.
pub struct LocalCrud<T: CrudItem> {
    store: TypedStore,
    key: String,
    seed: Vec<T>,
    data: RwLock<Vec<T>>,
}

impl<T: CrudItem> LocalCrud<T> {
    /// The seed is what readers see until the first write lands in the store.
    /// The cached view starts as the seed; see [`LocalCrud::open`].
    pub fn new(store: TypedStore, key: impl Into<String>, seed: Vec<T>) -> Self {
        Self {
            store,
            key: key.into(),
            data: RwLock::new(seed.clone()),
            seed,
        }
    }

    /// Like [`LocalCrud::new`] with the cached view synced from the store.
    pub async fn open(store: TypedStore, key: impl Into<String>, seed: Vec<T>) -> Self {
        let crud = Self::new(store, key, seed);
        crud.refresh().await;
        crud
    }

    /// Current collection read from the store, or the seed.
    pub async fn get(&self) -> Vec<T> {
        self.store.get_or(&self.key, self.seed.clone()).await
    }

    /// In-memory view as of the last mutation or refresh.
    pub async fn data(&self) -> Vec<T> {
        self.data.read().await.clone()
    }

    pub async fn find(&self, id: &str) -> Option<T> {
        self.get().await.into_iter().find(|item| item.id() == id)
    }

    pub async fn add(&self, item: T) -> Result<T, LocalCrudError> {
        let mut items = self.get().await;
        items.push(item.clone());
        self.persist(items).await?;
        Ok(item)
    }

    /// Shallow-merges `changes` into the record with `id`. The `id` key in
    /// `changes` is ignored. Returns `None` when no record has that id.
    pub async fn update(
        &self,
        id: &str,
        changes: &Map<String, Value>,
    ) -> Result<Option<T>, LocalCrudError> {
        let mut updated = None;
        let mut items = Vec::new();

        for item in self.get().await {
            if item.id() == id {
                let merged = merge_changes(&item, changes)?;
                updated = Some(merged.clone());
                items.push(merged);
            } else {
                items.push(item);
            }
        }

        self.persist(items).await?;
        Ok(updated)
    }

    /// Returns whether a record was removed.
    pub async fn remove(&self, id: &str) -> Result<bool, LocalCrudError> {
        let items = self.get().await;
        let before = items.len();
        let remaining: Vec<T> = items.into_iter().filter(|item| item.id() != id).collect();
        let removed = remaining.len() != before;

        self.persist(remaining).await?;
        Ok(removed)
    }

    /// Re-syncs the in-memory view from the store.
    pub async fn refresh(&self) -> Vec<T> {
        let items = self.get().await;
        *self.data.write().await = items.clone();
        items
    }

    async fn persist(&self, items: Vec<T>) -> Result<(), LocalCrudError> {
        self.store.set(&self.key, &items).await?;
        *self.data.write().await = items;
        Ok(())
    }
}

/// Shallow merge: top-level fields in `changes` replace those of `item`.
pub fn merge_changes<T: CrudItem>(
    item: &T,
    changes: &Map<String, Value>,
) -> Result<T, LocalCrudError> {
    let mut value =
        serde_json::to_value(item).map_err(|e| StoreError::Serialization(e.to_string()))?;

    let Value::Object(fields) = &mut value else {
        return Err(LocalCrudError::InvalidChanges(
            "record does not serialize to an object".to_string(),
        ));
    };

    for (field, new_value) in changes {
        if field == "id" {
            continue;
        }
        fields.insert(field.clone(), new_value.clone());
    }

    serde_json::from_value(value).map_err(|e| LocalCrudError::InvalidChanges(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_store::adapter::outgoing::InMemoryKeyValueStore;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        title: String,
        pinned: bool,
        #[serde(default)]
        tags: Vec<String>,
    }

    impl CrudItem for Note {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn note(id: &str, title: &str) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            pinned: false,
            tags: vec!["x".to_string()],
        }
    }

    fn changes(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    async fn open(seed: Vec<Note>) -> (TypedStore, LocalCrud<Note>) {
        let store = TypedStore::new(Arc::new(InMemoryKeyValueStore::new()));
        let crud = LocalCrud::open(store.clone(), "notes", seed).await;
        (store, crud)
    }

    #[tokio::test]
    async fn test_seed_is_served_until_first_write() {
        let (store, crud) = open(vec![note("1", "seeded")]).await;

        assert_eq!(crud.data().await, vec![note("1", "seeded")]);
        assert!(store.get::<Vec<Note>>("notes").await.is_none());

        crud.add(note("2", "added")).await.unwrap();

        let stored: Vec<Note> = store.get("notes").await.unwrap();
        assert_eq!(stored, vec![note("1", "seeded"), note("2", "added")]);
    }

    #[tokio::test]
    async fn test_add_then_remove() {
        let (_, crud) = open(vec![]).await;

        crud.add(note("a", "first")).await.unwrap();
        assert!(crud.data().await.iter().any(|n| n.id == "a"));

        assert!(crud.remove("a").await.unwrap());
        assert!(!crud.data().await.iter().any(|n| n.id == "a"));

        assert!(!crud.remove("a").await.unwrap());
    }

    #[tokio::test]
    async fn test_update_changes_only_given_fields() {
        let (_, crud) = open(vec![note("a", "first"), note("b", "second")]).await;

        let updated = crud
            .update("a", &changes(json!({ "pinned": true, "id": "hijacked" })))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, "a");
        assert!(updated.pinned);
        assert_eq!(updated.title, "first");
        assert_eq!(updated.tags, vec!["x".to_string()]);
        assert_eq!(crud.data().await[1], note("b", "second"));
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_none() {
        let (_, crud) = open(vec![note("a", "first")]).await;

        let updated = crud
            .update("zzz", &changes(json!({ "title": "x" })))
            .await
            .unwrap();

        assert!(updated.is_none());
        assert_eq!(crud.data().await, vec![note("a", "first")]);
    }

    #[tokio::test]
    async fn test_update_with_wrong_type_is_rejected_and_not_persisted() {
        let (store, crud) = open(vec![note("a", "first")]).await;

        let err = crud
            .update("a", &changes(json!({ "pinned": "yes" })))
            .await
            .unwrap_err();

        assert!(matches!(err, LocalCrudError::InvalidChanges(_)));
        assert!(store.get::<Vec<Note>>("notes").await.is_none());
    }

    #[tokio::test]
    async fn test_mutations_read_fresh_from_store() {
        let (store, crud) = open(vec![]).await;
        let other_tab = LocalCrud::open(store.clone(), "notes", vec![]).await;

        crud.add(note("a", "from first")).await.unwrap();
        other_tab.add(note("b", "from second")).await.unwrap();

        // The second writer saw the first writer's record.
        assert_eq!(other_tab.data().await.len(), 2);

        // The first writer's view is stale until refreshed.
        assert_eq!(crud.data().await.len(), 1);
        assert_eq!(crud.refresh().await.len(), 2);
        assert_eq!(crud.data().await.len(), 2);
    }
}
