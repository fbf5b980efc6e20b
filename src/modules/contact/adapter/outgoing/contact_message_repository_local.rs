use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Map};

use crate::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactRepositoryError,
};
use crate::contact::domain::entities::ContactMessage;
use crate::local_store::application::{LocalCrud, LocalCrudError, TypedStore};
use crate::local_store::storage_keys;

/// Inbox kept in the key/value store under `portfolio_contact_messages`.
#[derive(Clone)]
pub struct ContactMessageRepositoryLocal {
    messages: Arc<LocalCrud<ContactMessage>>,
}

impl ContactMessageRepositoryLocal {
    pub fn new(store: TypedStore) -> Self {
        let messages = LocalCrud::new(store, storage_keys::CONTACT_MESSAGES, Vec::new());
        Self {
            messages: Arc::new(messages),
        }
    }
}

fn map_crud_err(e: LocalCrudError) -> ContactRepositoryError {
    ContactRepositoryError::StoreError(e.to_string())
}

#[async_trait]
impl ContactMessageRepository for ContactMessageRepositoryLocal {
    async fn insert(
        &self,
        message: ContactMessage,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        self.messages.add(message).await.map_err(map_crud_err)
    }

    async fn list(&self) -> Result<Vec<ContactMessage>, ContactRepositoryError> {
        Ok(self.messages.get().await)
    }

    async fn set_read(
        &self,
        id: &str,
        is_read: bool,
    ) -> Result<Option<ContactMessage>, ContactRepositoryError> {
        let mut changes = Map::new();
        changes.insert("is_read".to_string(), json!(is_read));

        self.messages
            .update(id, &changes)
            .await
            .map_err(map_crud_err)
    }

    async fn delete(&self, id: &str) -> Result<bool, ContactRepositoryError> {
        self.messages.remove(id).await.map_err(map_crud_err)
    }
}
