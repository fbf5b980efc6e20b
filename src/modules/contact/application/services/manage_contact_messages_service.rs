use std::sync::Arc;

use async_trait::async_trait;

use crate::contact::application::ports::incoming::use_cases::{
    ContactMessagesError, ManageContactMessagesUseCase,
};
use crate::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactRepositoryError,
};
use crate::contact::domain::entities::ContactMessage;

pub struct ManageContactMessagesService {
    repository: Arc<dyn ContactMessageRepository>,
}

impl ManageContactMessagesService {
    pub fn new(repository: Arc<dyn ContactMessageRepository>) -> Self {
        Self { repository }
    }
}

fn map_repo_err(e: ContactRepositoryError) -> ContactMessagesError {
    ContactMessagesError::RepositoryError(e.to_string())
}

#[async_trait]
impl ManageContactMessagesUseCase for ManageContactMessagesService {
    async fn list(&self) -> Result<Vec<ContactMessage>, ContactMessagesError> {
        let mut messages = self.repository.list().await.map_err(map_repo_err)?;
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }

    async fn set_read(
        &self,
        id: &str,
        is_read: bool,
    ) -> Result<ContactMessage, ContactMessagesError> {
        self.repository
            .set_read(id, is_read)
            .await
            .map_err(map_repo_err)?
            .ok_or(ContactMessagesError::NotFound)
    }

    async fn delete(&self, id: &str) -> Result<(), ContactMessagesError> {
        match self.repository.delete(id).await.map_err(map_repo_err)? {
            true => Ok(()),
            false => Err(ContactMessagesError::NotFound),
        }
    }
}
