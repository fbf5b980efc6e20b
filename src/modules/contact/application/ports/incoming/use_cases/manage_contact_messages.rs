use async_trait::async_trait;

use crate::contact::domain::entities::ContactMessage;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactMessagesError {
    #[error("Contact message not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Admin inbox operations.
#[async_trait]
pub trait ManageContactMessagesUseCase: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<ContactMessage>, ContactMessagesError>;

    async fn set_read(
        &self,
        id: &str,
        is_read: bool,
    ) -> Result<ContactMessage, ContactMessagesError>;

    async fn delete(&self, id: &str) -> Result<(), ContactMessagesError>;
}
