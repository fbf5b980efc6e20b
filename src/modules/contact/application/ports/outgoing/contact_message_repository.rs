use async_trait::async_trait;

use crate::contact::domain::entities::ContactMessage;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Store error: {0}")]
    StoreError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn insert(&self, message: ContactMessage)
        -> Result<ContactMessage, ContactRepositoryError>;

    async fn list(&self) -> Result<Vec<ContactMessage>, ContactRepositoryError>;

    /// `None` when no message has that id.
    async fn set_read(
        &self,
        id: &str,
        is_read: bool,
    ) -> Result<Option<ContactMessage>, ContactRepositoryError>;

    /// Returns whether a message was removed.
    async fn delete(&self, id: &str) -> Result<bool, ContactRepositoryError>;
}
