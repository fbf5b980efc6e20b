use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::contact::application::ports::incoming::use_cases::{
    SubmitContactMessageCommand, SubmitContactMessageError, SubmitContactMessageUseCase,
};
use crate::contact::application::ports::outgoing::ContactMessageRepository;
use crate::contact::domain::entities::ContactMessage;

pub struct SubmitContactMessageService {
    repository: Arc<dyn ContactMessageRepository>,
}

impl SubmitContactMessageService {
    pub fn new(repository: Arc<dyn ContactMessageRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SubmitContactMessageUseCase for SubmitContactMessageService {
    async fn execute(
        &self,
        command: SubmitContactMessageCommand,
    ) -> Result<ContactMessage, SubmitContactMessageError> {
        let message = ContactMessage {
            id: Uuid::new_v4().to_string(),
            name: command.name().to_string(),
            email: command.email().to_string(),
            message: command.message().to_string(),
            is_read: false,
            created_at: Utc::now(),
        };

        let stored = self
            .repository
            .insert(message)
            .await
            .map_err(|e| SubmitContactMessageError::RepositoryError(e.to_string()))?;

        info!(message_id = %stored.id, "Contact message received");
        Ok(stored)
    }
}
