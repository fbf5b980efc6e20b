use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use uuid::Uuid;

use super::sea_orm_entity::{
    ActiveModel as ContactMessageActiveModel, Column as ContactMessageColumn,
    Entity as ContactMessageEntity, Model as ContactMessageModel,
};
use crate::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactRepositoryError,
};
use crate::contact::domain::entities::ContactMessage;

#[derive(Debug, Clone)]
pub struct ContactMessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactMessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(err.to_string())
}

#[async_trait]
impl ContactMessageRepository for ContactMessageRepositoryPostgres {
    async fn insert(
        &self,
        message: ContactMessage,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        let id = Uuid::from_str(&message.id).unwrap_or_else(|_| Uuid::new_v4());

        let active = ContactMessageActiveModel {
            id: Set(id),
            name: Set(message.name),
            email: Set(message.email),
            message: Set(message.message),
            is_read: Set(message.is_read),
            created_at: Set(message.created_at.into()),
        };

        let inserted: ContactMessageModel = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn list(&self) -> Result<Vec<ContactMessage>, ContactRepositoryError> {
        let models = ContactMessageEntity::find()
            .order_by_desc(ContactMessageColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(ContactMessageModel::to_domain).collect())
    }

    async fn set_read(
        &self,
        id: &str,
        is_read: bool,
    ) -> Result<Option<ContactMessage>, ContactRepositoryError> {
        let Ok(message_id) = Uuid::from_str(id) else {
            return Ok(None);
        };

        let active = ContactMessageActiveModel {
            id: Set(message_id),
            is_read: Set(is_read),
            ..Default::default()
        };

        match active.update(&*self.db).await {
            Ok(model) => Ok(Some(model.to_domain())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(map_db_err(e)),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, ContactRepositoryError> {
        let Ok(message_id) = Uuid::from_str(id) else {
            return Ok(false);
        };

        let result = ContactMessageEntity::delete_by_id(message_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}
