use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::local_store::application::CrudItem;

/// A message left through the public contact form. Only `is_read` ever
/// changes after creation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl CrudItem for ContactMessage {
    fn id(&self) -> &str {
        &self.id
    }
}
