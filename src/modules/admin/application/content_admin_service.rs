use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;
use uuid::Uuid;

use crate::admin::domain::{AdminRecord, ContentCollection};
use crate::content::adapter::outgoing::LocalContentStores;
use crate::content::domain::entities::{Profile, SiteSettings};
use crate::local_store::application::local_crud::merge_changes;
use crate::local_store::application::{CrudItem, LocalCrud, LocalCrudError};
use crate::local_store::application::ports::outgoing::StoreError;
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentAdminError {
    #[error("Record not found")]
    NotFound,

    #[error("A record with id {0} already exists")]
    DuplicateId(String),

    #[error("A record named {0} already exists")]
    DuplicateName(String),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<LocalCrudError> for ContentAdminError {
    fn from(err: LocalCrudError) -> Self {
        match err {
            LocalCrudError::InvalidChanges(msg) => ContentAdminError::InvalidRecord(msg),
            LocalCrudError::Store(e) => ContentAdminError::Store(e.to_string()),
        }
    }
}

impl From<StoreError> for ContentAdminError {
    fn from(err: StoreError) -> Self {
        ContentAdminError::Store(err.to_string())
    }
}

/// Runs `$body` with `$crud` bound to the store of `$collection`.
macro_rules! with_collection {
    ($stores:expr, $collection:expr, |$crud:ident| $body:expr) => {
        match $collection {
            ContentCollection::Projects => {
                let $crud = &$stores.projects;
                $body
            }
            ContentCollection::Education => {
                let $crud = &$stores.education;
                $body
            }
            ContentCollection::Experience => {
                let $crud = &$stores.experience;
                $body
            }
            ContentCollection::Skills => {
                let $crud = &$stores.skills;
                $body
            }
            ContentCollection::Certifications => {
                let $crud = &$stores.certifications;
                $body
            }
        }
    };
}

/// Admin edits of locally persisted content. Records cross this boundary as
/// JSON so one set of routes serves every collection.
pub struct ContentAdminService {
    stores: Arc<LocalContentStores>,
}

impl ContentAdminService {
    pub fn new(stores: Arc<LocalContentStores>) -> Self {
        Self { stores }
    }

    pub async fn list(&self, collection: ContentCollection) -> Result<Value, ContentAdminError> {
        with_collection!(self.stores, collection, |crud| to_json(&crud.get().await))
    }

    /// Generates an id when the body has none.
    pub async fn create(
        &self,
        collection: ContentCollection,
        fields: Map<String, Value>,
    ) -> Result<Value, ContentAdminError> {
        let created =
            with_collection!(self.stores, collection, |crud| create_record(crud, fields).await)?;
        info!(%collection, "Content record created");
        Ok(created)
    }

    /// Shallow merge of `changes`; `id` cannot be changed.
    pub async fn update(
        &self,
        collection: ContentCollection,
        id: &str,
        changes: &Map<String, Value>,
    ) -> Result<Value, ContentAdminError> {
        with_collection!(self.stores, collection, |crud| update_record(crud, id, changes).await)
    }

    pub async fn delete(
        &self,
        collection: ContentCollection,
        id: &str,
    ) -> Result<(), ContentAdminError> {
        let removed = with_collection!(self.stores, collection, |crud| crud.remove(id).await)?;
        if !removed {
            return Err(ContentAdminError::NotFound);
        }
        info!(%collection, id, "Content record deleted");
        Ok(())
    }

    /// Re-reads the collection from storage into the cached view.
    pub async fn refresh(&self, collection: ContentCollection) -> Result<Value, ContentAdminError> {
        with_collection!(self.stores, collection, |crud| to_json(&crud.refresh().await))
    }

    pub async fn save_profile(&self, profile: Profile) -> Result<Profile, ContentAdminError> {
        profile.validate()?;
        self.stores.profile.save(&profile).await?;
        Ok(profile)
    }

    pub async fn save_settings(
        &self,
        settings: SiteSettings,
    ) -> Result<SiteSettings, ContentAdminError> {
        settings.validate()?;
        self.stores.settings.save(&settings).await?;
        Ok(settings)
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, ContentAdminError> {
    serde_json::to_value(value).map_err(|e| ContentAdminError::Store(e.to_string()))
}

async fn create_record<T: CrudItem + AdminRecord>(
    crud: &LocalCrud<T>,
    mut fields: Map<String, Value>,
) -> Result<Value, ContentAdminError> {
    let has_id = fields
        .get("id")
        .and_then(Value::as_str)
        .is_some_and(|id| !id.trim().is_empty());
    if !has_id {
        fields.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
    }

    let record: T = serde_json::from_value(Value::Object(fields))
        .map_err(|e| ContentAdminError::InvalidRecord(e.to_string()))?;
    record.validate()?;

    if crud.find(record.id()).await.is_some() {
        return Err(ContentAdminError::DuplicateId(record.id().to_string()));
    }
    ensure_unique_name(crud, &record).await?;

    let stored = crud.add(record).await?;
    to_json(&stored)
}

async fn update_record<T: CrudItem + AdminRecord>(
    crud: &LocalCrud<T>,
    id: &str,
    changes: &Map<String, Value>,
) -> Result<Value, ContentAdminError> {
    let current = crud.find(id).await.ok_or(ContentAdminError::NotFound)?;
    let merged = merge_changes(&current, changes)?;
    merged.validate()?;
    ensure_unique_name(crud, &merged).await?;

    let updated = crud
        .update(id, changes)
        .await?
        .ok_or(ContentAdminError::NotFound)?;
    to_json(&updated)
}

/// Fails when another record of the collection already uses `record`'s name.
async fn ensure_unique_name<T: CrudItem + AdminRecord>(
    crud: &LocalCrud<T>,
    record: &T,
) -> Result<(), ContentAdminError> {
    let Some(name) = record.unique_name() else {
        return Ok(());
    };
    let taken = crud
        .get()
        .await
        .iter()
        .any(|other| other.id() != record.id() && other.unique_name() == Some(name));
    if taken {
        return Err(ContentAdminError::DuplicateName(name.to_string()));
    }
    Ok(())
}
