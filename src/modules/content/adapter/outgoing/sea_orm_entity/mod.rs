pub mod certifications;
pub mod education;
pub mod experience;
pub mod profile;
pub mod projects;
pub mod site_settings;
pub mod skills;

use sea_orm::entity::prelude::Json;

use crate::content::application::ports::outgoing::ContentQueryError;

/// JSONB string arrays (`tags`, `skills_used`). `null` reads as empty.
pub(crate) fn string_list(value: &Json) -> Result<Vec<String>, ContentQueryError> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(value.clone())
        .map_err(|e| ContentQueryError::SerializationError(e.to_string()))
}
