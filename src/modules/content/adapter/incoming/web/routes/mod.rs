pub mod get_profile;
pub mod get_projects;
pub mod get_resume_sections;

pub use get_profile::{get_profile_handler, get_settings_handler};
pub use get_projects::{get_project_by_id_handler, get_projects_handler};
pub use get_resume_sections::{
    get_certifications_handler, get_education_handler, get_experience_handler, get_skills_handler,
};

use actix_web::HttpResponse;
use tracing::error;

use crate::content::application::ports::outgoing::ContentQueryError;
use crate::shared::api::ApiResponse;

pub(crate) fn map_content_error(context: &str, err: ContentQueryError) -> HttpResponse {
    error!("Content query error loading {}: {}", context, err);
    ApiResponse::internal_error()
}
