use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::blog::domain::entities::{
    BlogPost, BlogStatus, PageCustomization, SaveBlogPostInput, SavePageCustomizationInput,
};
use crate::contact::adapter::incoming::web::routes::{
    SubmitContactMessageRequest, UpdateContactMessageRequest,
};
use crate::contact::domain::entities::ContactMessage;
use crate::shared::validation::FieldError;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Portfolio content, skill ranking, blog and contact endpoints"
    ),
    paths(
        // Content
        crate::content::adapter::incoming::web::routes::get_profile::get_profile_handler,
        crate::content::adapter::incoming::web::routes::get_profile::get_settings_handler,
        crate::content::adapter::incoming::web::routes::get_projects::get_projects_handler,
        crate::content::adapter::incoming::web::routes::get_projects::get_project_by_id_handler,
        crate::content::adapter::incoming::web::routes::get_resume_sections::get_education_handler,
        crate::content::adapter::incoming::web::routes::get_resume_sections::get_experience_handler,
        crate::content::adapter::incoming::web::routes::get_resume_sections::get_skills_handler,
        crate::content::adapter::incoming::web::routes::get_resume_sections::get_certifications_handler,

        // Skills
        crate::skills::adapter::incoming::web::routes::get_skill_ranking::get_skill_ranking_handler,
        crate::skills::adapter::incoming::web::routes::get_skill_catalog::get_skill_catalog_handler,

        // Blog
        crate::blog::adapter::incoming::web::routes::get_blog_posts::get_published_blog_posts_handler,
        crate::blog::adapter::incoming::web::routes::get_blog_posts::get_blog_post_by_slug_handler,
        crate::blog::adapter::incoming::web::routes::get_page_customization::get_page_customization_handler,

        // Contact
        crate::contact::adapter::incoming::web::routes::submit_contact_message::submit_contact_message_handler,

        // Admin
        crate::admin::adapter::incoming::web::routes::content_collections::list_content_records_handler,
        crate::admin::adapter::incoming::web::routes::content_collections::create_content_record_handler,
        crate::admin::adapter::incoming::web::routes::content_collections::update_content_record_handler,
        crate::admin::adapter::incoming::web::routes::content_collections::delete_content_record_handler,
        crate::admin::adapter::incoming::web::routes::content_collections::refresh_content_collection_handler,
        crate::admin::adapter::incoming::web::routes::content_singletons::save_profile_handler,
        crate::admin::adapter::incoming::web::routes::content_singletons::save_settings_handler,
        crate::contact::adapter::incoming::web::routes::admin_contact_messages::get_contact_messages_handler,
        crate::contact::adapter::incoming::web::routes::admin_contact_messages::update_contact_message_handler,
        crate::contact::adapter::incoming::web::routes::admin_contact_messages::delete_contact_message_handler,
        crate::blog::adapter::incoming::web::routes::admin_blog_posts::get_admin_blog_posts_handler,
        crate::blog::adapter::incoming::web::routes::admin_blog_posts::get_admin_blog_post_handler,
        crate::blog::adapter::incoming::web::routes::admin_blog_posts::save_blog_post_handler,
        crate::blog::adapter::incoming::web::routes::admin_blog_posts::delete_blog_post_handler,
        crate::blog::adapter::incoming::web::routes::admin_page_customizations::get_page_customizations_handler,
        crate::blog::adapter::incoming::web::routes::admin_page_customizations::save_page_customization_handler,
        crate::blog::adapter::incoming::web::routes::admin_page_customizations::delete_page_customization_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            FieldError,

            // Blog
            BlogPost,
            BlogStatus,
            PageCustomization,
            SaveBlogPostInput,
            SavePageCustomizationInput,

            // Contact
            ContactMessage,
            SubmitContactMessageRequest,
            UpdateContactMessageRequest,
        )
    ),
    tags(
        (name = "content", description = "Portfolio content"),
        (name = "skills", description = "Skill ranking and catalog"),
        (name = "blog", description = "Blog posts and page customizations"),
        (name = "contact", description = "Contact form"),
        (name = "admin", description = "Content administration"),
    )
)]
pub struct ApiDoc;
