pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{admin, blog, contact, content, local_store, skills};

use crate::admin::application::ContentAdminService;
use crate::api::ApiDoc;
use crate::blog::application::{BlogStore, BlogUseCases};
use crate::blog::domain::slug::Slugger;
use crate::config::{AppConfig, ConfigError, ContentMode, StoreBackend};
use crate::contact::adapter::outgoing::{
    ContactMessageRepositoryLocal, ContactMessageRepositoryPostgres,
};
use crate::contact::application::ports::incoming::use_cases::{
    ManageContactMessagesUseCase, SubmitContactMessageUseCase,
};
use crate::contact::application::ports::outgoing::ContactMessageRepository;
use crate::contact::application::services::{
    ManageContactMessagesService, SubmitContactMessageService,
};
use crate::content::adapter::outgoing::{
    ContentQueryPostgres, LocalContentStores, StaticContentLoader, StaticContentRepository,
};
use crate::content::application::ports::outgoing::ContentQuery;
use crate::local_store::adapter::outgoing::{
    FileKeyValueStore, InMemoryKeyValueStore, RedisKeyValueStore,
};
use crate::local_store::application::ports::outgoing::KeyValueStore;
use crate::local_store::application::TypedStore;
use crate::shared::api::{custom_json_config, custom_query_config};
use crate::skills::adapter::outgoing::load_skill_catalog;
use crate::skills::application::ports::incoming::use_cases::GetSkillRankingUseCase;
use crate::skills::application::services::GetSkillRankingService;
use crate::skills::domain::catalog::MasterSkillCatalog;

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content_mode: ContentMode,
    pub content: Arc<dyn ContentQuery>,
    /// Only available in static mode; hosted content is read-only here.
    pub content_admin: Option<Arc<ContentAdminService>>,
    pub skill_catalog: Arc<MasterSkillCatalog>,
    pub skill_ranking: Arc<dyn GetSkillRankingUseCase>,
    pub submit_contact_message: Arc<dyn SubmitContactMessageUseCase>,
    pub contact_messages: Arc<dyn ManageContactMessagesUseCase>,
    pub blog: Arc<dyn BlogUseCases>,
    pub store: TypedStore,
    pub database: Option<Arc<DatabaseConnection>>,
}

#[cfg(not(tarpaulin_include))]
async fn connect_database(url: &str) -> anyhow::Result<Arc<DatabaseConnection>> {
    let mut opt = ConnectOptions::new(url.to_string());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await?;
    Ok(Arc::new(conn))
}

#[cfg(not(tarpaulin_include))]
fn build_key_value_store(backend: &StoreBackend) -> anyhow::Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match backend {
        StoreBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
        StoreBackend::File(path) => Arc::new(FileKeyValueStore::new(path.clone())),
        StoreBackend::Redis(url) => {
            let pool = Config::from_url(url).create_pool(Some(Runtime::Tokio1))?;
            Arc::new(RedisKeyValueStore::new(Arc::new(pool)))
        }
    };
    Ok(store)
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()?;
    info!(
        content_mode = config.content_mode.as_str(),
        content_dir = %config.content_dir.display(),
        "Configuration loaded"
    );

    let store = TypedStore::new(build_key_value_store(&config.store_backend)?);
    let skill_catalog = Arc::new(load_skill_catalog(&config.skills_catalog_path).await);
    let blog: Arc<dyn BlogUseCases> =
        Arc::new(BlogStore::new(store.clone(), Slugger::new()?));

    let (content, content_admin, contact_repo, database): (
        Arc<dyn ContentQuery>,
        Option<Arc<ContentAdminService>>,
        Arc<dyn ContactMessageRepository>,
        Option<Arc<DatabaseConnection>>,
    ) = match config.content_mode {
        ContentMode::Hosted => {
            let url = config
                .database_url
                .as_deref()
                .ok_or(ConfigError::Missing("DATABASE_URL"))?;
            let db = connect_database(url).await?;
            (
                Arc::new(ContentQueryPostgres::new(Arc::clone(&db))),
                None,
                Arc::new(ContactMessageRepositoryPostgres::new(Arc::clone(&db))),
                Some(db),
            )
        }
        ContentMode::Static => {
            let loader = StaticContentLoader::new(config.content_dir.clone());
            let stores = Arc::new(LocalContentStores::seeded(store.clone(), &loader).await);
            (
                Arc::new(StaticContentRepository::new(Arc::clone(&stores))),
                Some(Arc::new(ContentAdminService::new(stores))),
                Arc::new(ContactMessageRepositoryLocal::new(store.clone())),
                None,
            )
        }
    };

    let skill_ranking =
        GetSkillRankingService::new(Arc::clone(&content), Arc::clone(&skill_catalog));
    let submit_contact_message = SubmitContactMessageService::new(Arc::clone(&contact_repo));
    let contact_messages = ManageContactMessagesService::new(contact_repo);

    let state = AppState {
        content_mode: config.content_mode,
        content,
        content_admin,
        skill_catalog,
        skill_ranking: Arc::new(skill_ranking),
        submit_contact_message: Arc::new(submit_contact_message),
        contact_messages: Arc::new(contact_messages),
        blog,
        store,
        database,
    };

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Content
    cfg.service(crate::content::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_settings_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_project_by_id_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_education_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_experience_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_certifications_handler);
    // Skills
    cfg.service(crate::skills::adapter::incoming::web::routes::get_skill_ranking_handler);
    cfg.service(crate::skills::adapter::incoming::web::routes::get_skill_catalog_handler);
    // Blog
    cfg.service(crate::blog::adapter::incoming::web::routes::get_published_blog_posts_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::get_blog_post_by_slug_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::get_page_customization_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_message_handler);
    // Admin: blog and pages
    cfg.service(crate::blog::adapter::incoming::web::routes::get_admin_blog_posts_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::get_admin_blog_post_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::save_blog_post_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::delete_blog_post_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::get_page_customizations_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::save_page_customization_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::delete_page_customization_handler);
    // Admin: contact messages
    cfg.service(crate::contact::adapter::incoming::web::routes::get_contact_messages_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::update_contact_message_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::delete_contact_message_handler);
    // Admin: content
    cfg.service(crate::admin::adapter::incoming::web::routes::save_profile_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::save_settings_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::refresh_content_collection_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::list_content_records_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::create_content_record_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::update_content_record_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::delete_content_record_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
