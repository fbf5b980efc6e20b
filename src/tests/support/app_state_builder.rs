use std::sync::Arc;

use actix_web::web;

use crate::admin::application::ContentAdminService;
use crate::blog::application::{BlogStore, BlogUseCases};
use crate::blog::domain::slug::Slugger;
use crate::config::ContentMode;
use crate::contact::adapter::outgoing::ContactMessageRepositoryLocal;
use crate::contact::application::ports::incoming::use_cases::{
    ManageContactMessagesUseCase, SubmitContactMessageUseCase,
};
use crate::contact::application::ports::outgoing::ContactMessageRepository;
use crate::contact::application::services::{
    ManageContactMessagesService, SubmitContactMessageService,
};
use crate::content::adapter::outgoing::{
    LocalContentStores, StaticContentLoader, StaticContentRepository,
};
use crate::content::application::ports::outgoing::ContentQuery;
use crate::local_store::adapter::outgoing::InMemoryKeyValueStore;
use crate::local_store::application::TypedStore;
use crate::skills::application::ports::incoming::use_cases::GetSkillRankingUseCase;
use crate::skills::application::services::GetSkillRankingService;
use crate::skills::domain::catalog::MasterSkillCatalog;
use crate::tests::support::stubs::StubContentQuery;
use crate::AppState;

/// Builds an `AppState` over an in-memory key/value store.
///
/// By default content comes from an empty [`StubContentQuery`] and admin
/// content routes behave as in hosted mode. `with_local_content` switches to
/// static mode with empty seeds. Contact messages and the blog always use the
/// in-memory store unless overridden.
pub struct TestAppStateBuilder {
    store: TypedStore,
    content_mode: ContentMode,
    content: Arc<dyn ContentQuery>,
    local_content: Option<Arc<LocalContentStores>>,
    skill_catalog: MasterSkillCatalog,
    skill_ranking: Option<Arc<dyn GetSkillRankingUseCase>>,
    submit_contact_message: Option<Arc<dyn SubmitContactMessageUseCase>>,
    blog: Option<Arc<dyn BlogUseCases>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            store: TypedStore::new(Arc::new(InMemoryKeyValueStore::new())),
            content_mode: ContentMode::Hosted,
            content: Arc::new(StubContentQuery::default()),
            local_content: None,
            skill_catalog: MasterSkillCatalog::default(),
            skill_ranking: None,
            submit_contact_message: None,
            blog: None,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_content(mut self, content: impl ContentQuery + 'static) -> Self {
        self.content = Arc::new(content);
        self
    }

    /// Static mode: content is served from locally stored collections seeded
    /// from an empty content directory.
    pub async fn with_local_content(mut self) -> Self {
        let loader = StaticContentLoader::new("tests/no-such-content-dir");
        let stores = Arc::new(LocalContentStores::seeded(self.store.clone(), &loader).await);

        self.content_mode = ContentMode::Static;
        self.content = Arc::new(StaticContentRepository::new(Arc::clone(&stores)));
        self.local_content = Some(stores);
        self
    }

    pub fn with_skill_catalog(mut self, catalog: MasterSkillCatalog) -> Self {
        self.skill_catalog = catalog;
        self
    }

    pub fn with_skill_ranking(mut self, uc: impl GetSkillRankingUseCase + 'static) -> Self {
        self.skill_ranking = Some(Arc::new(uc));
        self
    }

    pub fn with_submit_contact_message(
        mut self,
        uc: impl SubmitContactMessageUseCase + 'static,
    ) -> Self {
        self.submit_contact_message = Some(Arc::new(uc));
        self
    }

    pub fn with_blog(mut self, uc: impl BlogUseCases + 'static) -> Self {
        self.blog = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let skill_catalog = Arc::new(self.skill_catalog);
        let skill_ranking = self.skill_ranking.unwrap_or_else(|| {
            Arc::new(GetSkillRankingService::new(
                Arc::clone(&self.content),
                Arc::clone(&skill_catalog),
            ))
        });

        let contact_repo: Arc<dyn ContactMessageRepository> =
            Arc::new(ContactMessageRepositoryLocal::new(self.store.clone()));
        let submit_contact_message = self.submit_contact_message.unwrap_or_else(|| {
            Arc::new(SubmitContactMessageService::new(Arc::clone(&contact_repo)))
        });
        let contact_messages: Arc<dyn ManageContactMessagesUseCase> =
            Arc::new(ManageContactMessagesService::new(contact_repo));

        let blog = self.blog.unwrap_or_else(|| {
            Arc::new(BlogStore::new(
                self.store.clone(),
                Slugger::new().expect("slug pattern compiles"),
            ))
        });

        web::Data::new(AppState {
            content_mode: self.content_mode,
            content: self.content,
            content_admin: self
                .local_content
                .map(|stores| Arc::new(ContentAdminService::new(stores))),
            skill_catalog,
            skill_ranking,
            submit_contact_message,
            contact_messages,
            blog,
            store: self.store,
            database: None,
        })
    }
}
