use std::sync::Arc;

use async_trait::async_trait;

use crate::content::application::ports::outgoing::ContentQuery;
use crate::skills::application::ports::incoming::use_cases::{
    GetSkillRankingError, GetSkillRankingUseCase,
};
use crate::skills::domain::catalog::MasterSkillCatalog;
use crate::skills::domain::ranking::{rank_skills, SkillRanking};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct GetSkillRankingService {
    content: Arc<dyn ContentQuery>,
    catalog: Arc<MasterSkillCatalog>,
}

impl GetSkillRankingService {
    pub fn new(content: Arc<dyn ContentQuery>, catalog: Arc<MasterSkillCatalog>) -> Self {
        Self { content, catalog }
    }
}

#[async_trait]
impl GetSkillRankingUseCase for GetSkillRankingService {
    async fn execute(&self) -> Result<SkillRanking, GetSkillRankingError> {
        let content = self
            .content
            .get_content()
            .await
            .map_err(|e| GetSkillRankingError::QueryFailed(e.to_string()))?;

        Ok(rank_skills(&content, &self.catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::application::ports::outgoing::{ContentQueryError, MockContentQuery};
    use crate::content::domain::entities::{PortfolioContent, Project};
    use crate::skills::domain::catalog::CatalogSkill;

    fn catalog() -> Arc<MasterSkillCatalog> {
        Arc::new(MasterSkillCatalog::new(vec![CatalogSkill {
            name: "Excel".to_string(),
            category: "Tools".to_string(),
            icon: None,
        }]))
    }

    // =====================================================
    // Success
    // =====================================================

    #[tokio::test]
    async fn test_execute_ranks_current_content() {
        let mut content = MockContentQuery::new();
        content.expect_get_content().times(1).returning(|| {
            Ok(PortfolioContent {
                projects: vec![Project {
                    id: "p1".to_string(),
                    skills_used: vec!["Excel".to_string()],
                    ..Default::default()
                }],
                ..Default::default()
            })
        });

        let service = GetSkillRankingService::new(Arc::new(content), catalog());
        let ranking = service.execute().await.unwrap();

        let excel = ranking.get("Excel").unwrap();
        assert_eq!(excel.category, "Tools");
        assert_eq!(excel.rank, 1);
    }

    // =====================================================
    // Error mapping
    // =====================================================

    #[tokio::test]
    async fn test_execute_maps_query_error() {
        let mut content = MockContentQuery::new();
        content
            .expect_get_content()
            .returning(|| Err(ContentQueryError::DatabaseError("db down".to_string())));

        let service = GetSkillRankingService::new(Arc::new(content), catalog());
        let err = service.execute().await.unwrap_err();

        assert!(matches!(err, GetSkillRankingError::QueryFailed(msg) if msg.contains("db down")));
    }
}
