use async_trait::async_trait;

use crate::skills::domain::ranking::SkillRanking;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSkillRankingError {
    #[error("Content query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSkillRankingUseCase: Send + Sync {
    async fn execute(&self) -> Result<SkillRanking, GetSkillRankingError>;
}
