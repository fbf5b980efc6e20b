mod get_skill_ranking;

pub use get_skill_ranking::{GetSkillRankingError, GetSkillRankingUseCase};
