mod get_skill_ranking_service;

pub use get_skill_ranking_service::GetSkillRankingService;
