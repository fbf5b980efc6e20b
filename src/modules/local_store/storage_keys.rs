//! Key names of the persistent key/value entries.

pub const PROFILE: &str = "portfolio_profile";
pub const PROJECTS: &str = "portfolio_projects";
pub const EDUCATION: &str = "portfolio_education";
pub const EXPERIENCE: &str = "portfolio_experience";
pub const SKILLS: &str = "portfolio_skills";
pub const CERTIFICATIONS: &str = "portfolio_certifications";
pub const SETTINGS: &str = "portfolio_settings";
pub const CONTACT_MESSAGES: &str = "portfolio_contact_messages";
pub const BLOG_POSTS: &str = "portfolio_blog_posts";
pub const PAGE_CUSTOMIZATIONS: &str = "portfolio_page_customizations";
