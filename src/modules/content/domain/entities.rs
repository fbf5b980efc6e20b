use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::local_store::application::CrudItem;

// `display_order` is carried on most records and round-tripped as-is; no
// read path sorts by it.

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub tagline: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub resume_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
    FinancialModeling,
    Valuation,
    DataAnalysis,
    Research,
    Visualization,
    #[default]
    #[serde(other)]
    Other,
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::FinancialModeling => "financial_modeling",
            ProjectCategory::Valuation => "valuation",
            ProjectCategory::DataAnalysis => "data_analysis",
            ProjectCategory::Research => "research",
            ProjectCategory::Visualization => "visualization",
            ProjectCategory::Other => "other",
        }
    }

    pub fn from_str_lossy(raw: &str) -> Self {
        match raw {
            "financial_modeling" => ProjectCategory::FinancialModeling,
            "valuation" => ProjectCategory::Valuation,
            "data_analysis" => ProjectCategory::DataAnalysis,
            "research" => ProjectCategory::Research,
            "visualization" => ProjectCategory::Visualization,
            _ => ProjectCategory::Other,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub short_description: Option<String>,
    pub category: ProjectCategory,
    pub thumbnail_url: Option<String>,
    pub github_url: Option<String>,
    pub google_docs_url: Option<String>,
    pub google_sheets_url: Option<String>,
    pub pdf_url: Option<String>,
    pub external_url: Option<String>,
    /// Raw HTML, rendered by the front-end as-is.
    pub embed_code: Option<String>,
    pub is_featured: bool,
    pub display_order: i32,
    pub tags: Vec<String>,
    #[serde(alias = "skillsUsed")]
    pub skills_used: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "skillsUsed")]
    pub skills_used: Vec<String>,
    pub display_order: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub description: Option<String>,
    #[serde(alias = "skillsUsed")]
    pub skills_used: Vec<String>,
    pub display_order: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub credential_url: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "skillsUsed")]
    pub skills_used: Vec<String>,
    pub display_order: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
    /// 0–100
    pub proficiency: u8,
    pub icon: Option<String>,
    pub display_order: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SiteSettings {
    pub site_title: Option<String>,
    pub site_description: Option<String>,
    pub footer_text: Option<String>,
    pub show_blog: bool,
    pub show_contact_form: bool,
    pub maintenance_mode: bool,
}

/// Everything the skill ranking looks at, in one document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct PortfolioContent {
    pub profile: Option<Profile>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
    pub certifications: Vec<Certification>,
}

macro_rules! impl_crud_item {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CrudItem for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

impl_crud_item!(Project, Education, Experience, Certification, Skill);
