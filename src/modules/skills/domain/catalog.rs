use serde::{Deserialize, Serialize};

/// One entry of the master skill catalog.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogSkill {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Canonical list used to resolve free-text skill references.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct MasterSkillCatalog {
    #[serde(default)]
    pub skills: Vec<CatalogSkill>,
}

impl MasterSkillCatalog {
    pub fn new(skills: Vec<CatalogSkill>) -> Self {
        Self { skills }
    }

    /// Case-insensitive lookup; the first matching entry wins.
    pub fn find(&self, name: &str) -> Option<&CatalogSkill> {
        let wanted = name.to_lowercase();
        self.skills
            .iter()
            .find(|entry| entry.name.to_lowercase() == wanted)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
