//! Skill citation ranking.
//!
//! A citation is one occurrence of a skill name in the `skills_used` list of a
//! project, experience, education or certification entry. Skills are ranked
//! by how often they are cited and grouped by category. Nothing here is
//! stored: the ranking is recomputed from the content on every call.

use std::collections::HashMap;

use serde::Serialize;

use crate::content::domain::entities::{PortfolioContent, Skill};
use crate::skills::domain::catalog::{CatalogSkill, MasterSkillCatalog};

pub const OTHER_CATEGORY: &str = "Other";
pub const DEFAULT_SKILL_ICON: &str = "code";

/// Where a cited skill's category and icon came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedSkill {
    /// Explicitly declared in the content's skill list.
    Declared(Skill),
    /// Found in the master catalog (case-insensitive).
    Known(CatalogSkill),
    /// Unknown everywhere; filed under "Other".
    Synthesized { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillSource {
    Declared,
    Catalog,
    Synthesized,
}

impl ResolvedSkill {
    fn resolve(name: &str, catalog: &MasterSkillCatalog) -> Self {
        match catalog.find(name) {
            Some(entry) => ResolvedSkill::Known(entry.clone()),
            None => ResolvedSkill::Synthesized {
                name: name.to_string(),
            },
        }
    }

    pub fn category(&self) -> &str {
        match self {
            ResolvedSkill::Declared(skill) => &skill.category,
            ResolvedSkill::Known(entry) => &entry.category,
            ResolvedSkill::Synthesized { .. } => OTHER_CATEGORY,
        }
    }

    pub fn icon(&self) -> &str {
        match self {
            ResolvedSkill::Declared(skill) => skill.icon.as_deref().unwrap_or(DEFAULT_SKILL_ICON),
            ResolvedSkill::Known(entry) => entry.icon.as_deref().unwrap_or(DEFAULT_SKILL_ICON),
            ResolvedSkill::Synthesized { .. } => DEFAULT_SKILL_ICON,
        }
    }

    pub fn source(&self) -> SkillSource {
        match self {
            ResolvedSkill::Declared(_) => SkillSource::Declared,
            ResolvedSkill::Known(_) => SkillSource::Catalog,
            ResolvedSkill::Synthesized { .. } => SkillSource::Synthesized,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedSkill {
    pub name: String,
    pub category: String,
    pub icon: String,
    pub citation_count: usize,
    /// 1-based.
    pub rank: usize,
    pub source: SkillSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCategoryGroup {
    pub category: String,
    pub skills: Vec<RankedSkill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct SkillRanking {
    /// Global rank order.
    pub ranked: Vec<RankedSkill>,
    /// Categories in order of their best-ranked skill.
    pub skills_by_category: Vec<SkillCategoryGroup>,
}

impl SkillRanking {
    pub fn get(&self, name: &str) -> Option<&RankedSkill> {
        self.ranked.iter().find(|skill| skill.name == name)
    }
}

/// Citation counts keyed by exact name, in first-seen order.
#[derive(Default)]
struct CitationTally {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl CitationTally {
    fn position(&mut self, name: &str) -> usize {
        if let Some(&pos) = self.index.get(name) {
            return pos;
        }
        let pos = self.entries.len();
        self.entries.push((name.to_string(), 0));
        self.index.insert(name.to_string(), pos);
        pos
    }

    fn seed(&mut self, name: &str) {
        self.position(name);
    }

    fn cite(&mut self, name: &str) {
        let pos = self.position(name);
        self.entries[pos].1 += 1;
    }
}

/// Ranks cited skills.
///
/// Counting uses the exact trimmed name ("Python" and "python" are two
/// counters) while catalog resolution is case-insensitive. Declared skills
/// that nobody cites are dropped. Ties keep first-seen order.
pub fn rank_skills(content: &PortfolioContent, catalog: &MasterSkillCatalog) -> SkillRanking {
    let mut tally = CitationTally::default();
    let mut details: HashMap<String, ResolvedSkill> = HashMap::new();

    for skill in &content.skills {
        tally.seed(&skill.name);
        details.insert(skill.name.clone(), ResolvedSkill::Declared(skill.clone()));
    }

    let references = content
        .projects
        .iter()
        .flat_map(|project| project.skills_used.iter())
        .chain(content.experience.iter().flat_map(|e| e.skills_used.iter()))
        .chain(content.education.iter().flat_map(|e| e.skills_used.iter()))
        .chain(content.certifications.iter().flat_map(|c| c.skills_used.iter()));

    for reference in references {
        let name = reference.trim();
        if name.is_empty() {
            continue;
        }

        tally.cite(name);

        if !details.contains_key(name) {
            details.insert(name.to_string(), ResolvedSkill::resolve(name, catalog));
        }
    }

    let mut cited: Vec<(String, usize)> = tally
        .entries
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect();

    // Stable: equal counts stay in first-seen order.
    cited.sort_by(|a, b| b.1.cmp(&a.1));

    let ranked: Vec<RankedSkill> = cited
        .into_iter()
        .enumerate()
        .map(|(position, (name, citation_count))| {
            let resolved = details
                .remove(&name)
                .unwrap_or_else(|| ResolvedSkill::resolve(&name, catalog));

            RankedSkill {
                category: resolved.category().to_string(),
                icon: resolved.icon().to_string(),
                source: resolved.source(),
                name,
                citation_count,
                rank: position + 1,
            }
        })
        .collect();

    let mut skills_by_category: Vec<SkillCategoryGroup> = Vec::new();
    for skill in &ranked {
        match skills_by_category
            .iter_mut()
            .find(|group| group.category == skill.category)
        {
            Some(group) => group.skills.push(skill.clone()),
            None => skills_by_category.push(SkillCategoryGroup {
                category: skill.category.clone(),
                skills: vec![skill.clone()],
            }),
        }
    }

    SkillRanking {
        ranked,
        skills_by_category,
    }
}
