use crate::content::domain::entities::{
    Certification, Education, Experience, Profile, Project, SiteSettings, Skill,
};
use crate::shared::validation::ValidationErrors;

pub const MAX_PROFICIENCY: u8 = 100;

/// Field rules an admin-submitted record must satisfy before it is stored.
pub trait AdminRecord {
    fn validate(&self) -> Result<(), ValidationErrors>;

    /// Name that no two records of the collection may share.
    fn unique_name(&self) -> Option<&str> {
        None
    }
}

fn require(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("{field} is required"));
    }
}

impl AdminRecord for Project {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require(&mut errors, "title", &self.title);
        errors.into_result()
    }
}

impl AdminRecord for Education {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require(&mut errors, "institution", &self.institution);
        require(&mut errors, "degree", &self.degree);
        errors.into_result()
    }
}

impl AdminRecord for Experience {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require(&mut errors, "company", &self.company);
        require(&mut errors, "position", &self.position);
        errors.into_result()
    }
}

impl AdminRecord for Certification {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require(&mut errors, "name", &self.name);
        require(&mut errors, "issuer", &self.issuer);
        errors.into_result()
    }
}

impl AdminRecord for Skill {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require(&mut errors, "name", &self.name);
        if self.proficiency > MAX_PROFICIENCY {
            errors.add(
                "proficiency",
                format!("proficiency must be between 0 and {MAX_PROFICIENCY}"),
            );
        }
        errors.into_result()
    }

    fn unique_name(&self) -> Option<&str> {
        Some(self.name.trim())
    }
}

impl AdminRecord for Profile {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require(&mut errors, "name", &self.name);
        errors.into_result()
    }
}

impl AdminRecord for SiteSettings {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}
