use regex::Regex;

/// Derives URL slugs from post titles.
#[derive(Debug, Clone)]
pub struct Slugger {
    separators: Regex,
}

impl Slugger {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            separators: Regex::new("[^a-z0-9]+")?,
        })
    }

    /// Lowercases, collapses every run of non `[a-z0-9]` into `-` and trims
    /// the dashes at both ends.
    pub fn slugify(&self, title: &str) -> String {
        let lowered = title.to_lowercase();
        self.separators
            .replace_all(&lowered, "-")
            .trim_matches('-')
            .to_string()
    }
}
