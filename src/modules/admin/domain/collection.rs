use std::fmt;

/// Editable content collections, as named in admin URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCollection {
    Projects,
    Education,
    Experience,
    Skills,
    Certifications,
}

impl ContentCollection {
    pub const ALL: [ContentCollection; 5] = [
        ContentCollection::Projects,
        ContentCollection::Education,
        ContentCollection::Experience,
        ContentCollection::Skills,
        ContentCollection::Certifications,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentCollection::Projects => "projects",
            ContentCollection::Education => "education",
            ContentCollection::Experience => "experience",
            ContentCollection::Skills => "skills",
            ContentCollection::Certifications => "certifications",
        }
    }
}

impl fmt::Display for ContentCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
