//! Sample vocabularies the mock generator draws from.
//!
//! Built-in lists cover the demo; `VOCABULARY_PATH` can point at a JSON file with
//! the same shape to swap them. Every list is validated non-empty at load time so
//! the generator never indexes into an empty slice.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fewest skills a record may carry.
pub const MIN_SKILLS: usize = 4;
/// Most skills a record may carry.
pub const MAX_SKILLS: usize = 9;

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("vocabulary list '{0}' is empty")]
    Empty(&'static str),

    #[error("vocabulary needs at least 4 skills, found {0}")]
    TooFewSkills(usize),

    #[error("name '{0}' must be non-blank without surrounding whitespace")]
    UntrimmedName(String),

    #[error("duplicate skill '{0}' in vocabulary")]
    DuplicateSkill(String),

    #[error("failed to read vocabulary file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse vocabulary file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vocabulary {
    pub names: Vec<String>,
    pub skills: Vec<String>,
    pub companies: Vec<String>,
    pub positions: Vec<String>,
    pub institutions: Vec<String>,
    pub degrees: Vec<String>,
    pub fields: Vec<String>,
    pub email_domains: Vec<String>,
    pub location: String,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            names: owned(&[
                "Alex Johnson",
                "Jamie Smith",
                "Taylor Williams",
                "Morgan Chen",
                "Jordan Garcia",
            ]),
            skills: owned(&[
                "JavaScript",
                "Python",
                "React",
                "TypeScript",
                "Node.js",
                "SQL",
                "Data Analysis",
                "Project Management",
                "AWS",
                "DevOps",
                "UI/UX",
                "Agile Methodology",
            ]),
            companies: owned(&[
                "TechCorp Solutions",
                "Innovative Systems Inc",
                "DataTech Global",
                "NextGen Software",
                "Cloud Solutions Group",
            ]),
            positions: owned(&[
                "Software Engineer",
                "Data Scientist",
                "Product Manager",
                "UX Designer",
            ]),
            institutions: owned(&[
                "State University",
                "Tech Institute",
                "University of Technology",
                "International University",
                "National College",
            ]),
            degrees: owned(&["Bachelor of Science", "Master of Science", "Bachelor of Arts"]),
            fields: owned(&[
                "Computer Science",
                "Information Technology",
                "Data Science",
            ]),
            email_domains: owned(&["gmail.com", "outlook.com", "yahoo.com", "company.com"]),
            location: "San Francisco, CA".to_string(),
        }
    }
}

impl Vocabulary {
    /// Loads a vocabulary from a JSON file and validates it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let raw = std::fs::read_to_string(path)?;
        let vocabulary: Vocabulary = serde_json::from_str(&raw)?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    pub fn validate(&self) -> Result<(), VocabularyError> {
        let lists: [(&'static str, &Vec<String>); 8] = [
            ("names", &self.names),
            ("skills", &self.skills),
            ("companies", &self.companies),
            ("positions", &self.positions),
            ("institutions", &self.institutions),
            ("degrees", &self.degrees),
            ("fields", &self.fields),
            ("emailDomains", &self.email_domains),
        ];
        for (label, list) in lists {
            if list.is_empty() {
                return Err(VocabularyError::Empty(label));
            }
        }

        // Names feed email local parts.
        if let Some(name) = self
            .names
            .iter()
            .find(|name| name.is_empty() || name.trim() != name.as_str())
        {
            return Err(VocabularyError::UntrimmedName(name.clone()));
        }

        if self.skills.len() < MIN_SKILLS {
            return Err(VocabularyError::TooFewSkills(self.skills.len()));
        }
        for (i, skill) in self.skills.iter().enumerate() {
            if self.skills[..i].contains(skill) {
                return Err(VocabularyError::DuplicateSkill(skill.clone()));
            }
        }
        Ok(())
    }

    /// Upper bound for the skill count; clamped so draws stay distinct.
    pub fn max_skills(&self) -> usize {
        MAX_SKILLS.min(self.skills.len())
    }
}
