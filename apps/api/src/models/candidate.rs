use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Structured output of resume extraction (real or mocked).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub personal_info: PersonalInfo,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub match_percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: EndDate,
    pub description: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
}

/// End of an experience entry. Serialized as `"Present"` or a four-digit year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EndDate {
    Present,
    Year(i32),
}

impl EndDate {
    pub fn is_present(&self) -> bool {
        matches!(self, EndDate::Present)
    }

    pub fn year(&self) -> Option<i32> {
        match self {
            EndDate::Present => None,
            EndDate::Year(y) => Some(*y),
        }
    }
}

impl fmt::Display for EndDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndDate::Present => f.write_str("Present"),
            EndDate::Year(y) => write!(f, "{y}"),
        }
    }
}

impl From<EndDate> for String {
    fn from(value: EndDate) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for EndDate {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == "Present" {
            return Ok(EndDate::Present);
        }
        value
            .parse::<i32>()
            .map(EndDate::Year)
            .map_err(|_| format!("invalid end date '{value}': expected a year or \"Present\""))
    }
}

/// A record the user chose to keep, in save order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCandidate {
    pub id: Uuid,
    pub source_file: Option<String>,
    pub saved_at: DateTime<Utc>,
    pub record: CandidateRecord,
}
