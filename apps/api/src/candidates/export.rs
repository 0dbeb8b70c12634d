//! Export of saved candidates. CSV and JSON are produced in memory; PDF is not
//! supported yet.

use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use crate::models::candidate::SavedCandidate;

pub const CSV_HEADER: [&str; 9] = [
    "name",
    "email",
    "phone",
    "location",
    "skills",
    "latest_position",
    "latest_company",
    "education",
    "match_percentage",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    Csv,
    #[default]
    Json,
    Pdf,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Json => "application/json",
            ExportFormat::Pdf => "application/pdf",
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(format!("unknown export format '{other}' (expected csv, json or pdf)")),
        }
    }
}

/// One row per candidate, lists joined with "; ".
pub fn export_csv(candidates: &[SavedCandidate]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(CSV_HEADER)
        .context("Failed to write CSV header")?;

    for candidate in candidates {
        let record = &candidate.record;
        let info = &record.personal_info;
        let latest = record.experience.first();
        let education = record
            .education
            .iter()
            .map(|e| format!("{} in {}, {} ({})", e.degree, e.field, e.institution, e.end_date))
            .collect::<Vec<_>>()
            .join("; ");

        writer
            .write_record([
                info.name.as_str(),
                info.email.as_str(),
                info.phone.as_deref().unwrap_or(""),
                info.location.as_deref().unwrap_or(""),
                record.skills.join("; ").as_str(),
                latest.map(|e| e.position.as_str()).unwrap_or(""),
                latest.map(|e| e.company.as_str()).unwrap_or(""),
                education.as_str(),
                record.match_percentage.to_string().as_str(),
            ])
            .with_context(|| format!("Failed to write CSV row for candidate {}", candidate.id))?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush CSV export: {}", e.error()))
}

pub fn export_json(candidates: &[SavedCandidate]) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(candidates).context("Failed to serialize candidates to JSON")
}

pub fn export_summary(count: usize) -> String {
    if count == 0 {
        "No candidates available for export. Upload and save resumes first.".to_string()
    } else {
        format!("Ready to export {count} candidate records with full profile details.")
    }
}
