//! Candidate list views: card summaries, match bands and search.
//!
//! The record's `match_percentage` is the only match score; nothing here invents one.

use serde::Serialize;
use uuid::Uuid;

use crate::models::candidate::SavedCandidate;

const TOP_SKILLS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    Excellent, // ≥ 90
    Strong,    // 80 – 89
    Good,      // 70 – 79
    Fair,      // < 70
}

impl MatchBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => MatchBand::Excellent,
            80..=89 => MatchBand::Strong,
            70..=79 => MatchBand::Good,
            _ => MatchBand::Fair,
        }
    }
}

/// What a candidate card shows in the list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSummary {
    pub id: Uuid,
    pub name: String,
    pub initials: String,
    pub email: String,
    pub top_skills: Vec<String>,
    pub latest_position: Option<String>,
    pub match_percentage: u32,
    pub match_band: MatchBand,
}

impl From<&SavedCandidate> for CandidateSummary {
    fn from(saved: &SavedCandidate) -> Self {
        let record = &saved.record;
        Self {
            id: saved.id,
            name: record.personal_info.name.clone(),
            initials: initials(&record.personal_info.name),
            email: record.personal_info.email.clone(),
            top_skills: record.skills.iter().take(TOP_SKILLS).cloned().collect(),
            latest_position: record.experience.first().map(|e| e.position.clone()),
            match_percentage: record.match_percentage,
            match_band: MatchBand::from_score(record.match_percentage),
        }
    }
}

/// First letter of up to two name parts, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Case-insensitive substring search over name, email, skills and positions.
/// A blank query matches everything.
pub fn matches_query(saved: &SavedCandidate, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let record = &saved.record;
    let hit = |text: &str| text.to_lowercase().contains(&needle);

    hit(record.personal_info.name.as_str())
        || hit(record.personal_info.email.as_str())
        || record.skills.iter().any(|s| hit(s.as_str()))
        || record.experience.iter().any(|e| hit(e.position.as_str()))
}

pub fn search<'a>(candidates: &'a [SavedCandidate], query: &str) -> Vec<&'a SavedCandidate> {
    candidates
        .iter()
        .filter(|c| matches_query(c, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::store::tests::sample_record;
    use chrono::Utc;

    fn saved(name: &str, skills: &[&str], score: u32) -> SavedCandidate {
        let mut record = sample_record(8);
        record.personal_info.name = name.to_string();
        record.personal_info.email = format!("{}@company.com", name.to_lowercase().replace(' ', "."));
        record.skills = skills.iter().map(|s| s.to_string()).collect();
        record.match_percentage = score;
        SavedCandidate {
            id: Uuid::new_v4(),
            source_file: None,
            saved_at: Utc::now(),
            record,
        }
    }

    #[test]
    fn test_match_band_boundaries() {
        assert_eq!(MatchBand::from_score(95), MatchBand::Excellent);
        assert_eq!(MatchBand::from_score(90), MatchBand::Excellent);
        assert_eq!(MatchBand::from_score(89), MatchBand::Strong);
        assert_eq!(MatchBand::from_score(80), MatchBand::Strong);
        assert_eq!(MatchBand::from_score(79), MatchBand::Good);
        assert_eq!(MatchBand::from_score(70), MatchBand::Good);
        assert_eq!(MatchBand::from_score(69), MatchBand::Fair);
        assert_eq!(MatchBand::from_score(65), MatchBand::Fair);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Morgan Chen"), "MC");
        assert_eq!(initials("mary ann de vries"), "MA");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_summary_takes_top_three_skills_and_latest_role() {
        let candidate = saved("Alex Johnson", &["Python", "SQL", "AWS", "React"], 91);
        let summary = CandidateSummary::from(&candidate);

        assert_eq!(summary.initials, "AJ");
        assert_eq!(summary.top_skills, vec!["Python", "SQL", "AWS"]);
        assert_eq!(
            summary.latest_position.as_deref(),
            Some(candidate.record.experience[0].position.as_str())
        );
        assert_eq!(summary.match_percentage, 91);
        assert_eq!(summary.match_band, MatchBand::Excellent);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let candidates = vec![
            saved("Alex Johnson", &["Python", "SQL"], 70),
            saved("Jamie Smith", &["React", "UI/UX"], 80),
        ];

        let hits = search(&candidates, "react");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record.personal_info.name, "Jamie Smith");

        let hits = search(&candidates, "JOHNSON");
        assert_eq!(hits.len(), 1);

        let hits = search(&candidates, "jamie.smith@");
        assert_eq!(hits.len(), 1);

        assert!(search(&candidates, "haskell").is_empty());
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let candidates = vec![
            saved("Alex Johnson", &["Python"], 70),
            saved("Jamie Smith", &["React"], 80),
        ];
        assert_eq!(search(&candidates, "   ").len(), 2);
    }
}
