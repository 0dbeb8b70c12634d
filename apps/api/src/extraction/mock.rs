//! Mock candidate generator. Stands in for a real resume extraction service.
//!
//! Pure function of (vocabulary, random source, current year). The uploaded file is
//! never read; any accepted document yields a structurally valid record.
//!
//! Generation rules:
//! 1. name: uniform from the vocabulary
//! 2. skills: k ∈ [4, 9], first k of a Fisher–Yates shuffle (distinct, unbiased)
//! 3. experience: m ∈ [1, 3], most recent first, entry 0 ends "Present"
//! 4. education: n ∈ [1, 2], graduation year ∈ [2010, 2022], four-year span
//! 5. contact details and summary derived from the picks above
//! 6. match percentage ∈ [65, 95]

use crate::extraction::random::RandomSource;
use crate::extraction::vocabulary::{Vocabulary, MAX_SKILLS, MIN_SKILLS};
use crate::models::candidate::{
    CandidateRecord, EducationEntry, EndDate, ExperienceEntry, PersonalInfo,
};

pub const MIN_EXPERIENCE: u32 = 1;
pub const MAX_EXPERIENCE: u32 = 3;
pub const MIN_EDUCATION: u32 = 1;
pub const MAX_EDUCATION: u32 = 2;
pub const EARLIEST_GRADUATION: u32 = 2010;
pub const LATEST_GRADUATION: u32 = 2022;
/// Years between enrolment and graduation.
pub const DEGREE_YEARS: i32 = 4;
pub const MIN_MATCH: u32 = 65;
pub const MAX_MATCH: u32 = 95;

// ────────────────────────────────────────────────────────────────────────────
// Generator
// ────────────────────────────────────────────────────────────────────────────

/// Synthesizes a complete candidate record.
pub fn generate_candidate<R: RandomSource>(
    vocabulary: &Vocabulary,
    rng: &mut R,
    current_year: i32,
) -> CandidateRecord {
    let name = rng.pick(&vocabulary.names).clone();
    let skills = pick_skills(vocabulary, rng);
    let experience = generate_experience(vocabulary, rng, current_year);
    let education = generate_education(vocabulary, rng);

    let personal_info = PersonalInfo {
        email: generate_email(&name, &vocabulary.email_domains, rng),
        phone: Some(generate_phone(rng)),
        location: Some(vocabulary.location.clone()),
        linkedin: None,
        website: None,
        summary: Some(build_summary(&skills)),
        name,
    };

    CandidateRecord {
        personal_info,
        skills,
        experience,
        education,
        match_percentage: rng.range_inclusive(MIN_MATCH, MAX_MATCH),
    }
}

fn pick_skills<R: RandomSource>(vocabulary: &Vocabulary, rng: &mut R) -> Vec<String> {
    let count = rng.range_inclusive(MIN_SKILLS as u32, vocabulary.max_skills() as u32) as usize;
    let mut pool = vocabulary.skills.clone();
    rng.shuffle(&mut pool);
    pool.truncate(count);
    pool
}

fn generate_experience<R: RandomSource>(
    vocabulary: &Vocabulary,
    rng: &mut R,
    current_year: i32,
) -> Vec<ExperienceEntry> {
    let count = rng.range_inclusive(MIN_EXPERIENCE, MAX_EXPERIENCE);
    (0..count as i32)
        .map(|i| {
            let company = rng.pick(&vocabulary.companies).clone();
            let position = rng.pick(&vocabulary.positions).clone();
            let end_year = current_year - i;
            let start_year = end_year - rng.range_inclusive(1, 3) as i32;

            ExperienceEntry {
                company,
                description: describe_role(&position),
                position,
                start_date: start_year.to_string(),
                end_date: if i == 0 {
                    EndDate::Present
                } else {
                    EndDate::Year(end_year)
                },
                achievements: Vec::new(),
            }
        })
        .collect()
}

fn describe_role(position: &str) -> Vec<String> {
    vec![
        format!(
            "Led development of key {} initiatives",
            position.to_lowercase()
        ),
        "Collaborated with cross-functional teams to deliver projects".to_string(),
        "Improved system performance by optimizing code and processes".to_string(),
    ]
}

fn generate_education<R: RandomSource>(
    vocabulary: &Vocabulary,
    rng: &mut R,
) -> Vec<EducationEntry> {
    let count = rng.range_inclusive(MIN_EDUCATION, MAX_EDUCATION);
    (0..count)
        .map(|_| {
            let institution = rng.pick(&vocabulary.institutions).clone();
            let degree = rng.pick(&vocabulary.degrees).clone();
            let field = rng.pick(&vocabulary.fields).clone();
            let end_year = rng.range_inclusive(EARLIEST_GRADUATION, LATEST_GRADUATION) as i32;

            EducationEntry {
                institution,
                degree,
                field,
                start_date: (end_year - DEGREE_YEARS).to_string(),
                end_date: end_year.to_string(),
                gpa: format_gpa(rng.unit()),
            }
        })
        .collect()
}

/// `3.0` plus a unit draw, truncated to one fractional digit. The tenths are
/// capped at 9 since `unit * 10` can round up to exactly 10.
fn format_gpa(unit: f64) -> String {
    let tenths = ((unit * 10.0).floor() as u32).min(9);
    format!("3.{tenths}")
}

// ────────────────────────────────────────────────────────────────────────────
// Contact details
// ────────────────────────────────────────────────────────────────────────────

/// `first.last@domain`, whitespace runs collapsed to a single dot.
fn generate_email<R: RandomSource>(name: &str, domains: &[String], rng: &mut R) -> String {
    let local = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(".");
    format!("{local}@{}", rng.pick(domains))
}

/// `(AAA) MMM-EEEE` with no leading zeros in any group.
fn generate_phone<R: RandomSource>(rng: &mut R) -> String {
    let area = rng.range_inclusive(100, 999);
    let mid = rng.range_inclusive(100, 999);
    let end = rng.range_inclusive(1000, 9999);
    format!("({area}) {mid}-{end}")
}

fn build_summary(skills: &[String]) -> String {
    let top: Vec<&str> = skills.iter().take(3).map(String::as_str).collect();
    format!(
        "Experienced professional with expertise in {}, and a passion for solving complex problems.",
        top.join(", ")
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Record checks
// ────────────────────────────────────────────────────────────────────────────

/// Checks that a record has the shape the generator produces. Records coming
/// back from clients go through this before they are saved.
///
/// Experience spans are checked between dated entries only; the current entry
/// has no end year to measure against.
pub fn check_record(record: &CandidateRecord) -> Result<(), String> {
    if record.personal_info.name.trim().is_empty() {
        return Err("personalInfo.name cannot be empty".to_string());
    }

    let skills = &record.skills;
    if !(MIN_SKILLS..=MAX_SKILLS).contains(&skills.len()) {
        return Err(format!(
            "skills must hold {MIN_SKILLS} to {MAX_SKILLS} entries, found {}",
            skills.len()
        ));
    }
    for (i, skill) in skills.iter().enumerate() {
        if skill.trim().is_empty() {
            return Err("skills cannot contain blank entries".to_string());
        }
        if skills[..i].contains(skill) {
            return Err(format!("duplicate skill '{skill}'"));
        }
    }

    check_experience(&record.experience)?;
    check_education(&record.education)?;

    if !(MIN_MATCH..=MAX_MATCH).contains(&record.match_percentage) {
        return Err(format!(
            "matchPercentage must be between {MIN_MATCH} and {MAX_MATCH}, found {}",
            record.match_percentage
        ));
    }
    Ok(())
}

fn check_experience(experience: &[ExperienceEntry]) -> Result<(), String> {
    let count = experience.len() as u32;
    if !(MIN_EXPERIENCE..=MAX_EXPERIENCE).contains(&count) {
        return Err(format!(
            "experience must hold {MIN_EXPERIENCE} to {MAX_EXPERIENCE} entries, found {count}"
        ));
    }

    let mut previous_end: Option<i32> = None;
    for (i, entry) in experience.iter().enumerate() {
        let start = parse_year(&entry.start_date)
            .ok_or_else(|| format!("experience[{i}].startDate is not a year"))?;

        match (i, entry.end_date.year()) {
            (0, _) if entry.end_date.is_present() => {}
            (0, _) => return Err("experience[0].endDate must be \"Present\"".to_string()),
            (_, None) => return Err(format!("experience[{i}].endDate must be a year")),
            (_, Some(end)) => {
                if !(1..=3).contains(&(end - start)) {
                    return Err(format!("experience[{i}] must span 1 to 3 years"));
                }
                if previous_end.is_some_and(|previous| end >= previous) {
                    return Err("experience must be ordered most recent first".to_string());
                }
                previous_end = Some(end);
            }
        }
    }
    Ok(())
}

fn check_education(education: &[EducationEntry]) -> Result<(), String> {
    let count = education.len() as u32;
    if !(MIN_EDUCATION..=MAX_EDUCATION).contains(&count) {
        return Err(format!(
            "education must hold {MIN_EDUCATION} to {MAX_EDUCATION} entries, found {count}"
        ));
    }

    for (i, entry) in education.iter().enumerate() {
        let start = parse_year(&entry.start_date);
        let end = parse_year(&entry.end_date);
        let (Some(start), Some(end)) = (start, end) else {
            return Err(format!("education[{i}] dates must be years"));
        };
        if end - start != DEGREE_YEARS {
            return Err(format!("education[{i}] must span {DEGREE_YEARS} years"));
        }
        if !((EARLIEST_GRADUATION as i32)..=(LATEST_GRADUATION as i32)).contains(&end) {
            return Err(format!(
                "education[{i}].endDate must be between {EARLIEST_GRADUATION} and {LATEST_GRADUATION}"
            ));
        }

        let gpa_ok = match entry.gpa.split_once('.') {
            Some((whole, tenth)) => {
                whole == "3" && tenth.len() == 1 && tenth.bytes().all(|b| b.is_ascii_digit())
            }
            None => false,
        };
        if !gpa_ok {
            return Err(format!(
                "education[{i}].gpa must read 3.0 to 3.9, found '{}'",
                entry.gpa
            ));
        }
    }
    Ok(())
}

fn parse_year(raw: &str) -> Option<i32> {
    if raw.len() == 4 {
        raw.parse().ok()
    } else {
        None
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::random::tests::Fixed;
    use crate::extraction::random::RngSource;
    use std::collections::HashSet;

    const YEAR: i32 = 2026;

    fn assert_invariants(record: &CandidateRecord, vocabulary: &Vocabulary, current_year: i32) {
        // skills
        let skills = &record.skills;
        assert!((MIN_SKILLS..=MAX_SKILLS).contains(&skills.len()), "{skills:?}");
        let distinct: HashSet<&String> = skills.iter().collect();
        assert_eq!(distinct.len(), skills.len(), "duplicate skill in {skills:?}");
        assert!(skills.iter().all(|s| vocabulary.skills.contains(s)));

        // experience
        let experience = &record.experience;
        assert!((1..=3).contains(&experience.len()));
        assert!(experience[0].end_date.is_present());
        let mut previous_end = current_year + 1;
        for (i, entry) in experience.iter().enumerate() {
            let start: i32 = entry.start_date.parse().unwrap();
            let end = entry.end_date.year().unwrap_or(current_year);
            assert_eq!(end, current_year - i as i32);
            assert!((1..=3).contains(&(end - start)), "span {start}-{end}");
            if i > 0 {
                assert_eq!(entry.end_date.to_string().len(), 4);
            }
            assert!(end < previous_end, "entries out of order");
            assert_eq!(entry.description.len(), 3);
            assert!(entry.description[0].contains(&entry.position.to_lowercase()));
            previous_end = end;
        }

        // education
        assert!((1..=2).contains(&record.education.len()));
        for entry in &record.education {
            let start: i32 = entry.start_date.parse().unwrap();
            let end: i32 = entry.end_date.parse().unwrap();
            assert_eq!(end - start, DEGREE_YEARS);
            assert!((2010..=2022).contains(&end));

            let (whole, fraction) = entry.gpa.split_once('.').unwrap();
            assert_eq!(fraction.len(), 1, "gpa {}", entry.gpa);
            assert_eq!(whole, "3", "gpa {}", entry.gpa);
            let gpa: f64 = entry.gpa.parse().unwrap();
            assert!((3.0..4.0).contains(&gpa));
        }

        // match score
        assert!((65..=95).contains(&record.match_percentage));

        // contact details
        let info = &record.personal_info;
        let expected_local = info.name.to_lowercase().replace(' ', ".");
        let (local, domain) = info.email.split_once('@').unwrap();
        assert_eq!(local, expected_local);
        assert!(vocabulary.email_domains.iter().any(|d| d == domain));
        assert_eq!(info.location.as_deref(), Some(vocabulary.location.as_str()));
    }

    #[test]
    fn test_thousand_records_respect_every_bound() {
        let vocabulary = Vocabulary::default();
        let mut rng = RngSource::seeded(0xC0FFEE);
        let records: Vec<CandidateRecord> = (0..1000)
            .map(|_| generate_candidate(&vocabulary, &mut rng, YEAR))
            .collect();

        for record in &records {
            assert_invariants(record, &vocabulary, YEAR);
        }

        let skill_sets: HashSet<&Vec<String>> = records.iter().map(|r| &r.skills).collect();
        assert!(skill_sets.len() > 1, "every record drew the same skills");
    }

    #[test]
    fn test_lower_bounds_with_minimal_draws() {
        let vocabulary = Vocabulary::default();
        let record = generate_candidate(&vocabulary, &mut Fixed(0.0), YEAR);

        assert_eq!(record.skills.len(), MIN_SKILLS);
        assert_eq!(record.experience.len(), 1);
        assert_eq!(record.experience[0].end_date, EndDate::Present);
        assert_eq!(record.experience[0].start_date, "2025");
        assert_eq!(record.education.len(), 1);
        assert_eq!(record.education[0].end_date, "2010");
        assert_eq!(record.education[0].start_date, "2006");
        assert_eq!(record.education[0].gpa, "3.0");
        assert_eq!(record.match_percentage, 65);
        assert_invariants(&record, &vocabulary, YEAR);
    }

    #[test]
    fn test_upper_bounds_with_maximal_draws() {
        let vocabulary = Vocabulary::default();
        let record = generate_candidate(&vocabulary, &mut Fixed(0.9999), YEAR);

        assert_eq!(record.skills.len(), MAX_SKILLS);
        assert_eq!(record.experience.len(), 3);
        assert_eq!(record.experience[1].end_date, EndDate::Year(YEAR - 1));
        assert_eq!(record.experience[2].end_date, EndDate::Year(YEAR - 2));
        assert_eq!(record.experience[2].start_date, (YEAR - 5).to_string());
        assert_eq!(record.education.len(), 2);
        assert_eq!(record.education[0].end_date, "2022");
        assert_eq!(record.education[0].gpa, "3.9");
        assert_eq!(record.match_percentage, 95);
        assert_invariants(&record, &vocabulary, YEAR);
    }

    #[test]
    fn test_single_experience_is_present() {
        let vocabulary = Vocabulary::default();
        let mut rng = RngSource::seeded(99);
        let mut seen = 0;
        for _ in 0..200 {
            let record = generate_candidate(&vocabulary, &mut rng, YEAR);
            if record.experience.len() == 1 {
                seen += 1;
                assert_eq!(record.experience[0].end_date.to_string(), "Present");
            }
        }
        assert!(seen > 0);
    }

    #[test]
    fn test_short_skill_vocabulary_never_repeats() {
        let vocabulary = Vocabulary {
            skills: ["Rust", "Go", "SQL", "Kafka", "Docker"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ..Vocabulary::default()
        };
        let mut rng = RngSource::seeded(5);
        for _ in 0..200 {
            let record = generate_candidate(&vocabulary, &mut rng, YEAR);
            assert!((4..=5).contains(&record.skills.len()));
            let distinct: HashSet<&String> = record.skills.iter().collect();
            assert_eq!(distinct.len(), record.skills.len());
        }
    }

    #[test]
    fn test_summary_lists_first_three_skills() {
        let skills: Vec<String> = ["Python", "SQL", "AWS", "React"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            build_summary(&skills),
            "Experienced professional with expertise in Python, SQL, AWS, and a passion for solving complex problems."
        );
    }

    #[test]
    fn test_email_collapses_whitespace() {
        let domains = vec!["gmail.com".to_string()];
        let email = generate_email("Taylor   Williams", &domains, &mut Fixed(0.0));
        assert_eq!(email, "taylor.williams@gmail.com");
    }

    #[test]
    fn test_phone_format() {
        let mut rng = RngSource::seeded(3);
        for _ in 0..100 {
            let phone = generate_phone(&mut rng);
            let bytes = phone.as_bytes();
            assert_eq!(phone.len(), 14, "{phone}");
            assert_eq!(bytes[0], b'(');
            assert_eq!(&phone[4..6], ") ");
            assert_eq!(bytes[9], b'-');
            assert_ne!(bytes[1], b'0');
            assert_ne!(bytes[6], b'0');
            assert_ne!(bytes[10], b'0');
        }
    }

    #[test]
    fn test_gpa_truncates_instead_of_rounding() {
        assert_eq!(format_gpa(0.0), "3.0");
        assert_eq!(format_gpa(0.45), "3.4");
        assert_eq!(format_gpa(0.99999), "3.9");
    }

    #[test]
    fn test_gpa_stays_below_four_at_largest_unit_draw() {
        let largest = 1.0 - f64::EPSILON / 2.0;
        assert_eq!(format_gpa(largest), "3.9");

        let vocabulary = Vocabulary::default();
        let record = generate_candidate(&vocabulary, &mut Fixed(largest), YEAR);
        for entry in &record.education {
            assert_eq!(entry.gpa, "3.9");
        }
        assert_invariants(&record, &vocabulary, YEAR);
    }

    #[test]
    fn test_generated_records_pass_the_record_check() {
        let vocabulary = Vocabulary::default();
        let mut rng = RngSource::seeded(17);
        for _ in 0..500 {
            let record = generate_candidate(&vocabulary, &mut rng, YEAR);
            assert_eq!(check_record(&record), Ok(()));
        }
        for fraction in [0.0, 0.9999, 1.0 - f64::EPSILON / 2.0] {
            let record = generate_candidate(&vocabulary, &mut Fixed(fraction), YEAR);
            assert_eq!(check_record(&record), Ok(()));
        }
    }

    fn broken(valid: &CandidateRecord, edit: impl FnOnce(&mut CandidateRecord)) -> Result<(), String> {
        let mut record = valid.clone();
        edit(&mut record);
        check_record(&record)
    }

    #[test]
    fn test_record_check_rejects_broken_records() {
        let vocabulary = Vocabulary::default();
        let valid = generate_candidate(&vocabulary, &mut Fixed(0.9999), YEAR);
        assert!(broken(&valid, |r| r.personal_info.name = " ".to_string()).is_err());
        assert!(broken(&valid, |r| r.skills.truncate(3)).is_err());
        assert!(broken(&valid, |r| {
            let first = r.skills[0].clone();
            r.skills[1] = first;
        })
        .is_err());
        assert!(broken(&valid, |r| r.experience.clear()).is_err());
        assert!(broken(&valid, |r| r.experience[0].end_date = EndDate::Year(2026)).is_err());
        assert!(broken(&valid, |r| r.experience[1].end_date = EndDate::Present).is_err());
        assert!(broken(&valid, |r| r.experience.swap(1, 2)).is_err());
        assert!(broken(&valid, |r| r.experience[1].start_date = "1990".to_string()).is_err());
        assert!(broken(&valid, |r| r.education.clear()).is_err());
        assert!(broken(&valid, |r| r.education[0].start_date = "2020".to_string()).is_err());
        assert!(broken(&valid, |r| r.education[0].gpa = "4.0".to_string()).is_err());
        assert!(broken(&valid, |r| r.match_percentage = 4000).is_err());
        assert!(broken(&valid, |r| r.match_percentage = 64).is_err());
    }
}
