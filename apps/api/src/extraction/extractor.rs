//! Resume extraction: pluggable, trait-based boundary between uploads and records.
//!
//! Default: `MockExtractor` (random but structurally valid records, no parsing).
//! A real document/AI backend slots in behind the same trait without touching
//! handlers or callers.
//!
//! `AppState` holds an `Arc<dyn ResumeExtractor>`, chosen at startup.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use tracing::{debug, warn};

use crate::extraction::document::ResumeFile;
use crate::extraction::mock::generate_candidate;
use crate::extraction::random::RngSource;
use crate::extraction::vocabulary::Vocabulary;
use crate::extraction::ExtractionError;
use crate::models::candidate::CandidateRecord;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Produces exactly one record or one typed failure per submitted file.
#[async_trait]
pub trait ResumeExtractor: Send + Sync {
    async fn extract(&self, file: &ResumeFile) -> Result<CandidateRecord, ExtractionError>;

    /// Short label surfaced on /health.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// MockExtractor
// ────────────────────────────────────────────────────────────────────────────

pub struct MockExtractor {
    vocabulary: Arc<Vocabulary>,
    latency: Duration,
    seed: Option<u64>,
    calls: AtomicU64,
}

impl MockExtractor {
    pub fn new(vocabulary: Arc<Vocabulary>, latency: Duration, seed: Option<u64>) -> Self {
        Self {
            vocabulary,
            latency,
            seed,
            calls: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl ResumeExtractor for MockExtractor {
    async fn extract(&self, file: &ResumeFile) -> Result<CandidateRecord, ExtractionError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let call = self.calls.fetch_add(1, Ordering::Relaxed);
        let record = match self.seed {
            // Each call gets its own stream: reproducible, yet calls still differ.
            Some(seed) => {
                let mut rng = RngSource::seeded(seed.wrapping_add(call));
                generate_candidate(&self.vocabulary, &mut rng, Utc::now().year())
            }
            None => {
                let mut rng = RngSource::from_entropy();
                generate_candidate(&self.vocabulary, &mut rng, Utc::now().year())
            }
        };

        debug!(
            file = %file.file_name,
            format = file.format.mime(),
            call,
            skills = record.skills.len(),
            "Generated mock candidate"
        );
        Ok(record)
    }

    fn backend(&self) -> &'static str {
        "mock"
    }
}

/// Runs an extraction, converting a slow backend into `ExtractionTimeout`.
pub async fn extract_with_timeout(
    extractor: &dyn ResumeExtractor,
    file: &ResumeFile,
    limit: Duration,
) -> Result<CandidateRecord, ExtractionError> {
    match tokio::time::timeout(limit, extractor.extract(file)).await {
        Ok(result) => result,
        Err(_) => {
            warn!(file = %file.file_name, ?limit, "Extraction timed out");
            Err(ExtractionError::ExtractionTimeout(limit))
        }
    }
}
