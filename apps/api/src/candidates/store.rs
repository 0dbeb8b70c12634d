use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::models::candidate::{CandidateRecord, SavedCandidate};

/// In-memory list of saved candidates, in save order. Cloning shares the list.
#[derive(Clone, Default)]
pub struct CandidateStore {
    inner: Arc<RwLock<Vec<SavedCandidate>>>,
}

impl CandidateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn save(&self, record: CandidateRecord, source_file: Option<String>) -> SavedCandidate {
        let saved = SavedCandidate {
            id: Uuid::new_v4(),
            source_file,
            saved_at: Utc::now(),
            record,
        };

        let mut candidates = self.inner.write().await;
        candidates.push(saved.clone());
        info!(
            candidate_id = %saved.id,
            name = %saved.record.personal_info.name,
            total = candidates.len(),
            "Candidate saved"
        );
        saved
    }

    pub async fn list(&self) -> Vec<SavedCandidate> {
        self.inner.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Option<SavedCandidate> {
        self.inner.read().await.iter().find(|c| c.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
