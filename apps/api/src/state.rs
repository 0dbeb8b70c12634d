use std::sync::Arc;

use crate::candidates::store::CandidateStore;
use crate::config::Config;
use crate::extraction::extractor::ResumeExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable extractor. Default: MockExtractor.
    pub extractor: Arc<dyn ResumeExtractor>,
    pub candidates: CandidateStore,
}
