//! Axum route handlers for the Candidates API.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::candidates::export::{export_csv, export_json, export_summary, ExportFormat};
use crate::candidates::summary::{search, CandidateSummary};
use crate::errors::AppError;
use crate::extraction::mock::check_record;
use crate::models::candidate::{CandidateRecord, SavedCandidate};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCandidateRequest {
    pub record: CandidateRecord,
    pub source_file: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CandidateListResponse {
    pub total: usize,
    pub candidates: Vec<CandidateSummary>,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExportSummaryResponse {
    pub count: usize,
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/candidates
///
/// Appends a previewed record to the saved-candidates list. Records that do not
/// have the generated shape are rejected.
pub async fn handle_save_candidate(
    State(state): State<AppState>,
    Json(request): Json<SaveCandidateRequest>,
) -> Result<(StatusCode, Json<SavedCandidate>), AppError> {
    check_record(&request.record)
        .map_err(|reason| AppError::Validation(format!("record: {reason}")))?;

    let saved = state
        .candidates
        .save(request.record, request.source_file)
        .await;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /api/v1/candidates?q=
///
/// Card summaries in save order, optionally filtered by a search term.
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<CandidateListResponse> {
    let all = state.candidates.list().await;
    let query = params.q.unwrap_or_default();
    let candidates: Vec<CandidateSummary> = search(&all, &query)
        .into_iter()
        .map(CandidateSummary::from)
        .collect();

    Json(CandidateListResponse {
        total: all.len(),
        candidates,
    })
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SavedCandidate>, AppError> {
    state
        .candidates
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))
}

/// GET /api/v1/candidates/export?format=csv|json|pdf
pub async fn handle_export(
    State(state): State<AppState>,
    Query(params): Query<ExportQuery>,
) -> Result<Response, AppError> {
    let format = match params.format.as_deref() {
        Some(raw) => raw.parse::<ExportFormat>().map_err(AppError::Validation)?,
        None => ExportFormat::default(),
    };

    let candidates = state.candidates.list().await;
    let body = match format {
        ExportFormat::Csv => export_csv(&candidates)?,
        ExportFormat::Json => export_json(&candidates)?,
        ExportFormat::Pdf => return Err(AppError::NotImplemented),
    };

    tracing::info!(
        format = format.file_extension(),
        count = candidates.len(),
        bytes = body.len(),
        "Exported candidates"
    );

    let disposition = format!(
        "attachment; filename=\"candidates.{}\"",
        format.file_extension()
    );
    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

/// GET /api/v1/candidates/export/summary
pub async fn handle_export_summary(State(state): State<AppState>) -> Json<ExportSummaryResponse> {
    let count = state.candidates.len().await;
    Json(ExportSummaryResponse {
        count,
        message: export_summary(count),
    })
}
