//! Axum route handlers for the Extraction API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::document::ResumeFile;
use crate::extraction::extractor::extract_with_timeout;
use crate::models::candidate::CandidateRecord;
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
pub const FILE_FIELD: &str = "file";

/// POST /api/v1/resumes/extract
///
/// Accepts one PDF or Word document and returns the extracted record as a preview.
/// Nothing is saved; the client posts the record to /api/v1/candidates to keep it.
pub async fn handle_extract(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CandidateRecord>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        upload = Some(ResumeFile::new(file_name, content_type.as_deref(), bytes)?);
        break;
    }

    let file = upload.ok_or_else(|| {
        AppError::Validation(format!("Missing multipart field '{FILE_FIELD}'"))
    })?;

    info!(
        file = %file.file_name,
        format = file.format.mime(),
        size = file.bytes.len(),
        backend = state.extractor.backend(),
        "Extracting resume"
    );

    let record =
        extract_with_timeout(state.extractor.as_ref(), &file, state.config.extraction_timeout)
            .await?;

    info!(
        file = %file.file_name,
        name = %record.personal_info.name,
        match_percentage = record.match_percentage,
        "Resume extracted"
    );
    Ok(Json(record))
}
