use axum::extract::Multipart;
use axum::Json;
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::extract_document;
use crate::models::resume::ResumeRecord;
use crate::parser::parse_resume_text;

#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    pub raw_text: String,
}

/// POST /api/v1/resume/parse
///
/// The engine is defined only for non-empty text; whitespace-only input
/// is rejected here before it is ever invoked.
pub async fn handle_parse_text(
    Json(req): Json<ParseTextRequest>,
) -> Result<Json<ResumeRecord>, AppError> {
    if req.raw_text.trim().is_empty() {
        return Err(AppError::EmptyDocument);
    }
    Ok(Json(parse_resume_text(&req.raw_text)))
}

/// POST /api/v1/resume/upload
pub async fn handle_upload(mut multipart: Multipart) -> Result<Json<ResumeRecord>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().map(str::to_string).unwrap_or_default();
        let data: Bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        info!("Received upload '{}' ({} bytes)", filename, data.len());
        let text = extract_document(&filename, &data)?;
        return Ok(Json(parse_resume_text(&text)));
    }
    Err(AppError::Validation(
        "Multipart field 'file' is required".to_string(),
    ))
}
