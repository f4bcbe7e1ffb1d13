//! Axum route handlers for the Generation API.

use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::{generate_content, GeneratedContent};
use crate::models::project::Project;
use crate::models::resume::ResumeRecord;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub resume: ResumeRecord,
    pub target_role: String,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// POST /api/v1/content/generate
pub async fn handle_generate(
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GeneratedContent>, AppError> {
    if req.target_role.trim().is_empty() {
        return Err(AppError::Validation(
            "target_role must not be empty".to_string(),
        ));
    }
    info!(
        "Generating content for '{}' targeting '{}'",
        req.resume.name, req.target_role
    );
    Ok(Json(generate_content(
        &req.resume,
        &req.target_role,
        &req.projects,
    )))
}
