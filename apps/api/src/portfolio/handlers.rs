use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::portfolio::{render_portfolio, PortfolioData};

#[derive(Debug, Serialize)]
pub struct BuildResponse {
    pub html: String,
}

/// POST /api/v1/portfolio/build
pub async fn handle_build(Json(data): Json<PortfolioData>) -> Result<Json<BuildResponse>, AppError> {
    if data.target_role.trim().is_empty() {
        return Err(AppError::Validation(
            "target_role must not be empty".to_string(),
        ));
    }
    info!(
        "Building portfolio for '{}' with {} project(s)",
        data.resume.name,
        data.projects.len()
    );
    Ok(Json(BuildResponse {
        html: render_portfolio(&data),
    }))
}
