use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::deploy::{DeployError, DeploymentInfo, DeploymentStatus};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DeployRequest {
    pub html: String,
    pub project_name: String,
}

/// POST /api/v1/portfolio/deploy
pub async fn handle_deploy(
    State(state): State<AppState>,
    Json(req): Json<DeployRequest>,
) -> Result<Json<DeploymentInfo>, AppError> {
    if req.html.trim().is_empty() {
        return Err(AppError::Validation("html must not be empty".to_string()));
    }
    if req.project_name.trim().is_empty() {
        return Err(AppError::Validation(
            "project_name must not be empty".to_string(),
        ));
    }

    let deployment = state
        .deployer
        .deploy(&req.html, &req.project_name)
        .await
        .map_err(map_deploy_error)?;
    info!(
        "Deployment {} created at {}",
        deployment.deployment_id, deployment.url
    );
    Ok(Json(deployment))
}

/// GET /api/v1/portfolio/deploy/:id/status
pub async fn handle_deploy_status(
    State(state): State<AppState>,
    Path(deployment_id): Path<String>,
) -> Result<Json<DeploymentStatus>, AppError> {
    let status = state
        .deployer
        .status(&deployment_id)
        .await
        .map_err(map_deploy_error)?;
    Ok(Json(status))
}

fn map_deploy_error(err: DeployError) -> AppError {
    match err {
        DeployError::MissingToken => AppError::Validation(
            "Deployment is disabled: set VERCEL_TOKEN to enable it".to_string(),
        ),
        DeployError::Api { status: 404, .. } => {
            AppError::NotFound("Deployment not found".to_string())
        }
        other => AppError::Deployment(other.to_string()),
    }
}
