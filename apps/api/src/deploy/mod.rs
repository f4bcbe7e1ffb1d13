//! Deployment client. The single point of egress in the service: ships a
//! generated portfolio to the Vercel deployments API and polls its state.
//! Backends are swappable behind the `Deployer` trait carried in
//! `AppState` as `Arc<dyn Deployer>`.

pub mod handlers;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::{info, warn};

const VERCEL_API_URL: &str = "https://api.vercel.com/v13/deployments";
const REQUEST_TIMEOUT_SECS: u64 = 60;
/// Vercel project names are capped at 63 characters.
const MAX_PROJECT_NAME_LEN: usize = 63;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Deployment API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("VERCEL_TOKEN is not configured")]
    MissingToken,

    #[error("Deployment API response missing URL or deployment ID")]
    InvalidResponse,
}

/// Result of a successful deployment creation.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentInfo {
    pub url: String,
    pub deployment_id: String,
    pub status: String,
}

/// Result of a status poll.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentStatus {
    pub status: String,
    pub url: Option<String>,
}

/// Deployment backend. Implement this to swap providers without touching
/// the endpoint, handler, or caller code.
#[async_trait]
pub trait Deployer: Send + Sync {
    async fn deploy(&self, html: &str, project_name: &str) -> Result<DeploymentInfo, DeployError>;
    async fn status(&self, deployment_id: &str) -> Result<DeploymentStatus, DeployError>;
}

#[derive(Debug, Serialize)]
struct DeploymentFile<'a> {
    file: &'a str,
    data: &'a str,
}

#[derive(Debug, Deserialize)]
struct VercelDeployment {
    url: Option<String>,
    id: Option<String>,
    #[serde(rename = "readyState")]
    ready_state: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VercelError {
    error: VercelErrorBody,
}

#[derive(Debug, Deserialize)]
struct VercelErrorBody {
    message: String,
}

/// Static-site routing config shipped alongside the portfolio HTML.
fn vercel_config() -> String {
    let config = json!({
        "version": 2,
        "builds": [{ "src": "index.html", "use": "@vercel/static" }],
        "routes": [{ "src": "/(.*)", "dest": "/index.html" }]
    });
    serde_json::to_string_pretty(&config).unwrap_or_default()
}

/// Lowercases, replaces anything outside `[a-z0-9-]` with a dash,
/// collapses dash runs, trims edge dashes, and truncates to 63 chars.
pub fn sanitize_project_name(name: &str) -> String {
    let mut sanitized = String::with_capacity(name.len());
    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            sanitized.push(c);
        } else {
            sanitized.push('-');
        }
    }

    let mut collapsed = String::with_capacity(sanitized.len());
    for c in sanitized.chars() {
        if c == '-' && collapsed.ends_with('-') {
            continue;
        }
        collapsed.push(c);
    }

    collapsed
        .trim_matches('-')
        .chars()
        .take(MAX_PROJECT_NAME_LEN)
        .collect()
}

/// The default `Deployer`: Vercel's v13 deployments API.
pub struct VercelDeployer {
    client: reqwest::Client,
    token: Option<String>,
}

impl VercelDeployer {
    pub fn new(token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            token,
        }
    }

    fn token(&self) -> Result<&str, DeployError> {
        self.token.as_deref().ok_or(DeployError::MissingToken)
    }
}

#[async_trait]
impl Deployer for VercelDeployer {
    async fn deploy(&self, html: &str, project_name: &str) -> Result<DeploymentInfo, DeployError> {
        let token = self.token()?;
        let name = sanitize_project_name(project_name);
        let config = vercel_config();
        let files = vec![
            DeploymentFile {
                file: "index.html",
                data: html,
            },
            DeploymentFile {
                file: "vercel.json",
                data: &config,
            },
        ];

        let body = json!({
            "name": name,
            "files": files,
            "projectSettings": {
                "framework": null,
                "buildCommand": null,
                "outputDirectory": null,
                "installCommand": null,
                "devCommand": null
            },
            "target": "production"
        });

        info!("Creating Vercel deployment '{name}'");
        let response = self
            .client
            .post(VERCEL_API_URL)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<VercelError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!("Vercel deployment failed ({status}): {message}");
            return Err(DeployError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let deployment: VercelDeployment = response.json().await?;
        match (deployment.url, deployment.id) {
            (Some(url), Some(id)) => Ok(DeploymentInfo {
                url: format!("https://{url}"),
                deployment_id: id,
                status: deployment.ready_state.unwrap_or_else(|| "BUILDING".to_string()),
            }),
            _ => Err(DeployError::InvalidResponse),
        }
    }

    async fn status(&self, deployment_id: &str) -> Result<DeploymentStatus, DeployError> {
        let token = self.token()?;
        let response = self
            .client
            .get(format!("{VERCEL_API_URL}/{deployment_id}"))
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeployError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let deployment: VercelDeployment = response.json().await?;
        Ok(DeploymentStatus {
            status: deployment
                .ready_state
                .unwrap_or_else(|| "UNKNOWN".to_string()),
            url: deployment.url.map(|url| format!("https://{url}")),
        })
    }
}
