use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-supplied project entry, attached to generation and portfolio
/// requests. Never persisted; the client owns the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub screenshot: Option<String>,
}
