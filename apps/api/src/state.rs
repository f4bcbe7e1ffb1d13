use std::sync::Arc;

use crate::config::Config;
use crate::deploy::Deployer;

/// Shared application state injected into route handlers via Axum extractors.
/// Read-only after startup; the engine itself carries no state at all.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable deployment backend. Default: VercelDeployer.
    pub deployer: Arc<dyn Deployer>,
}
