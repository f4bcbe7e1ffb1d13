pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::deploy::handlers as deploy_handlers;
use crate::generation::handlers as generation_handlers;
use crate::parser::handlers as parser_handlers;
use crate::portfolio::handlers as portfolio_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API: upload or raw text in, structured record out
        .route("/api/v1/resume/upload", post(parser_handlers::handle_upload))
        .route("/api/v1/resume/parse", post(parser_handlers::handle_parse_text))
        // Content API: record + target role in, artifacts out
        .route(
            "/api/v1/content/generate",
            post(generation_handlers::handle_generate),
        )
        // Portfolio API: build the static site, then ship it
        .route(
            "/api/v1/portfolio/build",
            post(portfolio_handlers::handle_build),
        )
        .route(
            "/api/v1/portfolio/deploy",
            post(deploy_handlers::handle_deploy),
        )
        .route(
            "/api/v1/portfolio/deploy/:id/status",
            get(deploy_handlers::handle_deploy_status),
        )
        .with_state(state)
}
