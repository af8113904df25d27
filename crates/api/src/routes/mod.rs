//! Route handlers for the Voice Matrix API.

pub mod assistants;
pub mod health;
pub mod templates;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Template catalog
        .route("/api/templates", get(templates::list_templates))
        .route("/api/templates/:id", get(templates::get_template))
        // Assistant assembly and deployment
        .route("/api/assistants/validate", post(assistants::validate))
        .route("/api/assistants/preview", post(assistants::preview))
        .route("/api/assistants/build", post(assistants::build))
        .route("/api/assistants/deploy", post(assistants::deploy))
}
