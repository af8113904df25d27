//! HTTP API for Voice Matrix assistant templates.
//!
//! Serves the template catalog and turns assistant drafts into validated,
//! deployable configurations.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application with all routes and middleware.
pub fn app(state: AppState) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
