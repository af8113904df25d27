//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub status: &'static str,
    /// Number of templates in the catalog.
    pub templates: usize,
    /// Name of the deployment client in use.
    pub deployment_client: String,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        templates: state.catalog.list().len(),
        deployment_client: state.client.name().to_string(),
    })
}
