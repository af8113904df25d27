//! Voice Matrix API server.
//!
//! Serves the template catalog and builds and deploys assistants over JSON.

use std::sync::Arc;

use assistant_core::{DeploymentClient, TemplateCatalog};
use mock_deployer::RecordingDeployer;
use template_catalog::default_catalog;
use tracing::{info, warn};
use vapi_client::VapiClient;
use voice_matrix_api::config::Config;
use voice_matrix_api::state::AppState;

/// Calls a dry-run server keeps for inspection.
const DRY_RUN_HISTORY_LIMIT: usize = 100;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting Voice Matrix API");

    // Load templates
    let mut catalog = default_catalog()?;
    if let Some(dir) = &config.template_dir {
        let loaded = catalog.load_dir(dir)?;
        info!(dir = %dir.display(), loaded, "Loaded extra templates");
    }
    let catalog: Arc<dyn TemplateCatalog> = Arc::new(catalog);

    // Pick the deployment client
    let client: Arc<dyn DeploymentClient> = if config.dry_run {
        warn!("Dry run: deployments are recorded, not sent to the provider");
        Arc::new(RecordingDeployer::new().with_history_limit(DRY_RUN_HISTORY_LIMIT))
    } else {
        Arc::new(VapiClient::from_env()?)
    };

    // Build application state
    let state = AppState::new(catalog, client);
    let app = voice_matrix_api::app(state);

    // Start server
    info!(addr = %config.addr, "Voice Matrix API listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
