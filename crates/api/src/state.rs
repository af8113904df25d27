//! Application state shared across handlers.

use std::sync::Arc;

use assistant_builder::Deployer;
use assistant_core::{DeploymentClient, TemplateCatalog};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Template lookup.
    pub catalog: Arc<dyn TemplateCatalog>,
    /// Provider the assistants are deployed to.
    pub client: Arc<dyn DeploymentClient>,
}

impl AppState {
    /// Create new application state.
    pub fn new(catalog: Arc<dyn TemplateCatalog>, client: Arc<dyn DeploymentClient>) -> Self {
        Self { catalog, client }
    }

    /// A deployer over this state's catalog and client.
    pub fn deployer(&self) -> Deployer<Arc<dyn TemplateCatalog>, Arc<dyn DeploymentClient>> {
        Deployer::new(self.catalog.clone(), self.client.clone())
    }
}
