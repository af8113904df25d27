//! Build-then-deploy workflow over an [`AssistantConfiguration`].

use assistant_core::{
    AssistantConfiguration, AssistantError, DeployableAssistant, DeploymentClient,
    DeploymentReceipt, TemplateCatalog,
};
use tracing::{info, warn};

use crate::builder::build_from_catalog;

/// Builds configurations from a catalog and pushes them to a deployment
/// client.
///
/// The deployer holds no per-request state; one instance can serve any
/// number of configurations.
pub struct Deployer<C, D> {
    catalog: C,
    client: D,
}

impl<C: TemplateCatalog, D: DeploymentClient> Deployer<C, D> {
    pub fn new(catalog: C, client: D) -> Self {
        Self { catalog, client }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn client(&self) -> &D {
        &self.client
    }

    /// Build the configuration and store the assembled prompt.
    ///
    /// On failure the configuration is left untouched.
    pub fn prepare(
        &self,
        config: &mut AssistantConfiguration,
    ) -> Result<DeployableAssistant, AssistantError> {
        let assistant = build_from_catalog(&self.catalog, &config.draft)?;
        config.mark_assembled(assistant.assembled_prompt.clone());
        Ok(assistant)
    }

    /// Build and deploy a configuration.
    ///
    /// Validation and lookup errors are returned before any remote call. A
    /// configuration that already has a remote id is updated in place
    /// instead of creating a second assistant. Provider failures are
    /// recorded on the configuration and returned as
    /// [`AssistantError::DeploymentFailed`].
    pub async fn deploy(
        &self,
        config: &mut AssistantConfiguration,
    ) -> Result<DeploymentReceipt, AssistantError> {
        let assistant = self.prepare(config)?;

        let result = match config.remote_id.clone() {
            Some(remote_id) => {
                info!(
                    "Updating assistant {} via {} ({})",
                    remote_id,
                    self.client.name(),
                    assistant.name
                );
                self.client.update(&remote_id, &assistant).await
            }
            None => {
                info!(
                    "Deploying assistant '{}' via {}",
                    assistant.name,
                    self.client.name()
                );
                self.client.deploy(&assistant).await
            }
        };

        match result {
            Ok(receipt) => {
                config.mark_deployed(&receipt);
                info!(
                    "Assistant '{}' live as {}",
                    assistant.name, receipt.remote_id
                );
                Ok(receipt)
            }
            Err(e) => {
                let reason = match e {
                    AssistantError::DeploymentFailed(reason) => reason,
                    other => other.to_string(),
                };
                warn!("Deployment of '{}' failed: {}", assistant.name, reason);
                config.mark_failed(reason.clone());
                Err(AssistantError::DeploymentFailed(reason))
            }
        }
    }
}
