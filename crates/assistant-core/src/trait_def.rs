//! Collaborator traits: where templates come from and where assistants go.

use std::sync::Arc;

use async_trait::async_trait;

use crate::configuration::{DeployableAssistant, DeploymentReceipt};
use crate::error::AssistantError;
use crate::template::Template;

/// Read-only lookup of templates by id.
pub trait TemplateCatalog: Send + Sync {
    /// Look up a template.
    ///
    /// Fails with [`AssistantError::TemplateNotFound`] for unknown ids.
    fn get(&self, id: &str) -> Result<Arc<Template>, AssistantError>;

    /// Every template in the catalog, in a stable order.
    fn list(&self) -> Vec<Arc<Template>>;
}

/// Turns a deployable configuration into a live assistant at the
/// voice-call provider.
///
/// Implementations make a single remote call per invocation and do not
/// retry; callers surface failures and decide whether to try again.
#[async_trait]
pub trait DeploymentClient: Send + Sync {
    /// Create a new assistant at the provider.
    async fn deploy(
        &self,
        assistant: &DeployableAssistant,
    ) -> Result<DeploymentReceipt, AssistantError>;

    /// Replace the configuration of an assistant that is already live.
    async fn update(
        &self,
        remote_id: &str,
        assistant: &DeployableAssistant,
    ) -> Result<DeploymentReceipt, AssistantError>;

    /// Name of this client for logging.
    fn name(&self) -> &str;
}

#[async_trait]
impl<T: DeploymentClient + ?Sized> DeploymentClient for Arc<T> {
    async fn deploy(
        &self,
        assistant: &DeployableAssistant,
    ) -> Result<DeploymentReceipt, AssistantError> {
        (**self).deploy(assistant).await
    }

    async fn update(
        &self,
        remote_id: &str,
        assistant: &DeployableAssistant,
    ) -> Result<DeploymentReceipt, AssistantError> {
        (**self).update(remote_id, assistant).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: TemplateCatalog + ?Sized> TemplateCatalog for Arc<T> {
    fn get(&self, id: &str) -> Result<Arc<Template>, AssistantError> {
        (**self).get(id)
    }

    fn list(&self) -> Vec<Arc<Template>> {
        (**self).list()
    }
}
