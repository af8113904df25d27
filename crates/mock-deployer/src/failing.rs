//! Failing deployer - rejects every deployment.

use std::sync::atomic::{AtomicUsize, Ordering};

use assistant_core::{
    async_trait, AssistantError, DeployableAssistant, DeploymentClient, DeploymentReceipt,
};

/// A deployment client that always fails with the same reason.
///
/// Useful for testing how callers record and surface provider failures.
#[derive(Debug)]
pub struct FailingDeployer {
    reason: String,
    attempts: AtomicUsize,
}

impl FailingDeployer {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            attempts: AtomicUsize::new(0),
        }
    }

    /// Number of deploy and update calls received.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    fn fail(&self) -> Result<DeploymentReceipt, AssistantError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(AssistantError::DeploymentFailed(self.reason.clone()))
    }
}

impl Default for FailingDeployer {
    fn default() -> Self {
        Self::new("provider unavailable")
    }
}

#[async_trait]
impl DeploymentClient for FailingDeployer {
    async fn deploy(
        &self,
        _assistant: &DeployableAssistant,
    ) -> Result<DeploymentReceipt, AssistantError> {
        self.fail()
    }

    async fn update(
        &self,
        _remote_id: &str,
        _assistant: &DeployableAssistant,
    ) -> Result<DeploymentReceipt, AssistantError> {
        self.fail()
    }

    fn name(&self) -> &str {
        "FailingDeployer"
    }
}
