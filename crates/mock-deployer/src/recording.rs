//! Recording deployer - keeps the assistants it is asked to deploy.

use std::collections::VecDeque;

use assistant_core::{
    async_trait, AssistantError, DeployableAssistant, DeploymentClient, DeploymentReceipt,
};
use tokio::sync::Mutex;

/// Which trait method produced a [`DeploymentCall`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallKind {
    Deploy,
    Update { remote_id: String },
}

/// One call received by a [`RecordingDeployer`].
#[derive(Debug, Clone)]
pub struct DeploymentCall {
    pub kind: CallKind,
    pub assistant: DeployableAssistant,
}

#[derive(Debug, Default)]
struct History {
    /// Retained calls, oldest first.
    calls: VecDeque<DeploymentCall>,
    received: usize,
    created: usize,
}

/// A deployment client that records calls instead of contacting a provider.
///
/// New assistants get sequential ids (`mock-asst-1`, `mock-asst-2`, ...).
/// Useful for tests and for dry runs of the API server. Every call is kept
/// unless a history limit is set.
#[derive(Debug, Default)]
pub struct RecordingDeployer {
    phone_number: Option<String>,
    history_limit: Option<usize>,
    history: Mutex<History>,
}

impl RecordingDeployer {
    /// Create a new RecordingDeployer that assigns no phone numbers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deployer that reports `number` as assigned to every new
    /// assistant.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mock_deployer::RecordingDeployer;
    ///
    /// let deployer = RecordingDeployer::with_phone_number("+15550100");
    /// // Receipts from deploy() will carry +15550100
    /// ```
    pub fn with_phone_number(number: impl Into<String>) -> Self {
        Self {
            phone_number: Some(number.into()),
            ..Default::default()
        }
    }

    /// Keep only the `limit` most recent calls. Ids and counts are
    /// unaffected; a limit of zero keeps counts only.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Retained calls, oldest first.
    pub async fn calls(&self) -> Vec<DeploymentCall> {
        self.history.lock().await.calls.iter().cloned().collect()
    }

    /// Number of calls received, including any no longer retained.
    pub async fn call_count(&self) -> usize {
        self.history.lock().await.received
    }

    /// The most recently received assistant, if retained.
    pub async fn last(&self) -> Option<DeployableAssistant> {
        self.history
            .lock()
            .await
            .calls
            .back()
            .map(|call| call.assistant.clone())
    }

    fn record(&self, history: &mut History, call: DeploymentCall) {
        history.received += 1;
        history.calls.push_back(call);
        if let Some(limit) = self.history_limit {
            while history.calls.len() > limit {
                history.calls.pop_front();
            }
        }
    }
}

#[async_trait]
impl DeploymentClient for RecordingDeployer {
    async fn deploy(
        &self,
        assistant: &DeployableAssistant,
    ) -> Result<DeploymentReceipt, AssistantError> {
        let mut history = self.history.lock().await;
        history.created += 1;
        let receipt = DeploymentReceipt::new(format!("mock-asst-{}", history.created));
        self.record(
            &mut history,
            DeploymentCall {
                kind: CallKind::Deploy,
                assistant: assistant.clone(),
            },
        );

        Ok(match &self.phone_number {
            Some(number) => receipt.with_phone_number(number.clone()),
            None => receipt,
        })
    }

    async fn update(
        &self,
        remote_id: &str,
        assistant: &DeployableAssistant,
    ) -> Result<DeploymentReceipt, AssistantError> {
        let mut history = self.history.lock().await;
        self.record(
            &mut history,
            DeploymentCall {
                kind: CallKind::Update {
                    remote_id: remote_id.to_string(),
                },
                assistant: assistant.clone(),
            },
        );

        Ok(DeploymentReceipt::new(remote_id))
    }

    fn name(&self) -> &str {
        "RecordingDeployer"
    }
}
