//! Assistant drafts, deployable configurations and deployment bookkeeping.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::business_rules::{BusinessRules, WebhookEvent};
use crate::prompt::hash_prompt;
use crate::settings::{
    ConversationOverrides, ConversationSettings, ModelSettings, VoiceOverrides, VoiceSettings,
};

/// What a business submits when configuring an assistant from a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantDraft {
    pub name: String,
    pub template_id: String,
    /// Values keyed by dynamic segment id.
    #[serde(default)]
    pub dynamic_segments: IndexMap<String, String>,
    #[serde(default)]
    pub voice_settings: VoiceOverrides,
    #[serde(default)]
    pub conversation_settings: ConversationOverrides,
}

impl AssistantDraft {
    pub fn new(name: impl Into<String>, template_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template_id: template_id.into(),
            ..Default::default()
        }
    }

    /// Set the value of a dynamic segment.
    pub fn with_value(mut self, segment_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.dynamic_segments.insert(segment_id.into(), value.into());
        self
    }

    pub fn with_voice(mut self, overrides: VoiceOverrides) -> Self {
        self.voice_settings = overrides;
        self
    }

    pub fn with_conversation(mut self, overrides: ConversationOverrides) -> Self {
        self.conversation_settings = overrides;
        self
    }
}

/// Where a configuration is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentStatus {
    /// Saved, never assembled.
    #[default]
    Draft,
    /// Prompt assembled; this prompt is not live at the provider. A
    /// configuration with a remote id may still have an older prompt live.
    Assembled,
    /// The assembled prompt is live at the provider.
    Deployed,
}

/// One customer's instantiation of a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantConfiguration {
    #[serde(flatten)]
    pub draft: AssistantDraft,
    /// Derived from the template and the draft values. Never edited by hand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assembled_prompt: Option<String>,
    #[serde(default)]
    pub status: DeploymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Fingerprint of the prompt the provider is running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployed_prompt_hash: Option<String>,
    /// Reason of the most recent failed deployment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

impl AssistantConfiguration {
    pub fn new(draft: AssistantDraft) -> Self {
        Self {
            draft,
            ..Default::default()
        }
    }

    pub fn is_deployed(&self) -> bool {
        self.status == DeploymentStatus::Deployed
    }

    /// Record a freshly assembled prompt. Stays deployed only when the
    /// prompt is the one already live.
    pub fn mark_assembled(&mut self, prompt: impl Into<String>) {
        let prompt = prompt.into();
        let live = self.status == DeploymentStatus::Deployed
            && self.deployed_prompt_hash.as_deref() == Some(hash_prompt(&prompt).as_str());
        if !live {
            self.status = DeploymentStatus::Assembled;
        }
        self.assembled_prompt = Some(prompt);
    }

    /// Record a successful deployment of the assembled prompt.
    pub fn mark_deployed(&mut self, receipt: &DeploymentReceipt) {
        self.remote_id = Some(receipt.remote_id.clone());
        if receipt.assigned_phone_number.is_some() {
            self.phone_number = receipt.assigned_phone_number.clone();
        }
        self.deployed_prompt_hash = self.assembled_prompt.as_deref().map(hash_prompt);
        self.status = DeploymentStatus::Deployed;
        self.last_error = None;
    }

    /// Record a failed deployment. The configuration stays assembled; the
    /// remote id is kept so a retry updates the live assistant.
    pub fn mark_failed(&mut self, reason: impl Into<String>) {
        self.last_error = Some(reason.into());
        self.status = DeploymentStatus::Assembled;
    }
}

/// Everything the voice-call provider needs to create a live assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployableAssistant {
    pub name: String,
    pub template_id: String,
    pub template_version: String,
    pub assembled_prompt: String,
    /// SHA-256 fingerprint of `assembled_prompt`.
    pub prompt_hash: String,
    pub model: ModelSettings,
    pub voice_settings: VoiceSettings,
    pub conversation_settings: ConversationSettings,
    pub business_rules: BusinessRules,
    #[serde(default)]
    pub webhooks: Vec<WebhookEvent>,
}

/// Identifiers returned by a successful deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentReceipt {
    pub remote_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_phone_number: Option<String>,
}

impl DeploymentReceipt {
    pub fn new(remote_id: impl Into<String>) -> Self {
        Self {
            remote_id: remote_id.into(),
            assigned_phone_number: None,
        }
    }

    pub fn with_phone_number(mut self, number: impl Into<String>) -> Self {
        self.assigned_phone_number = Some(number.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_deserializes_from_request_body() {
        let json = r#"{
            "name": "Front Desk",
            "templateId": "appointment-booking",
            "dynamicSegments": {"business-name-services": "Premier Dental Care"},
            "voiceSettings": {"speed": 1.1}
        }"#;

        let draft: AssistantDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.template_id, "appointment-booking");
        assert_eq!(
            draft.dynamic_segments.get("business-name-services").map(String::as_str),
            Some("Premier Dental Care")
        );
        assert_eq!(draft.voice_settings.speed, Some(1.1));
        assert_eq!(draft.conversation_settings, ConversationOverrides::default());
    }

    #[test]
    fn test_configuration_lifecycle() {
        let mut config = AssistantConfiguration::new(AssistantDraft::new("Front Desk", "t"));
        assert_eq!(config.status, DeploymentStatus::Draft);

        config.mark_assembled("prompt");
        assert_eq!(config.status, DeploymentStatus::Assembled);

        config.mark_failed("quota exceeded");
        assert_eq!(config.status, DeploymentStatus::Assembled);
        assert_eq!(config.last_error.as_deref(), Some("quota exceeded"));

        config.mark_deployed(&DeploymentReceipt::new("asst_1").with_phone_number("+15550123"));
        assert!(config.is_deployed());
        assert_eq!(config.remote_id.as_deref(), Some("asst_1"));
        assert_eq!(config.phone_number.as_deref(), Some("+15550123"));
        assert!(config.last_error.is_none());
    }

    #[test]
    fn test_failed_update_leaves_new_prompt_assembled() {
        let mut config = AssistantConfiguration::new(AssistantDraft::new("Front Desk", "t"));
        config.mark_assembled("prompt");
        config.mark_deployed(&DeploymentReceipt::new("asst_1"));

        config.mark_assembled("new prompt");
        config.mark_failed("timeout");

        assert_eq!(config.status, DeploymentStatus::Assembled);
        assert_eq!(config.remote_id.as_deref(), Some("asst_1"));
        assert_eq!(config.assembled_prompt.as_deref(), Some("new prompt"));
        assert_eq!(config.deployed_prompt_hash, Some(hash_prompt("prompt")));
        assert_eq!(config.last_error.as_deref(), Some("timeout"));
    }

    #[test]
    fn test_reassembling_live_prompt_stays_deployed() {
        let mut config = AssistantConfiguration::new(AssistantDraft::new("Front Desk", "t"));
        config.mark_assembled("prompt");
        config.mark_deployed(&DeploymentReceipt::new("asst_1"));

        config.mark_assembled("prompt");
        assert!(config.is_deployed());

        config.mark_assembled("edited prompt");
        assert_eq!(config.status, DeploymentStatus::Assembled);
    }

    #[test]
    fn test_configuration_flattens_draft() {
        let config = AssistantConfiguration::new(
            AssistantDraft::new("Front Desk", "appointment-booking").with_value("a", "b"),
        );
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["name"], "Front Desk");
        assert_eq!(json["templateId"], "appointment-booking");
        assert_eq!(json["dynamicSegments"]["a"], "b");
        assert_eq!(json["status"], "draft");
        assert!(json.get("remoteId").is_none());
    }
}
