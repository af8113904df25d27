//! Vapi API request and response types.

use assistant_core::{
    BusinessRules, ComplianceSettings, DataCollectionRule, DeployableAssistant, EscalationRule,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// A chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

/// Language model block of an assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfig {
    pub provider: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    /// The assembled prompt goes here as the single system message.
    pub messages: Vec<ChatMessage>,
}

/// Voice block of an assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    pub provider: String,
    pub voice_id: String,
    pub speed: f64,
    pub stability: f64,
    pub similarity_boost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<f64>,
}

/// Where an assistant came from, echoed back by the provider.
///
/// Escalation rules and compliance settings the provider has no field for
/// travel here so call handlers on the server URL can act on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantMetadata {
    pub template_id: String,
    pub template_version: String,
    pub prompt_hash: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub escalation_rules: Vec<EscalationRule>,
    #[serde(default)]
    pub compliance: ComplianceSettings,
}

/// Post-call extraction of the fields the assistant collects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPlan {
    pub structured_data_plan: StructuredDataPlan,
}

#[derive(Debug, Clone, Serialize)]
pub struct StructuredDataPlan {
    pub enabled: bool,
    /// JSON schema of the collected fields.
    pub schema: Value,
}

impl AnalysisPlan {
    /// `None` when nothing is collected.
    fn for_fields(fields: &[DataCollectionRule]) -> Option<Self> {
        if fields.is_empty() {
            return None;
        }

        let properties: Map<String, Value> = fields
            .iter()
            .map(|rule| {
                let property = json!({"type": "string", "description": rule.description});
                (rule.field.clone(), property)
            })
            .collect();
        let required: Vec<&str> = fields
            .iter()
            .filter(|rule| rule.required)
            .map(|rule| rule.field.as_str())
            .collect();

        Some(Self {
            structured_data_plan: StructuredDataPlan {
                enabled: true,
                schema: json!({
                    "type": "object",
                    "properties": properties,
                    "required": required,
                }),
            },
        })
    }
}

/// Body of `POST /assistant` and `PATCH /assistant/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantRequest {
    pub name: String,
    pub first_message: String,
    pub end_call_message: String,
    pub model: ModelConfig,
    pub voice: VoiceConfig,
    pub silence_timeout_seconds: u32,
    pub max_duration_seconds: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub end_call_phrases: Vec<String>,
    /// Turns off transcript and recording storage at the provider.
    pub hipaa_enabled: bool,
    pub recording_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_plan: Option<AnalysisPlan>,
    /// Number calls are transferred to when escalating to a person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forwarding_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub server_messages: Vec<String>,
    pub metadata: AssistantMetadata,
}

impl AssistantRequest {
    /// Translate a deployable assistant into the provider's shape.
    pub fn from_deployable(assistant: &DeployableAssistant, server_url: Option<&str>) -> Self {
        let rules = &assistant.business_rules;
        let escalation = &rules.escalation;
        let forwarding_phone_number = escalation
            .transfers_to_human()
            .then(|| escalation.transfer_phone_number.clone())
            .flatten();

        let voice = &assistant.voice_settings;
        let conversation = &assistant.conversation_settings;

        Self {
            name: assistant.name.clone(),
            first_message: first_message(&conversation.first_message, rules),
            end_call_message: conversation.end_call_message.clone(),
            model: ModelConfig {
                provider: assistant.model.provider.clone(),
                model: assistant.model.model.clone(),
                temperature: assistant.model.temperature,
                max_tokens: assistant.model.max_tokens,
                messages: vec![ChatMessage::system(assistant.assembled_prompt.clone())],
            },
            voice: VoiceConfig {
                provider: voice.provider.clone(),
                voice_id: voice.voice_id.clone(),
                speed: voice.speed,
                stability: voice.stability,
                similarity_boost: voice.similarity_boost,
                style: voice.style,
            },
            silence_timeout_seconds: conversation.silence_timeout_seconds,
            max_duration_seconds: conversation.max_duration_seconds,
            end_call_phrases: conversation.end_call_phrases.clone(),
            hipaa_enabled: rules.compliance.hipaa,
            recording_enabled: rules.compliance.recording_disclosure,
            analysis_plan: AnalysisPlan::for_fields(&rules.data_collection),
            forwarding_phone_number,
            server_url: server_url.map(str::to_string),
            server_messages: assistant
                .webhooks
                .iter()
                .map(|event| event.provider_name().to_string())
                .collect(),
            metadata: AssistantMetadata {
                template_id: assistant.template_id.clone(),
                template_version: assistant.template_version.clone(),
                prompt_hash: assistant.prompt_hash.clone(),
                escalation_rules: escalation.rules.clone(),
                compliance: rules.compliance.clone(),
            },
        }
    }
}

/// The greeting, preceded by the recording disclosure when calls are
/// recorded.
fn first_message(greeting: &str, rules: &BusinessRules) -> String {
    let compliance = &rules.compliance;
    match compliance.disclosure_text.as_deref().map(str::trim) {
        Some(disclosure) if compliance.recording_disclosure && !disclosure.is_empty() => {
            format!("{} {}", disclosure, greeting)
        }
        _ => greeting.to_string(),
    }
}

/// Assistant as returned by the provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantResponse {
    pub id: String,
}

/// Body of `POST /phone-number`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumberRequest {
    /// Always `vapi` for provider-managed numbers.
    pub provider: String,
    pub assistant_id: String,
    pub name: String,
}

impl PhoneNumberRequest {
    pub fn for_assistant(assistant_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            provider: "vapi".to_string(),
            assistant_id: assistant_id.into(),
            name: name.into(),
        }
    }
}

/// Phone number as returned by the provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumberResponse {
    pub id: String,
    #[serde(default)]
    pub number: Option<String>,
}

/// API error response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// A single message or one message per invalid field.
    pub message: ErrorMessage,
    /// Error class, e.g. "Bad Request".
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiError {
    pub fn describe(&self) -> String {
        match &self.error {
            Some(class) => format!("{}: {}", class, self.message.text()),
            None => self.message.text(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessage {
    pub fn text(&self) -> String {
        match self {
            ErrorMessage::One(message) => message.clone(),
            ErrorMessage::Many(messages) => messages.join("; "),
        }
    }
}
