//! Voice, conversation and model settings with field-level override merging.

use serde::{Deserialize, Serialize};

/// Text-to-speech settings of an assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSettings {
    /// Voice provider, e.g. `11labs`.
    pub provider: String,
    pub voice_id: String,
    /// Speaking rate multiplier.
    pub speed: f64,
    pub stability: f64,
    pub similarity_boost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<f64>,
}

/// Per-assistant changes to a template's [`VoiceSettings`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_boost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<f64>,
}

impl VoiceSettings {
    /// Apply overrides field by field. Fields the override leaves unset keep
    /// the template value.
    pub fn merged(&self, overrides: &VoiceOverrides) -> VoiceSettings {
        VoiceSettings {
            provider: overrides
                .provider
                .clone()
                .unwrap_or_else(|| self.provider.clone()),
            voice_id: overrides
                .voice_id
                .clone()
                .unwrap_or_else(|| self.voice_id.clone()),
            speed: overrides.speed.unwrap_or(self.speed),
            stability: overrides.stability.unwrap_or(self.stability),
            similarity_boost: overrides.similarity_boost.unwrap_or(self.similarity_boost),
            style: overrides.style.or(self.style),
        }
    }
}

/// Call behavior outside the prompt itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSettings {
    /// What the assistant says when it picks up.
    pub first_message: String,
    /// What the assistant says before hanging up.
    pub end_call_message: String,
    pub silence_timeout_seconds: u32,
    pub max_duration_seconds: u32,
    /// Phrases that end the call when the assistant says them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub end_call_phrases: Vec<String>,
}

/// Per-assistant changes to a template's [`ConversationSettings`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_call_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silence_timeout_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_duration_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_call_phrases: Option<Vec<String>>,
}

impl ConversationSettings {
    /// Apply overrides field by field.
    pub fn merged(&self, overrides: &ConversationOverrides) -> ConversationSettings {
        ConversationSettings {
            first_message: overrides
                .first_message
                .clone()
                .unwrap_or_else(|| self.first_message.clone()),
            end_call_message: overrides
                .end_call_message
                .clone()
                .unwrap_or_else(|| self.end_call_message.clone()),
            silence_timeout_seconds: overrides
                .silence_timeout_seconds
                .unwrap_or(self.silence_timeout_seconds),
            max_duration_seconds: overrides
                .max_duration_seconds
                .unwrap_or(self.max_duration_seconds),
            end_call_phrases: overrides
                .end_call_phrases
                .clone()
                .unwrap_or_else(|| self.end_call_phrases.clone()),
        }
    }
}

/// Language model behind the assistant. Owned by the template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSettings {
    pub provider: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "gpt-4o".to_string(),
            temperature: 0.7,
            max_tokens: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_voice() -> VoiceSettings {
        VoiceSettings {
            provider: "11labs".to_string(),
            voice_id: "sarah".to_string(),
            speed: 1.0,
            stability: 0.8,
            similarity_boost: 0.75,
            style: None,
        }
    }

    #[test]
    fn test_voice_merge_is_field_level() {
        let overrides = VoiceOverrides {
            speed: Some(1.2),
            ..Default::default()
        };

        let merged = default_voice().merged(&overrides);
        assert_eq!(merged.speed, 1.2);
        assert_eq!(merged.stability, 0.8);
        assert_eq!(merged.voice_id, "sarah");
        assert_eq!(merged.similarity_boost, 0.75);
    }

    #[test]
    fn test_voice_merge_empty_override_is_identity() {
        let voice = default_voice();
        assert_eq!(voice.merged(&VoiceOverrides::default()), voice);
    }

    #[test]
    fn test_voice_overrides_deserialize_partial() {
        let overrides: VoiceOverrides =
            serde_json::from_str(r#"{"voiceId": "paula", "style": 0.3}"#).unwrap();
        let merged = default_voice().merged(&overrides);

        assert_eq!(merged.voice_id, "paula");
        assert_eq!(merged.style, Some(0.3));
        assert_eq!(merged.provider, "11labs");
    }

    #[test]
    fn test_conversation_merge() {
        let settings = ConversationSettings {
            first_message: "Hello!".to_string(),
            end_call_message: "Goodbye.".to_string(),
            silence_timeout_seconds: 30,
            max_duration_seconds: 600,
            end_call_phrases: vec!["goodbye".to_string()],
        };
        let overrides = ConversationOverrides {
            first_message: Some("Thanks for calling Premier Dental!".to_string()),
            max_duration_seconds: Some(900),
            ..Default::default()
        };

        let merged = settings.merged(&overrides);
        assert_eq!(merged.first_message, "Thanks for calling Premier Dental!");
        assert_eq!(merged.end_call_message, "Goodbye.");
        assert_eq!(merged.silence_timeout_seconds, 30);
        assert_eq!(merged.max_duration_seconds, 900);
        assert_eq!(merged.end_call_phrases, vec!["goodbye".to_string()]);
    }
}
