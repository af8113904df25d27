//! Mock deployment clients for Voice Matrix assistants.
//!
//! This crate provides mock implementations of the `DeploymentClient` trait:
//! - `RecordingDeployer` - Records every call and returns sequential ids
//! - `FailingDeployer` - Fails every call with a fixed reason
//!
//! For real deployments, use the `vapi-client` crate instead.
//!
//! # Example
//!
//! ```rust,ignore
//! use mock_deployer::{DeploymentClient, RecordingDeployer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_deployer::AssistantError> {
//!     let deployer = RecordingDeployer::new();
//!
//!     let receipt = deployer.deploy(&assistant).await?;
//!     println!("Deployed as {}", receipt.remote_id);
//!     assert_eq!(deployer.call_count().await, 1);
//!     Ok(())
//! }
//! ```

mod failing;
mod recording;

// Re-export assistant-core types for convenience
pub use assistant_core::{
    async_trait, AssistantError, DeployableAssistant, DeploymentClient, DeploymentReceipt,
};

pub use failing::FailingDeployer;
pub use recording::{CallKind, DeploymentCall, RecordingDeployer};

#[cfg(test)]
pub(crate) fn test_assistant() -> DeployableAssistant {
    use assistant_core::{
        hash_prompt, BusinessRules, ConversationSettings, ModelSettings, VoiceSettings,
    };

    let prompt = "You are a receptionist.".to_string();
    DeployableAssistant {
        name: "Front Desk".to_string(),
        template_id: "appointment-booking".to_string(),
        template_version: "2.1.0".to_string(),
        prompt_hash: hash_prompt(&prompt),
        assembled_prompt: prompt,
        model: ModelSettings::default(),
        voice_settings: VoiceSettings {
            provider: "11labs".to_string(),
            voice_id: "sarah".to_string(),
            speed: 1.0,
            stability: 0.8,
            similarity_boost: 0.75,
            style: None,
        },
        conversation_settings: ConversationSettings {
            first_message: "Hello!".to_string(),
            end_call_message: "Goodbye.".to_string(),
            silence_timeout_seconds: 30,
            max_duration_seconds: 600,
            end_call_phrases: Vec::new(),
        },
        business_rules: BusinessRules::default(),
        webhooks: Vec::new(),
    }
}
