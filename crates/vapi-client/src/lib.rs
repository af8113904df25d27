//! Vapi deployment client for Voice Matrix assistants.
//!
//! This crate provides a [`DeploymentClient`] implementation that turns a
//! [`DeployableAssistant`] into a live phone assistant through the Vapi REST
//! API.
//!
//! # Features
//!
//! - Creates assistants (`POST /assistant`) and updates live ones (`PATCH /assistant/{id}`)
//! - Assembled prompt sent as the model's system message
//! - Prompt fingerprint and template version recorded in assistant metadata
//! - HIPAA mode, recording disclosure and data collection carried from the business rules
//! - Optional phone number provisioning for new assistants
//! - Configurable via environment variables
//!
//! # Usage
//!
//! ```rust,no_run
//! use vapi_client::VapiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = VapiClient::from_env()?;
//!     // Hand the client to a Deployer...
//!     Ok(())
//! }
//! ```

mod api_types;
mod client;
mod config;

pub use api_types::{
    AnalysisPlan, AssistantMetadata, AssistantRequest, ChatMessage, ModelConfig,
    StructuredDataPlan, VoiceConfig,
};
pub use client::VapiClient;
pub use config::{VapiConfig, VapiConfigBuilder, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

// Re-export assistant-core types for convenience
pub use assistant_core::{
    async_trait, AssistantError, DeployableAssistant, DeploymentClient, DeploymentReceipt,
};
