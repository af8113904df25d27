//! Core types and traits for Voice Matrix assistant templates.
//!
//! This crate provides the shared data model used by every other crate in
//! the workspace. It defines:
//!
//! - [`Template`] / [`Segment`] - Versioned assistant definitions and their prompt blocks
//! - [`SegmentValidation`] / [`Violation`] - Rules on user-supplied values and their failures
//! - [`AssistantDraft`] / [`AssistantConfiguration`] - A customer's instantiation of a template
//! - [`DeployableAssistant`] - The assembled, provider-ready configuration
//! - [`TemplateCatalog`] / [`DeploymentClient`] - Collaborator traits
//! - [`AssistantError`] - Error taxonomy shared by all operations
//!
//! # Example
//!
//! ```rust
//! use assistant_core::{async_trait, AssistantError, DeployableAssistant, DeploymentClient, DeploymentReceipt};
//!
//! struct LoggingDeployer;
//!
//! #[async_trait]
//! impl DeploymentClient for LoggingDeployer {
//!     async fn deploy(&self, assistant: &DeployableAssistant) -> Result<DeploymentReceipt, AssistantError> {
//!         Ok(DeploymentReceipt::new(format!("local-{}", assistant.prompt_hash)))
//!     }
//!
//!     async fn update(&self, remote_id: &str, _assistant: &DeployableAssistant) -> Result<DeploymentReceipt, AssistantError> {
//!         Ok(DeploymentReceipt::new(remote_id))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "LoggingDeployer"
//!     }
//! }
//! ```

mod business_rules;
mod configuration;
mod error;
mod prompt;
mod segment;
mod settings;
mod template;
mod trait_def;
mod validation;

pub use business_rules::{
    BusinessRules, CallObservation, Comparison, ComplianceSettings, DataCollectionRule,
    EscalationAction, EscalationPolicy, EscalationRule, EscalationTrigger, KpiTarget,
    WebhookEvent,
};
pub use configuration::{
    AssistantConfiguration, AssistantDraft, DeployableAssistant, DeploymentReceipt,
    DeploymentStatus,
};
pub use error::AssistantError;
pub use prompt::{hash_prompt, short_hash};
pub use segment::{DynamicSegment, FixedSegment, Impact, Segment};
pub use settings::{
    ConversationOverrides, ConversationSettings, ModelSettings, VoiceOverrides, VoiceSettings,
};
pub use template::{
    Complexity, Documentation, Industry, InteractionType, Template, TemplateCategory,
    TemplateDefect, TemplateStatus,
};
pub use trait_def::{DeploymentClient, TemplateCatalog};
pub use validation::{
    Pattern, Requirement, RuleKind, SegmentValidation, Severity, ValidationReport, ValidationRule,
    Violation,
};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
