//! Error types for assistant assembly and deployment.

use thiserror::Error;

use crate::validation::Violation;

/// Errors that can occur while building or deploying an assistant.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// One or more blocking validation rules failed. Nothing was assembled.
    #[error("validation failed: {}", summarize(.0))]
    ValidationFailed(Vec<Violation>),

    /// The referenced template is not in the catalog.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// The draft references a different template than the one supplied.
    #[error("draft references template {actual}, expected {expected}")]
    TemplateMismatch { expected: String, actual: String },

    /// The voice-call provider rejected or failed the deployment.
    #[error("deployment failed: {0}")]
    DeploymentFailed(String),

    /// Invalid client or environment configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl AssistantError {
    /// Violations carried by a validation failure.
    pub fn violations(&self) -> &[Violation] {
        match self {
            AssistantError::ValidationFailed(violations) => violations,
            _ => &[],
        }
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{} ({}): {}", v.segment_id, v.rule, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}
