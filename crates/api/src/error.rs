//! Error types for the HTTP API.

use assistant_core::{AssistantConfiguration, AssistantError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors returned by API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failure from building or deploying an assistant.
    #[error(transparent)]
    Assistant(#[from] AssistantError),

    /// The provider rejected a deployment. Carries the configuration as it
    /// was left, prompt assembled and failure recorded.
    #[error("deployment failed: {reason}")]
    DeploymentFailed {
        reason: String,
        configuration: Box<AssistantConfiguration>,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, body) = match self {
            ApiError::Assistant(AssistantError::ValidationFailed(violations)) => {
                tracing::debug!("Validation failed: {}", message);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    serde_json::json!({ "error": message, "violations": violations }),
                )
            }
            ApiError::Assistant(AssistantError::TemplateNotFound(_)) => {
                (StatusCode::NOT_FOUND, serde_json::json!({ "error": message }))
            }
            ApiError::Assistant(AssistantError::TemplateMismatch { .. }) => {
                (StatusCode::BAD_REQUEST, serde_json::json!({ "error": message }))
            }
            ApiError::Assistant(AssistantError::DeploymentFailed(_)) => {
                tracing::warn!("{}", message);
                (StatusCode::BAD_GATEWAY, serde_json::json!({ "error": message }))
            }
            ApiError::Assistant(AssistantError::Configuration(_)) => {
                tracing::error!("{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": message }),
                )
            }
            ApiError::DeploymentFailed { configuration, .. } => {
                tracing::warn!("{}", message);
                (
                    StatusCode::BAD_GATEWAY,
                    serde_json::json!({ "error": message, "configuration": configuration }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
