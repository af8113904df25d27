//! Assistant validation, preview, build and deployment routes.

use assistant_builder::{build_from_catalog, render_preview, validate_name, validate_values};
use assistant_core::{
    AssistantConfiguration, AssistantDraft, AssistantError, DeployableAssistant, ValidationReport,
    Violation,
};
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Validation outcome for a draft.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    /// False when any violation blocks assembly.
    pub valid: bool,
    pub violations: Vec<Violation>,
}

/// Prompt preview for a draft.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    pub template_id: String,
    pub template_version: String,
    /// Prompt with `[label]` in place of missing values.
    pub prompt: String,
}

/// Check a draft without assembling anything.
///
/// Always answers 200 for a known template; problems are in the body.
pub async fn validate(
    State(state): State<AppState>,
    Json(draft): Json<AssistantDraft>,
) -> Result<Json<ValidateResponse>> {
    let template = state.catalog.get(&draft.template_id)?;

    let mut report = ValidationReport::new(validate_name(&draft.name));
    report.extend(validate_values(&template, &draft.dynamic_segments).violations);

    Ok(Json(ValidateResponse {
        valid: report.is_valid(),
        violations: report.violations,
    }))
}

/// Render the prompt as filled in so far.
pub async fn preview(
    State(state): State<AppState>,
    Json(draft): Json<AssistantDraft>,
) -> Result<Json<PreviewResponse>> {
    let template = state.catalog.get(&draft.template_id)?;

    Ok(Json(PreviewResponse {
        template_id: template.id.clone(),
        template_version: template.version.clone(),
        prompt: render_preview(&template, &draft.dynamic_segments),
    }))
}

/// Build the provider-ready configuration without deploying it.
pub async fn build(
    State(state): State<AppState>,
    Json(draft): Json<AssistantDraft>,
) -> Result<Json<DeployableAssistant>> {
    let assistant = build_from_catalog(state.catalog.as_ref(), &draft)?;
    Ok(Json(assistant))
}

/// Build and deploy a configuration.
///
/// A configuration that already carries a remote id updates the live
/// assistant. On provider failure the response carries the configuration
/// with its assembled prompt and the recorded reason.
pub async fn deploy(
    State(state): State<AppState>,
    Json(mut configuration): Json<AssistantConfiguration>,
) -> Result<Json<AssistantConfiguration>> {
    match state.deployer().deploy(&mut configuration).await {
        Ok(receipt) => {
            info!(
                "Deployed '{}' as {}",
                configuration.draft.name, receipt.remote_id
            );
            Ok(Json(configuration))
        }
        Err(AssistantError::DeploymentFailed(reason)) => Err(ApiError::DeploymentFailed {
            reason,
            configuration: Box::new(configuration),
        }),
        Err(e) => Err(e.into()),
    }
}
