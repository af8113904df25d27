//! Turns a draft plus its template into a deployable assistant.

use assistant_core::{
    hash_prompt, short_hash, AssistantDraft, AssistantError, DeployableAssistant,
    TemplateCatalog, TemplateStatus, Template, ValidationReport,
};
use tracing::{debug, info, warn};

use crate::assembler::compose_validated;
use crate::validator::{validate_name, validate_values};

/// Build a deployable assistant from a draft and the template it references.
///
/// The name and every dynamic value are validated together, so a failure
/// lists every blocking problem at once. Voice and conversation overrides
/// are merged into the template defaults field by field; the model,
/// business rules and webhooks come from the template unchanged. Nothing is
/// produced unless the whole draft is valid.
pub fn build(
    draft: &AssistantDraft,
    template: &Template,
) -> Result<DeployableAssistant, AssistantError> {
    if draft.template_id != template.id {
        return Err(AssistantError::TemplateMismatch {
            expected: template.id.clone(),
            actual: draft.template_id.clone(),
        });
    }

    let mut report = ValidationReport::new(validate_name(&draft.name));
    report.extend(validate_values(template, &draft.dynamic_segments).violations);
    let advisories = report.into_result()?;
    for advisory in &advisories {
        debug!(
            "Advisory for {} ({}): {}",
            advisory.segment_id, advisory.rule, advisory.message
        );
    }

    let assembled_prompt = compose_validated(template, &draft.dynamic_segments);
    let prompt_hash = hash_prompt(&assembled_prompt);

    info!(
        "Built assistant '{}' from {}@{} (prompt {} chars, hash {})",
        draft.name.trim(),
        template.id,
        template.version,
        assembled_prompt.chars().count(),
        short_hash(&assembled_prompt)
    );

    Ok(DeployableAssistant {
        name: draft.name.trim().to_string(),
        template_id: template.id.clone(),
        template_version: template.version.clone(),
        assembled_prompt,
        prompt_hash,
        model: template.model.clone(),
        voice_settings: template.voice.merged(&draft.voice_settings),
        conversation_settings: template.conversation.merged(&draft.conversation_settings),
        business_rules: template.business_rules.clone(),
        webhooks: template.webhooks.clone(),
    })
}

/// Look up the draft's template in a catalog and [`build`] from it.
///
/// Deprecated templates still build so existing assistants can be
/// redeployed, but a warning is logged.
pub fn build_from_catalog<C: TemplateCatalog + ?Sized>(
    catalog: &C,
    draft: &AssistantDraft,
) -> Result<DeployableAssistant, AssistantError> {
    let template = catalog.get(&draft.template_id)?;
    if template.status == TemplateStatus::Deprecated {
        warn!(
            "Building '{}' from deprecated template {}@{}",
            draft.name, template.id, template.version
        );
    }
    build(draft, &template)
}
