//! Small in-memory templates shared by unit tests.

use std::sync::Arc;

use assistant_core::{
    AssistantError, BusinessRules, Complexity, ConversationSettings, Documentation,
    DynamicSegment, FixedSegment, Impact, Industry, InteractionType, ModelSettings, Segment,
    SegmentValidation, Template, TemplateCatalog, TemplateCategory, TemplateStatus,
    ValidationRule, VoiceSettings, WebhookEvent,
};

fn fixed(id: &str, content: &str) -> FixedSegment {
    FixedSegment {
        id: id.to_string(),
        label: id.to_string(),
        content: content.to_string(),
        business_purpose: None,
        impact: Impact::High,
    }
}

fn dynamic(id: &str, label: &str, validation: SegmentValidation) -> Segment {
    Segment::Dynamic(DynamicSegment {
        id: id.to_string(),
        label: label.to_string(),
        placeholder_hint: None,
        validation: Some(validation),
        business_purpose: None,
        impact: Impact::Medium,
    })
}

/// Foundation, required `services`, business rule, optional `notes`.
pub(crate) fn ordered_template() -> Template {
    Template {
        id: "front-desk".to_string(),
        name: "Front Desk".to_string(),
        version: "1.2.0".to_string(),
        status: TemplateStatus::Active,
        category: TemplateCategory {
            primary: "scheduling".to_string(),
            secondary: None,
            functional_area: "front office".to_string(),
            interaction_type: InteractionType::Inbound,
        },
        industries: vec![Industry::Dental],
        complexity: Complexity::Basic,
        segments: vec![
            Segment::Foundation(fixed("identity", "You are a receptionist.")),
            dynamic(
                "services",
                "Services",
                SegmentValidation::required(vec![ValidationRule::length(
                    5,
                    200,
                    "Describe services in 5-200 characters",
                )]),
            ),
            Segment::BusinessRule(fixed("pricing", "Never quote prices.")),
            dynamic(
                "notes",
                "Notes",
                SegmentValidation::optional(vec![ValidationRule::length(0, 300, "Too long")]),
            ),
        ],
        voice: VoiceSettings {
            provider: "11labs".to_string(),
            voice_id: "sarah".to_string(),
            speed: 1.0,
            stability: 0.8,
            similarity_boost: 0.75,
            style: None,
        },
        model: ModelSettings::default(),
        conversation: ConversationSettings {
            first_message: "Thanks for calling!".to_string(),
            end_call_message: "Goodbye.".to_string(),
            silence_timeout_seconds: 30,
            max_duration_seconds: 600,
            end_call_phrases: vec!["goodbye".to_string()],
        },
        business_rules: BusinessRules::default(),
        performance_targets: Vec::new(),
        webhooks: vec![WebhookEvent::EndOfCallReport],
        documentation: Documentation::default(),
    }
}

/// A catalog holding exactly one template.
pub(crate) struct SingleCatalog(pub Arc<Template>);

impl TemplateCatalog for SingleCatalog {
    fn get(&self, id: &str) -> Result<Arc<Template>, AssistantError> {
        if self.0.id == id {
            Ok(self.0.clone())
        } else {
            Err(AssistantError::TemplateNotFound(id.to_string()))
        }
    }

    fn list(&self) -> Vec<Arc<Template>> {
        vec![self.0.clone()]
    }
}
