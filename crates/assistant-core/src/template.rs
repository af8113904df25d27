//! Versioned assistant templates.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::business_rules::{BusinessRules, KpiTarget, WebhookEvent};
use crate::segment::{DynamicSegment, Segment};
use crate::settings::{ConversationSettings, ModelSettings, VoiceSettings};
use crate::validation::RuleKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStatus {
    Draft,
    #[default]
    Active,
    Deprecated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InteractionType {
    Inbound,
    Outbound,
    Hybrid,
}

/// Where a template sits in the catalog taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateCategory {
    /// e.g. `scheduling`, `support`, `sales`.
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    pub functional_area: String,
    pub interaction_type: InteractionType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Industry {
    Healthcare,
    Dental,
    Legal,
    RealEstate,
    Retail,
    Restaurant,
    Hospitality,
    Automotive,
    FinancialServices,
    HomeServices,
    Fitness,
    Beauty,
    Technology,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Basic,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Documentation {
    pub summary: String,
    #[serde(default)]
    pub setup_notes: Vec<String>,
    #[serde(default)]
    pub best_practices: Vec<String>,
}

/// A reusable, versioned definition of a voice assistant.
///
/// Templates are authored once and shared read-only. Segment order is
/// significant: it is the order of the assembled prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    /// Semantic version, e.g. `2.1.0`.
    pub version: String,
    #[serde(default)]
    pub status: TemplateStatus,
    pub category: TemplateCategory,
    #[serde(default)]
    pub industries: Vec<Industry>,
    pub complexity: Complexity,
    pub segments: Vec<Segment>,
    pub voice: VoiceSettings,
    #[serde(default)]
    pub model: ModelSettings,
    pub conversation: ConversationSettings,
    #[serde(default)]
    pub business_rules: BusinessRules,
    #[serde(default)]
    pub performance_targets: Vec<KpiTarget>,
    #[serde(default)]
    pub webhooks: Vec<WebhookEvent>,
    #[serde(default)]
    pub documentation: Documentation,
}

/// A structural problem in a template definition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateDefect {
    #[error("template id is empty")]
    EmptyId,

    #[error("segment at position {0} has an empty id")]
    EmptySegmentId(usize),

    #[error("duplicate segment id: {0}")]
    DuplicateSegment(String),

    #[error("fixed segment {0} has no content")]
    EmptyContent(String),

    #[error("segment {segment}: length rule has min {min} greater than max {max}")]
    InvertedLength {
        segment: String,
        min: usize,
        max: usize,
    },

    #[error("segment {segment}: invalid pattern: {reason}")]
    InvalidPattern { segment: String, reason: String },

    #[error("segment {0}: oneOf rule lists no values")]
    EmptyChoices(String),
}

impl Template {
    /// Dynamic segments in declared order.
    pub fn dynamic_segments(&self) -> impl Iterator<Item = &DynamicSegment> {
        self.segments.iter().filter_map(Segment::as_dynamic)
    }

    pub fn segment(&self, id: &str) -> Option<&Segment> {
        self.segments.iter().find(|segment| segment.id() == id)
    }

    pub fn is_active(&self) -> bool {
        self.status == TemplateStatus::Active
    }

    pub fn serves(&self, industry: Industry) -> bool {
        self.industries.contains(&industry)
    }

    /// Check the template for authoring mistakes.
    pub fn check(&self) -> Result<(), TemplateDefect> {
        if self.id.trim().is_empty() {
            return Err(TemplateDefect::EmptyId);
        }

        let mut seen = HashSet::new();
        for (position, segment) in self.segments.iter().enumerate() {
            let id = segment.id();
            if id.trim().is_empty() {
                return Err(TemplateDefect::EmptySegmentId(position));
            }
            if !seen.insert(id) {
                return Err(TemplateDefect::DuplicateSegment(id.to_string()));
            }

            match segment {
                Segment::Dynamic(dynamic) => check_rules(dynamic)?,
                _ => {
                    let content = segment.fixed_content().unwrap_or_default();
                    if content.trim().is_empty() {
                        return Err(TemplateDefect::EmptyContent(id.to_string()));
                    }
                }
            }
        }

        Ok(())
    }
}

fn check_rules(segment: &DynamicSegment) -> Result<(), TemplateDefect> {
    let Some(validation) = &segment.validation else {
        return Ok(());
    };

    for rule in &validation.rules {
        match &rule.kind {
            RuleKind::Length { min, max } if min > max => {
                return Err(TemplateDefect::InvertedLength {
                    segment: segment.id.clone(),
                    min: *min,
                    max: *max,
                });
            }
            RuleKind::Length { .. } => {}
            RuleKind::Pattern { pattern } => {
                pattern.regex().map_err(|e| TemplateDefect::InvalidPattern {
                    segment: segment.id.clone(),
                    reason: e.to_string(),
                })?;
            }
            RuleKind::OneOf { values } if values.is_empty() => {
                return Err(TemplateDefect::EmptyChoices(segment.id.clone()));
            }
            RuleKind::OneOf { .. } => {}
        }
    }

    Ok(())
}
