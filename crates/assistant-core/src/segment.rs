//! Prompt segments: the ordered building blocks of a template.

use serde::{Deserialize, Serialize};

use crate::validation::SegmentValidation;

/// How much a segment shapes the assistant's behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Impact {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

/// A segment whose text is authored with the template and copied verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedSegment {
    /// Identifier, unique within the template.
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// Prompt text.
    pub content: String,
    /// Why the segment exists, for template authors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_purpose: Option<String>,
    #[serde(default)]
    pub impact: Impact,
}

/// A segment whose text is supplied by the business configuring the assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicSegment {
    /// Identifier, unique within the template. Callers key values by it.
    pub id: String,
    /// Human-readable label, also used for the preview placeholder.
    pub label: String,
    /// Example text shown in configuration forms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder_hint: Option<String>,
    /// Validation applied to the supplied value. `None` accepts anything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<SegmentValidation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_purpose: Option<String>,
    #[serde(default)]
    pub impact: Impact,
}

impl DynamicSegment {
    /// The text substituted for this segment when no value is supplied.
    pub fn placeholder(&self) -> String {
        format!("[{}]", self.label)
    }

    /// Whether a blank value is a blocking violation.
    pub fn is_required(&self) -> bool {
        self.validation
            .as_ref()
            .map(SegmentValidation::is_required)
            .unwrap_or(false)
    }
}

/// One labeled block of prompt text.
///
/// Only [`Segment::Dynamic`] accepts caller-supplied values; every other
/// variant is fixed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    /// Identity and core behavior of the assistant.
    Foundation(FixedSegment),
    /// Business-specific details supplied at configuration time.
    Dynamic(DynamicSegment),
    /// Policies the assistant must follow.
    BusinessRule(FixedSegment),
    /// Call structure: greeting, discovery, closing.
    ConversationFlow(FixedSegment),
}

impl Segment {
    pub fn id(&self) -> &str {
        match self {
            Segment::Dynamic(segment) => &segment.id,
            Segment::Foundation(segment)
            | Segment::BusinessRule(segment)
            | Segment::ConversationFlow(segment) => &segment.id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Segment::Dynamic(segment) => &segment.label,
            Segment::Foundation(segment)
            | Segment::BusinessRule(segment)
            | Segment::ConversationFlow(segment) => &segment.label,
        }
    }

    pub fn impact(&self) -> Impact {
        match self {
            Segment::Dynamic(segment) => segment.impact,
            Segment::Foundation(segment)
            | Segment::BusinessRule(segment)
            | Segment::ConversationFlow(segment) => segment.impact,
        }
    }

    /// The wire name of the segment kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Segment::Foundation(_) => "foundation",
            Segment::Dynamic(_) => "dynamic",
            Segment::BusinessRule(_) => "business_rule",
            Segment::ConversationFlow(_) => "conversation_flow",
        }
    }

    /// Whether end users may edit the segment.
    pub fn is_editable(&self) -> bool {
        matches!(self, Segment::Dynamic(_))
    }

    /// Fixed text of the segment, `None` for dynamic segments.
    pub fn fixed_content(&self) -> Option<&str> {
        match self {
            Segment::Dynamic(_) => None,
            Segment::Foundation(segment)
            | Segment::BusinessRule(segment)
            | Segment::ConversationFlow(segment) => Some(&segment.content),
        }
    }

    pub fn as_dynamic(&self) -> Option<&DynamicSegment> {
        match self {
            Segment::Dynamic(segment) => Some(segment),
            _ => None,
        }
    }
}
