//! Checks supplied values against the validation descriptors of dynamic
//! segments.

use assistant_core::{
    DynamicSegment, RuleKind, Severity, Template, ValidationReport, ValidationRule, Violation,
};
use indexmap::IndexMap;

/// Longest assistant name the voice-call provider accepts.
pub const MAX_NAME_LENGTH: usize = 40;

/// Segment id reported for problems with the assistant name.
pub const NAME_FIELD: &str = "name";

/// Validate one value for a dynamic segment.
///
/// Returns every violated rule, blocking or not. A segment without a
/// validation descriptor accepts any value. Blank values are only checked
/// for requiredness: a blank required value yields a single `required`
/// violation and a blank optional value yields none.
pub fn validate_segment(segment: &DynamicSegment, value: Option<&str>) -> Vec<Violation> {
    let Some(validation) = &segment.validation else {
        return Vec::new();
    };

    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        if validation.is_required() {
            return vec![Violation::new(
                &segment.id,
                "required",
                format!("{} is required", segment.label),
                Severity::Error,
            )];
        }
        return Vec::new();
    }

    validation
        .rules
        .iter()
        .filter(|rule| !rule_satisfied(rule, value))
        .map(|rule| Violation::new(&segment.id, rule.kind.name(), &rule.message, rule.severity))
        .collect()
}

fn rule_satisfied(rule: &ValidationRule, value: &str) -> bool {
    match &rule.kind {
        RuleKind::Length { min, max } => {
            let length = value.chars().count();
            length >= *min && length <= *max
        }
        // Compiled once per template; an uncompilable pattern can only come
        // from an unchecked template and never matches.
        RuleKind::Pattern { pattern } => pattern.is_match(value),
        RuleKind::OneOf { values } => values.iter().any(|allowed| allowed == value),
    }
}

/// Validate every dynamic segment of a template against the supplied values.
///
/// Violations are reported in segment order. Keys that name no dynamic
/// segment are reported last as `unknownSegment` warnings.
pub fn validate_values(template: &Template, values: &IndexMap<String, String>) -> ValidationReport {
    let mut report = ValidationReport::default();

    for segment in template.dynamic_segments() {
        let value = values.get(&segment.id).map(String::as_str);
        report.extend(validate_segment(segment, value));
    }

    for key in values.keys() {
        let known = template
            .segment(key)
            .is_some_and(|segment| segment.is_editable());
        if !known {
            report.extend([Violation::new(
                key,
                "unknownSegment",
                format!("Template {} has no editable segment '{}'; value ignored", template.id, key),
                Severity::Warning,
            )]);
        }
    }

    report
}

/// Validate the display name of an assistant.
pub fn validate_name(name: &str) -> Vec<Violation> {
    let name = name.trim();
    if name.is_empty() {
        return vec![Violation::new(
            NAME_FIELD,
            "required",
            "Assistant name is required",
            Severity::Error,
        )];
    }

    let length = name.chars().count();
    if length > MAX_NAME_LENGTH {
        return vec![Violation::new(
            NAME_FIELD,
            "length",
            format!(
                "Assistant name must be at most {} characters ({} given)",
                MAX_NAME_LENGTH, length
            ),
            Severity::Error,
        )];
    }

    Vec::new()
}
