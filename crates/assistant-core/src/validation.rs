//! Validation descriptors attached to dynamic segments, and the violations
//! produced when checking supplied values against them.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::AssistantError;

/// Whether a failed rule blocks assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks assembly.
    #[default]
    Error,
    /// Shown to the user, never blocks.
    Warning,
    /// Shown to the user, never blocks.
    Info,
}

impl Severity {
    pub fn is_blocking(self) -> bool {
        self == Severity::Error
    }
}

/// Whether a dynamic segment must be filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Requirement {
    Required,
    Optional,
}

/// The check a rule performs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RuleKind {
    /// Character count within `min..=max`.
    Length { min: usize, max: usize },
    /// Value matches a regular expression.
    Pattern { pattern: Pattern },
    /// Trimmed value is one of the listed values.
    OneOf { values: Vec<String> },
}

impl RuleKind {
    /// Rule name reported in violations.
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Length { .. } => "length",
            RuleKind::Pattern { .. } => "pattern",
            RuleKind::OneOf { .. } => "oneOf",
        }
    }
}

/// A regular expression, compiled on first use and reused after that.
///
/// Serialized as its source text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Pattern {
    source: String,
    compiled: OnceLock<Result<Regex, regex::Error>>,
}

impl Pattern {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            compiled: OnceLock::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The compiled expression.
    pub fn regex(&self) -> Result<&Regex, &regex::Error> {
        self.compiled
            .get_or_init(|| Regex::new(&self.source))
            .as_ref()
    }

    /// Whether the value matches. An uncompilable pattern matches nothing.
    pub fn is_match(&self, value: &str) -> bool {
        self.regex().is_ok_and(|re| re.is_match(value))
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl From<String> for Pattern {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.source
    }
}

/// A single rule on a dynamic segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRule {
    #[serde(flatten)]
    pub kind: RuleKind,
    /// Message shown when the rule is violated.
    pub message: String,
    #[serde(default)]
    pub severity: Severity,
}

impl ValidationRule {
    /// A blocking length rule.
    pub fn length(min: usize, max: usize, message: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Length { min, max },
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// A blocking pattern rule.
    pub fn pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Pattern {
                pattern: Pattern::new(pattern),
            },
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// A blocking enumeration rule.
    pub fn one_of<I, S>(values: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: RuleKind::OneOf {
                values: values.into_iter().map(Into::into).collect(),
            },
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Change the severity of the rule.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

/// Validation descriptor of a dynamic segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentValidation {
    pub requirement: Requirement,
    /// Rules, evaluated in order. All of them run.
    #[serde(default)]
    pub rules: Vec<ValidationRule>,
}

impl SegmentValidation {
    pub fn required(rules: Vec<ValidationRule>) -> Self {
        Self {
            requirement: Requirement::Required,
            rules,
        }
    }

    pub fn optional(rules: Vec<ValidationRule>) -> Self {
        Self {
            requirement: Requirement::Optional,
            rules,
        }
    }

    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Required
    }
}

/// A rule a supplied value failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub segment_id: String,
    /// Rule name: `required`, `length`, `pattern`, `oneOf` or `unknownSegment`.
    pub rule: String,
    pub message: String,
    pub severity: Severity,
}

impl Violation {
    pub fn new(
        segment_id: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            segment_id: segment_id.into(),
            rule: rule.into(),
            message: message.into(),
            severity,
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.severity.is_blocking()
    }
}

/// Every violation found while validating a set of values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// True when nothing blocks assembly. Advisories may still be present.
    pub fn is_valid(&self) -> bool {
        !self.violations.iter().any(Violation::is_blocking)
    }

    /// Violations with `error` severity.
    pub fn blocking(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_blocking())
    }

    /// Violations with `warning` or `info` severity.
    pub fn advisories(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| !v.is_blocking())
    }

    /// Whether any violation names the given segment.
    pub fn mentions(&self, segment_id: &str) -> bool {
        self.violations.iter().any(|v| v.segment_id == segment_id)
    }

    pub fn extend(&mut self, violations: impl IntoIterator<Item = Violation>) {
        self.violations.extend(violations);
    }

    /// Turn the report into a result.
    ///
    /// Fails with [`AssistantError::ValidationFailed`] carrying every blocking
    /// violation; otherwise returns the advisory violations.
    pub fn into_result(self) -> Result<Vec<Violation>, AssistantError> {
        let (blocking, advisories): (Vec<_>, Vec<_>) =
            self.violations.into_iter().partition(Violation::is_blocking);

        if blocking.is_empty() {
            Ok(advisories)
        } else {
            Err(AssistantError::ValidationFailed(blocking))
        }
    }
}
