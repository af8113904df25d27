//! Business rules carried by a template: escalation, data collection,
//! compliance, KPI targets and webhook subscriptions.

use serde::{Deserialize, Serialize};

/// What is known about a live call when escalation rules are evaluated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallObservation {
    /// Caller speech transcribed so far.
    pub transcript: String,
    /// Sentiment score in `[-1.0, 1.0]`.
    pub sentiment: f64,
    pub elapsed_seconds: u64,
}

impl CallObservation {
    pub fn new(transcript: impl Into<String>, sentiment: f64, elapsed_seconds: u64) -> Self {
        Self {
            transcript: transcript.into(),
            sentiment,
            elapsed_seconds,
        }
    }
}

/// Condition that escalates a call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EscalationTrigger {
    /// Caller says any of the keywords (case-insensitive).
    Keyword { keywords: Vec<String> },
    /// Sentiment drops to or below the threshold.
    Sentiment { threshold: f64 },
    /// Call reaches the given length.
    #[serde(rename_all = "camelCase")]
    Duration { max_seconds: u64 },
}

impl EscalationTrigger {
    /// Whether the trigger fires for the observation.
    pub fn matches(&self, observation: &CallObservation) -> bool {
        match self {
            EscalationTrigger::Keyword { keywords } => {
                let transcript = observation.transcript.to_lowercase();
                keywords
                    .iter()
                    .map(|k| k.trim().to_lowercase())
                    .any(|k| !k.is_empty() && transcript.contains(&k))
            }
            EscalationTrigger::Sentiment { threshold } => observation.sentiment <= *threshold,
            EscalationTrigger::Duration { max_seconds } => {
                observation.elapsed_seconds >= *max_seconds
            }
        }
    }
}

/// What happens when an escalation rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EscalationAction {
    TransferToHuman,
    ScheduleCallback,
    NotifyStaff,
    EndCall,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalationRule {
    pub trigger: EscalationTrigger,
    pub action: EscalationAction,
    /// Higher runs first.
    #[serde(default)]
    pub priority: u8,
}

/// Escalation rules of a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalationPolicy {
    #[serde(default)]
    pub rules: Vec<EscalationRule>,
    /// Number to forward calls to on [`EscalationAction::TransferToHuman`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_phone_number: Option<String>,
}

impl EscalationPolicy {
    /// Rules firing for the observation, highest priority first. Rules with
    /// equal priority keep their declared order.
    pub fn evaluate(&self, observation: &CallObservation) -> Vec<&EscalationRule> {
        let mut fired: Vec<&EscalationRule> = self
            .rules
            .iter()
            .filter(|rule| rule.trigger.matches(observation))
            .collect();
        fired.sort_by(|a, b| b.priority.cmp(&a.priority));
        fired
    }

    /// Whether any rule transfers the caller to a person.
    pub fn transfers_to_human(&self) -> bool {
        self.rules
            .iter()
            .any(|rule| rule.action == EscalationAction::TransferToHuman)
    }
}

/// A piece of information the assistant should collect from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataCollectionRule {
    pub field: String,
    #[serde(default)]
    pub required: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceSettings {
    /// Announce that the call is recorded.
    #[serde(default)]
    pub recording_disclosure: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclosure_text: Option<String>,
    #[serde(default)]
    pub hipaa: bool,
    #[serde(default)]
    pub pci: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_retention_days: Option<u32>,
}

/// The business-rule block of a template, copied into every assistant built
/// from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRules {
    #[serde(default)]
    pub escalation: EscalationPolicy,
    #[serde(default)]
    pub data_collection: Vec<DataCollectionRule>,
    #[serde(default)]
    pub compliance: ComplianceSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Comparison {
    AtLeast,
    AtMost,
}

/// A performance goal, e.g. booking rate at least 60%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiTarget {
    pub metric: String,
    pub target: f64,
    pub comparison: Comparison,
    pub unit: String,
}

impl KpiTarget {
    pub fn is_met(&self, observed: f64) -> bool {
        match self.comparison {
            Comparison::AtLeast => observed >= self.target,
            Comparison::AtMost => observed <= self.target,
        }
    }
}

/// Provider events reported to the server URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WebhookEvent {
    StatusUpdate,
    EndOfCallReport,
    Transcript,
    Hang,
    FunctionCall,
}

impl WebhookEvent {
    /// Name of the event in the provider's API.
    pub fn provider_name(self) -> &'static str {
        match self {
            WebhookEvent::StatusUpdate => "status-update",
            WebhookEvent::EndOfCallReport => "end-of-call-report",
            WebhookEvent::Transcript => "transcript",
            WebhookEvent::Hang => "hang",
            WebhookEvent::FunctionCall => "function-call",
        }
    }
}
