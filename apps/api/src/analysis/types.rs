//! Stable analysis shape handed to report rendering and persistence.
//!
//! Every field is always populated. Downstream code never null-checks a
//! `NormalizedAnalysis`; the normalizer and the fallback generator are the
//! only constructors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordinal severity: critical > high > medium > low.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

/// Score used when a risk label is missing or unrecognized.
pub const DEFAULT_RISK_SCORE: u8 = 3;

impl RiskLevel {
    /// Parses a model-supplied label. Case and surrounding whitespace are ignored.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "critical" => Some(RiskLevel::Critical),
            "high" => Some(RiskLevel::High),
            "medium" => Some(RiskLevel::Medium),
            "low" => Some(RiskLevel::Low),
            _ => None,
        }
    }

    /// critical=1, high=2, medium=3, low=4
    pub fn score(self) -> u8 {
        match self {
            RiskLevel::Critical => 1,
            RiskLevel::High => 2,
            RiskLevel::Medium => 3,
            RiskLevel::Low => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Critical => "critical",
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        }
    }
}

/// Maps a qualitative risk label to a 1–5 score. Total: unknown or missing → 3.
pub fn risk_to_score(label: Option<&str>) -> u8 {
    label
        .and_then(RiskLevel::from_label)
        .map_or(DEFAULT_RISK_SCORE, RiskLevel::score)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveSummary {
    pub overall_risk_level: RiskLevel,
    pub primary_concerns: Vec<String>,
    pub key_strengths: Vec<String>,
    pub immediate_action_required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehavioralCategory {
    /// 1–5, derived from `risk_level`.
    pub score: u8,
    pub risk_level: RiskLevel,
    pub evidence: Vec<String>,
    pub pattern: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetencyScore {
    /// 1–5
    pub score: u8,
    /// 0.0 – 1.0
    pub confidence: f32,
    pub reasoning: String,
}

/// Priority of a manager action. Only two values survive normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionPriority {
    Critical,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub action: String,
    pub priority: ActionPriority,
    pub timeline: String,
    pub evidence: Vec<String>,
    pub expected_outcome: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringPlan {
    pub daily_checks: Vec<String>,
    pub weekly_reviews: Vec<String>,
    pub monthly_evaluation: Vec<String>,
    pub escalation_triggers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerActionPlan {
    pub immediate_actions: Vec<Action>,
    /// Coaching items are passed through from the model as-is.
    pub coaching_plan: Vec<Value>,
    pub monitoring_plan: MonitoringPlan,
    pub escalation_triggers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessImpact {
    pub current_impact: String,
    pub potential_risks: Vec<String>,
    pub cost_implications: String,
    pub team_morale_effect: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpSchedule {
    pub next_review_date: String,
    pub review_frequency: String,
    pub success_indicators: Vec<String>,
}

/// The comprehensive analysis contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAnalysis {
    pub executive_summary: ExecutiveSummary,
    /// Keyed by behavioral category name.
    pub behavioral_analysis: BTreeMap<String, BehavioralCategory>,
    /// Keyed by competency name.
    pub competency_scores: BTreeMap<String, CompetencyScore>,
    pub manager_action_plan: ManagerActionPlan,
    pub business_impact: BusinessImpact,
    pub follow_up_schedule: FollowUpSchedule,
}
