//! Schema Normalizer: maps an untrusted comprehensive-analysis response onto
//! the fixed `NormalizedAnalysis` shape.
//!
//! Rules (source path → target):
//! - `executive_summary.*` → `executiveSummary`, each field defaulted on its own
//! - `behavioral_category_analysis.{category}` → `behavioralAnalysis`, score
//!   derived from `risk_assessment` via `risk_to_score`
//! - `competency_assessment` → `competencyScores`, passed through when present
//! - `hr_recommendations.priority_{1,2,3}_*` → `managerActionPlan`
//! - `business_impact_analysis.*` → `businessImpact`
//! - `action_timeline.this_week` → `followUpSchedule.successIndicators`
//!
//! Never fails. Missing or wrongly-typed fields get documented defaults.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::analysis::defaults::{
    default_monitoring_plan, manual_review_action, ACTION_UNSPECIFIED, ANALYSIS_ERROR,
    ANALYSIS_INCOMPLETE, BEHAVIORAL_CATEGORIES, BEHAVIOR_IMPROVEMENT, COMPETENCIES,
    DEFAULT_DAILY_CHECK, DEFAULT_MONTHLY_EVALUATION, DEFAULT_MORALE_EFFECT, DEFAULT_TIMELINE,
    DEFAULT_WEEKLY_REVIEW, DEVELOPMENT_TRACKING, JUSTIFICATION_UNSPECIFIED,
    MANUAL_REVIEW_REQUIRED, NEXT_REVIEW_DATE, REVIEW_FREQUENCY, STABLE_PATTERN, UNKNOWN,
    URGENT_TIMELINE,
};
use crate::analysis::shape::{
    boolean, field, first_string_list, non_empty_str, sequence, string_list,
};
use crate::analysis::types::{
    risk_to_score, Action, ActionPriority, BehavioralCategory, BusinessImpact, CompetencyScore,
    ExecutiveSummary, FollowUpSchedule, ManagerActionPlan, MonitoringPlan, NormalizedAnalysis,
    RiskLevel,
};

const DEFAULT_COMPETENCY_SCORE: u8 = 3;
const DEFAULT_COMPETENCY_CONFIDENCE: f32 = 0.5;

/// A target list field and the source names it has carried over time,
/// tried in order. New schema variants are added here, not in code.
struct FieldAliases {
    candidates: &'static [&'static str],
    default_item: &'static str,
}

const DAILY_CHECKS: FieldAliases = FieldAliases {
    candidates: &["daily_observations", "daily_checks"],
    default_item: DEFAULT_DAILY_CHECK,
};

const WEEKLY_REVIEWS: FieldAliases = FieldAliases {
    candidates: &["weekly_check_ins", "weekly_reviews"],
    default_item: DEFAULT_WEEKLY_REVIEW,
};

const MONTHLY_EVALUATION: FieldAliases = FieldAliases {
    candidates: &["monthly_review", "monthly_evaluation"],
    default_item: DEFAULT_MONTHLY_EVALUATION,
};

impl FieldAliases {
    fn resolve(&self, source: Option<&Value>) -> Vec<String> {
        first_string_list(source, self.candidates)
            .unwrap_or_else(|| vec![self.default_item.to_string()])
    }
}

/// Normalizes a decoded comprehensive response. Non-object input yields the
/// all-defaults analysis.
pub fn normalize(raw: &Value) -> NormalizedAnalysis {
    NormalizedAnalysis {
        executive_summary: normalize_executive_summary(field(raw, &["executive_summary"])),
        behavioral_analysis: normalize_behavioral_analysis(field(
            raw,
            &["behavioral_category_analysis"],
        )),
        competency_scores: normalize_competencies(field(raw, &["competency_assessment"])),
        manager_action_plan: normalize_action_plan(field(raw, &["hr_recommendations"])),
        business_impact: normalize_business_impact(field(raw, &["business_impact_analysis"])),
        follow_up_schedule: normalize_follow_up(field(raw, &["action_timeline"])),
    }
}

fn child<'a>(parent: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    parent.and_then(|p| field(p, &[key]))
}

fn text_or(value: Option<&Value>, default: &str) -> String {
    non_empty_str(value).unwrap_or(default).to_string()
}

fn normalize_executive_summary(source: Option<&Value>) -> ExecutiveSummary {
    ExecutiveSummary {
        overall_risk_level: non_empty_str(child(source, "overall_risk_level"))
            .and_then(RiskLevel::from_label)
            .unwrap_or_default(),
        primary_concerns: string_list(child(source, "primary_concerns"))
            .unwrap_or_else(|| vec![ANALYSIS_ERROR.to_string()]),
        key_strengths: string_list(child(source, "key_strengths"))
            .unwrap_or_else(|| vec![MANUAL_REVIEW_REQUIRED.to_string()]),
        immediate_action_required: boolean(child(source, "immediate_action_required"))
            .unwrap_or(true),
    }
}

fn normalize_behavioral_analysis(source: Option<&Value>) -> BTreeMap<String, BehavioralCategory> {
    BEHAVIORAL_CATEGORIES
        .iter()
        .map(|name| {
            let category = child(source, name);
            let risk_label = non_empty_str(child(category, "risk_assessment"));
            (
                name.to_string(),
                BehavioralCategory {
                    score: risk_to_score(risk_label),
                    risk_level: risk_label
                        .and_then(RiskLevel::from_label)
                        .unwrap_or_default(),
                    evidence: string_list(child(category, "evidence")).unwrap_or_default(),
                    pattern: STABLE_PATTERN.to_string(),
                },
            )
        })
        .collect()
}

/// Passes model competency scores through, repairing each entry's fields and
/// filling any of the five standard competencies the model left out.
pub fn normalize_competencies(source: Option<&Value>) -> BTreeMap<String, CompetencyScore> {
    let mut scores: BTreeMap<String, CompetencyScore> = source
        .and_then(Value::as_object)
        .map(|entries| {
            entries
                .iter()
                .filter(|(_, entry)| entry.is_object())
                .map(|(name, entry)| (name.clone(), normalize_competency(entry)))
                .collect()
        })
        .unwrap_or_default();

    for name in COMPETENCIES {
        scores
            .entry(name.to_string())
            .or_insert_with(default_competency);
    }

    scores
}

fn normalize_competency(entry: &Value) -> CompetencyScore {
    let score = field(entry, &["score"])
        .and_then(Value::as_f64)
        .map(|s| s.round().clamp(1.0, 5.0) as u8)
        .unwrap_or(DEFAULT_COMPETENCY_SCORE);
    let confidence = field(entry, &["confidence"])
        .and_then(Value::as_f64)
        .map(|c| c.clamp(0.0, 1.0) as f32)
        .unwrap_or(DEFAULT_COMPETENCY_CONFIDENCE);

    CompetencyScore {
        score,
        confidence,
        reasoning: text_or(field(entry, &["reasoning"]), ANALYSIS_INCOMPLETE),
    }
}

fn default_competency() -> CompetencyScore {
    CompetencyScore {
        score: DEFAULT_COMPETENCY_SCORE,
        confidence: DEFAULT_COMPETENCY_CONFIDENCE,
        reasoning: ANALYSIS_INCOMPLETE.to_string(),
    }
}

fn normalize_action_plan(source: Option<&Value>) -> ManagerActionPlan {
    let monitoring = child(source, "priority_3_monitoring");

    let immediate_actions = match sequence(child(source, "priority_1_critical")) {
        Some(items) => items.iter().map(convert_action).collect(),
        None => vec![manual_review_action()],
    };

    ManagerActionPlan {
        immediate_actions,
        coaching_plan: sequence(child(source, "priority_2_coaching"))
            .cloned()
            .unwrap_or_default(),
        monitoring_plan: convert_monitoring(monitoring),
        escalation_triggers: string_list(child(monitoring, "escalation_triggers"))
            .unwrap_or_default(),
    }
}

/// Priority is `critical` only for the urgent timeline; every other timeline,
/// including an explicit lower priority from the model, becomes `high`.
fn convert_action(item: &Value) -> Action {
    let item = Some(item);
    let timeline = non_empty_str(child(item, "timeline"));

    let priority = if timeline == Some(URGENT_TIMELINE) {
        ActionPriority::Critical
    } else {
        ActionPriority::High
    };

    let evidence = string_list(child(item, "evidence")).unwrap_or_else(|| {
        vec![text_or(
            child(item, "justification"),
            JUSTIFICATION_UNSPECIFIED,
        )]
    });

    Action {
        action: text_or(child(item, "action"), ACTION_UNSPECIFIED),
        priority,
        timeline: timeline.unwrap_or(DEFAULT_TIMELINE).to_string(),
        evidence,
        expected_outcome: BEHAVIOR_IMPROVEMENT.to_string(),
    }
}

fn convert_monitoring(source: Option<&Value>) -> MonitoringPlan {
    if source.is_none() {
        return default_monitoring_plan();
    }

    MonitoringPlan {
        daily_checks: DAILY_CHECKS.resolve(source),
        weekly_reviews: WEEKLY_REVIEWS.resolve(source),
        monthly_evaluation: MONTHLY_EVALUATION.resolve(source),
        escalation_triggers: string_list(child(source, "escalation_triggers")).unwrap_or_default(),
    }
}

fn normalize_business_impact(source: Option<&Value>) -> BusinessImpact {
    let morale = non_empty_str(child(source, "team_morale_risk"));
    let reputation = non_empty_str(child(source, "reputation_risk"));

    BusinessImpact {
        current_impact: text_or(child(source, "current_performance_impact"), UNKNOWN),
        potential_risks: [morale, reputation]
            .into_iter()
            .flatten()
            .map(str::to_string)
            .collect(),
        cost_implications: text_or(child(source, "cost_implications"), UNKNOWN),
        team_morale_effect: morale.unwrap_or(DEFAULT_MORALE_EFFECT).to_string(),
    }
}

fn normalize_follow_up(timeline: Option<&Value>) -> FollowUpSchedule {
    FollowUpSchedule {
        next_review_date: NEXT_REVIEW_DATE.to_string(),
        review_frequency: REVIEW_FREQUENCY.to_string(),
        success_indicators: string_list(child(timeline, "this_week"))
            .unwrap_or_else(|| vec![DEVELOPMENT_TRACKING.to_string()]),
    }
}
