//! Fallback Generator: deterministic, model-free analyses used whenever the
//! model call or its output cannot be trusted.

use std::collections::BTreeMap;

use crate::analysis::defaults::{
    default_monitoring_plan, manual_review_action, uniform_competencies, ANALYSIS_ERROR,
    AUTOMATIC_ANALYSIS, AUTOMATIC_ANALYSIS_FAILED, BEHAVIORAL_CATEGORIES,
    DEFAULT_MORALE_EFFECT, DEVELOPMENT_TRACKING, MANUAL_REVIEW_REQUIRED, NEXT_REVIEW_DATE,
    REVIEW_FREQUENCY, STABLE_PATTERN, UNKNOWN,
};
use crate::analysis::note::{HrRecommendations, NoteAnalysis, DEFAULT_NOTE_CATEGORY};
use crate::analysis::snapshot::Polarity;
use crate::analysis::types::{
    BehavioralCategory, BusinessImpact, ExecutiveSummary, FollowUpSchedule, ManagerActionPlan,
    NormalizedAnalysis, RiskLevel,
};

const POSITIVE_BASE_SCORE: u8 = 4;
const NEGATIVE_BASE_SCORE: u8 = 2;
const NOTE_FALLBACK_CONFIDENCE: f32 = 0.5;
const COMPREHENSIVE_FALLBACK_CONFIDENCE: f32 = 0.1;

/// Single-note fallback. Every competency gets the polarity's base score.
pub fn note_fallback(polarity: Polarity) -> NoteAnalysis {
    let base_score = match polarity {
        Polarity::Positive => POSITIVE_BASE_SCORE,
        Polarity::Negative => NEGATIVE_BASE_SCORE,
    };

    NoteAnalysis {
        category: DEFAULT_NOTE_CATEGORY.to_string(),
        risk_level: RiskLevel::Medium,
        competency_scores: uniform_competencies(
            base_score,
            NOTE_FALLBACK_CONFIDENCE,
            AUTOMATIC_ANALYSIS_FAILED,
        ),
        hr_recommendations: HrRecommendations::default(),
        key_insights: vec![MANUAL_REVIEW_REQUIRED.to_string()],
        sentiment: polarity,
    }
}

/// Comprehensive fallback with conservative, analysis-failed defaults.
pub fn comprehensive_fallback() -> NormalizedAnalysis {
    let behavioral_analysis: BTreeMap<String, BehavioralCategory> = BEHAVIORAL_CATEGORIES
        .iter()
        .map(|name| {
            (
                name.to_string(),
                BehavioralCategory {
                    score: RiskLevel::Medium.score(),
                    risk_level: RiskLevel::Medium,
                    evidence: vec![AUTOMATIC_ANALYSIS.to_string()],
                    pattern: STABLE_PATTERN.to_string(),
                },
            )
        })
        .collect();

    NormalizedAnalysis {
        executive_summary: ExecutiveSummary {
            overall_risk_level: RiskLevel::Medium,
            primary_concerns: vec![ANALYSIS_ERROR.to_string()],
            key_strengths: vec![MANUAL_REVIEW_REQUIRED.to_string()],
            immediate_action_required: true,
        },
        behavioral_analysis,
        competency_scores: uniform_competencies(
            RiskLevel::Medium.score(),
            COMPREHENSIVE_FALLBACK_CONFIDENCE,
            AUTOMATIC_ANALYSIS_FAILED,
        ),
        manager_action_plan: ManagerActionPlan {
            immediate_actions: vec![manual_review_action()],
            coaching_plan: vec![],
            monitoring_plan: default_monitoring_plan(),
            escalation_triggers: vec![],
        },
        business_impact: BusinessImpact {
            current_impact: UNKNOWN.to_string(),
            potential_risks: vec![],
            cost_implications: UNKNOWN.to_string(),
            team_morale_effect: DEFAULT_MORALE_EFFECT.to_string(),
        },
        follow_up_schedule: FollowUpSchedule {
            next_review_date: NEXT_REVIEW_DATE.to_string(),
            review_frequency: REVIEW_FREQUENCY.to_string(),
            success_indicators: vec![DEVELOPMENT_TRACKING.to_string()],
        },
    }
}
