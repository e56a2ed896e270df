//! Placeholder texts and default building blocks shared by the normalizer
//! and the fallback generator.
//!
//! User-facing texts are Turkish; they are rendered verbatim in reports.

use std::collections::BTreeMap;

use crate::analysis::types::{Action, ActionPriority, CompetencyScore, MonitoringPlan};

/// Competencies scored in every analysis, in report order.
pub const COMPETENCIES: [&str; 5] = [
    "communication",
    "teamwork",
    "problem_solving",
    "customer_focus",
    "reliability",
];

/// Behavioral categories carried in `NormalizedAnalysis::behavioral_analysis`.
pub const BEHAVIORAL_CATEGORIES: [&str; 4] = [
    "work_discipline",
    "corporate_culture",
    "basic_rules",
    "performance",
];

/// "analysis error"
pub const ANALYSIS_ERROR: &str = "Analiz hatası";
/// "manual review required"
pub const MANUAL_REVIEW_REQUIRED: &str = "Manuel inceleme gerekli";
/// "analysis incomplete"
pub const ANALYSIS_INCOMPLETE: &str = "Analiz eksik";
/// "automatic analysis"
pub const AUTOMATIC_ANALYSIS: &str = "Otomatik analiz";
/// "automatic analysis could not be completed"
pub const AUTOMATIC_ANALYSIS_FAILED: &str = "Otomatik analiz yapılamadı";
/// "unknown"
pub const UNKNOWN: &str = "Bilinmiyor";
/// "development tracking"
pub const DEVELOPMENT_TRACKING: &str = "Gelişim takibi";
/// "action unspecified"
pub const ACTION_UNSPECIFIED: &str = "Eylem belirtilmemiş";
/// "justification unspecified"
pub const JUSTIFICATION_UNSPECIFIED: &str = "Gerekçe belirtilmemiş";
/// "a manual HR review must be performed"
pub const MANUAL_HR_REVIEW: &str = "Manuel İK incelemesi yapılmalı";
/// "behavior improvement"
pub const BEHAVIOR_IMPROVEMENT: &str = "Davranış iyileştirmesi";

pub const DEFAULT_DAILY_CHECK: &str = "Günlük davranış gözlemi";
pub const DEFAULT_WEEKLY_REVIEW: &str = "Haftalık birebir görüşme";
pub const DEFAULT_MONTHLY_EVALUATION: &str = "Aylık performans değerlendirmesi";

/// Timeline value the model uses for "urgent".
pub const URGENT_TIMELINE: &str = "acil";
/// "1 week"
pub const DEFAULT_TIMELINE: &str = "1_hafta";

pub const NEXT_REVIEW_DATE: &str = "1_hafta";
/// "weekly"
pub const REVIEW_FREQUENCY: &str = "haftalık";

/// Pattern label attached to every behavioral category.
pub const STABLE_PATTERN: &str = "stable";
/// Team morale effect when the model gives none.
pub const DEFAULT_MORALE_EFFECT: &str = "medium";

/// Builds the five-entry competency map with identical values.
pub fn uniform_competencies(
    score: u8,
    confidence: f32,
    reasoning: &str,
) -> BTreeMap<String, CompetencyScore> {
    COMPETENCIES
        .iter()
        .map(|name| {
            (
                name.to_string(),
                CompetencyScore {
                    score,
                    confidence,
                    reasoning: reasoning.to_string(),
                },
            )
        })
        .collect()
}

/// The synthetic action used when no usable critical recommendations exist.
pub fn manual_review_action() -> Action {
    Action {
        action: MANUAL_HR_REVIEW.to_string(),
        priority: ActionPriority::High,
        timeline: DEFAULT_TIMELINE.to_string(),
        evidence: vec![AUTOMATIC_ANALYSIS.to_string()],
        expected_outcome: BEHAVIOR_IMPROVEMENT.to_string(),
    }
}

/// Monitoring plan with one default item per sub-field and no escalation triggers.
pub fn default_monitoring_plan() -> MonitoringPlan {
    MonitoringPlan {
        daily_checks: vec![DEFAULT_DAILY_CHECK.to_string()],
        weekly_reviews: vec![DEFAULT_WEEKLY_REVIEW.to_string()],
        monthly_evaluation: vec![DEFAULT_MONTHLY_EVALUATION.to_string()],
        escalation_triggers: vec![],
    }
}
