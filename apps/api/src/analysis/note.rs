//! Single-note analysis result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::normalizer::normalize_competencies;
use crate::analysis::shape::{field, non_empty_str, string_list};
use crate::analysis::snapshot::Polarity;
use crate::analysis::types::{CompetencyScore, RiskLevel};

/// Category assumed when the model names none.
pub const DEFAULT_NOTE_CATEGORY: &str = "performance";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HrRecommendations {
    pub immediate: Vec<String>,
    pub short_term: Vec<String>,
    pub long_term: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteAnalysis {
    pub category: String,
    pub risk_level: RiskLevel,
    pub competency_scores: BTreeMap<String, CompetencyScore>,
    pub hr_recommendations: HrRecommendations,
    pub key_insights: Vec<String>,
    pub sentiment: Polarity,
}

impl NoteAnalysis {
    /// Reads a decoded single-note response, defaulting every unusable field.
    /// `polarity` is the note's recorded polarity, used when the model gives no sentiment.
    pub fn from_raw(raw: &Value, polarity: Polarity) -> Self {
        let recommendations = field(raw, &["hr_recommendations"]);
        let bucket = |name: &str| {
            string_list(recommendations.and_then(|r| field(r, &[name]))).unwrap_or_default()
        };

        NoteAnalysis {
            category: non_empty_str(field(raw, &["category"]))
                .unwrap_or(DEFAULT_NOTE_CATEGORY)
                .to_string(),
            risk_level: non_empty_str(field(raw, &["risk_level"]))
                .and_then(RiskLevel::from_label)
                .unwrap_or_default(),
            competency_scores: normalize_competencies(field(raw, &["competency_scores"])),
            hr_recommendations: HrRecommendations {
                immediate: bucket("immediate"),
                short_term: bucket("short_term"),
                long_term: bucket("long_term"),
            },
            key_insights: string_list(field(raw, &["key_insights"])).unwrap_or_default(),
            sentiment: non_empty_str(field(raw, &["sentiment"]))
                .and_then(Polarity::from_label)
                .unwrap_or(polarity),
        }
    }
}
