//! Analysis pipeline. One model call per request, always terminating with a
//! complete result.
//!
//! Flow: build prompt → invoke model → parse → normalize.
//! A failed model call or an undecodable response switches to the fallback
//! generator. There is no retry at this layer; retry and timeout policy belong
//! to the `ModelInvoker` implementation.

use tracing::{info, warn};

use crate::analysis::fallback::{comprehensive_fallback, note_fallback};
use crate::analysis::normalizer::normalize;
use crate::analysis::note::NoteAnalysis;
use crate::analysis::parser::{parse_comprehensive_response, parse_note_response, ParsedResponse};
use crate::analysis::prompt_builder::{build_comprehensive_prompt, build_note_prompt};
use crate::analysis::snapshot::{PersonnelSnapshot, Polarity};
use crate::analysis::types::NormalizedAnalysis;
use crate::llm_client::ModelInvoker;

/// Which terminal path a comprehensive request took. Logged, never returned
/// to HTTP callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineOutcome {
    Normalized,
    ModelFailed,
    ParseFailed,
}

/// Runs the comprehensive analysis for one personnel snapshot.
pub async fn analyze_personnel(
    llm: &dyn ModelInvoker,
    snapshot: &PersonnelSnapshot,
) -> NormalizedAnalysis {
    let (analysis, outcome) = run_comprehensive(llm, snapshot).await;
    info!("{}", outcome_summary(outcome, snapshot));
    analysis
}

/// Log line for a finished comprehensive run. Carries counts only, never
/// personal data from the snapshot.
fn outcome_summary(outcome: PipelineOutcome, snapshot: &PersonnelSnapshot) -> String {
    let positive = snapshot
        .notes
        .iter()
        .filter(|n| n.polarity == Polarity::Positive)
        .count();
    format!(
        "Comprehensive analysis finished via {:?} ({} positive / {} negative notes, {} scored tasks)",
        outcome,
        positive,
        snapshot.notes.len() - positive,
        snapshot.performance_scores.len()
    )
}

pub(crate) async fn run_comprehensive(
    llm: &dyn ModelInvoker,
    snapshot: &PersonnelSnapshot,
) -> (NormalizedAnalysis, PipelineOutcome) {
    let prompt = build_comprehensive_prompt(snapshot);

    let text = match llm.invoke(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Model call failed, using fallback analysis: {e}");
            return (comprehensive_fallback(), PipelineOutcome::ModelFailed);
        }
    };

    match parse_comprehensive_response(&text) {
        ParsedResponse::Decoded(raw) => (normalize(&raw), PipelineOutcome::Normalized),
        ParsedResponse::Fallback(fallback) => {
            warn!(
                "Model response was not a JSON object, using fallback analysis: {:?}",
                text.chars().take(80).collect::<String>()
            );
            (fallback, PipelineOutcome::ParseFailed)
        }
    }
}

/// Runs the single-note analysis.
pub async fn analyze_note(llm: &dyn ModelInvoker, note_text: &str, polarity: Polarity) -> NoteAnalysis {
    let prompt = build_note_prompt(note_text, polarity);

    match llm.invoke(&prompt).await {
        Ok(text) => parse_note_response(&text, polarity),
        Err(e) => {
            warn!("Model call failed for note analysis, using fallback: {e}");
            note_fallback(polarity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use crate::analysis::defaults::MANUAL_HR_REVIEW;
    use crate::analysis::snapshot::{Note, PerformanceScore, PersonnelInfo};
    use crate::analysis::types::RiskLevel;
    use crate::llm_client::LlmError;

    /// Scripted model: returns the configured text, or fails when `None`.
    struct StubModel {
        reply: Option<String>,
        prompts: Mutex<Vec<String>>,
    }

    impl StubModel {
        fn replying(text: &str) -> Self {
            Self {
                reply: Some(text.to_string()),
                prompts: Mutex::new(vec![]),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                prompts: Mutex::new(vec![]),
            }
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ModelInvoker for StubModel {
        async fn invoke(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().ok_or(LlmError::Api {
                status: 503,
                message: "upstream unavailable".to_string(),
            })
        }
    }

    fn snapshot() -> PersonnelSnapshot {
        PersonnelSnapshot {
            personnel_info: PersonnelInfo {
                first_name: "Zeynep".to_string(),
                last_name: "Arslan".to_string(),
                position: "Şef yardımcısı".to_string(),
            },
            notes: vec![Note {
                text: "Mutfakta bone takmadan çalıştı".to_string(),
                polarity: Polarity::Negative,
                timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap(),
            }],
            performance_scores: vec![PerformanceScore {
                task_title: "Menü hazırlığı".to_string(),
                score: 4,
            }],
        }
    }

    #[tokio::test]
    async fn test_model_failure_yields_fallback() {
        let model = StubModel::failing();
        let (analysis, outcome) = run_comprehensive(&model, &snapshot()).await;

        assert_eq!(outcome, PipelineOutcome::ModelFailed);
        assert_eq!(model.calls(), 1, "no retry at pipeline level");
        assert_eq!(
            analysis.executive_summary.overall_risk_level,
            RiskLevel::Medium
        );
        let actions = &analysis.manager_action_plan.immediate_actions;
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].action, MANUAL_HR_REVIEW);
    }

    #[tokio::test]
    async fn test_unparseable_reply_yields_fallback() {
        let model = StubModel::replying("Bu çalışan hakkında yorum yapamam.");
        let (analysis, outcome) = run_comprehensive(&model, &snapshot()).await;
        assert_eq!(outcome, PipelineOutcome::ParseFailed);
        assert_eq!(analysis, comprehensive_fallback());
    }

    #[tokio::test]
    async fn test_fenced_reply_is_normalized() {
        let reply = "```json\n{\"executive_summary\": {\"overall_risk_level\": \"critical\", \"immediate_action_required\": true}, \"behavioral_category_analysis\": {\"basic_rules\": {\"risk_assessment\": \"critical\", \"evidence\": [\"Bone takmadı\"]}}}\n```";
        let model = StubModel::replying(reply);
        let (analysis, outcome) = run_comprehensive(&model, &snapshot()).await;

        assert_eq!(outcome, PipelineOutcome::Normalized);
        assert_eq!(
            analysis.executive_summary.overall_risk_level,
            RiskLevel::Critical
        );
        assert_eq!(analysis.behavioral_analysis["basic_rules"].score, 1);
        assert_eq!(
            analysis.behavioral_analysis["basic_rules"].evidence,
            vec!["Bone takmadı"]
        );
    }

    #[tokio::test]
    async fn test_prompt_sent_to_model_is_the_built_prompt() {
        let model = StubModel::replying("{}");
        let snapshot = snapshot();
        analyze_personnel(&model, &snapshot).await;
        let prompts = model.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], build_comprehensive_prompt(&snapshot));
    }

    #[tokio::test]
    async fn test_note_model_failure_negative_scores_two() {
        let model = StubModel::failing();
        let analysis = analyze_note(&model, "Müşteriye sesini yükseltti", Polarity::Negative).await;
        assert_eq!(analysis.competency_scores.len(), 5);
        assert!(analysis
            .competency_scores
            .values()
            .all(|c| c.score == 2 && (c.confidence - 0.5).abs() < f32::EPSILON));
    }

    #[tokio::test]
    async fn test_note_reply_is_read() {
        let model = StubModel::replying(
            "{\"category\": \"corporate_culture\", \"risk_level\": \"low\", \"key_insights\": [\"Takım oyuncusu\"]}",
        );
        let analysis = analyze_note(&model, "Yeni gelen personele yardım etti", Polarity::Positive).await;
        assert_eq!(analysis.category, "corporate_culture");
        assert_eq!(analysis.risk_level, RiskLevel::Low);
        assert_eq!(analysis.key_insights, vec!["Takım oyuncusu"]);
    }

    #[test]
    fn test_outcome_summary_counts_without_personal_data() {
        let summary = outcome_summary(PipelineOutcome::ParseFailed, &snapshot());
        assert_eq!(
            summary,
            "Comprehensive analysis finished via ParseFailed (0 positive / 1 negative notes, 1 scored tasks)"
        );
        assert!(!summary.contains("Zeynep"));
        assert!(!summary.contains("Arslan"));
    }
}
