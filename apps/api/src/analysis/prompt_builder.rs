//! Prompt Builder: renders model prompts from personnel history.
//!
//! Pure and deterministic: identical input always yields identical text.

use crate::analysis::prompts::{
    BEHAVIORAL_CATEGORIES_RUBRIC, COMPREHENSIVE_ANALYSIS_PROMPT_TEMPLATE,
    NOTE_ANALYSIS_PROMPT_TEMPLATE, RISK_LEVELS_RUBRIC, WEIGHTING_INSTRUCTION,
};
use crate::analysis::snapshot::{Note, PersonnelSnapshot, Polarity};

const NO_RECORDS: &str = "(no records)";
const UNSPECIFIED_POSITION: &str = "(unspecified)";
const NOTE_DATE_FORMAT: &str = "%d.%m.%Y";

/// Builds the single-note analysis prompt.
pub fn build_note_prompt(note_text: &str, polarity: Polarity) -> String {
    fill_template(
        NOTE_ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("polarity_label", polarity.as_str()),
            ("note_text", note_text.trim()),
        ],
    )
}

/// Builds the comprehensive analysis prompt for a full personnel snapshot.
pub fn build_comprehensive_prompt(snapshot: &PersonnelSnapshot) -> String {
    let (positive, negative) = snapshot.partition_notes();

    let full_name = snapshot.full_name();
    let position = match snapshot.personnel_info.position.trim() {
        "" => UNSPECIFIED_POSITION,
        p => p,
    };
    let positive_count = positive.len().to_string();
    let negative_count = negative.len().to_string();
    let positive_notes = render_note_list(&positive);
    let negative_notes = render_note_list(&negative);
    let performance_scores = render_performance_scores(snapshot);

    fill_template(
        COMPREHENSIVE_ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("full_name", full_name.as_str()),
            ("position", position),
            ("positive_count", positive_count.as_str()),
            ("positive_notes", positive_notes.as_str()),
            ("negative_count", negative_count.as_str()),
            ("negative_notes", negative_notes.as_str()),
            ("performance_scores", performance_scores.as_str()),
            ("categories_rubric", BEHAVIORAL_CATEGORIES_RUBRIC),
            ("risk_rubric", RISK_LEVELS_RUBRIC),
            ("weighting_instruction", WEIGHTING_INSTRUCTION),
        ],
    )
}

/// Numbered list: `1. [02.05.2024] text`
fn render_note_list(notes: &[&Note]) -> String {
    if notes.is_empty() {
        return NO_RECORDS.to_string();
    }
    notes
        .iter()
        .enumerate()
        .map(|(i, note)| {
            format!(
                "{}. [{}] {}",
                i + 1,
                note.timestamp.format(NOTE_DATE_FORMAT),
                note.text.trim()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Bulleted list: `- title: 4/5`, followed by the average when scores exist.
fn render_performance_scores(snapshot: &PersonnelSnapshot) -> String {
    let Some(average) = snapshot.average_score() else {
        return NO_RECORDS.to_string();
    };
    let mut lines: Vec<String> = snapshot
        .performance_scores
        .iter()
        .map(|s| format!("- {}: {}/5", s.task_title.trim(), s.score))
        .collect();
    lines.push(format!("Average: {average:.1}/5"));
    lines.join("\n")
}

/// Substitutes `{key}` placeholders in a single left-to-right pass.
///
/// Substituted values are never rescanned, so note text containing
/// `{negative_notes}` or similar stays literal. Unknown `{...}` sequences
/// (the JSON schema braces) are copied through.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after_brace = &rest[start + 1..];

        let matched = values.iter().find_map(|(key, value)| {
            after_brace
                .strip_prefix(key)
                .and_then(|tail| tail.strip_prefix('}'))
                .map(|tail| (*value, tail))
        });

        match matched {
            Some((value, tail)) => {
                out.push_str(value);
                rest = tail;
            }
            None => {
                out.push('{');
                rest = after_brace;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::snapshot::{PerformanceScore, PersonnelInfo};
    use chrono::{TimeZone, Utc};

    fn note(text: &str, polarity: Polarity, day: u32) -> Note {
        Note {
            text: text.to_string(),
            polarity,
            timestamp: Utc.with_ymd_and_hms(2024, 5, day, 14, 30, 0).unwrap(),
        }
    }

    fn sample_snapshot() -> PersonnelSnapshot {
        PersonnelSnapshot {
            personnel_info: PersonnelInfo {
                first_name: "Ali".to_string(),
                last_name: "Demir".to_string(),
                position: "Barista".to_string(),
            },
            notes: vec![
                note("Vardiyaya 20 dakika geç geldi", Polarity::Negative, 2),
                note("Müşteri şikayetini sakin şekilde çözdü", Polarity::Positive, 3),
                note("Tezgahı temizlemeden vardiyayı bıraktı", Polarity::Negative, 9),
            ],
            performance_scores: vec![
                PerformanceScore {
                    task_title: "Sabah açılışı".to_string(),
                    score: 4,
                },
                PerformanceScore {
                    task_title: "Stok sayımı".to_string(),
                    score: 2,
                },
            ],
        }
    }

    #[test]
    fn test_note_prompt_includes_text_and_polarity() {
        let prompt = build_note_prompt("  Müşteriye kaba davrandı ", Polarity::Negative);
        assert!(prompt.contains("following negative note"));
        assert!(prompt.contains("\"Müşteriye kaba davrandı\""));
        assert!(prompt.contains("Respond with ONLY a JSON object"));
        assert!(prompt.contains("\"customer_focus\""));
    }

    #[test]
    fn test_comprehensive_prompt_lists_notes_by_polarity() {
        let prompt = build_comprehensive_prompt(&sample_snapshot());
        assert!(prompt.contains("EMPLOYEE: Ali Demir"));
        assert!(prompt.contains("POSITION: Barista"));
        assert!(prompt.contains(
            "POSITIVE NOTES (1):\n1. [03.05.2024] Müşteri şikayetini sakin şekilde çözdü"
        ));
        assert!(prompt.contains(
            "NEGATIVE NOTES (2):\n1. [02.05.2024] Vardiyaya 20 dakika geç geldi\n2. [09.05.2024] Tezgahı temizlemeden vardiyayı bıraktı"
        ));
    }

    #[test]
    fn test_comprehensive_prompt_lists_scores_and_average() {
        let prompt = build_comprehensive_prompt(&sample_snapshot());
        assert!(prompt.contains("- Sabah açılışı: 4/5\n- Stok sayımı: 2/5\nAverage: 3.0/5"));
    }

    #[test]
    fn test_comprehensive_prompt_embeds_rubrics_and_schema() {
        let prompt = build_comprehensive_prompt(&sample_snapshot());
        assert!(prompt.contains(RISK_LEVELS_RUBRIC));
        assert!(prompt.contains(BEHAVIORAL_CATEGORIES_RUBRIC));
        assert!(prompt.contains("safety or hygiene violation MUST be assessed as critical"));
        assert!(prompt.contains("\"priority_3_monitoring\""));
        assert!(prompt.contains("\"action_timeline\""));
        assert!(!prompt.contains("{full_name}"));
        assert!(!prompt.contains("{risk_rubric}"));
    }

    #[test]
    fn test_comprehensive_prompt_empty_history() {
        let mut snapshot = sample_snapshot();
        snapshot.notes.clear();
        snapshot.performance_scores.clear();
        snapshot.personnel_info.position = "  ".to_string();
        let prompt = build_comprehensive_prompt(&snapshot);
        assert!(prompt.contains("POSITIVE NOTES (0):\n(no records)"));
        assert!(prompt.contains("NEGATIVE NOTES (0):\n(no records)"));
        assert!(prompt.contains("TASK PERFORMANCE SCORES:\n(no records)"));
        assert!(prompt.contains("POSITION: (unspecified)"));
    }

    #[test]
    fn test_comprehensive_prompt_is_deterministic() {
        let snapshot = sample_snapshot();
        assert_eq!(
            build_comprehensive_prompt(&snapshot),
            build_comprehensive_prompt(&snapshot)
        );
    }

    #[test]
    fn test_placeholder_in_note_text_is_not_expanded() {
        let mut snapshot = sample_snapshot();
        snapshot.notes = vec![note("{negative_notes} {full_name}", Polarity::Positive, 4)];
        let prompt = build_comprehensive_prompt(&snapshot);
        assert!(prompt.contains("1. [04.05.2024] {negative_notes} {full_name}"));
    }

    #[test]
    fn test_fill_template_keeps_unknown_braces() {
        let out = fill_template("{\"a\": {x}} {y", &[("x", "1")]);
        assert_eq!(out, "{\"a\": 1} {y");
    }
}
