//! Personnel history supplied to the analysis pipeline.
//!
//! Owned by the persistence layer; the pipeline only reads it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "positive" => Some(Polarity::Positive),
            "negative" => Some(Polarity::Negative),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonnelInfo {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub position: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub text: String,
    pub polarity: Polarity,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceScore {
    pub task_title: String,
    /// 1–5
    pub score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonnelSnapshot {
    pub personnel_info: PersonnelInfo,
    /// Chronological.
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub performance_scores: Vec<PerformanceScore>,
}

impl PersonnelSnapshot {
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.personnel_info.first_name.trim(),
            self.personnel_info.last_name.trim()
        )
        .trim()
        .to_string()
    }

    /// Splits notes by polarity, keeping their original order.
    pub fn partition_notes(&self) -> (Vec<&Note>, Vec<&Note>) {
        self.notes
            .iter()
            .partition(|n| n.polarity == Polarity::Positive)
    }

    /// Mean task score, if any task has been scored.
    pub fn average_score(&self) -> Option<f32> {
        if self.performance_scores.is_empty() {
            return None;
        }
        let total: u32 = self.performance_scores.iter().map(|s| s.score as u32).sum();
        Some(total as f32 / self.performance_scores.len() as f32)
    }

    /// Checks invariants a caller-supplied snapshot must satisfy.
    pub fn validate(&self) -> Result<(), String> {
        if self.full_name().is_empty() {
            return Err("personnelInfo must include a first or last name".to_string());
        }
        if let Some(bad) = self
            .performance_scores
            .iter()
            .find(|s| !(1..=5).contains(&s.score))
        {
            return Err(format!(
                "performance score for '{}' must be between 1 and 5, got {}",
                bad.task_title, bad.score
            ));
        }
        Ok(())
    }
}
