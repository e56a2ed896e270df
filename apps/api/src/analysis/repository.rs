//! Reads personnel history and stores analysis reports.
//!
//! Every query is scoped by `organization_id`; a personnel or report from
//! another organization is reported as not found.

use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::analysis::snapshot::{Note, PerformanceScore, PersonnelInfo, PersonnelSnapshot, Polarity};
use crate::analysis::types::NormalizedAnalysis;
use crate::errors::AppError;
use crate::models::personnel::{NoteRow, PersonnelRow, TaskScoreRow};
use crate::models::report::AnalysisReportRow;

/// Loads the snapshot the analysis pipeline needs for one person.
pub async fn load_snapshot(
    pool: &PgPool,
    organization_id: Uuid,
    personnel_id: Uuid,
) -> Result<PersonnelSnapshot, AppError> {
    let person = sqlx::query_as::<_, PersonnelRow>(
        "SELECT * FROM personnel WHERE id = $1 AND organization_id = $2",
    )
    .bind(personnel_id)
    .bind(organization_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Personnel {personnel_id} not found")))?;

    let notes = sqlx::query_as::<_, NoteRow>(
        "SELECT * FROM notes WHERE personnel_id = $1 ORDER BY created_at ASC, id ASC",
    )
    .bind(personnel_id)
    .fetch_all(pool)
    .await?;

    let scores = sqlx::query_as::<_, TaskScoreRow>(
        r#"
        SELECT title, performance_score
        FROM task_assignments
        WHERE personnel_id = $1 AND performance_score IS NOT NULL
        ORDER BY completed_at ASC NULLS LAST, id ASC
        "#,
    )
    .bind(personnel_id)
    .fetch_all(pool)
    .await?;

    Ok(build_snapshot(person, notes, scores))
}

/// Assembles a snapshot from rows. Notes with an unknown polarity and scores
/// outside 1–5 are skipped.
pub fn build_snapshot(
    person: PersonnelRow,
    notes: Vec<NoteRow>,
    scores: Vec<TaskScoreRow>,
) -> PersonnelSnapshot {
    let notes = notes
        .into_iter()
        .filter_map(|row| match Polarity::from_label(&row.polarity) {
            Some(polarity) => Some(Note {
                text: row.content,
                polarity,
                timestamp: row.created_at,
            }),
            None => {
                warn!(
                    "Skipping note {} with unknown polarity '{}'",
                    row.id, row.polarity
                );
                None
            }
        })
        .collect();

    let performance_scores = scores
        .into_iter()
        .filter_map(|row| match u8::try_from(row.performance_score) {
            Ok(score) if (1..=5).contains(&score) => Some(PerformanceScore {
                task_title: row.title,
                score,
            }),
            _ => {
                warn!(
                    "Skipping task '{}' with out-of-range score {}",
                    row.title, row.performance_score
                );
                None
            }
        })
        .collect();

    PersonnelSnapshot {
        personnel_info: PersonnelInfo {
            first_name: person.first_name,
            last_name: person.last_name,
            position: person.position.unwrap_or_default(),
        },
        notes,
        performance_scores,
    }
}

pub async fn save_report(
    pool: &PgPool,
    organization_id: Uuid,
    personnel_id: Uuid,
    analysis: &NormalizedAnalysis,
) -> Result<AnalysisReportRow, AppError> {
    let analysis_value = serde_json::to_value(analysis)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize analysis: {e}")))?;

    let row = sqlx::query_as::<_, AnalysisReportRow>(
        r#"
        INSERT INTO analysis_reports (id, organization_id, personnel_id, analysis)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(organization_id)
    .bind(personnel_id)
    .bind(&analysis_value)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get_report(
    pool: &PgPool,
    organization_id: Uuid,
    report_id: Uuid,
) -> Result<AnalysisReportRow, AppError> {
    sqlx::query_as::<_, AnalysisReportRow>(
        "SELECT * FROM analysis_reports WHERE id = $1 AND organization_id = $2",
    )
    .bind(report_id)
    .bind(organization_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Report {report_id} not found")))
}

pub async fn list_reports(
    pool: &PgPool,
    organization_id: Uuid,
    personnel_id: Uuid,
) -> Result<Vec<AnalysisReportRow>, AppError> {
    let rows = sqlx::query_as::<_, AnalysisReportRow>(
        r#"
        SELECT * FROM analysis_reports
        WHERE personnel_id = $1 AND organization_id = $2
        ORDER BY created_at DESC
        "#,
    )
    .bind(personnel_id)
    .bind(organization_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn person(position: Option<&str>) -> PersonnelRow {
        PersonnelRow {
            id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            first_name: "Emre".to_string(),
            last_name: "Şahin".to_string(),
            position: position.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    fn note_row(content: &str, polarity: &str, day: u32) -> NoteRow {
        NoteRow {
            id: Uuid::new_v4(),
            personnel_id: Uuid::new_v4(),
            content: content.to_string(),
            polarity: polarity.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 7, day, 12, 0, 0).unwrap(),
        }
    }

    fn score_row(title: &str, score: i16) -> TaskScoreRow {
        TaskScoreRow {
            title: title.to_string(),
            performance_score: score,
        }
    }

    #[test]
    fn test_build_snapshot_maps_rows() {
        let snapshot = build_snapshot(
            person(Some("Kurye")),
            vec![
                note_row("Teslimatı zamanında yaptı", "positive", 1),
                note_row("Paketi hasarlı teslim etti", "negative", 2),
            ],
            vec![score_row("Sabah dağıtımı", 5)],
        );
        assert_eq!(snapshot.full_name(), "Emre Şahin");
        assert_eq!(snapshot.personnel_info.position, "Kurye");
        assert_eq!(snapshot.notes.len(), 2);
        assert_eq!(snapshot.notes[1].polarity, Polarity::Negative);
        assert_eq!(snapshot.performance_scores[0].score, 5);
    }

    #[test]
    fn test_build_snapshot_skips_unknown_polarity_and_bad_scores() {
        let snapshot = build_snapshot(
            person(None),
            vec![
                note_row("Nötr gözlem", "neutral", 1),
                note_row("Kasada fark çıktı", "negative", 2),
            ],
            vec![score_row("Sayım", 0), score_row("Raf düzeni", 9), score_row("Kasa", 3)],
        );
        assert_eq!(snapshot.personnel_info.position, "");
        assert_eq!(snapshot.notes.len(), 1);
        assert_eq!(snapshot.notes[0].text, "Kasada fark çıktı");
        assert_eq!(snapshot.performance_scores.len(), 1);
        assert_eq!(snapshot.performance_scores[0].task_title, "Kasa");
    }
}
