//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::note::NoteAnalysis;
use crate::analysis::pipeline::{analyze_note, analyze_personnel};
use crate::analysis::repository::{get_report, list_reports, load_snapshot, save_report};
use crate::analysis::snapshot::{PersonnelSnapshot, Polarity};
use crate::analysis::types::NormalizedAnalysis;
use crate::errors::AppError;
use crate::models::report::AnalysisReportRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct OrganizationQuery {
    pub organization_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct NoteAnalysisRequest {
    pub text: String,
    pub polarity: Polarity,
}

#[derive(Debug, Serialize)]
pub struct PersonnelAnalysisResponse {
    pub report_id: Uuid,
    pub analysis: NormalizedAnalysis,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis/note
///
/// Analyzes a single note. Model failures yield the simple-note fallback.
pub async fn handle_analyze_note(
    State(state): State<AppState>,
    Json(request): Json<NoteAnalysisRequest>,
) -> Result<Json<NoteAnalysis>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let analysis = analyze_note(state.llm.as_ref(), &request.text, request.polarity).await;
    Ok(Json(analysis))
}

/// POST /api/v1/analysis/comprehensive
///
/// Runs the comprehensive pipeline on a caller-supplied snapshot. Nothing is persisted.
pub async fn handle_analyze_snapshot(
    State(state): State<AppState>,
    Json(snapshot): Json<PersonnelSnapshot>,
) -> Result<Json<NormalizedAnalysis>, AppError> {
    snapshot.validate().map_err(AppError::Validation)?;

    let analysis = analyze_personnel(state.llm.as_ref(), &snapshot).await;
    Ok(Json(analysis))
}

/// POST /api/v1/personnel/:id/analysis
///
/// Loads the person's history, runs the comprehensive pipeline and stores the report.
pub async fn handle_analyze_personnel(
    State(state): State<AppState>,
    Path(personnel_id): Path<Uuid>,
    Query(params): Query<OrganizationQuery>,
) -> Result<Json<PersonnelAnalysisResponse>, AppError> {
    let snapshot = load_snapshot(&state.db, params.organization_id, personnel_id).await?;

    let analysis = analyze_personnel(state.llm.as_ref(), &snapshot).await;
    let report = save_report(&state.db, params.organization_id, personnel_id, &analysis).await?;

    info!(
        "Stored analysis report {} for personnel {} ({} risk)",
        report.id,
        personnel_id,
        analysis.executive_summary.overall_risk_level.as_str()
    );

    Ok(Json(PersonnelAnalysisResponse {
        report_id: report.id,
        analysis,
    }))
}

/// GET /api/v1/personnel/:id/reports
///
/// Lists stored reports for one person, newest first.
pub async fn handle_list_reports(
    State(state): State<AppState>,
    Path(personnel_id): Path<Uuid>,
    Query(params): Query<OrganizationQuery>,
) -> Result<Json<Vec<AnalysisReportRow>>, AppError> {
    let reports = list_reports(&state.db, params.organization_id, personnel_id).await?;
    Ok(Json(reports))
}

/// GET /api/v1/reports/:id
pub async fn handle_get_report(
    State(state): State<AppState>,
    Path(report_id): Path<Uuid>,
    Query(params): Query<OrganizationQuery>,
) -> Result<Json<AnalysisReportRow>, AppError> {
    let report = get_report(&state.db, params.organization_id, report_id).await?;
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_request_deserialization() {
        let json = serde_json::json!({"text": "Vardiyayı erken bıraktı", "polarity": "negative"});
        let request: NoteAnalysisRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.polarity, Polarity::Negative);
    }

    #[test]
    fn test_note_request_rejects_unknown_polarity() {
        let json = serde_json::json!({"text": "Sıradan bir gün", "polarity": "neutral"});
        assert!(serde_json::from_value::<NoteAnalysisRequest>(json).is_err());
    }
}
