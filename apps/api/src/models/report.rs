use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted comprehensive analysis. `analysis` holds the NormalizedAnalysis JSON verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnalysisReportRow {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub personnel_id: Uuid,
    pub analysis: Value,
    pub created_at: DateTime<Utc>,
}
