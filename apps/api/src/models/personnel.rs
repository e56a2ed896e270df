use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PersonnelRow {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub personnel_id: Uuid,
    pub content: String,
    /// "positive" | "negative"
    pub polarity: String,
    pub created_at: DateTime<Utc>,
}

/// A completed task assignment that received a performance score.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TaskScoreRow {
    pub title: String,
    pub performance_score: i16,
}
