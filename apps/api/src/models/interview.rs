use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::interview::stage::Stage;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct InterviewRow {
    pub id: i64,
    pub user_id: i64,
    pub job_role: String,
    pub stage: String,
    /// Defined by the schema but not written by the submit path.
    pub total_score: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AnswerRow {
    pub id: i64,
    pub interview_id: i64,
    pub question: String,
    pub answer_text: String,
    pub score: f64,
    pub feedback: String,
    /// Serialized `StarElements` JSON.
    pub star_detected: String,
    pub stage: String,
    pub created_at: DateTime<Utc>,
}

/// Parameters for persisting one scored answer.
pub struct NewAnswer<'a> {
    pub interview_id: i64,
    pub question: &'a str,
    pub answer_text: &'a str,
    pub score: f64,
    pub feedback: &'a str,
    pub star_detected: &'a str,
    pub stage: Stage,
}
