//! Storage seam. Handlers only see `Arc<dyn InterviewStore>`; production runs
//! on `PgStore`, tests on the in-memory store.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::interview::stage::{JobRole, Stage};
use crate::models::interview::{AnswerRow, InterviewRow, NewAnswer};
use crate::models::user::{NewUser, UserRow};

pub use postgres::PgStore;

/// Outcome of checking whether a user may act on an interview.
#[derive(Debug, Clone)]
pub enum InterviewAccess {
    Owned(InterviewRow),
    Forbidden,
    NotFound,
}

impl InterviewAccess {
    pub fn classify(row: Option<InterviewRow>, user_id: i64) -> Self {
        match row {
            Some(interview) if interview.user_id == user_id => InterviewAccess::Owned(interview),
            Some(_) => InterviewAccess::Forbidden,
            None => InterviewAccess::NotFound,
        }
    }

    /// Converts into the owned interview or the matching HTTP error.
    pub fn into_owned(self, interview_id: i64) -> Result<InterviewRow, AppError> {
        match self {
            InterviewAccess::Owned(interview) => Ok(interview),
            InterviewAccess::Forbidden => Err(AppError::Forbidden),
            InterviewAccess::NotFound => Err(AppError::NotFound(format!(
                "Interview {interview_id} not found"
            ))),
        }
    }
}

#[async_trait]
pub trait InterviewStore: Send + Sync {
    /// Creates any missing tables. Safe to call repeatedly.
    async fn init_schema(&self) -> Result<(), AppError>;

    /// Fails with `AppError::Conflict` when the username or email is taken.
    async fn create_user(&self, user: NewUser<'_>) -> Result<UserRow, AppError>;

    async fn find_user(&self, user_id: i64) -> Result<Option<UserRow>, AppError>;

    async fn find_user_by_username(&self, username: &str) -> Result<Option<UserRow>, AppError>;

    async fn create_interview(
        &self,
        user_id: i64,
        job_role: JobRole,
        stage: Stage,
    ) -> Result<InterviewRow, AppError>;

    async fn find_interview(&self, interview_id: i64) -> Result<Option<InterviewRow>, AppError>;

    /// Newest first.
    async fn list_interviews(&self, user_id: i64) -> Result<Vec<InterviewRow>, AppError>;

    async fn insert_answer(&self, answer: NewAnswer<'_>) -> Result<AnswerRow, AppError>;

    /// In submission order.
    async fn list_answers(&self, interview_id: i64) -> Result<Vec<AnswerRow>, AppError>;

    async fn interview_access(
        &self,
        interview_id: i64,
        user_id: i64,
    ) -> Result<InterviewAccess, AppError> {
        let row = self.find_interview(interview_id).await?;
        Ok(InterviewAccess::classify(row, user_id))
    }
}
