use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::errors::AppError;
use crate::interview::stage::{JobRole, Stage};
use crate::models::interview::{AnswerRow, InterviewRow, NewAnswer};
use crate::models::user::{NewUser, UserRow};
use crate::store::InterviewStore;

#[derive(Default)]
struct Tables {
    users: Vec<UserRow>,
    interviews: Vec<InterviewRow>,
    answers: Vec<AnswerRow>,
}

/// In-process store with the same observable behavior as `PgStore`.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn interview_count(&self) -> usize {
        self.tables.lock().unwrap().interviews.len()
    }

    pub fn answer_count(&self) -> usize {
        self.tables.lock().unwrap().answers.len()
    }
}

#[async_trait]
impl InterviewStore for MemoryStore {
    async fn init_schema(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn create_user(&self, user: NewUser<'_>) -> Result<UserRow, AppError> {
        let mut tables = self.tables.lock().unwrap();
        if tables
            .users
            .iter()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(AppError::Conflict(
                "Username or email is already registered".to_string(),
            ));
        }
        let row = UserRow {
            id: tables.users.len() as i64 + 1,
            username: user.username.to_string(),
            email: user.email.to_string(),
            password_hash: user.password_hash.to_string(),
            created_at: Utc::now(),
        };
        tables.users.push(row.clone());
        Ok(row)
    }

    async fn find_user(&self, user_id: i64) -> Result<Option<UserRow>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<UserRow>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_interview(
        &self,
        user_id: i64,
        job_role: JobRole,
        stage: Stage,
    ) -> Result<InterviewRow, AppError> {
        let mut tables = self.tables.lock().unwrap();
        let row = InterviewRow {
            id: tables.interviews.len() as i64 + 1,
            user_id,
            job_role: job_role.as_str().to_string(),
            stage: stage.as_str().to_string(),
            total_score: 0.0,
            created_at: Utc::now(),
        };
        tables.interviews.push(row.clone());
        Ok(row)
    }

    async fn find_interview(&self, interview_id: i64) -> Result<Option<InterviewRow>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .interviews
            .iter()
            .find(|i| i.id == interview_id)
            .cloned())
    }

    async fn list_interviews(&self, user_id: i64) -> Result<Vec<InterviewRow>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .interviews
            .iter()
            .rev()
            .filter(|i| i.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_answer(&self, answer: NewAnswer<'_>) -> Result<AnswerRow, AppError> {
        let mut tables = self.tables.lock().unwrap();
        let row = AnswerRow {
            id: tables.answers.len() as i64 + 1,
            interview_id: answer.interview_id,
            question: answer.question.to_string(),
            answer_text: answer.answer_text.to_string(),
            score: answer.score,
            feedback: answer.feedback.to_string(),
            star_detected: answer.star_detected.to_string(),
            stage: answer.stage.as_str().to_string(),
            created_at: Utc::now(),
        };
        tables.answers.push(row.clone());
        Ok(row)
    }

    async fn list_answers(&self, interview_id: i64) -> Result<Vec<AnswerRow>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .answers
            .iter()
            .filter(|a| a.interview_id == interview_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InterviewAccess;

    async fn store_with_user(username: &str) -> (MemoryStore, UserRow) {
        let store = MemoryStore::default();
        let user = store
            .create_user(NewUser {
                username,
                email: &format!("{username}@example.com"),
                password_hash: "hash",
            })
            .await
            .unwrap();
        (store, user)
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let (store, _) = store_with_user("budi").await;
        let err = store
            .create_user(NewUser {
                username: "budi",
                email: "other@example.com",
                password_hash: "hash",
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_interview_access_classification() {
        let (store, owner) = store_with_user("budi").await;
        let interview = store
            .create_interview(owner.id, JobRole::ItSupport, Stage::Hr)
            .await
            .unwrap();

        assert!(matches!(
            store.interview_access(interview.id, owner.id).await.unwrap(),
            InterviewAccess::Owned(_)
        ));
        assert!(matches!(
            store.interview_access(interview.id, owner.id + 1).await.unwrap(),
            InterviewAccess::Forbidden
        ));
        assert!(matches!(
            store.interview_access(999, owner.id).await.unwrap(),
            InterviewAccess::NotFound
        ));
    }

    #[tokio::test]
    async fn test_list_interviews_newest_first() {
        let (store, owner) = store_with_user("budi").await;
        let first = store
            .create_interview(owner.id, JobRole::ItSupport, Stage::Hr)
            .await
            .unwrap();
        let second = store
            .create_interview(owner.id, JobRole::DataScientist, Stage::Hr)
            .await
            .unwrap();

        let ids: Vec<i64> = store
            .list_interviews(owner.id)
            .await
            .unwrap()
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }
}
