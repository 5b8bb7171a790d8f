use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use crate::db::SCHEMA_STATEMENTS;
use crate::errors::AppError;
use crate::interview::stage::{JobRole, Stage};
use crate::models::interview::{AnswerRow, InterviewRow, NewAnswer};
use crate::models::user::{NewUser, UserRow};
use crate::store::InterviewStore;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InterviewStore for PgStore {
    async fn init_schema(&self) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        for stmt in SCHEMA_STATEMENTS {
            sqlx::query(stmt).execute(&mut *tx).await?;
        }
        tx.commit().await?;
        info!("Database schema ensured ({} statements)", SCHEMA_STATEMENTS.len());
        Ok(())
    }

    async fn create_user(&self, user: NewUser<'_>) -> Result<UserRow, AppError> {
        sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(user.username)
        .bind(user.email)
        .bind(user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("Username or email is already registered".to_string())
            }
            other => AppError::Database(other),
        })
    }

    async fn find_user(&self, user_id: i64) -> Result<Option<UserRow>, AppError> {
        Ok(
            sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<UserRow>, AppError> {
        Ok(
            sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE username = $1")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn create_interview(
        &self,
        user_id: i64,
        job_role: JobRole,
        stage: Stage,
    ) -> Result<InterviewRow, AppError> {
        Ok(sqlx::query_as::<_, InterviewRow>(
            r#"
            INSERT INTO interviews (user_id, job_role, stage)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(job_role.as_str())
        .bind(stage.as_str())
        .fetch_one(&self.pool)
        .await?)
    }

    async fn find_interview(&self, interview_id: i64) -> Result<Option<InterviewRow>, AppError> {
        Ok(
            sqlx::query_as::<_, InterviewRow>("SELECT * FROM interviews WHERE id = $1")
                .bind(interview_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn list_interviews(&self, user_id: i64) -> Result<Vec<InterviewRow>, AppError> {
        Ok(sqlx::query_as::<_, InterviewRow>(
            "SELECT * FROM interviews WHERE user_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn insert_answer(&self, answer: NewAnswer<'_>) -> Result<AnswerRow, AppError> {
        Ok(sqlx::query_as::<_, AnswerRow>(
            r#"
            INSERT INTO answers
                (interview_id, question, answer_text, score, feedback, star_detected, stage)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(answer.interview_id)
        .bind(answer.question)
        .bind(answer.answer_text)
        .bind(answer.score)
        .bind(answer.feedback)
        .bind(answer.star_detected)
        .bind(answer.stage.as_str())
        .fetch_one(&self.pool)
        .await?)
    }

    async fn list_answers(&self, interview_id: i64) -> Result<Vec<AnswerRow>, AppError> {
        Ok(sqlx::query_as::<_, AnswerRow>(
            "SELECT * FROM answers WHERE interview_id = $1 ORDER BY id ASC",
        )
        .bind(interview_id)
        .fetch_all(&self.pool)
        .await?)
    }
}
