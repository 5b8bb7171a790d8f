//! Interview session flow: start an interview, score and store answers, read
//! results back.
//!
//! Stage progression is client-driven. The server records the stage an
//! interview was started in and the stage each answer was given under, but
//! never moves an interview from one stage to the next on its own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::evaluation::{Evaluation, EvaluationRequest, Evaluator, StarElements};
use crate::interview::questions::question_for;
use crate::interview::stage::{JobRole, Stage};
use crate::models::interview::{AnswerRow, InterviewRow, NewAnswer};
use crate::store::InterviewStore;

/// Every interview opens with the HR stage.
pub const FIRST_STAGE: Stage = Stage::Hr;

#[derive(Debug, Serialize)]
pub struct StartedInterview {
    pub interview_id: i64,
    pub job_role: JobRole,
    pub stage: Stage,
    pub question: &'static str,
}

/// Body of `POST /submit_answer/:interview_id`. Every field is optional at the
/// parsing layer so absent fields map to the `Missing data` error.
#[derive(Debug, Default, Deserialize)]
pub struct AnswerSubmission {
    pub stage: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub job_role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StageQuestion {
    pub interview_id: i64,
    pub job_role: String,
    pub stage: Stage,
    pub question: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AnswerView {
    pub id: i64,
    pub stage: String,
    pub question: String,
    pub answer_text: String,
    pub score: f64,
    pub feedback: String,
    pub star_elements_detected: StarElements,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct InterviewResults {
    pub interview: InterviewRow,
    pub answers: Vec<AnswerView>,
    /// Mean answer score, computed on read. `None` until something is answered.
    pub average_score: Option<f64>,
}

/// Validates the role and opens a new interview in the first stage.
pub async fn start_interview(
    store: &dyn InterviewStore,
    user_id: i64,
    job_role: Option<&str>,
) -> Result<StartedInterview, AppError> {
    let job_role = job_role
        .ok_or_else(|| AppError::Validation("job_role is required".to_string()))?
        .parse::<JobRole>()
        .map_err(AppError::Validation)?;

    let interview = store.create_interview(user_id, job_role, FIRST_STAGE).await?;
    info!(
        "User {user_id} started interview {} for {job_role}",
        interview.id
    );

    Ok(StartedInterview {
        interview_id: interview.id,
        job_role,
        stage: FIRST_STAGE,
        question: question_for(FIRST_STAGE, job_role),
    })
}

/// Scores an answer and stores it against an interview the caller owns.
///
/// Ownership is checked before the evaluator runs, so a rejected request never
/// costs an LLM call and never writes a row.
pub async fn submit_answer(
    store: &dyn InterviewStore,
    evaluator: &Evaluator,
    user_id: i64,
    interview_id: i64,
    submission: AnswerSubmission,
) -> Result<Evaluation, AppError> {
    let (Some(stage), Some(question), Some(answer), Some(job_role)) = (
        present(submission.stage),
        present(submission.question),
        present(submission.answer),
        present(submission.job_role),
    ) else {
        return Err(AppError::MissingData);
    };
    let stage = stage.parse::<Stage>().map_err(AppError::Validation)?;

    store
        .interview_access(interview_id, user_id)
        .await?
        .into_owned(interview_id)?;

    let evaluation = evaluator
        .evaluate(EvaluationRequest {
            stage,
            job_role: &job_role,
            question: &question,
            answer: &answer,
        })
        .await;

    let star_detected = serde_json::to_string(&evaluation.star_elements_detected)
        .map_err(|e| anyhow::anyhow!("Failed to serialize STAR flags: {e}"))?;

    let stored = store
        .insert_answer(NewAnswer {
            interview_id,
            question: &question,
            answer_text: &answer,
            score: f64::from(evaluation.score),
            feedback: &evaluation.feedback,
            star_detected: &star_detected,
            stage,
        })
        .await?;

    info!(
        "Stored answer {} for interview {interview_id} ({stage}, score {})",
        stored.id, evaluation.score
    );
    Ok(evaluation)
}

/// Returns the question for `stage` (or the interview's own stage) of an owned interview.
pub async fn stage_question(
    store: &dyn InterviewStore,
    user_id: i64,
    interview_id: i64,
    stage: Option<&str>,
) -> Result<StageQuestion, AppError> {
    let interview = store
        .interview_access(interview_id, user_id)
        .await?
        .into_owned(interview_id)?;

    let stage = stage
        .unwrap_or(&interview.stage)
        .parse::<Stage>()
        .map_err(AppError::Validation)?;
    let job_role = interview.job_role.parse::<JobRole>().map_err(|e| {
        AppError::Internal(anyhow::anyhow!(
            "Interview {interview_id} has unknown job role: {e}"
        ))
    })?;

    Ok(StageQuestion {
        interview_id,
        job_role: interview.job_role,
        stage,
        question: question_for(stage, job_role),
    })
}

pub async fn interview_results(
    store: &dyn InterviewStore,
    user_id: i64,
    interview_id: i64,
) -> Result<InterviewResults, AppError> {
    let interview = store
        .interview_access(interview_id, user_id)
        .await?
        .into_owned(interview_id)?;

    let rows = store.list_answers(interview_id).await?;
    let average_score = average(&rows);
    let answers = rows.into_iter().map(answer_view).collect();

    Ok(InterviewResults {
        interview,
        answers,
        average_score,
    })
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.trim().is_empty())
}

fn average(rows: &[AnswerRow]) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    Some(rows.iter().map(|r| r.score).sum::<f64>() / rows.len() as f64)
}

fn answer_view(row: AnswerRow) -> AnswerView {
    let star_elements_detected = serde_json::from_str(&row.star_detected).unwrap_or_else(|e| {
        warn!("Answer {} has unreadable STAR flags: {e}", row.id);
        StarElements::default()
    });
    AnswerView {
        id: row.id,
        stage: row.stage,
        question: row.question,
        answer_text: row.answer_text,
        score: row.score,
        feedback: row.feedback,
        star_elements_detected,
        created_at: row.created_at,
    }
}
