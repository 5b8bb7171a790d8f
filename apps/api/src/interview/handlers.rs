use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::evaluation::Evaluation;
use crate::interview::session::{
    interview_results, stage_question, start_interview, submit_answer, AnswerSubmission,
    InterviewResults, StageQuestion, StartedInterview,
};
use crate::interview::stage::{JobRole, JOB_ROLES};
use crate::models::interview::InterviewRow;
use crate::state::AppState;
use crate::users::auth::CurrentUser;

#[derive(Debug, Serialize)]
pub struct JobRolesResponse {
    pub job_roles: &'static [JobRole],
}

#[derive(Debug, Deserialize)]
pub struct StartForm {
    pub job_role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StageQuery {
    pub stage: Option<String>,
}

/// GET /
pub async fn handle_index(CurrentUser(_user): CurrentUser) -> Json<JobRolesResponse> {
    Json(JobRolesResponse {
        job_roles: &JOB_ROLES,
    })
}

/// POST /
///
/// Form field `job_role`. Opens an interview in the HR stage and returns its
/// first question.
pub async fn handle_start(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<StartForm>,
) -> Result<(StatusCode, Json<StartedInterview>), AppError> {
    let started = start_interview(state.store.as_ref(), user.id, form.job_role.as_deref()).await?;
    Ok((StatusCode::CREATED, Json(started)))
}

/// POST /submit_answer/:interview_id
///
/// An unreadable body is treated the same as one with every field absent.
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(interview_id): Path<i64>,
    body: Result<Json<AnswerSubmission>, JsonRejection>,
) -> Result<Json<Evaluation>, AppError> {
    let submission = match body {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            debug!("Unreadable answer body for interview {interview_id}: {rejection}");
            AnswerSubmission::default()
        }
    };

    let evaluation = submit_answer(
        state.store.as_ref(),
        &state.evaluator,
        user.id,
        interview_id,
        submission,
    )
    .await?;
    Ok(Json(evaluation))
}

/// GET /interview/:interview_id/question?stage=Behavioral
pub async fn handle_stage_question(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(interview_id): Path<i64>,
    Query(query): Query<StageQuery>,
) -> Result<Json<StageQuestion>, AppError> {
    let question = stage_question(
        state.store.as_ref(),
        user.id,
        interview_id,
        query.stage.as_deref(),
    )
    .await?;
    Ok(Json(question))
}

/// GET /interview/:interview_id/results
pub async fn handle_results(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(interview_id): Path<i64>,
) -> Result<Json<InterviewResults>, AppError> {
    let results = interview_results(state.store.as_ref(), user.id, interview_id).await?;
    Ok(Json(results))
}

/// GET /interviews
pub async fn handle_history(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<InterviewRow>>, AppError> {
    let interviews = state.store.list_interviews(user.id).await?;
    Ok(Json(interviews))
}
