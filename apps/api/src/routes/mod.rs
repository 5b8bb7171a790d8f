pub mod health;

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use tracing::info;

use crate::errors::AppError;
use crate::interview::handlers;
use crate::state::AppState;
use crate::users::handlers as users;

/// GET /init_db
/// Creates any missing tables. Idempotent.
async fn init_db(State(state): State<AppState>) -> Result<&'static str, AppError> {
    state.store.init_schema().await?;
    info!("Schema initialized via /init_db");
    Ok("Database tables created!")
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/init_db", get(init_db))
        // Accounts
        .route("/register", post(users::handle_register))
        .route("/login", post(users::handle_login))
        // Interview sessions
        .route("/", get(handlers::handle_index).post(handlers::handle_start))
        .route(
            "/submit_answer/:interview_id",
            post(handlers::handle_submit_answer),
        )
        .route(
            "/interview/:interview_id/question",
            get(handlers::handle_stage_question),
        )
        .route(
            "/interview/:interview_id/results",
            get(handlers::handle_results),
        )
        .route("/interviews", get(handlers::handle_history))
        .with_state(state)
}
