use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::user::{NewUser, PublicUser};
use crate::state::AppState;
use crate::users::password::{hash_password, verify_password, MIN_PASSWORD_LEN};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Unreadable bodies and absent fields are validation errors, not axum's
/// plain-text 4xx rejections.
fn read_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(req)| req)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

/// POST /register
pub async fn handle_register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PublicUser>), AppError> {
    let req = read_body(body)?;
    let username = req.username.trim();
    let email = req.email.trim();
    if username.is_empty() || email.is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "username, email and password are required".to_string(),
        ));
    }
    if !email.contains('@') {
        return Err(AppError::Validation("email is not valid".to_string()));
    }
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    let password = req.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| anyhow::anyhow!("Password hashing task failed: {e}"))??;

    let user = state
        .store
        .create_user(NewUser {
            username,
            email,
            password_hash: &password_hash,
        })
        .await?;

    info!("Registered user {} ({})", user.id, user.username);
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /login
///
/// Verifies credentials and returns the user. No session is issued; clients
/// send the returned id in `X-User-Id` on protected routes.
pub async fn handle_login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<PublicUser>, AppError> {
    let req = read_body(body)?;
    let user = state
        .store
        .find_user_by_username(req.username.trim())
        .await?
        .ok_or(AppError::Unauthorized)?;

    let stored_hash = user.password_hash.clone();
    let password = req.password;
    let verified = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|e| anyhow::anyhow!("Password verification task failed: {e}"))?;

    if !verified {
        return Err(AppError::Unauthorized);
    }
    Ok(Json(user.into()))
}
