use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::state::AppState;

/// Header carrying the caller's user id on protected routes.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller. Rejects with 401 when the header is missing,
/// malformed, or names no existing user.
pub struct CurrentUser(pub UserRow);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<i64>().ok())
            .ok_or(AppError::Unauthorized)?;

        let user = state
            .store
            .find_user(user_id)
            .await?
            .ok_or(AppError::Unauthorized)?;

        Ok(CurrentUser(user))
    }
}
