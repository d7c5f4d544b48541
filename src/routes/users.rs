use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::db;
use crate::error::{AppError, Result};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct UserProfileResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// A user's profile record
///
/// Backs the profile view next to `GET /api/users/{id}/posts`. The password
/// hash stays server-side; only identity fields go over the wire.
pub async fn get_user_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserProfileResponse>> {
    let user = db::users::find(&state.pool, id)
        .await?
        .ok_or(AppError::UserNotFound)?;

    Ok(Json(UserProfileResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        created_at: user.created_at,
    }))
}
