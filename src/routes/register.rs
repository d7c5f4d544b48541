use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::db;
use crate::error::{AppError, Result};
use crate::routes::validation::{validate_email, validate_name, validate_password};
use crate::security::hash_password;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
}

/// Register a new user
///
/// Validates the fields, checks that the email is not already taken, then
/// stores the user with an Argon2id password hash. Returns 409 Conflict when
/// the email is in use; no row is created in that case.
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>> {
    validate_name(&payload.name)?;
    validate_email(&payload.email)?;
    validate_password(&payload.password)?;

    if db::users::find_by_email(&state.pool, &payload.email)
        .await?
        .is_some()
    {
        tracing::info!("Registration rejected: email already in use");
        return Err(AppError::EmailTaken);
    }

    let password_hash = hash_password(&payload.password)?;

    let user_id = db::users::insert(
        &state.pool,
        payload.name.trim(),
        &payload.email,
        &password_hash,
    )
    .await?;

    tracing::info!("New user registered: {}", user_id);

    Ok(Json(RegisterResponse { success: true }))
}
