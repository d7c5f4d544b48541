use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db;
use crate::error::{AppError, Result};
use crate::routes::validation::validate_vote_value;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    #[serde(rename = "postId")]
    pub post_id: Uuid,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub value: i16,
}

#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub success: bool,
    #[serde(rename = "voteCount")]
    pub vote_count: i64,
}

/// Cast, switch, or retract a vote on a post
///
/// First vote inserts a row, repeating the same value deletes it
/// (toggle-off), the opposite value updates it in place. The response carries
/// the post's new aggregate score.
pub async fn vote_post(
    State(state): State<AppState>,
    Json(payload): Json<VoteRequest>,
) -> Result<Json<VoteResponse>> {
    validate_vote_value(payload.value)?;

    if !db::posts::exists(&state.pool, payload.post_id).await? {
        return Err(AppError::PostNotFound);
    }
    if !db::users::exists(&state.pool, payload.user_id).await? {
        return Err(AppError::UserNotFound);
    }

    let vote_count =
        db::votes::apply_vote(&state.pool, payload.post_id, payload.user_id, payload.value)
            .await?;

    tracing::info!(
        "Vote applied on post {} by {}: new score {}",
        payload.post_id,
        payload.user_id,
        vote_count
    );

    Ok(Json(VoteResponse {
        success: true,
        vote_count,
    }))
}
