use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db;
use crate::error::{AppError, Result};
use crate::routes::validation::validate_comment_content;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
    #[serde(rename = "postId")]
    pub post_id: Uuid,
    #[serde(rename = "authorId")]
    pub author_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct CreateCommentResponse {
    pub success: bool,
    #[serde(rename = "commentId")]
    pub comment_id: Uuid,
}

/// Create a comment on a post
///
/// Content length is checked before any store access; the post and author
/// must exist.
pub async fn create_comment(
    State(state): State<AppState>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<Json<CreateCommentResponse>> {
    validate_comment_content(&payload.content)?;

    if !db::posts::exists(&state.pool, payload.post_id).await? {
        return Err(AppError::PostNotFound);
    }
    if !db::users::exists(&state.pool, payload.author_id).await? {
        return Err(AppError::UserNotFound);
    }

    let comment_id = db::comments::insert(
        &state.pool,
        &payload.content,
        payload.post_id,
        payload.author_id,
    )
    .await?;

    tracing::info!("Comment created: {} on post {}", comment_id, payload.post_id);

    Ok(Json(CreateCommentResponse {
        success: true,
        comment_id,
    }))
}
