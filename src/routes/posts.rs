use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::RECENT_POSTS_LIMIT;
use crate::db;
use crate::error::{AppError, Result};
use crate::models::{CommentWithAuthor, PostSummary};
use crate::routes::validation::{validate_post_content, validate_post_title};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(rename = "categoryId")]
    pub category_id: Uuid,
    #[serde(rename = "authorId")]
    pub author_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct CreatePostResponse {
    pub success: bool,
    #[serde(rename = "postId")]
    pub post_id: Uuid,
}

/// Create a new post
///
/// Title and content are validated first; the category and author existence
/// checks give specific failures instead of leaking a foreign-key error.
pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<Json<CreatePostResponse>> {
    validate_post_title(&payload.title)?;
    validate_post_content(&payload.content)?;

    if !db::categories::exists(&state.pool, payload.category_id).await? {
        return Err(AppError::CategoryNotFound);
    }
    if !db::users::exists(&state.pool, payload.author_id).await? {
        return Err(AppError::UserNotFound);
    }

    let post_id = db::posts::insert(
        &state.pool,
        &payload.title,
        &payload.content,
        payload.category_id,
        payload.author_id,
    )
    .await?;

    tracing::info!("Post created: {} by {}", post_id, payload.author_id);

    Ok(Json(CreatePostResponse {
        success: true,
        post_id,
    }))
}

#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PostSummary>,
}

/// Recent published posts, newest first
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<PostListResponse>> {
    let posts = db::posts::recent_published(&state.pool, RECENT_POSTS_LIMIT).await?;
    Ok(Json(PostListResponse { posts }))
}

/// All posts by an author, newest first (includes unpublished)
pub async fn list_posts_by_author(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<PostListResponse>> {
    if !db::users::exists(&state.pool, user_id).await? {
        return Err(AppError::UserNotFound);
    }
    let posts = db::posts::by_author(&state.pool, user_id).await?;
    Ok(Json(PostListResponse { posts }))
}

#[derive(Debug, Deserialize)]
pub struct PostDetailParams {
    /// Authenticated viewer id, passed explicitly by the UI layer
    pub viewer: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "authorId")]
    pub author_id: Uuid,
    #[serde(rename = "authorName")]
    pub author_name: String,
    #[serde(rename = "categoryName")]
    pub category_name: String,
    #[serde(rename = "categorySlug")]
    pub category_slug: String,
    #[serde(rename = "voteCount")]
    pub vote_count: i64,
    /// The viewer's own vote, 0 when absent or no viewer given
    #[serde(rename = "userVote")]
    pub user_vote: i16,
    pub comments: Vec<CommentWithAuthor>,
}

/// Full post detail: post, author, category, comments, aggregate score and
/// the viewer's own vote
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<PostDetailParams>,
) -> Result<Json<PostDetailResponse>> {
    let post = db::posts::find(&state.pool, id)
        .await?
        .ok_or(AppError::PostNotFound)?;

    let author_name = db::users::display_name(&state.pool, post.author_id).await?;
    let category = db::categories::find(&state.pool, post.category_id)
        .await?
        .ok_or(AppError::CategoryNotFound)?;
    let comments = db::comments::for_post(&state.pool, post.id).await?;
    let vote_count = db::votes::score(&state.pool, post.id).await?;

    let user_vote = match params.viewer {
        Some(viewer) => db::votes::user_vote(&state.pool, post.id, viewer).await?,
        None => 0,
    };

    Ok(Json(PostDetailResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        created_at: post.created_at,
        author_id: post.author_id,
        author_name,
        category_name: category.name,
        category_slug: category.slug,
        vote_count,
        user_vote,
        comments,
    }))
}
