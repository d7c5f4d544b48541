use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::db;
use crate::error::{AppError, Result};
use crate::models::{CategorySummary, PostSummary};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<CategorySummary>,
}

/// All categories with their published post counts
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<CategoryListResponse>> {
    let categories = db::categories::list_with_counts(&state.pool).await?;
    Ok(Json(CategoryListResponse { categories }))
}

#[derive(Debug, Serialize)]
pub struct CategoryDetailResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub posts: Vec<PostSummary>,
}

/// One category with its published posts, newest first
pub async fn get_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CategoryDetailResponse>> {
    let category = db::categories::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::CategoryNotFound)?;

    let posts = db::posts::by_category(&state.pool, category.id).await?;

    Ok(Json(CategoryDetailResponse {
        id: category.id,
        name: category.name,
        description: category.description,
        slug: category.slug,
        posts,
    }))
}
