use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db;
use crate::error::{AppError, Result};
use crate::security::hash_password;
use crate::AppState;

/// Fixed demo categories created by the seed endpoint
const SEED_CATEGORIES: &[(&str, &str, &str)] = &[
    (
        "General Discussion",
        "General topics for the community to discuss",
        "general-discussion",
    ),
    (
        "Introductions",
        "New here? Introduce yourself to the community",
        "introductions",
    ),
    (
        "Show & Tell",
        "Share what you have been working on",
        "show-and-tell",
    ),
    (
        "Help & Support",
        "Ask questions and get help from other members",
        "help-support",
    ),
    (
        "Feedback",
        "Suggestions and feedback about the forum itself",
        "feedback",
    ),
    (
        "Off Topic",
        "Anything that does not fit elsewhere",
        "off-topic",
    ),
    (
        "News & Announcements",
        "Updates and announcements from the community",
        "news-announcements",
    ),
    (
        "Events",
        "Meetups, streams, and other community events",
        "events",
    ),
];

const DEMO_USER_NAME: &str = "Demo User";
const DEMO_USER_EMAIL: &str = "demo@example.com";
const DEMO_USER_PASSWORD: &str = "password123";

#[derive(Debug, Serialize)]
pub struct AdminActionResponse {
    pub success: bool,
    pub message: String,
}

/// Seed fixed demo data: categories, one demo user, two sample posts
///
/// Idempotent: each group is only created when its table is empty. Refused
/// in production.
pub async fn seed_database(State(state): State<AppState>) -> Result<Json<AdminActionResponse>> {
    if state.config.is_production() {
        return Err(AppError::SeedingDisabled);
    }

    if db::categories::count(&state.pool).await? == 0 {
        for (name, description, slug) in SEED_CATEGORIES {
            db::categories::insert(&state.pool, name, description, slug).await?;
        }
        tracing::info!("Categories seeded");
    }

    if db::users::count(&state.pool).await? == 0 {
        let password_hash = hash_password(DEMO_USER_PASSWORD)?;
        let demo_user =
            db::users::insert(&state.pool, DEMO_USER_NAME, DEMO_USER_EMAIL, &password_hash)
                .await?;
        tracing::info!("Demo user seeded");

        if db::posts::count(&state.pool).await? == 0 {
            let general = db::categories::find_by_slug(&state.pool, "general-discussion")
                .await?
                .ok_or(AppError::CategoryNotFound)?;

            db::posts::insert(
                &state.pool,
                "Welcome to the forum",
                "This is a sample post created by the seed endpoint. Feel free to comment and vote on it.",
                general.id,
                demo_user,
            )
            .await?;
            db::posts::insert(
                &state.pool,
                "How voting works",
                "Upvote or downvote a post once; clicking the same button again retracts your vote.",
                general.id,
                demo_user,
            )
            .await?;
            tracing::info!("Sample posts seeded");
        }
    }

    Ok(Json(AdminActionResponse {
        success: true,
        message: "Database seeded successfully".to_string(),
    }))
}

/// Delete all rows from every table, children before parents
///
/// Refused in production.
pub async fn reset_database(State(state): State<AppState>) -> Result<Json<AdminActionResponse>> {
    if state.config.is_production() {
        return Err(AppError::SeedingDisabled);
    }

    let mut tx = state.pool.begin().await?;
    sqlx::query("DELETE FROM comments").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM votes").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM posts").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM categories").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM users").execute(&mut *tx).await?;
    tx.commit().await?;

    tracing::info!("Database reset");

    Ok(Json(AdminActionResponse {
        success: true,
        message: "Database reset successfully".to_string(),
    }))
}

/// Query parameters for admin stats endpoint
#[derive(Debug, Deserialize)]
pub struct AdminQuery {
    /// Admin secret key for authentication
    pub key: String,
}

/// Database statistics response
#[derive(Debug, Serialize)]
pub struct AdminStatsResponse {
    #[serde(rename = "userCount")]
    pub user_count: i64,
    #[serde(rename = "categoryCount")]
    pub category_count: i64,
    #[serde(rename = "postCount")]
    pub post_count: i64,
    #[serde(rename = "commentCount")]
    pub comment_count: i64,
    #[serde(rename = "voteCount")]
    pub vote_count: i64,
}

/// Admin stats endpoint
///
/// Returns row counts for monitoring and diagnostics. Requires the admin
/// secret key passed as a query parameter; unauthorized when the key is
/// unset or wrong.
///
/// GET /api/admin/stats?key=<admin_secret_key>
pub async fn admin_stats(
    State(state): State<AppState>,
    Query(params): Query<AdminQuery>,
) -> Result<Json<AdminStatsResponse>> {
    let admin_key = state
        .config
        .admin_secret_key
        .as_ref()
        .ok_or(AppError::Unauthorized)?;

    if params.key != *admin_key {
        tracing::warn!("Invalid admin key attempt");
        return Err(AppError::Unauthorized);
    }

    let user_count = db::users::count(&state.pool).await?;
    let category_count = db::categories::count(&state.pool).await?;
    let post_count = db::posts::count(&state.pool).await?;
    let comment_count = db::comments::count(&state.pool).await?;
    let vote_count = db::votes::count(&state.pool).await?;

    tracing::info!(
        "Admin stats requested: {} users, {} posts, {} votes",
        user_count,
        post_count,
        vote_count
    );

    Ok(Json(AdminStatsResponse {
        user_count,
        category_count,
        post_count,
        comment_count,
        vote_count,
    }))
}
