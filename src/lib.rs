//! Community forum server library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod security;

pub use config::Config;
pub use db::create_pool;
pub use error::{AppError, Result};

use axum::{
    routing::{get, post},
    Router,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::PgPool,
    pub config: Config,
}

/// Build the application router
pub fn app_router(state: AppState) -> Router {
    use routes::*;

    Router::new()
        .route("/health", get(health_check))
        .route("/api/register", post(register_user))
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/:id", get(get_post))
        .route("/api/users/:id", get(get_user_profile))
        .route("/api/users/:id/posts", get(list_posts_by_author))
        .route("/api/comments", post(create_comment))
        .route("/api/votes", post(vote_post))
        .route("/api/categories", get(list_categories))
        .route("/api/categories/:slug", get(get_category))
        .route("/api/admin/seed", post(seed_database))
        .route("/api/admin/reset", post(reset_database))
        .route("/api/admin/stats", get(admin_stats))
        .with_state(state)
}
