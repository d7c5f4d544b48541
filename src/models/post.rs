use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Post row as stored in Postgres
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub author_id: Uuid,
    pub category_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Post listing entry with author, category, aggregate score and comment count
///
/// Produced by a single joined query; the score is the sum of the post's
/// stored vote values, so retracted votes never appear in it.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PostSummary {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "authorName")]
    pub author_name: String,
    #[serde(rename = "categoryName")]
    pub category_name: String,
    #[serde(rename = "categorySlug")]
    pub category_slug: String,
    #[serde(rename = "voteCount")]
    pub vote_count: i64,
    #[serde(rename = "commentCount")]
    pub comment_count: i64,
}
