use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Category row as stored in Postgres
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub slug: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Category with its post count, for the category listing
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CategorySummary {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub slug: String,
    #[serde(rename = "postCount")]
    pub post_count: i64,
}
