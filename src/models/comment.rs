use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Comment joined with its author's display name, for the post detail view
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CommentWithAuthor {
    pub id: Uuid,
    pub content: String,
    #[serde(rename = "authorId")]
    pub author_id: Uuid,
    #[serde(rename = "authorName")]
    pub author_name: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
