use sqlx::PgPool;
use uuid::Uuid;

use crate::models::CommentWithAuthor;

/// Insert a new comment and return its id
pub async fn insert(
    pool: &PgPool,
    content: &str,
    post_id: Uuid,
    author_id: Uuid,
) -> Result<Uuid, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO comments (content, post_id, author_id)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(content)
    .bind(post_id)
    .bind(author_id)
    .fetch_one(pool)
    .await
}

/// Comments on a post with author names, newest first
pub async fn for_post(pool: &PgPool, post_id: Uuid) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, CommentWithAuthor>(
        r#"
        SELECT cm.id, cm.content, cm.author_id, u.name AS author_name, cm.created_at
        FROM comments cm
        JOIN users u ON u.id = cm.author_id
        WHERE cm.post_id = $1
        ORDER BY cm.created_at DESC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}

/// Count all comments
pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM comments")
        .fetch_one(pool)
        .await
}
