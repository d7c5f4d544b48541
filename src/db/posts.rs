use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Post, PostSummary};

const SUMMARY_SELECT: &str = r#"
    SELECT p.id, p.title, p.content, p.created_at,
           u.name AS author_name,
           c.name AS category_name,
           c.slug AS category_slug,
           COALESCE((SELECT SUM(v.value) FROM votes v WHERE v.post_id = p.id), 0)::BIGINT
               AS vote_count,
           (SELECT COUNT(*) FROM comments cm WHERE cm.post_id = p.id) AS comment_count
    FROM posts p
    JOIN users u ON u.id = p.author_id
    JOIN categories c ON c.id = p.category_id
"#;

/// Insert a new post and return its id
pub async fn insert(
    pool: &PgPool,
    title: &str,
    content: &str,
    category_id: Uuid,
    author_id: Uuid,
) -> Result<Uuid, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO posts (title, content, category_id, author_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(category_id)
    .bind(author_id)
    .fetch_one(pool)
    .await
}

/// Most recent published posts, newest first
pub async fn recent_published(pool: &PgPool, limit: i64) -> Result<Vec<PostSummary>, sqlx::Error> {
    let query = format!(
        "{SUMMARY_SELECT} WHERE p.published ORDER BY p.created_at DESC LIMIT $1"
    );
    sqlx::query_as::<_, PostSummary>(&query)
        .bind(limit)
        .fetch_all(pool)
        .await
}

/// Published posts in a category, newest first
pub async fn by_category(pool: &PgPool, category_id: Uuid) -> Result<Vec<PostSummary>, sqlx::Error> {
    let query = format!(
        "{SUMMARY_SELECT} WHERE p.published AND p.category_id = $1 ORDER BY p.created_at DESC"
    );
    sqlx::query_as::<_, PostSummary>(&query)
        .bind(category_id)
        .fetch_all(pool)
        .await
}

/// All posts by an author (published or not), newest first
pub async fn by_author(pool: &PgPool, author_id: Uuid) -> Result<Vec<PostSummary>, sqlx::Error> {
    let query = format!(
        "{SUMMARY_SELECT} WHERE p.author_id = $1 ORDER BY p.created_at DESC"
    );
    sqlx::query_as::<_, PostSummary>(&query)
        .bind(author_id)
        .fetch_all(pool)
        .await
}

/// Look up a post by id
pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, published, author_id, category_id, created_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Check whether a post id exists
pub async fn exists(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await
}

/// Count all posts
pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await
}
