use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Category, CategorySummary};

/// List all categories with their published post counts
pub async fn list_with_counts(pool: &PgPool) -> Result<Vec<CategorySummary>, sqlx::Error> {
    sqlx::query_as::<_, CategorySummary>(
        r#"
        SELECT c.id, c.name, c.description, c.slug,
               (SELECT COUNT(*) FROM posts p
                WHERE p.category_id = c.id AND p.published) AS post_count
        FROM categories c
        ORDER BY c.name
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Look up a category by its slug
pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, name, description, slug, created_at
        FROM categories
        WHERE slug = $1
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await
}

/// Look up a category by id
pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, name, description, slug, created_at
        FROM categories
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Check whether a category id exists
pub async fn exists(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await
}

/// Insert a new category and return its id
pub async fn insert(
    pool: &PgPool,
    name: &str,
    description: &str,
    slug: &str,
) -> Result<Uuid, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO categories (name, description, slug)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(slug)
    .fetch_one(pool)
    .await
}

/// Count all categories
pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await
}
