use sqlx::PgPool;
use uuid::Uuid;

use crate::models::VoteAction;

/// Apply a vote for (post, user) and return the post's new aggregate score.
///
/// The whole lookup-decide-write-recount cycle runs in one transaction, with
/// the existing row locked via SELECT ... FOR UPDATE, so two concurrent votes
/// from the same user serialize instead of racing between lookup and write.
/// A concurrent first-time vote can still hit the (post_id, user_id) unique
/// constraint; that surfaces as a store failure, never as corrupt data.
pub async fn apply_vote(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
    value: i16,
) -> Result<i64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let existing: Option<i16> =
        sqlx::query_scalar("SELECT value FROM votes WHERE post_id = $1 AND user_id = $2 FOR UPDATE")
            .bind(post_id)
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;

    match VoteAction::decide(existing, value) {
        VoteAction::Insert => {
            sqlx::query("INSERT INTO votes (value, post_id, user_id) VALUES ($1, $2, $3)")
                .bind(value)
                .bind(post_id)
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
        }
        VoteAction::Retract => {
            sqlx::query("DELETE FROM votes WHERE post_id = $1 AND user_id = $2")
                .bind(post_id)
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
        }
        VoteAction::Switch => {
            sqlx::query("UPDATE votes SET value = $1 WHERE post_id = $2 AND user_id = $3")
                .bind(value)
                .bind(post_id)
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
        }
    }

    // Aggregate is recomputed from the stored rows, not tracked incrementally.
    let score: i64 =
        sqlx::query_scalar("SELECT COALESCE(SUM(value), 0)::BIGINT FROM votes WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(&mut *tx)
            .await?;

    tx.commit().await?;

    Ok(score)
}

/// Current aggregate score for a post
pub async fn score(pool: &PgPool, post_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COALESCE(SUM(value), 0)::BIGINT FROM votes WHERE post_id = $1")
        .bind(post_id)
        .fetch_one(pool)
        .await
}

/// The viewer's own vote on a post, 0 when they have not voted
pub async fn user_vote(pool: &PgPool, post_id: Uuid, user_id: Uuid) -> Result<i16, sqlx::Error> {
    let value: Option<i16> =
        sqlx::query_scalar("SELECT value FROM votes WHERE post_id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

    Ok(value.unwrap_or(0))
}

/// Count all votes
pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM votes")
        .fetch_one(pool)
        .await
}
