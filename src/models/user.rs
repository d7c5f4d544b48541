use chrono::{DateTime, Utc};
use uuid::Uuid;

/// User row as stored in Postgres
///
/// The password hash never leaves the server; response types carry only the
/// public fields.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
