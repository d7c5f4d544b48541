//! Integration tests for the forum server API
//!
//! These tests verify the complete request/response cycle for all endpoints.
//! They need a PostgreSQL instance: set TEST_DATABASE_URL to run them, each
//! test skips itself when it is absent.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use forum_server::{db, AppState, Config};

const TEST_ADMIN_KEY: &str = "test-admin-key";

// =============================================================================
// Test Helpers
// =============================================================================

/// Create a test configuration
fn test_config(environment: &str) -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0, // Random port
        database_url: String::new(), // Handlers only use the pool
        database_max_connections: 5,
        allowed_origins: vec!["http://localhost:3000".to_string()],
        environment: environment.to_string(),
        admin_secret_key: Some(TEST_ADMIN_KEY.to_string()),
    }
}

/// Connect to the test database and apply migrations
///
/// Returns None (test skips) when TEST_DATABASE_URL is not set.
async fn test_pool() -> Option<PgPool> {
    let url = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("TEST_DATABASE_URL not set; skipping database-backed test");
            return None;
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    Some(pool)
}

/// Create a test app router
fn create_test_app(pool: PgPool, environment: &str) -> Router {
    let state = AppState {
        pool,
        config: test_config(environment),
    };
    forum_server::app_router(state)
}

/// Pseudo-unique suffix so fixtures never collide across test runs
fn unique_suffix() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}", nanos)
}

/// Insert a user, category and post directly, returning their ids
async fn setup_fixture(pool: &PgPool) -> (Uuid, Uuid, Uuid) {
    let suffix = unique_suffix();

    let user_id = db::users::insert(
        pool,
        "Fixture User",
        &format!("fixture-{suffix}@example.com"),
        "$argon2id$fixture-not-a-real-hash",
    )
    .await
    .unwrap();

    let category_id = db::categories::insert(
        pool,
        "Fixture Category",
        "Category created by a test",
        &format!("fixture-{suffix}"),
    )
    .await
    .unwrap();

    let post_id = db::posts::insert(
        pool,
        "Fixture post title",
        "Fixture post content long enough",
        category_id,
        user_id,
    )
    .await
    .unwrap();

    (user_id, category_id, post_id)
}

/// Parse response body as JSON
async fn body_to_json(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a POST request with JSON body
fn make_post_request(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Create a GET request
fn make_get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Cast a vote and return (status, body)
async fn cast_vote(app: &Router, post_id: Uuid, user_id: Uuid, value: i16) -> (StatusCode, Value) {
    let request = make_post_request(
        "/api/votes",
        json!({ "postId": post_id, "userId": user_id, "value": value }).to_string(),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = body_to_json(response.into_body()).await;
    (status, body)
}

async fn vote_row_count(pool: &PgPool, post_id: Uuid, user_id: Uuid) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM votes WHERE post_id = $1 AND user_id = $2")
        .bind(post_id)
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let Some(pool) = test_pool().await else { return };
    let app = create_test_app(pool, "test");

    let response = app.oneshot(make_get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_and_duplicate_email_rejected() {
    let Some(pool) = test_pool().await else { return };
    let app = create_test_app(pool.clone(), "test");

    let email = format!("dup-{}@example.com", unique_suffix());
    let body = json!({
        "name": "First Account",
        "email": email,
        "password": "password123"
    })
    .to_string();

    let response = app
        .clone()
        .oneshot(make_post_request("/api/register", body.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json_body = body_to_json(response.into_body()).await;
    assert_eq!(json_body["success"], true);

    // Same email again: rejected, and no second row created
    let response = app
        .oneshot(make_post_request("/api/register", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json_body = body_to_json(response.into_body()).await;
    assert_eq!(json_body["success"], false);
    assert_eq!(json_body["message"], "User with this email already exists");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_register_rejects_invalid_fields() {
    let Some(pool) = test_pool().await else { return };
    let app = create_test_app(pool, "test");

    let cases = [
        json!({ "name": "x", "email": "ok@example.com", "password": "password123" }),
        json!({ "name": "Valid Name", "email": "not-an-email", "password": "password123" }),
        json!({ "name": "Valid Name", "email": "ok@example.com", "password": "short" }),
    ];

    for case in cases {
        let response = app
            .clone()
            .oneshot(make_post_request("/api/register", case.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["success"], false);
    }
}

// =============================================================================
// Posts
// =============================================================================

#[tokio::test]
async fn test_create_post_and_fetch_detail() {
    let Some(pool) = test_pool().await else { return };
    let app = create_test_app(pool.clone(), "test");
    let (user_id, category_id, _) = setup_fixture(&pool).await;

    // Title below the 5-char minimum is rejected before persistence
    let request = make_post_request(
        "/api/posts",
        json!({
            "title": "Hey",
            "content": "Content long enough to pass",
            "categoryId": category_id,
            "authorId": user_id
        })
        .to_string(),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Valid post
    let request = make_post_request(
        "/api/posts",
        json!({
            "title": "A proper title",
            "content": "Content long enough to pass",
            "categoryId": category_id,
            "authorId": user_id
        })
        .to_string(),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["success"], true);
    let post_id = body["postId"].as_str().unwrap().to_string();

    // Detail view carries the author, a zero score, and no comments yet
    let response = app
        .oneshot(make_get_request(&format!("/api/posts/{post_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["title"], "A proper title");
    assert_eq!(body["authorName"], "Fixture User");
    assert_eq!(body["voteCount"], 0);
    assert_eq!(body["userVote"], 0);
    assert_eq!(body["comments"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_post_detail_unknown_id_is_404() {
    let Some(pool) = test_pool().await else { return };
    let app = create_test_app(pool, "test");

    let response = app
        .oneshot(make_get_request(&format!("/api/posts/{}", Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_post_unknown_category_rejected() {
    let Some(pool) = test_pool().await else { return };
    let app = create_test_app(pool.clone(), "test");
    let (user_id, _, _) = setup_fixture(&pool).await;

    let request = make_post_request(
        "/api/posts",
        json!({
            "title": "A proper title",
            "content": "Content long enough to pass",
            "categoryId": Uuid::new_v4(),
            "authorId": user_id
        })
        .to_string(),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Comments
// =============================================================================

#[tokio::test]
async fn test_comment_length_boundary() {
    let Some(pool) = test_pool().await else { return };
    let app = create_test_app(pool.clone(), "test");
    let (user_id, _, post_id) = setup_fixture(&pool).await;

    // Two characters: rejected before persistence
    let request = make_post_request(
        "/api/comments",
        json!({ "content": "ab", "postId": post_id, "authorId": user_id }).to_string(),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let comment_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE post_id = $1")
        .bind(post_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(comment_count, 0);

    // Exactly three characters: accepted
    let request = make_post_request(
        "/api/comments",
        json!({ "content": "abc", "postId": post_id, "authorId": user_id }).to_string(),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert!(body["commentId"].is_string());
}

// =============================================================================
// Vote Ledger
// =============================================================================

#[tokio::test]
async fn test_vote_toggle_off_and_switch() {
    let Some(pool) = test_pool().await else { return };
    let app = create_test_app(pool.clone(), "test");
    let (user_id, _, post_id) = setup_fixture(&pool).await;

    // First upvote inserts a row and the score reflects it
    let (status, body) = cast_vote(&app, post_id, user_id, 1).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["voteCount"], 1);
    assert_eq!(vote_row_count(&pool, post_id, user_id).await, 1);

    // Same vote again retracts it: row gone, score back to zero
    let (status, body) = cast_vote(&app, post_id, user_id, 1).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["voteCount"], 0);
    assert_eq!(vote_row_count(&pool, post_id, user_id).await, 0);

    // Vote up, then switch direction: exactly one row holding the new value
    let (_, body) = cast_vote(&app, post_id, user_id, 1).await;
    assert_eq!(body["voteCount"], 1);
    let (status, body) = cast_vote(&app, post_id, user_id, -1).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["voteCount"], -1);
    assert_eq!(vote_row_count(&pool, post_id, user_id).await, 1);

    let value: i16 = sqlx::query_scalar("SELECT value FROM votes WHERE post_id = $1 AND user_id = $2")
        .bind(post_id)
        .bind(user_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(value, -1);
}

#[tokio::test]
async fn test_vote_aggregate_sums_all_users() {
    let Some(pool) = test_pool().await else { return };
    let app = create_test_app(pool.clone(), "test");
    let (user_a, _, post_id) = setup_fixture(&pool).await;

    let user_b = db::users::insert(
        &pool,
        "Second Voter",
        &format!("voter-{}@example.com", unique_suffix()),
        "$argon2id$fixture-not-a-real-hash",
    )
    .await
    .unwrap();

    let (_, body) = cast_vote(&app, post_id, user_a, 1).await;
    assert_eq!(body["voteCount"], 1);
    let (_, body) = cast_vote(&app, post_id, user_b, 1).await;
    assert_eq!(body["voteCount"], 2);

    // One of them retracts: the aggregate never counts retracted votes
    let (_, body) = cast_vote(&app, post_id, user_a, 1).await;
    assert_eq!(body["voteCount"], 1);
}

#[tokio::test]
async fn test_vote_rejects_zero_and_out_of_range() {
    let Some(pool) = test_pool().await else { return };
    let app = create_test_app(pool.clone(), "test");
    let (user_id, _, post_id) = setup_fixture(&pool).await;

    for value in [0i16, 2, -2] {
        let (status, body) = cast_vote(&app, post_id, user_id, value).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Vote value must be -1 or +1");
    }

    assert_eq!(vote_row_count(&pool, post_id, user_id).await, 0);
}

#[tokio::test]
async fn test_vote_on_unknown_post_is_404() {
    let Some(pool) = test_pool().await else { return };
    let app = create_test_app(pool.clone(), "test");
    let (user_id, _, _) = setup_fixture(&pool).await;

    let (status, _) = cast_vote(&app, Uuid::new_v4(), user_id, 1).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Categories
// =============================================================================

#[tokio::test]
async fn test_category_detail_lists_posts() {
    let Some(pool) = test_pool().await else { return };
    let app = create_test_app(pool.clone(), "test");
    let (_, category_id, post_id) = setup_fixture(&pool).await;

    let slug: String = sqlx::query_scalar("SELECT slug FROM categories WHERE id = $1")
        .bind(category_id)
        .fetch_one(&pool)
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(make_get_request(&format!("/api/categories/{slug}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["slug"], slug);
    let posts = body["posts"].as_array().unwrap();
    assert!(posts.iter().any(|p| p["id"] == post_id.to_string()));

    let response = app
        .oneshot(make_get_request("/api/categories/no-such-slug"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Administrative surface
// =============================================================================

#[tokio::test]
async fn test_seed_refused_in_production() {
    let Some(pool) = test_pool().await else { return };
    let app = create_test_app(pool, "production");

    for uri in ["/api/admin/seed", "/api/admin/reset"] {
        let response = app
            .clone()
            .oneshot(make_post_request(uri, String::new()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["success"], false);
    }
}

#[tokio::test]
async fn test_admin_stats_requires_key() {
    let Some(pool) = test_pool().await else { return };
    let app = create_test_app(pool, "test");

    let response = app
        .clone()
        .oneshot(make_get_request("/api/admin/stats?key=wrong-key"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(make_get_request(&format!(
            "/api/admin/stats?key={TEST_ADMIN_KEY}"
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert!(body["userCount"].as_i64().unwrap() >= 0);
    assert!(body["voteCount"].as_i64().unwrap() >= 0);
}

// =============================================================================
// User profiles
// =============================================================================

#[tokio::test]
async fn test_user_profile() {
    let Some(pool) = test_pool().await else { return };
    let app = create_test_app(pool.clone(), "test");
    let (user_id, _, _) = setup_fixture(&pool).await;

    let response = app
        .clone()
        .oneshot(make_get_request(&format!("/api/users/{user_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["id"], user_id.to_string());
    assert_eq!(body["name"], "Fixture User");
    assert!(body["email"].as_str().unwrap().ends_with("@example.com"));
    assert!(body["createdAt"].is_string());
    // The stored hash never goes over the wire
    assert!(body.get("password_hash").is_none());
    assert!(body.get("passwordHash").is_none());

    let response = app
        .oneshot(make_get_request(&format!("/api/users/{}", Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
