#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use quill::router::init_router;
use quill::state::AppState;
use quill_auth::{TokenService, hash_password};
use serde_json::Value;
use sqlx::PgPool;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const TEST_SECRET: &str = "integration-test-signing-secret";
pub const TEST_PASSWORD: &str = "testpass123";

pub fn test_tokens() -> TokenService {
    TokenService::new(TEST_SECRET, 24)
}

pub fn setup_test_app(pool: PgPool) -> Router {
    init_router(AppState::new(pool, test_tokens()))
}

pub struct TestUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub token: String,
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Unique per call within a test binary.
pub fn unique_name(prefix: &str) -> String {
    format!("{}_{}", prefix, COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Inserts a user directly and issues a token for it.
pub async fn create_test_user(pool: &PgPool, prefix: &str) -> TestUser {
    let username = unique_name(prefix);
    let email = format!("{}@test.com", username);
    let hashed = hash_password(TEST_PASSWORD).unwrap();

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (username, email, password) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&username)
    .bind(&email)
    .bind(&hashed)
    .fetch_one(pool)
    .await
    .unwrap();

    let token = test_tokens().issue_default(id, &username).unwrap();

    TestUser {
        id,
        username,
        email,
        token,
    }
}

pub async fn create_test_post(pool: &PgPool, user_id: i64, title: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO posts (title, content, user_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(title)
    .bind("Some content")
    .bind(user_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}
