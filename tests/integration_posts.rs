mod common;

use axum::http::StatusCode;
use common::{create_test_post, create_test_user, read_json, request, setup_test_app};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_post(pool: PgPool) {
    let user = create_test_user(&pool, "author").await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(request(
            "POST",
            "/api/posts",
            Some(&user.token),
            Some(json!({ "title": "Hello", "content": "First post" })),
        ))
        .await
        .unwrap();
    let (status, body) = read_json(response).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "Hello");
    assert_eq!(body["content"], "First post");
    assert_eq!(body["user_id"], user.id);
    assert_eq!(body["username"], user.username);
    assert!(body["created_at"].is_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_post_requires_auth(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(request(
            "POST",
            "/api/posts",
            None,
            Some(json!({ "title": "Hello", "content": "First post" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_posts_paginated_newest_first(pool: PgPool) {
    let user = create_test_user(&pool, "lister").await;
    for i in 1..=3 {
        create_test_post(&pool, user.id, &format!("Post {}", i)).await;
    }
    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(request("GET", "/api/posts?page=1&limit=2", None, None))
        .await
        .unwrap();
    let (status, body) = read_json(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][0]["title"], "Post 3");
    assert_eq!(body["data"][0]["username"], user.username);
    assert_eq!(
        body["meta"],
        json!({ "total": 3, "page": 1, "limit": 2, "has_more": true })
    );

    let response = app
        .oneshot(request("GET", "/api/posts?page=2&limit=2", None, None))
        .await
        .unwrap();
    let (_, body) = read_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["title"], "Post 1");
    assert_eq!(body["meta"]["has_more"], false);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_posts_clamps_limit(pool: PgPool) {
    let app = setup_test_app(pool);

    let response = app
        .oneshot(request("GET", "/api/posts?limit=1000&page=0", None, None))
        .await
        .unwrap();
    let (status, body) = read_json(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["limit"], 100);
    assert_eq!(body["meta"]["page"], 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_post(pool: PgPool) {
    let user = create_test_user(&pool, "reader").await;
    let post_id = create_test_post(&pool, user.id, "Readable").await;
    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(request("GET", &format!("/api/posts/{}", post_id), None, None))
        .await
        .unwrap();
    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], post_id);
    assert_eq!(body["title"], "Readable");

    let response = app
        .clone()
        .oneshot(request("GET", "/api/posts/999999", None, None))
        .await
        .unwrap();
    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Post not found");

    let response = app
        .oneshot(request("GET", "/api/posts/not-a-number", None, None))
        .await
        .unwrap();
    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid post ID");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_own_post(pool: PgPool) {
    let user = create_test_user(&pool, "editor").await;
    let post_id = create_test_post(&pool, user.id, "Before").await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(request(
            "PUT",
            &format!("/api/posts/{}", post_id),
            Some(&user.token),
            Some(json!({ "title": "After", "content": "Edited" })),
        ))
        .await
        .unwrap();
    let (status, body) = read_json(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "After");
    assert_eq!(body["content"], "Edited");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_other_users_post_forbidden(pool: PgPool) {
    let owner = create_test_user(&pool, "owner").await;
    let intruder = create_test_user(&pool, "intruder").await;
    let post_id = create_test_post(&pool, owner.id, "Mine").await;
    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(request(
            "PUT",
            &format!("/api/posts/{}", post_id),
            Some(&intruder.token),
            Some(json!({ "title": "Hijacked", "content": "Hijacked" })),
        ))
        .await
        .unwrap();
    let (status, body) = read_json(response).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "You can only update your own posts");

    let title: String = sqlx::query_scalar("SELECT title FROM posts WHERE id = $1")
        .bind(post_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(title, "Mine");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_post_not_found(pool: PgPool) {
    let user = create_test_user(&pool, "ghost").await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(request(
            "PUT",
            "/api/posts/424242",
            Some(&user.token),
            Some(json!({ "title": "x", "content": "y" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_other_users_post_forbidden(pool: PgPool) {
    let owner = create_test_user(&pool, "keeper").await;
    let intruder = create_test_user(&pool, "deleter").await;
    let post_id = create_test_post(&pool, owner.id, "Keep me").await;
    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(request(
            "DELETE",
            &format!("/api/posts/{}", post_id),
            Some(&intruder.token),
            None,
        ))
        .await
        .unwrap();
    let (status, body) = read_json(response).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "You can only delete your own posts");

    let deleted: bool =
        sqlx::query_scalar("SELECT deleted_at IS NOT NULL FROM posts WHERE id = $1")
            .bind(post_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(!deleted);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_own_post_is_soft(pool: PgPool) {
    let user = create_test_user(&pool, "cleaner").await;
    let post_id = create_test_post(&pool, user.id, "Temporary").await;
    let app = setup_test_app(pool.clone());

    let response = app
        .clone()
        .oneshot(request(
            "DELETE",
            &format!("/api/posts/{}", post_id),
            Some(&user.token),
            None,
        ))
        .await
        .unwrap();
    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Post deleted successfully");

    // The row stays, marked as deleted.
    let deleted: bool =
        sqlx::query_scalar("SELECT deleted_at IS NOT NULL FROM posts WHERE id = $1")
            .bind(post_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(deleted);

    let response = app
        .clone()
        .oneshot(request("GET", &format!("/api/posts/{}", post_id), None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(request("GET", "/api/posts", None, None))
        .await
        .unwrap();
    let (_, body) = read_json(response).await;
    assert_eq!(body["meta"]["total"], 0);
}
