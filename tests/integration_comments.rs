mod common;

use axum::http::StatusCode;
use common::{create_test_post, create_test_user, read_json, request, setup_test_app};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

async fn insert_comment(pool: &PgPool, user_id: i64, post_id: i64, content: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO comments (content, user_id, post_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(content)
    .bind(user_id)
    .bind(post_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_comment(pool: PgPool) {
    let author = create_test_user(&pool, "poster").await;
    let commenter = create_test_user(&pool, "commenter").await;
    let post_id = create_test_post(&pool, author.id, "Discuss").await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(request(
            "POST",
            &format!("/api/posts/{}/comments", post_id),
            Some(&commenter.token),
            Some(json!({ "content": "Great read" })),
        ))
        .await
        .unwrap();
    let (status, body) = read_json(response).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["content"], "Great read");
    assert_eq!(body["post_id"], post_id);
    assert_eq!(body["user_id"], commenter.id);
    assert_eq!(body["username"], commenter.username);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_comment_on_missing_post(pool: PgPool) {
    let user = create_test_user(&pool, "lost").await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(request(
            "POST",
            "/api/posts/999999/comments",
            Some(&user.token),
            Some(json!({ "content": "Hello?" })),
        ))
        .await
        .unwrap();
    let (status, body) = read_json(response).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Post not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_comment_validation(pool: PgPool) {
    let user = create_test_user(&pool, "verbose").await;
    let post_id = create_test_post(&pool, user.id, "Limits").await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(request(
            "POST",
            &format!("/api/posts/{}/comments", post_id),
            Some(&user.token),
            Some(json!({ "content": "x".repeat(1001) })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_comments(pool: PgPool) {
    let user = create_test_user(&pool, "chatty").await;
    let post_id = create_test_post(&pool, user.id, "Thread").await;
    let other_post = create_test_post(&pool, user.id, "Elsewhere").await;
    insert_comment(&pool, user.id, post_id, "first").await;
    insert_comment(&pool, user.id, post_id, "second").await;
    insert_comment(&pool, user.id, other_post, "unrelated").await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(request(
            "GET",
            &format!("/api/posts/{}/comments", post_id),
            None,
            None,
        ))
        .await
        .unwrap();
    let (status, body) = read_json(response).await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["content"], "second");
    assert_eq!(data[1]["content"], "first");
    assert_eq!(body["meta"]["total"], 2);
    assert_eq!(body["meta"]["has_more"], false);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_comments_missing_post(pool: PgPool) {
    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(request("GET", "/api/posts/999999/comments", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(request("GET", "/api/posts/abc/comments", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_other_users_comment_forbidden(pool: PgPool) {
    let author = create_test_user(&pool, "post_author").await;
    let commenter = create_test_user(&pool, "comment_author").await;
    let post_id = create_test_post(&pool, author.id, "Moderated").await;
    let comment_id = insert_comment(&pool, commenter.id, post_id, "mine").await;
    let app = setup_test_app(pool.clone());

    // Owning the post does not grant rights over its comments.
    let response = app
        .oneshot(request(
            "DELETE",
            &format!("/api/posts/{}/comments/{}", post_id, comment_id),
            Some(&author.token),
            None,
        ))
        .await
        .unwrap();
    let (status, body) = read_json(response).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "You can only delete your own comments");

    let deleted: bool =
        sqlx::query_scalar("SELECT deleted_at IS NOT NULL FROM comments WHERE id = $1")
            .bind(comment_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(!deleted);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_own_comment(pool: PgPool) {
    let user = create_test_user(&pool, "retractor").await;
    let post_id = create_test_post(&pool, user.id, "Oops").await;
    let comment_id = insert_comment(&pool, user.id, post_id, "regret").await;
    let app = setup_test_app(pool);

    let uri = format!("/api/posts/{}/comments/{}", post_id, comment_id);
    let response = app
        .clone()
        .oneshot(request("DELETE", &uri, Some(&user.token), None))
        .await
        .unwrap();
    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Comment deleted successfully");

    let response = app
        .clone()
        .oneshot(request("DELETE", &uri, Some(&user.token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(request(
            "GET",
            &format!("/api/posts/{}/comments", post_id),
            None,
            None,
        ))
        .await
        .unwrap();
    let (_, body) = read_json(response).await;
    assert_eq!(body["meta"]["total"], 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_comments_hidden_once_post_deleted(pool: PgPool) {
    let user = create_test_user(&pool, "archivist").await;
    let post_id = create_test_post(&pool, user.id, "Gone soon").await;
    insert_comment(&pool, user.id, post_id, "still here").await;
    sqlx::query("UPDATE posts SET deleted_at = NOW() WHERE id = $1")
        .bind(post_id)
        .execute(&pool)
        .await
        .unwrap();
    let app = setup_test_app(pool);

    let response = app
        .oneshot(request(
            "GET",
            &format!("/api/posts/{}/comments", post_id),
            None,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
