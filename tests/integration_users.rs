mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_course, create_test_user, insert_favorite, setup_test_app, token_for};
use http_body_util::BodyExt;
use prephub::modules::courses::model::CourseStatus;
use prephub::modules::users::model::UserRole;
use serde_json::json;
use sqlx::SqlitePool;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn put_role(user_id: i64, token: &str, role: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(format!("/api/users/{user_id}/role"))
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(json!({"role": role}).to_string()))
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_set_role_promotes_user(pool: SqlitePool) {
    let admin_id = create_test_user(&pool, "admin@test.com", "secret123", UserRole::Admin).await;
    let user_id = create_test_user(&pool, "user@test.com", "secret123", UserRole::User).await;
    let token = token_for(admin_id, "admin@test.com", UserRole::Admin);

    let app = setup_test_app(pool.clone());
    let response = app.oneshot(put_role(user_id, &token, "admin")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let role: String = sqlx::query_scalar("SELECT role FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(role, "admin");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_set_own_role_rejected(pool: SqlitePool) {
    let admin_id = create_test_user(&pool, "admin@test.com", "secret123", UserRole::Admin).await;
    let token = token_for(admin_id, "admin@test.com", UserRole::Admin);

    let app = setup_test_app(pool.clone());
    let response = app.oneshot(put_role(admin_id, &token, "user")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Cannot change your own role");

    let role: String = sqlx::query_scalar("SELECT role FROM users WHERE id = ?")
        .bind(admin_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(role, "admin");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_set_role_rejects_unknown_value(pool: SqlitePool) {
    let admin_id = create_test_user(&pool, "admin@test.com", "secret123", UserRole::Admin).await;
    let user_id = create_test_user(&pool, "user@test.com", "secret123", UserRole::User).await;
    let token = token_for(admin_id, "admin@test.com", UserRole::Admin);

    let app = setup_test_app(pool);
    let response = app
        .oneshot(put_role(user_id, &token, "superadmin"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_set_role_on_missing_target_is_a_no_op(pool: SqlitePool) {
    let admin_id = create_test_user(&pool, "admin@test.com", "secret123", UserRole::Admin).await;
    let token = token_for(admin_id, "admin@test.com", UserRole::Admin);

    let app = setup_test_app(pool.clone());
    let response = app.oneshot(put_role(9999, &token, "admin")).await.unwrap();
    // the update matches no row; the contract defines only 200/400 here
    assert_eq!(response.status(), StatusCode::OK);

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(users, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_set_role_requires_admin(pool: SqlitePool) {
    let user_id = create_test_user(&pool, "user@test.com", "secret123", UserRole::User).await;
    let other_id = create_test_user(&pool, "other@test.com", "secret123", UserRole::User).await;
    let token = token_for(user_id, "user@test.com", UserRole::User);

    let app = setup_test_app(pool);
    let response = app.oneshot(put_role(other_id, &token, "admin")).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_user_removes_their_favorites(pool: SqlitePool) {
    let admin_id = create_test_user(&pool, "admin@test.com", "secret123", UserRole::Admin).await;
    let user_id = create_test_user(&pool, "user@test.com", "secret123", UserRole::User).await;
    let course_a = create_test_course(&pool, "GAT Verbal", 100, CourseStatus::Active).await;
    let course_b = create_test_course(&pool, "GAT Math", 200, CourseStatus::Active).await;
    insert_favorite(&pool, user_id, course_a).await;
    insert_favorite(&pool, user_id, course_b).await;
    insert_favorite(&pool, admin_id, course_a).await;
    let token = token_for(admin_id, "admin@test.com", UserRole::Admin);

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/users/{user_id}"))
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(users, 0);

    let orphaned: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM favorites WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(orphaned, 0);

    // unrelated favorites survive
    let kept: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM favorites WHERE user_id = ?")
        .bind(admin_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(kept, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_own_account_rejected(pool: SqlitePool) {
    let admin_id = create_test_user(&pool, "admin@test.com", "secret123", UserRole::Admin).await;
    let token = token_for(admin_id, "admin@test.com", UserRole::Admin);

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/users/{admin_id}"))
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Cannot delete your own account");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_missing_user(pool: SqlitePool) {
    let admin_id = create_test_user(&pool, "admin@test.com", "secret123", UserRole::Admin).await;
    let token = token_for(admin_id, "admin@test.com", UserRole::Admin);

    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("DELETE")
        .uri("/api/users/9999")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_user_requires_admin(pool: SqlitePool) {
    let user_id = create_test_user(&pool, "user@test.com", "secret123", UserRole::User).await;
    let other_id = create_test_user(&pool, "other@test.com", "secret123", UserRole::User).await;
    let token = token_for(user_id, "user@test.com", UserRole::User);

    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/users/{other_id}"))
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
