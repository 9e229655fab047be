#![allow(dead_code)]

use prephub::config::cors::CorsConfig;
use prephub::config::jwt::JwtConfig;
use prephub::modules::courses::model::CourseStatus;
use prephub::modules::users::model::UserRole;
use prephub::router::init_router;
use prephub::state::AppState;
use prephub::utils::jwt::create_access_token;
use prephub::utils::password::hash_password;
use sqlx::SqlitePool;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_expiry: 604800,
    }
}

pub fn setup_test_app(pool: SqlitePool) -> axum::Router {
    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["*".to_string()],
        },
    };
    init_router(state)
}

/// Inserts a user directly and returns its id.
pub async fn create_test_user(
    pool: &SqlitePool,
    email: &str,
    password: &str,
    role: UserRole,
) -> i64 {
    let hashed = hash_password(password).unwrap();

    sqlx::query_scalar(
        "INSERT INTO users (name, email, password, role) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind("Test User")
    .bind(email)
    .bind(hashed)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Issues a token signed with the same config `setup_test_app` uses.
pub fn token_for(user_id: i64, email: &str, role: UserRole) -> String {
    create_access_token(user_id, email, role, &test_jwt_config()).unwrap()
}

/// Inserts a course directly and returns its id.
pub async fn create_test_course(
    pool: &SqlitePool,
    title: &str,
    price: i64,
    status: CourseStatus,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO courses (title, price, original_price, status)
         VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(title)
    .bind(price)
    .bind(price)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a favorite row directly, bypassing the API.
pub async fn insert_favorite(pool: &SqlitePool, user_id: i64, course_id: i64) {
    sqlx::query("INSERT INTO favorites (user_id, course_id) VALUES (?, ?)")
        .bind(user_id)
        .bind(course_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_rows(pool: &SqlitePool, sql: &str, bind: i64) -> i64 {
    sqlx::query_scalar(sql).bind(bind).fetch_one(pool).await.unwrap()
}
