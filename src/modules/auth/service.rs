use sqlx::SqlitePool;
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::{User, UserRole};
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{AuthResponse, LoginRequest, RegisterRequestDto};

/// Internal row carrying the password hash. Only this service sees it;
/// the hash never reaches a response type.
#[derive(sqlx::FromRow)]
struct UserWithPassword {
    id: i64,
    name: String,
    email: String,
    password: String,
    role: UserRole,
    avatar: String,
    created_at: chrono::NaiveDateTime,
}

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn register_user(
        db: &SqlitePool,
        dto: RegisterRequestDto,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let existing: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?)")
            .bind(&dto.email)
            .fetch_one(db)
            .await?;

        if existing {
            return Err(AppError::conflict("Email already in use"));
        }

        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password, role) VALUES (?, ?, ?, ?)
             RETURNING id, name, email, role, avatar, created_at",
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(UserRole::User)
        .fetch_one(db)
        .await?;

        let token = create_access_token(user.id, &user.email, user.role, jwt_config)?;

        Ok(AuthResponse {
            message: "Registration successful".to_string(),
            token,
            user,
        })
    }

    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login_user(
        db: &SqlitePool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let row = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, name, email, password, role, avatar, created_at
             FROM users WHERE email = ?",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

        if !verify_password(&dto.password, &row.password)? {
            return Err(AppError::InvalidCredentials);
        }

        let token = create_access_token(row.id, &row.email, row.role, jwt_config)?;

        Ok(AuthResponse {
            message: "Login successful".to_string(),
            token,
            user: User {
                id: row.id,
                name: row.name,
                email: row.email,
                role: row.role,
                avatar: row.avatar,
                created_at: row.created_at,
            },
        })
    }
}
