//! CLI commands run through the main binary.

use sqlx::SqlitePool;

use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

/// Creates an admin account directly, bypassing registration (which
/// only ever produces `user`-role accounts).
pub async fn create_admin(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), AppError> {
    if password.len() < 6 {
        return Err(AppError::validation(
            "Password must be at least 6 characters",
        ));
    }

    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?)")
        .bind(email)
        .fetch_one(pool)
        .await?;

    if exists {
        return Err(AppError::conflict("Email already in use"));
    }

    let hashed = hash_password(password)?;

    sqlx::query("INSERT INTO users (name, email, password, role, avatar) VALUES (?, ?, ?, ?, '👑')")
        .bind(name)
        .bind(email)
        .bind(&hashed)
        .bind(UserRole::Admin)
        .execute(pool)
        .await?;

    Ok(())
}
