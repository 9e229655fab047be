use sqlx::SqlitePool;
use tracing::instrument;

use crate::modules::users::model::{UpdateProfileDto, User, UserRole};
use crate::utils::errors::AppError;

pub struct UserService;

impl UserService {
    pub async fn get_user(db: &SqlitePool, id: i64) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, avatar, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

        Ok(user)
    }

    /// Partial profile update; unspecified fields retain their previous
    /// values.
    #[instrument(skip(db))]
    pub async fn update_profile(
        db: &SqlitePool,
        user_id: i64,
        dto: UpdateProfileDto,
    ) -> Result<(), AppError> {
        let current = Self::get_user(db, user_id).await?;

        sqlx::query("UPDATE users SET name = ?, avatar = ? WHERE id = ?")
            .bind(dto.name.unwrap_or(current.name))
            .bind(dto.avatar.unwrap_or(current.avatar))
            .bind(user_id)
            .execute(db)
            .await?;

        Ok(())
    }

    /// Changes another user's role. Admins cannot change their own role,
    /// which guarantees at least one admin always remains.
    #[instrument(skip(db))]
    pub async fn set_role(
        db: &SqlitePool,
        admin_id: i64,
        target_id: i64,
        role: UserRole,
    ) -> Result<(), AppError> {
        if target_id == admin_id {
            return Err(AppError::SelfModificationForbidden(
                "Cannot change your own role".to_string(),
            ));
        }

        sqlx::query("UPDATE users SET role = ? WHERE id = ?")
            .bind(role)
            .bind(target_id)
            .execute(db)
            .await?;

        Ok(())
    }

    /// Deletes a user and their favorites. The favorites delete runs
    /// first so the relation never outlives its owner even if the
    /// foreign-key pragma is off for this connection.
    #[instrument(skip(db))]
    pub async fn delete_user(
        db: &SqlitePool,
        admin_id: i64,
        target_id: i64,
    ) -> Result<(), AppError> {
        if target_id == admin_id {
            return Err(AppError::SelfModificationForbidden(
                "Cannot delete your own account".to_string(),
            ));
        }

        sqlx::query("DELETE FROM favorites WHERE user_id = ?")
            .bind(target_id)
            .execute(db)
            .await?;

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(target_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("User not found"));
        }

        Ok(())
    }
}
