use sqlx::SqlitePool;
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::{FavoriteCourse, FavoriteCourseRow};

/// The favorites relation has exactly two states per (user, course)
/// pair: absent and present. `add` and `remove` are the only
/// transitions; `add` on a present pair is a conflict, `remove` on an
/// absent pair is not-found.
pub struct FavoriteService;

impl FavoriteService {
    /// The user's favorited courses, most recently favorited first.
    pub async fn list(db: &SqlitePool, user_id: i64) -> Result<Vec<FavoriteCourse>, AppError> {
        let rows = sqlx::query_as::<_, FavoriteCourseRow>(
            "SELECT c.*, f.created_at AS favorited_at
             FROM favorites f
             JOIN courses c ON f.course_id = c.id
             WHERE f.user_id = ?
             ORDER BY f.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;

        Ok(rows.into_iter().map(FavoriteCourse::from).collect())
    }

    /// Adds a favorite and returns the course title for the response
    /// message.
    #[instrument(skip(db))]
    pub async fn add(db: &SqlitePool, user_id: i64, course_id: i64) -> Result<String, AppError> {
        let title: Option<String> =
            sqlx::query_scalar("SELECT title FROM courses WHERE id = ?")
                .bind(course_id)
                .fetch_optional(db)
                .await?;

        let title = title.ok_or_else(|| AppError::not_found("Course not found"))?;

        if Self::is_favorited(db, user_id, course_id).await? {
            return Err(AppError::conflict("Course is already in favorites"));
        }

        sqlx::query("INSERT INTO favorites (user_id, course_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(course_id)
            .execute(db)
            .await?;

        Ok(title)
    }

    #[instrument(skip(db))]
    pub async fn remove(db: &SqlitePool, user_id: i64, course_id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = ? AND course_id = ?")
            .bind(user_id)
            .bind(course_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Course is not in favorites"));
        }

        Ok(())
    }

    /// Existence check; a missing pair is `false`, never an error.
    pub async fn is_favorited(
        db: &SqlitePool,
        user_id: i64,
        course_id: i64,
    ) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM favorites WHERE user_id = ? AND course_id = ?)",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_one(db)
        .await?;

        Ok(exists)
    }
}
