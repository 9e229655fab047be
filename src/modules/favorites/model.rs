use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::modules::courses::model::{Course, CourseRow};

/// Join row from `favorites` × `courses`.
#[derive(FromRow, Debug)]
pub struct FavoriteCourseRow {
    #[sqlx(flatten)]
    pub course: CourseRow,
    pub favorited_at: chrono::NaiveDateTime,
}

/// A favorited course: all course fields flattened plus the time the
/// favorite was created.
#[derive(Serialize, Debug, ToSchema)]
pub struct FavoriteCourse {
    #[serde(flatten)]
    pub course: Course,
    pub favorited_at: chrono::NaiveDateTime,
}

impl From<FavoriteCourseRow> for FavoriteCourse {
    fn from(row: FavoriteCourseRow) -> Self {
        FavoriteCourse {
            course: row.course.into(),
            favorited_at: row.favorited_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FavoritesResponse {
    pub favorites: Vec<FavoriteCourse>,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AddFavoriteResponse {
    pub message: String,
    /// Title of the favorited course.
    pub course: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckFavoriteResponse {
    pub is_favorited: bool,
}
