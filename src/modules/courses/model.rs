//! Course entity, catalog filter parameters, and admin DTOs.
//!
//! The `highlights` column is stored as a JSON-encoded string list.
//! That encoding is a store-boundary detail: [`CourseRow`] is the only
//! type that carries the raw text, and the conversion to [`Course`]
//! deserializes it (an empty or unreadable value becomes an empty list,
//! never null).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::utils::pagination::PaginationParams;

/// Closed set of catalog visibility states.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema, Default,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum CourseStatus {
    #[default]
    Active,
    Inactive,
}

/// Raw database row. Private to the store boundary; everything outside
/// the courses/favorites services works with [`Course`].
#[derive(FromRow, Debug, Clone)]
pub struct CourseRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub subject: Option<String>,
    pub brand: Option<String>,
    pub teacher: Option<String>,
    pub teacher_bio: Option<String>,
    pub duration: Option<String>,
    pub lessons: i64,
    pub price: i64,
    pub original_price: i64,
    pub rating: f64,
    pub reviews_count: i64,
    pub students_count: i64,
    pub image_url: Option<String>,
    pub highlights: String,
    pub status: CourseStatus,
    pub created_at: chrono::NaiveDateTime,
}

/// A course as exposed by the API, with `highlights` deserialized.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub subject: Option<String>,
    pub brand: Option<String>,
    pub teacher: Option<String>,
    pub teacher_bio: Option<String>,
    pub duration: Option<String>,
    pub lessons: i64,
    pub price: i64,
    pub original_price: i64,
    pub rating: f64,
    pub reviews_count: i64,
    pub students_count: i64,
    pub image_url: Option<String>,
    pub highlights: Vec<String>,
    pub status: CourseStatus,
    pub created_at: chrono::NaiveDateTime,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Course {
            id: row.id,
            title: row.title,
            description: row.description,
            category: row.category,
            subject: row.subject,
            brand: row.brand,
            teacher: row.teacher,
            teacher_bio: row.teacher_bio,
            duration: row.duration,
            lessons: row.lessons,
            price: row.price,
            original_price: row.original_price,
            rating: row.rating,
            reviews_count: row.reviews_count,
            students_count: row.students_count,
            image_url: row.image_url,
            highlights: serde_json::from_str(&row.highlights).unwrap_or_default(),
            status: row.status,
            created_at: row.created_at,
        }
    }
}

/// Catalog orderings. Each variant maps to a single deterministic
/// column ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseSort {
    PriceAsc,
    PriceDesc,
    Rating,
    Popular,
    #[default]
    Newest,
}

impl CourseSort {
    /// Unset or unrecognized values fall back to `Newest` rather than
    /// erroring; sorting is a presentation preference, not a contract.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("price_asc") => Self::PriceAsc,
            Some("price_desc") => Self::PriceDesc,
            Some("rating") => Self::Rating,
            Some("popular") => Self::Popular,
            _ => Self::Newest,
        }
    }

    pub fn order_clause(&self) -> &'static str {
        match self {
            Self::PriceAsc => " ORDER BY price ASC",
            Self::PriceDesc => " ORDER BY price DESC",
            Self::Rating => " ORDER BY rating DESC",
            Self::Popular => " ORDER BY students_count DESC",
            Self::Newest => " ORDER BY created_at DESC",
        }
    }
}

/// Query parameters for `GET /api/courses`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CourseFilterParams {
    pub category: Option<String>,
    pub brand: Option<String>,
    pub subject: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub price: i64,
    pub description: Option<String>,
    pub category: Option<String>,
    pub subject: Option<String>,
    pub brand: Option<String>,
    pub teacher: Option<String>,
    pub teacher_bio: Option<String>,
    pub duration: Option<String>,
    pub lessons: Option<i64>,
    pub original_price: Option<i64>,
    pub image_url: Option<String>,
    pub highlights: Option<Vec<String>>,
}

/// Partial course update; absent fields keep their stored values.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseDto {
    pub title: Option<String>,
    pub price: Option<i64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub subject: Option<String>,
    pub brand: Option<String>,
    pub teacher: Option<String>,
    pub teacher_bio: Option<String>,
    pub duration: Option<String>,
    pub lessons: Option<i64>,
    pub original_price: Option<i64>,
    pub image_url: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub status: Option<CourseStatus>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseListResponse {
    pub courses: Vec<Course>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetailResponse {
    pub course: Course,
    pub is_favorited: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseResponse {
    pub message: String,
    pub course_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> CourseRow {
        CourseRow {
            id: 1,
            title: "GAT Verbal".to_string(),
            description: None,
            category: None,
            subject: None,
            brand: None,
            teacher: None,
            teacher_bio: None,
            duration: None,
            lessons: 0,
            price: 1500,
            original_price: 1500,
            rating: 0.0,
            reviews_count: 0,
            students_count: 0,
            image_url: None,
            highlights: "[]".to_string(),
            status: CourseStatus::Active,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_highlights_deserialized_from_row() {
        let mut r = row();
        r.highlights = r#"["Mock exams","Weekly homework"]"#.to_string();
        let course: Course = r.into();
        assert_eq!(course.highlights, vec!["Mock exams", "Weekly homework"]);
    }

    #[test]
    fn test_empty_and_corrupt_highlights_become_empty_list() {
        let course: Course = row().into();
        assert!(course.highlights.is_empty());

        let mut r = row();
        r.highlights = "not json".to_string();
        let course: Course = r.into();
        assert!(course.highlights.is_empty());
    }

    #[test]
    fn test_sort_parsing_defaults_to_newest() {
        assert_eq!(CourseSort::from_query(None), CourseSort::Newest);
        assert_eq!(CourseSort::from_query(Some("nonsense")), CourseSort::Newest);
        assert_eq!(
            CourseSort::from_query(Some("price_asc")),
            CourseSort::PriceAsc
        );
        assert_eq!(
            CourseSort::from_query(Some("price_desc")),
            CourseSort::PriceDesc
        );
        assert_eq!(CourseSort::from_query(Some("rating")), CourseSort::Rating);
        assert_eq!(CourseSort::from_query(Some("popular")), CourseSort::Popular);
    }

    #[test]
    fn test_order_clauses_are_single_column() {
        assert_eq!(CourseSort::Newest.order_clause(), " ORDER BY created_at DESC");
        assert_eq!(CourseSort::PriceAsc.order_clause(), " ORDER BY price ASC");
    }
}
