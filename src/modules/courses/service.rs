use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::{
    Course, CourseFilterParams, CourseRow, CourseSort, CourseStatus, CreateCourseDto,
    UpdateCourseDto,
};

/// Appends the shared filter predicate. Used by both the page query and
/// the count query so `total` always reflects the same row set.
fn push_filters<'a>(qb: &mut QueryBuilder<'a, Sqlite>, filters: &'a CourseFilterParams) {
    qb.push(" WHERE status = ").push_bind(CourseStatus::Active);

    if let Some(category) = &filters.category {
        qb.push(" AND category = ").push_bind(category);
    }
    if let Some(brand) = &filters.brand {
        qb.push(" AND brand = ").push_bind(brand);
    }
    if let Some(subject) = &filters.subject {
        qb.push(" AND subject = ").push_bind(subject);
    }
    if let Some(search) = &filters.search {
        // SQLite LIKE is case-insensitive for ASCII.
        let pattern = format!("%{}%", search);
        qb.push(" AND (title LIKE ")
            .push_bind(pattern.clone())
            .push(" OR description LIKE ")
            .push_bind(pattern.clone())
            .push(" OR teacher LIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

pub struct CourseService;

impl CourseService {
    /// Lists active courses matching the filters, plus the unpaginated
    /// total for the same predicate.
    #[instrument(skip(db))]
    pub async fn list(
        db: &SqlitePool,
        filters: &CourseFilterParams,
    ) -> Result<(Vec<Course>, i64), AppError> {
        let mut count_qb = QueryBuilder::new("SELECT COUNT(*) FROM courses");
        push_filters(&mut count_qb, filters);
        let total: i64 = count_qb.build_query_scalar().fetch_one(db).await?;

        let sort = CourseSort::from_query(filters.sort.as_deref());

        let mut qb = QueryBuilder::new("SELECT * FROM courses");
        push_filters(&mut qb, filters);
        qb.push(sort.order_clause());
        qb.push(" LIMIT ")
            .push_bind(filters.pagination.limit())
            .push(" OFFSET ")
            .push_bind(filters.pagination.offset());

        let rows: Vec<CourseRow> = qb.build_query_as().fetch_all(db).await?;

        Ok((rows.into_iter().map(Course::from).collect(), total))
    }

    /// Fetches a course by id regardless of status, so the admin UI can
    /// open inactive courses by direct link.
    pub async fn get_by_id(db: &SqlitePool, id: i64) -> Result<Course, AppError> {
        let row = sqlx::query_as::<_, CourseRow>("SELECT * FROM courses WHERE id = ?")
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found"))?;

        Ok(row.into())
    }

    pub async fn categories(db: &SqlitePool) -> Result<Vec<String>, AppError> {
        let categories = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM courses
             WHERE status = 'active' AND category IS NOT NULL",
        )
        .fetch_all(db)
        .await?;

        Ok(categories)
    }

    #[instrument(skip(db, dto))]
    pub async fn create(db: &SqlitePool, dto: CreateCourseDto) -> Result<i64, AppError> {
        let highlights = serde_json::to_string(&dto.highlights.unwrap_or_default())
            .map_err(|e| AppError::Internal(e.into()))?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO courses (title, description, category, subject, brand, teacher,
                                  teacher_bio, duration, lessons, price, original_price,
                                  image_url, highlights, status)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(&dto.category)
        .bind(&dto.subject)
        .bind(&dto.brand)
        .bind(&dto.teacher)
        .bind(&dto.teacher_bio)
        .bind(&dto.duration)
        .bind(dto.lessons.unwrap_or(0))
        .bind(dto.price)
        .bind(dto.original_price.unwrap_or(dto.price))
        .bind(&dto.image_url)
        .bind(&highlights)
        .bind(CourseStatus::Active)
        .fetch_one(db)
        .await?;

        Ok(id)
    }

    /// Partial update; absent fields keep their stored values. The
    /// merge happens in Rust against the current row, mirroring the
    /// single-writer model where no concurrent mutation can interleave.
    #[instrument(skip(db, dto))]
    pub async fn update(db: &SqlitePool, id: i64, dto: UpdateCourseDto) -> Result<(), AppError> {
        let current = sqlx::query_as::<_, CourseRow>("SELECT * FROM courses WHERE id = ?")
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found"))?;

        let highlights = match dto.highlights {
            Some(list) => {
                serde_json::to_string(&list).map_err(|e| AppError::Internal(e.into()))?
            }
            None => current.highlights,
        };

        sqlx::query(
            "UPDATE courses SET title = ?, description = ?, category = ?, subject = ?,
                                brand = ?, teacher = ?, teacher_bio = ?, duration = ?,
                                lessons = ?, price = ?, original_price = ?, image_url = ?,
                                highlights = ?, status = ?
             WHERE id = ?",
        )
        .bind(dto.title.unwrap_or(current.title))
        .bind(dto.description.or(current.description))
        .bind(dto.category.or(current.category))
        .bind(dto.subject.or(current.subject))
        .bind(dto.brand.or(current.brand))
        .bind(dto.teacher.or(current.teacher))
        .bind(dto.teacher_bio.or(current.teacher_bio))
        .bind(dto.duration.or(current.duration))
        .bind(dto.lessons.unwrap_or(current.lessons))
        .bind(dto.price.unwrap_or(current.price))
        .bind(dto.original_price.unwrap_or(current.original_price))
        .bind(dto.image_url.or(current.image_url))
        .bind(&highlights)
        .bind(dto.status.unwrap_or(current.status))
        .bind(id)
        .execute(db)
        .await?;

        Ok(())
    }

    /// Deletes a course and any favorites referencing it.
    #[instrument(skip(db))]
    pub async fn delete(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM favorites WHERE course_id = ?")
            .bind(id)
            .execute(db)
            .await?;

        let result = sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Course not found"));
        }

        Ok(())
    }
}
