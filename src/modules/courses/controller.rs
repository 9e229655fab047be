use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracing::instrument;

use super::model::{
    CategoriesResponse, CourseDetailResponse, CourseFilterParams, CourseListResponse,
    CreateCourseDto, CreateCourseResponse, UpdateCourseDto,
};
use super::service::CourseService;
use crate::middleware::auth::{AdminUser, OptionalAuthUser};
use crate::modules::favorites::service::FavoriteService;
use crate::modules::users::model::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List active courses with filters, sorting, and pagination
#[utoipa::path(
    get,
    path = "/api/courses",
    params(
        ("category" = Option<String>, Query, description = "Exact category match"),
        ("brand" = Option<String>, Query, description = "Exact brand match"),
        ("subject" = Option<String>, Query, description = "Exact subject match"),
        ("search" = Option<String>, Query, description = "Substring match over title, description, teacher"),
        ("sort" = Option<String>, Query, description = "price_asc | price_desc | rating | popular | newest"),
        ("limit" = Option<i64>, Query, description = "Page size, default 50"),
        ("offset" = Option<i64>, Query, description = "Page offset, default 0")
    ),
    responses(
        (status = 200, description = "Matching courses and total", body = CourseListResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state, _auth))]
pub async fn list_courses(
    State(state): State<AppState>,
    // auth is optional here and the listing is not personalized, but the
    // extractor keeps a bad token from behaving differently than on the
    // detail route
    _auth: OptionalAuthUser,
    Query(filters): Query<CourseFilterParams>,
) -> Result<Json<CourseListResponse>, AppError> {
    let (courses, total) = CourseService::list(&state.db, &filters).await?;

    Ok(Json(CourseListResponse {
        courses,
        total,
        limit: filters.pagination.limit(),
        offset: filters.pagination.offset(),
    }))
}

/// List distinct categories of active courses
#[utoipa::path(
    get,
    path = "/api/courses/categories/list",
    responses(
        (status = 200, description = "Distinct categories", body = CategoriesResponse)
    ),
    tag = "Courses"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = CourseService::categories(&state.db).await?;
    Ok(Json(CategoriesResponse { categories }))
}

/// Get a single course; reports whether the caller has favorited it
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course detail", body = CourseDetailResponse),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses"
)]
#[instrument(skip(state, auth))]
pub async fn get_course(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(id): Path<i64>,
) -> Result<Json<CourseDetailResponse>, AppError> {
    let course = CourseService::get_by_id(&state.db, id).await?;

    let is_favorited = match auth.0.user_id() {
        Some(user_id) => FavoriteService::is_favorited(&state.db, user_id, course.id).await?,
        None => false,
    };

    Ok(Json(CourseDetailResponse {
        course,
        is_favorited,
    }))
}

/// Create a course (Admin only)
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created", body = CreateCourseResponse),
        (status = 400, description = "Missing title or price"),
        (status = 403, description = "Not an administrator")
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, dto))]
pub async fn create_course(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<(StatusCode, Json<CreateCourseResponse>), AppError> {
    let course_id = CourseService::create(&state.db, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateCourseResponse {
            message: "Course created successfully".to_string(),
            course_id,
        }),
    ))
}

/// Update a course (Admin only)
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(("id" = i64, Path, description = "Course ID")),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated", body = MessageResponse),
        (status = 403, description = "Not an administrator"),
        (status = 404, description = "Course not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, dto))]
pub async fn update_course(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateCourseDto>,
) -> Result<Json<MessageResponse>, AppError> {
    CourseService::update(&state.db, id, dto).await?;
    Ok(Json(MessageResponse {
        message: "Course updated successfully".to_string(),
    }))
}

/// Delete a course (Admin only)
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course deleted", body = MessageResponse),
        (status = 403, description = "Not an administrator"),
        (status = 404, description = "Course not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn delete_course(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    CourseService::delete(&state.db, id).await?;
    Ok(Json(MessageResponse {
        message: "Course deleted successfully".to_string(),
    }))
}
