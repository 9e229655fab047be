use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use super::model::{AddFavoriteResponse, CheckFavoriteResponse, FavoritesResponse};
use super::service::FavoriteService;
use crate::middleware::auth::AuthUser;
use crate::modules::users::model::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// List the authenticated user's favorites
#[utoipa::path(
    get,
    path = "/api/favorites",
    responses(
        (status = 200, description = "Favorited courses, newest first", body = FavoritesResponse),
        (status = 401, description = "Missing credentials")
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
#[instrument(skip(state))]
pub async fn list_favorites(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<FavoritesResponse>, AppError> {
    let favorites = FavoriteService::list(&state.db, auth.user_id()?).await?;
    let count = favorites.len();

    Ok(Json(FavoritesResponse { favorites, count }))
}

/// Add a course to favorites
#[utoipa::path(
    post,
    path = "/api/favorites/{course_id}",
    params(("course_id" = i64, Path, description = "Course ID")),
    responses(
        (status = 201, description = "Added to favorites", body = AddFavoriteResponse),
        (status = 400, description = "Already favorited"),
        (status = 404, description = "Course not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
#[instrument(skip(state))]
pub async fn add_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(course_id): Path<i64>,
) -> Result<(StatusCode, Json<AddFavoriteResponse>), AppError> {
    let course = FavoriteService::add(&state.db, auth.user_id()?, course_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(AddFavoriteResponse {
            message: "Added to favorites".to_string(),
            course,
        }),
    ))
}

/// Remove a course from favorites
#[utoipa::path(
    delete,
    path = "/api/favorites/{course_id}",
    params(("course_id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Removed from favorites", body = MessageResponse),
        (status = 404, description = "Course was not favorited")
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
#[instrument(skip(state))]
pub async fn remove_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(course_id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    FavoriteService::remove(&state.db, auth.user_id()?, course_id).await?;

    Ok(Json(MessageResponse {
        message: "Removed from favorites".to_string(),
    }))
}

/// Check whether a course is favorited by the authenticated user
#[utoipa::path(
    get,
    path = "/api/favorites/check/{course_id}",
    params(("course_id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Favorite status", body = CheckFavoriteResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
#[instrument(skip(state))]
pub async fn check_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(course_id): Path<i64>,
) -> Result<Json<CheckFavoriteResponse>, AppError> {
    let is_favorited =
        FavoriteService::is_favorited(&state.db, auth.user_id()?, course_id).await?;

    Ok(Json(CheckFavoriteResponse { is_favorited }))
}
