use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;

use super::model::{MessageResponse, SetRoleDto};
use super::service::UserService;
use crate::middleware::auth::AdminUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Update a user's role (Admin only)
#[utoipa::path(
    put,
    path = "/api/users/{id}/role",
    params(("id" = i64, Path, description = "Target user ID")),
    request_body = SetRoleDto,
    responses(
        (status = 200, description = "Role updated", body = MessageResponse),
        (status = 400, description = "Invalid role or self-targeted change"),
        (status = 401, description = "Missing credentials"),
        (status = 403, description = "Not an administrator")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn set_user_role(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<SetRoleDto>,
) -> Result<Json<MessageResponse>, AppError> {
    UserService::set_role(&state.db, admin.user_id()?, id, dto.role).await?;
    Ok(Json(MessageResponse {
        message: "Role updated successfully".to_string(),
    }))
}

/// Delete a user (Admin only)
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "Target user ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Self-targeted delete"),
        (status = 403, description = "Not an administrator"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    UserService::delete_user(&state.db, admin.user_id()?, id).await?;
    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}
