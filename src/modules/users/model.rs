//! User entity, role enum, and admin-facing DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Closed set of account roles. Stored as lowercase text; anything else
/// in a request body is rejected at deserialization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema, Default,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

/// A user as exposed by the API. The password hash is deliberately not
/// part of this struct; queries that need it use a private row type.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar: String,
    pub created_at: chrono::NaiveDateTime,
}

/// DTO for `PUT /api/auth/profile`. Absent fields keep their stored
/// values.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub avatar: Option<String>,
}

/// DTO for `PUT /api/users/{id}/role`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SetRoleDto {
    pub role: UserRole,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
