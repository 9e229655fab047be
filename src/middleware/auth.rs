//! Authentication extractors.
//!
//! Three policies wrap the request pipeline:
//!
//! - [`AuthUser`]: bearer token required; 401 when absent, 403 when it
//!   fails verification
//! - [`OptionalAuthUser`]: token attached when present and valid,
//!   otherwise the request continues anonymously
//! - [`AdminUser`]: [`AuthUser`] plus an admin role check

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::modules::auth::model::Claims;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
}

/// Extractor that requires a valid JWT and provides its claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.0
            .sub
            .parse()
            .map_err(|_| AppError::unauthenticated("Invalid user ID in token"))
    }

    pub fn role(&self) -> UserRole {
        self.0.role
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| AppError::unauthenticated("Missing authorization header"))?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}

/// Outcome of an optional authentication attempt.
///
/// `Rejected` is distinct from `Anonymous` so a bad token is an explicit
/// state rather than a silently dropped verification, but both continue
/// the request without an identity.
#[derive(Debug, Clone)]
pub enum AuthAttempt {
    Authenticated(Claims),
    Anonymous,
    Rejected,
}

impl AuthAttempt {
    pub fn claims(&self) -> Option<&Claims> {
        match self {
            Self::Authenticated(claims) => Some(claims),
            Self::Anonymous | Self::Rejected => None,
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.claims().and_then(|c| c.sub.parse().ok())
    }
}

/// Extractor for routes that personalize output when a valid token is
/// present but never require one. Infallible: invalid tokens are
/// recorded as [`AuthAttempt::Rejected`] and the request proceeds.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub AuthAttempt);

impl FromRequestParts<AppState> for OptionalAuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let attempt = match bearer_token(parts) {
            None => AuthAttempt::Anonymous,
            Some(token) => match verify_token(token, &state.jwt_config) {
                Ok(claims) => AuthAttempt::Authenticated(claims),
                Err(_) => AuthAttempt::Rejected,
            },
        };

        Ok(OptionalAuthUser(attempt))
    }
}

/// Extractor for admin-only routes. Composes the required-auth policy,
/// then gates on role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Claims);

impl AdminUser {
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.0
            .sub
            .parse()
            .map_err(|_| AppError::unauthenticated("Invalid user ID in token"))
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;

        if claims.role != UserRole::Admin {
            return Err(AppError::forbidden(
                "Access denied. Administrator privileges required.",
            ));
        }

        Ok(AdminUser(claims))
    }
}
