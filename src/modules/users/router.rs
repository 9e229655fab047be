use axum::{
    Router,
    routing::{delete, put},
};

use super::controller::{delete_user, set_user_role};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/{id}/role", put(set_user_role))
        .route("/{id}", delete(delete_user))
}
