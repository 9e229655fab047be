use axum::{
    Router,
    routing::{get, post, put},
};

use super::controller::{get_me, login_user, register_user, update_profile};
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login_user))
        .route("/me", get(get_me))
        .route("/profile", put(update_profile))
}
