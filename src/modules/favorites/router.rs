use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{add_favorite, check_favorite, list_favorites, remove_favorite};
use crate::state::AppState;

pub fn init_favorites_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_favorites))
        .route("/{course_id}", post(add_favorite).delete(remove_favorite))
        .route("/check/{course_id}", get(check_favorite))
}
