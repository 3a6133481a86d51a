//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, users};
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().merge(health_routes()).merge(user_routes())
}

/// Liveness and readiness routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health/ready", get(health::readiness_check))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::create_user).get(users::list_users))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/users/:id/toggle-active", get(users::toggle_active))
}
