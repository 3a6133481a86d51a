//! User handlers
//!
//! Endpoints for creating, reading, updating, soft-deleting and toggling users.

use axum::{extract::State, Json};
use users_service::{
    CreateUserRequest, MessageResponse, ToggleActiveResponse, UpdateUserRequest, UserResponse,
    UserService,
};

use crate::extractors::{UserIdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Create a user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let user = service.create_user(request).await?;
    Ok(Json(user))
}

/// List users that are not soft deleted
///
/// GET /users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Get a user by ID
///
/// GET /users/:id
pub async fn get_user(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let user = service.get_user(user_id).await?;
    Ok(Json(user))
}

/// Partially update a user
///
/// PUT /users/:id
pub async fn update_user(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let user = service.update_user(user_id, request).await?;
    Ok(Json(user))
}

/// Soft delete a user
///
/// DELETE /users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = UserService::new(state.service_context());
    let message = service.delete_user(user_id).await?;
    Ok(Json(message))
}

/// Flip the active flag
///
/// GET /users/:id/toggle-active
pub async fn toggle_active(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> ApiResult<Json<ToggleActiveResponse>> {
    let service = UserService::new(state.service_context());
    let toggled = service.toggle_active(user_id).await?;
    Ok(Json(toggled))
}
