//! Conversions between DTOs and domain types

use users_core::{NewUser, User, UserPatch};

use super::requests::{CreateUserRequest, UpdateUserRequest};
use super::responses::UserResponse;

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
            is_active: user.is_active,
        }
    }
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser::new(request.name, &request.email)
    }
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(request: UpdateUserRequest) -> Self {
        UserPatch::new(request.name, request.email.as_deref())
    }
}
