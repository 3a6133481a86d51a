//! User service
//!
//! Create, list, fetch, update, soft-delete and toggle-active over the users
//! table. Every method opens one transaction from the store, does at most one
//! read and one write, and commits. Any early return drops the transaction,
//! which rolls it back.

use tracing::{info, instrument, warn};
use users_core::{DomainError, NewUser, UserId, UserPatch, UserQuery};
use validator::Validate;

use crate::dto::{
    CreateUserRequest, MessageResponse, ToggleActiveResponse, UpdateUserRequest, UserResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a user. The email must not match any stored row, deleted or not.
    #[instrument(skip(self, request))]
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        request.validate()?;

        let new_user = NewUser::from(request);
        let mut tx = self.ctx.user_store().begin().await?;

        let existing = tx
            .find_one(&UserQuery::by_email_any(new_user.email.as_str()))
            .await?;
        if existing.is_some() {
            warn!("Rejected user creation with duplicate email");
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let user = tx.insert(new_user).await?;
        tx.commit().await?;

        info!(user_id = %user.id, "User created");
        Ok(UserResponse::from(&user))
    }

    /// List every user that is not soft deleted
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ServiceResult<Vec<UserResponse>> {
        let mut tx = self.ctx.user_store().begin().await?;
        let users = tx.find(&UserQuery::visible()).await?;
        tx.commit().await?;

        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Get a user by ID; soft-deleted users are reported as not found
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: UserId) -> ServiceResult<UserResponse> {
        let mut tx = self.ctx.user_store().begin().await?;
        let user = tx
            .find_one(&UserQuery::by_id(user_id))
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;
        tx.commit().await?;

        Ok(UserResponse::from(&user))
    }

    /// Apply a partial update. Soft-deleted users can still be updated,
    /// and the new email is not checked for uniqueness.
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: UserId,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        request.validate()?;

        let mut tx = self.ctx.user_store().begin().await?;
        let mut user = tx
            .find_one(&UserQuery::by_id_any(user_id))
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        if UserPatch::from(request).apply(&mut user) {
            tx.update(&user).await?;
            info!(user_id = %user_id, "User updated");
        }
        tx.commit().await?;

        Ok(UserResponse::from(&user))
    }

    /// Soft delete a user. Repeating it on a deleted user succeeds again.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: UserId) -> ServiceResult<MessageResponse> {
        let mut tx = self.ctx.user_store().begin().await?;
        let mut user = tx
            .find_one(&UserQuery::by_id_any(user_id))
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        user.mark_deleted();
        tx.update(&user).await?;
        tx.commit().await?;

        info!(user_id = %user_id, "User soft deleted");
        Ok(MessageResponse::user_soft_deleted())
    }

    /// Flip the active flag, deleted users included, and return the new value
    #[instrument(skip(self))]
    pub async fn toggle_active(&self, user_id: UserId) -> ServiceResult<ToggleActiveResponse> {
        let mut tx = self.ctx.user_store().begin().await?;
        let mut user = tx
            .find_one(&UserQuery::by_id_any(user_id))
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let is_active = user.toggle_active();
        tx.update(&user).await?;
        tx.commit().await?;

        info!(user_id = %user_id, is_active, "User active flag toggled");
        Ok(ToggleActiveResponse { is_active })
    }
}
