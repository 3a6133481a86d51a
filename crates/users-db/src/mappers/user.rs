//! User entity <-> model mapper

use users_core::entities::User;
use users_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            name: model.name,
            email: model.email,
            created_at: model.created_at,
            is_active: model.is_active,
            is_deleted: model.is_deleted,
        }
    }
}

/// Mutable columns of a user, borrowed for an UPDATE.
/// `id` and `created_at` are never written after insert.
pub struct UserUpdate<'a> {
    pub id: i64,
    pub name: &'a str,
    pub email: &'a str,
    pub is_active: bool,
    pub is_deleted: bool,
}

impl<'a> UserUpdate<'a> {
    pub fn new(user: &'a User) -> Self {
        Self {
            id: user.id.into_inner(),
            name: &user.name,
            email: &user.email,
            is_active: user.is_active,
            is_deleted: user.is_deleted,
        }
    }
}
