//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    pub is_deleted: bool,
}

/// Column list shared by every SELECT and RETURNING clause
pub(crate) const USER_COLUMNS: &str = "id, name, email, created_at, is_active, is_deleted";
