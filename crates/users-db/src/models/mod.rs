//! Database models - SQLx-compatible structs for PostgreSQL tables

mod user;

pub use user::UserModel;
pub(crate) use user::USER_COLUMNS;
