//! Entity to model mappers
//!
//! - `From<UserModel> for User`: convert database rows to domain objects
//! - `UserUpdate`: the mutable columns of an entity, ready to bind

mod user;

pub use user::UserUpdate;
