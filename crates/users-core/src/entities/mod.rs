//! Domain entities - core business objects

mod user;

pub use user::{normalize_email, NewUser, User, UserPatch};
