//! # users-core
//!
//! Domain layer containing the user entity, value objects, storage traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{normalize_email, NewUser, User, UserPatch};
pub use error::DomainError;
pub use traits::{RepoResult, UserQuery, UserRepository, UserStore};
pub use value_objects::{UserId, UserIdParseError};
