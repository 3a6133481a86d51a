//! Storage ports

mod repositories;

pub use repositories::{RepoResult, UserQuery, UserRepository, UserStore};
