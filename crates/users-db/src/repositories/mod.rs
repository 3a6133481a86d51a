//! Repository implementations
//!
//! Storage collaborators for the user service. Both implement
//! `UserStore` and hand out one `UserRepository` transaction per call.

mod error;
mod memory;
mod user;

pub use memory::MemoryUserStore;
pub use user::{PgUserRepository, PgUserStore};
