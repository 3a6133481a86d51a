//! # users-db
//!
//! Storage layer implementing the `UserStore` port from `users-core`.
//!
//! ## Overview
//!
//! - PostgreSQL via SQLx: connection pool, table bootstrap, `FromRow` model,
//!   and a store that opens one transaction per service call
//! - An in-memory store with the same transactional contract, for tests and
//!   local runs without a database
//!
//! ## Usage
//!
//! ```rust,ignore
//! use users_db::{create_pool, DatabaseConfig, PgUserStore};
//! use users_core::UserStore;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::new("postgres://localhost/users")).await?;
//!     let store = PgUserStore::new(pool);
//!     let tx = store.begin().await?;
//!     tx.commit().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{bootstrap_schema, create_pool, DatabaseConfig, PgPool};
pub use repositories::{MemoryUserStore, PgUserRepository, PgUserStore};
