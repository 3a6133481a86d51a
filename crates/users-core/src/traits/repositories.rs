//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs and the infrastructure layer
//! provides the implementation. Access is split in two:
//!
//! - [`UserStore`] is long-lived and shared; it hands out one transaction per call.
//! - [`UserRepository`] is that transaction. Reads and writes go through it and
//!   become durable only on [`UserRepository::commit`]. Dropping it without
//!   committing rolls back and releases the underlying connection.

use async_trait::async_trait;

use crate::entities::{NewUser, User};
use crate::error::DomainError;
use crate::value_objects::UserId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Query
// ============================================================================

/// Predicate over stored user rows
///
/// Every present field must match. Soft-deleted rows are skipped unless
/// `include_deleted` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub id: Option<UserId>,
    pub email: Option<String>,
    pub include_deleted: bool,
}

impl UserQuery {
    /// All rows that are not soft deleted
    pub fn visible() -> Self {
        Self::default()
    }

    /// The row with this id, only if it is not soft deleted
    pub fn by_id(id: UserId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// The row with this id, soft deleted or not
    pub fn by_id_any(id: UserId) -> Self {
        Self {
            id: Some(id),
            include_deleted: true,
            ..Self::default()
        }
    }

    /// Rows with this email, soft deleted or not
    pub fn by_email_any(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            include_deleted: true,
            ..Self::default()
        }
    }

    /// Evaluate the predicate against a row
    pub fn matches(&self, user: &User) -> bool {
        if !self.include_deleted && user.is_deleted {
            return false;
        }
        if self.id.is_some_and(|id| id != user.id) {
            return false;
        }
        if self.email.as_deref().is_some_and(|email| email != user.email) {
            return false;
        }
        true
    }
}

// ============================================================================
// User Repository
// ============================================================================

/// A single storage transaction over the users table
#[async_trait]
pub trait UserRepository: Send {
    /// Find all rows matching the query, in storage-native order
    async fn find(&mut self, query: &UserQuery) -> RepoResult<Vec<User>>;

    /// Insert a new row and return it with its generated id and timestamp
    async fn insert(&mut self, user: NewUser) -> RepoResult<User>;

    /// Overwrite the mutable columns of an existing row
    async fn update(&mut self, user: &User) -> RepoResult<()>;

    /// Make all writes in this transaction durable
    async fn commit(self: Box<Self>) -> RepoResult<()>;

    /// Find the first row matching the query
    async fn find_one(&mut self, query: &UserQuery) -> RepoResult<Option<User>> {
        Ok(self.find(query).await?.into_iter().next())
    }
}

/// Factory for per-call user transactions
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Open a new transaction
    async fn begin(&self) -> RepoResult<Box<dyn UserRepository>>;

    /// Check that storage is reachable
    async fn ping(&self) -> RepoResult<()>;
}
