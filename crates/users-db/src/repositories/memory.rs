//! In-memory implementation of UserStore / UserRepository
//!
//! Backs local runs and tests. A transaction holds the table lock for its
//! whole lifetime and works on a staged copy; `commit` swaps the copy in,
//! dropping the transaction discards it.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, instrument};

use users_core::entities::{NewUser, User};
use users_core::traits::{RepoResult, UserQuery, UserRepository, UserStore};
use users_core::value_objects::UserId;

use super::error::user_not_found;

/// Shared in-memory users table
#[derive(Clone, Default)]
pub struct MemoryUserStore {
    rows: Arc<Mutex<Vec<User>>>,
    // Outside the table so rolled-back inserts never hand the same id out twice
    last_id: Arc<AtomicI64>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every committed row, deleted ones included
    pub async fn rows(&self) -> Vec<User> {
        self.rows.lock().await.clone()
    }
}

impl std::fmt::Debug for MemoryUserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryUserStore")
            .field("last_id", &self.last_id.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn begin(&self) -> RepoResult<Box<dyn UserRepository>> {
        let guard = Arc::clone(&self.rows).lock_owned().await;
        let staged = guard.clone();
        Ok(Box::new(MemoryUserRepository {
            guard,
            staged,
            last_id: Arc::clone(&self.last_id),
        }))
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

/// One in-memory transaction
pub struct MemoryUserRepository {
    guard: OwnedMutexGuard<Vec<User>>,
    staged: Vec<User>,
    last_id: Arc<AtomicI64>,
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    #[instrument(skip(self))]
    async fn find(&mut self, query: &UserQuery) -> RepoResult<Vec<User>> {
        Ok(self
            .staged
            .iter()
            .filter(|user| query.matches(user))
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn insert(&mut self, user: NewUser) -> RepoResult<User> {
        let id = UserId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
        let row = User::from_new(id, user, Utc::now());
        self.staged.push(row.clone());
        Ok(row)
    }

    #[instrument(skip(self), fields(user_id = %user.id))]
    async fn update(&mut self, user: &User) -> RepoResult<()> {
        let row = self
            .staged
            .iter_mut()
            .find(|row| row.id == user.id)
            .ok_or_else(|| user_not_found(user.id))?;

        row.name.clone_from(&user.name);
        row.email.clone_from(&user.email);
        row.is_active = user.is_active;
        row.is_deleted = user.is_deleted;
        Ok(())
    }

    async fn commit(self: Box<Self>) -> RepoResult<()> {
        let Self {
            mut guard, staged, ..
        } = *self;
        *guard = staged;
        debug!("transaction committed");
        Ok(())
    }
}
