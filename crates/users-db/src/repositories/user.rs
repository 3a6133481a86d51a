//! PostgreSQL implementation of UserStore / UserRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use tracing::{debug, instrument};

use users_core::entities::{NewUser, User};
use users_core::traits::{RepoResult, UserQuery, UserRepository, UserStore};

use crate::mappers::UserUpdate;
use crate::models::{UserModel, USER_COLUMNS};

use super::error::{map_db_error, user_not_found};

/// PostgreSQL-backed user store
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Create a new PgUserStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    #[instrument(skip(self))]
    async fn begin(&self) -> RepoResult<Box<dyn UserRepository>> {
        let tx = self.pool.begin().await.map_err(map_db_error)?;
        Ok(Box::new(PgUserRepository { tx }))
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}

/// One PostgreSQL transaction over the users table.
///
/// Dropping it without `commit` rolls the transaction back and
/// returns the connection to the pool.
pub struct PgUserRepository {
    tx: Transaction<'static, Postgres>,
}

/// Build the SELECT for a query; rows come back in id order
fn select_query(query: &UserQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {USER_COLUMNS} FROM users WHERE TRUE"));

    if let Some(id) = query.id {
        builder.push(" AND id = ").push_bind(id.into_inner());
    }
    if let Some(email) = &query.email {
        builder.push(" AND email = ").push_bind(email.clone());
    }
    if !query.include_deleted {
        builder.push(" AND is_deleted = FALSE");
    }

    builder.push(" ORDER BY id");
    builder
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find(&mut self, query: &UserQuery) -> RepoResult<Vec<User>> {
        let rows = select_query(query)
            .build_query_as::<UserModel>()
            .fetch_all(&mut *self.tx)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn insert(&mut self, user: NewUser) -> RepoResult<User> {
        let row = sqlx::query_as::<_, UserModel>(&format!(
            "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING {USER_COLUMNS}"
        ))
        .bind(&user.name)
        .bind(&user.email)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(User::from(row))
    }

    #[instrument(skip(self), fields(user_id = %user.id))]
    async fn update(&mut self, user: &User) -> RepoResult<()> {
        let values = UserUpdate::new(user);
        let result = sqlx::query(
            r"
            UPDATE users
            SET name = $2, email = $3, is_active = $4, is_deleted = $5
            WHERE id = $1
            ",
        )
        .bind(values.id)
        .bind(values.name)
        .bind(values.email)
        .bind(values.is_active)
        .bind(values.is_deleted)
        .execute(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(user.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn commit(self: Box<Self>) -> RepoResult<()> {
        self.tx.commit().await.map_err(map_db_error)?;
        debug!("transaction committed");
        Ok(())
    }
}
