//! Idempotent creation of the users table

use sqlx::PgPool;
use tracing::info;

/// No unique index on email: uniqueness is checked by the service on create
/// only, and updates are allowed to introduce duplicates.
const CREATE_USERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        id          BIGSERIAL PRIMARY KEY,
        name        TEXT        NOT NULL,
        email       TEXT        NOT NULL,
        created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        is_active   BOOLEAN     NOT NULL DEFAULT TRUE,
        is_deleted  BOOLEAN     NOT NULL DEFAULT FALSE
    )
";

const CREATE_EMAIL_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_users_email ON users (email)
";

/// Create the users table and its lookup index if they do not exist yet
pub async fn bootstrap_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_EMAIL_INDEX).execute(pool).await?;
    info!("users table ready");
    Ok(())
}
