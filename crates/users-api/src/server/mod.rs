//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use users_common::{AppConfig, AppError, StorageBackend};
use users_core::UserStore;
use users_db::{bootstrap_schema, create_pool, DatabaseConfig, MemoryUserStore, PgUserStore};
use users_service::ServiceContext;

use crate::middleware::apply_middleware_with_config;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware_with_config(router, state.config());
    router.with_state(state)
}

/// Initialize the storage backend and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let user_store = create_user_store(&config).await?;
    Ok(AppState::new(ServiceContext::new(user_store), config))
}

async fn create_user_store(config: &AppConfig) -> Result<Arc<dyn UserStore>, AppError> {
    match config.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory user store");
            Ok(Arc::new(MemoryUserStore::new()))
        }
        StorageBackend::Postgres => {
            let url = config
                .database
                .url
                .as_deref()
                .ok_or_else(|| AppError::Config("DATABASE_URL is not set".to_string()))?;

            info!("Connecting to PostgreSQL...");
            let db_config = DatabaseConfig::new(url).with_connections(
                config.database.min_connections,
                config.database.max_connections,
            );
            let pool = create_pool(&db_config)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            if config.database.bootstrap_schema {
                bootstrap_schema(&pool)
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
            }

            Ok(Arc::new(PgUserStore::new(pool)))
        }
    }
}

/// Run the HTTP server on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener.local_addr().map_err(AppError::internal)?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(AppError::internal)?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}
