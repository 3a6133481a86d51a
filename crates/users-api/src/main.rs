//! User registry API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p users-api
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env` file.

use tracing::{error, info};
use users_common::{try_init_tracing_with_config, AppConfig, AppResult, TracingConfig};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, code = e.error_code(), "Server failed to start");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let config = AppConfig::from_env()?;

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        backend = ?config.storage.backend,
        address = %config.api.address(),
        "Configuration loaded"
    );

    users_api::run(config).await
}
