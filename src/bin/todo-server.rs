//! Todo API server entrypoint.
//!
//! Initializes logging, loads configuration from the environment, connects
//! the database pool, applies migrations, and serves the router.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use todo_core::config::TodoConfig;
use todo_core::engine::TaskLifecycleEngine;
use todo_core::logging::init_structured_logging;
use todo_core::store::PgTaskStore;
use todo_core::web::{self, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_structured_logging();

    let config = TodoConfig::from_env()?;
    info!(bind_address = %config.bind_address, "starting todo-server");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    let store = Arc::new(PgTaskStore::new(pool));
    let engine = Arc::new(TaskLifecycleEngine::new(store));

    web::serve(AppState::new(engine), &config.bind_address).await
}
