//! Web API surface: router construction and serving.

pub mod errors;
pub mod handlers;
pub mod state;

use axum::routing::{delete, get, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use state::AppState;

/// Build the application router with all task and health routes.
///
/// Static segments (`/tasks/completed`, `/tasks/toggle-all`) take precedence
/// over the `{id}` capture.
pub fn build_router(state: AppState) -> Router {
    // Permissive CORS for the SPA frontend.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            "/tasks",
            get(handlers::tasks::list_tasks).post(handlers::tasks::create_task),
        )
        .route(
            "/tasks/completed",
            delete(handlers::tasks::delete_completed_tasks),
        )
        .route("/tasks/toggle-all", put(handlers::tasks::toggle_all_tasks))
        .route(
            "/tasks/{id}",
            get(handlers::tasks::get_task)
                .put(handlers::tasks::update_task)
                .delete(handlers::tasks::delete_task),
        )
        .route("/tasks/{id}/toggle", put(handlers::tasks::toggle_task))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind and serve the API until the process is stopped.
pub async fn serve(state: AppState, bind_address: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    info!(%bind_address, "todo API listening");

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
