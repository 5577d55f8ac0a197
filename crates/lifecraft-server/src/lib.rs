pub mod auth;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(routes::health::health))
        // Modules
        .route("/api/modules", get(routes::modules::list_modules))
        .route(
            "/api/modules/progress",
            get(routes::modules::get_progress).post(routes::modules::update_progress),
        )
        .route("/api/modules/{module}/gate", get(routes::modules::get_gate))
        // Journey
        .route(
            "/api/journey",
            get(routes::journey::get_journey).delete(routes::journey::reset_journey),
        )
        .route("/api/journey/next", get(routes::journey::get_next))
        // Enneagram
        .route("/api/enneagram/score", axum::routing::post(routes::enneagram::score))
        .route("/api/enneagram/items", get(routes::enneagram::items))
        .route(
            "/api/enneagram/profiles/{enneagram_type}",
            get(routes::enneagram::profile),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Bind `addr` and serve the API until the process is stopped.
pub async fn serve(app_state: AppState, addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    serve_on(app_state, listener).await
}

/// Serve on a pre-bound listener.
///
/// Lets the caller read the actual port first (useful when binding port 0).
pub async fn serve_on(app_state: AppState, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
    let local = listener.local_addr()?;
    let app = build_router(app_state);

    tracing::info!("LifeCraft API listening on http://{local}");

    axum::serve(listener, app).await?;
    Ok(())
}
