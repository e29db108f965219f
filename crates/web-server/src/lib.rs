use axum::{routing::get, Router};
use configuration::Settings;
use dashboard::Dashboard;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
// Note: Tracing is handled by the binary that calls `run_server`.

pub mod error;
pub mod handlers;

use crate::error::AppError;

/// The shared application state that all handlers can access.
///
/// The dataset inside is read-only, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Dashboard,
}

impl AppState {
    /// Loads the dataset named in the settings. Any load failure is fatal.
    pub fn load(settings: &Settings) -> Result<Self, AppError> {
        let store = data_store::load_from_dir(&settings.data.directory)?;
        Ok(Self {
            dashboard: Dashboard::new(Arc::new(store), settings.dashboard.clone()),
        })
    }
}

/// Builds the router with every API route and middleware attached.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // --- DEFINE THE APPLICATION ROUTES ---
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/options", get(handlers::get_options))
        .route("/api/overview", get(handlers::get_overview))
        .route("/api/drivers", get(handlers::get_drivers))
        .route("/api/constructors", get(handlers::get_constructors))
        .route("/api/circuits", get(handlers::get_circuits))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// Loads the dataset and serves the dashboard API until the process exits.
pub async fn run_server(settings: &Settings) -> anyhow::Result<()> {
    let state = Arc::new(AppState::load(settings)?);
    let app = build_router(state);

    let addr = settings.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
