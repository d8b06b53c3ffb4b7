//! HTTP Server
//!
//! HTML pages and a small JSON API, built with Axum.
//!
//! # Endpoints
//!
//! ## Pages
//! - `GET /` - Home
//! - `GET /about` - About
//! - `GET /dashboard` - Health dashboard
//! - `GET /contact` - Contact form
//! - `POST /contact` - Submit the contact form
//!
//! ## JSON API
//! - `GET /api/v1/pages` - Navigator pages
//! - `GET /api/v1/calories` - Calorie feedback
//! - `GET /api/v1/hydration` - Hydration feedback
//! - `GET /api/v1/steps` - Step feedback
//! - `GET /api/v1/steps/weekly` - Weekly step sample
//! - `POST /api/v1/contact` - Validate a contact submission
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,no_run
//! use wellness::api::{serve, AppState};
//! use wellness::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     serve(AppState::new(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route("/", get(routes::pages::home))
        .route("/about", get(routes::pages::about))
        .route("/dashboard", get(routes::pages::dashboard))
        .route(
            "/contact",
            get(routes::pages::contact_form).post(routes::pages::contact_submit),
        );

    let api_routes = Router::new()
        .route("/pages", get(routes::trackers::list_pages))
        .route("/calories", get(routes::trackers::calories))
        .route("/hydration", get(routes::trackers::hydration))
        .route("/steps", get(routes::trackers::steps))
        .route("/steps/weekly", get(routes::trackers::weekly))
        .route("/contact", post(routes::contact::submit))
        .fallback(routes::trackers::not_found);

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let timeout = Duration::from_secs(state.config.server.request_timeout_secs);
    let shared_state = Arc::new(state);

    Router::new()
        .merge(page_routes)
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback(routes::pages::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.server.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Wellness listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Wellness shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
