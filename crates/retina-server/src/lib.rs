//! retina-server
//!
//! Interaction controller, per-session record stores, configuration and the
//! JSON HTTP surface for the patient-education generator.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod controller;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;

use state::AppState;

/// Assemble the HTTP router over shared application state.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/options", get(routes::options::form_options))
        // Sessions
        .route("/sessions", post(routes::sessions::create_session))
        .route("/sessions/{id}", delete(routes::sessions::end_session))
        // Generate flow
        .route("/sessions/{id}/generate", post(routes::generate::generate))
        .route("/content/download", post(routes::generate::download_content))
        // Evaluate flow
        .route("/sessions/{id}/metrics", get(routes::records::list_metrics))
        .route(
            "/sessions/{id}/evaluations",
            get(routes::records::list_evaluations).post(routes::records::submit_evaluation),
        )
        // Export
        .route("/sessions/{id}/export", post(routes::export::export_all))
        .route(
            "/sessions/{id}/export/metrics.csv",
            get(routes::export::download_metrics),
        )
        .route(
            "/sessions/{id}/export/evaluations.csv",
            get(routes::export::download_evaluations),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
