//! Axum router construction for the dashboard API.
//!
//! Assembles all routes (REST + `WebSocket`) into a single [`Router`]
//! with CORS middleware enabled for cross-origin dashboard access.

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the complete Axum router for the dashboard server.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `GET /ws/updates` -- `WebSocket` state update stream
/// - `GET /api/time`, `POST /api/time/multiplier` -- IxTime
/// - `GET /api/countries`, `GET /api/countries/:id` -- country records
/// - `PUT /api/countries/:id/components` -- selection mutation
/// - `GET /api/countries/:id/{effectiveness,tax,stability,intelligence}`
/// - `GET|POST /api/countries/:id/vault` -- vault ledger
/// - `GET /api/notifications`, `POST /api/notifications/:id/read`
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // WebSocket
        .route("/ws/updates", get(ws::ws_updates))
        // Time
        .route("/api/time", get(handlers::get_time))
        .route("/api/time/multiplier", post(handlers::set_multiplier))
        // Countries
        .route("/api/countries", get(handlers::list_countries))
        .route("/api/countries/{id}", get(handlers::get_country))
        .route(
            "/api/countries/{id}/components",
            put(handlers::put_components),
        )
        .route(
            "/api/countries/{id}/effectiveness",
            get(handlers::get_effectiveness),
        )
        .route("/api/countries/{id}/tax", get(handlers::get_tax))
        .route("/api/countries/{id}/stability", get(handlers::get_stability))
        .route(
            "/api/countries/{id}/intelligence",
            get(handlers::get_intelligence),
        )
        .route(
            "/api/countries/{id}/vault",
            get(handlers::get_vault).post(handlers::post_vault),
        )
        // Notifications
        .route("/api/notifications", get(handlers::list_notifications))
        .route(
            "/api/notifications/{id}/read",
            post(handlers::mark_notification_read),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
