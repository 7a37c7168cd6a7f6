//! Credits page server
//!
//! Serves the credits page, the compiled scroller bundle and the roster
//! REST and WebSocket APIs.

pub mod messages;
pub mod rest;
pub mod websocket;

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::AppState;

/// Create the server router
pub fn create_router(state: Arc<AppState>) -> Router {
    let pkg_dir = ServeDir::new(&state.config.server.pkg_dir);
    let static_dir = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        // Credits page
        .route("/", get(rest::credits_page))
        // Health check
        .route("/health", get(rest::health))
        // Server info
        .route("/api/info", get(rest::node_info))
        // WebSocket endpoint
        .route("/ws", get(websocket::ws_handler))
        // Roster endpoints
        .route("/api/credits", get(rest::get_credits).delete(rest::clear_credits))
        .route("/api/credits/:category", post(rest::add_credit))
        .route("/api/credits/:category/:name", delete(rest::remove_credit))
        // Scroll computation
        .route("/api/scroll", get(rest::scroll_plan))
        // Scroller bundle and static assets
        .nest_service("/pkg", pkg_dir)
        .nest_service("/static", static_dir)
        // CORS for overlay tools
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
