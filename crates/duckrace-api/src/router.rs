//! Axum router construction for the roster API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled so the race page can be served from another origin.

use std::path::Path;
use std::sync::Arc;

use axum::routing::{get, patch};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router for the roster API.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `GET|POST /api/ducks` -- list / add ducks
/// - `DELETE|PATCH /api/ducks/{id}` -- remove / update a duck
/// - `GET|PATCH /api/settings` -- read / update race settings
///
/// CORS allows any origin, method, and header.
pub fn build_router(state: Arc<AppState>) -> Router {
    finish(api_routes(), state)
}

/// Build the router and also serve files from `static_dir` under `/static`.
pub fn build_router_with_static(state: Arc<AppState>, static_dir: &Path) -> Router {
    finish(
        api_routes().nest_service("/static", ServeDir::new(static_dir)),
        state,
    )
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // Roster
        .route(
            "/api/ducks",
            get(handlers::list_ducks).post(handlers::add_duck),
        )
        .route(
            "/api/ducks/{id}",
            patch(handlers::update_duck).delete(handlers::remove_duck),
        )
        // Settings
        .route(
            "/api/settings",
            get(handlers::get_settings).patch(handlers::update_settings),
        )
}

fn finish(routes: Router<Arc<AppState>>, state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
