//! polypdf-server
//!
//! HTTP surface: `GET /generate-pdf` renders the configured template in the
//! locale picked from `accept-language`.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the router with all routes and layers attached.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/generate-pdf",
            get(routes::pdf::generate_pdf).route_layer(axum_mw::from_fn_with_state(
                state.clone(),
                middleware::locale::resolve_locale,
            )),
        )
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
