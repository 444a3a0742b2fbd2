//! Router assembly
//!
//! Auth routes are mounted twice, under `/api/auth` and `/auth`, so the
//! callback URL registered with APS resolves with or without the `/api`
//! prefix. CORS is restricted to the configured browser client origin.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;

pub mod auth;
pub mod data;
pub mod graphql;
pub mod health;

/// Build the full application router.
pub fn build_router(ctx: Arc<AppContext>) -> Router {
    let cors = cors_layer(&ctx.config.server.client_origin);

    Router::new()
        .nest("/api/auth", auth::router())
        .nest("/auth", auth::router())
        .nest("/api/data", data::router())
        .route("/api/graphql", post(graphql::execute))
        .route("/api/health", get(health::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// CORS restricted to the single configured origin, with credentials.
fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    match HeaderValue::from_str(origin) {
        Ok(value) => layer.allow_origin(value),
        // An unparsable origin leaves CORS closed rather than open
        Err(_) => layer,
    }
}
