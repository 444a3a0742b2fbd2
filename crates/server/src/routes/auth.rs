//! OAuth login routes
//!
//! Drives the browser-facing half of the authorization-code flow: hand out
//! the provider authorization URL, receive the callback code, expose the
//! current session token to the frontend, and log out.

use std::sync::Arc;

use aecdash_domain::AecError;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::context::AppContext;
use crate::error::AppResult;

pub fn router() -> Router<Arc<AppContext>> {
    Router::new()
        .route("/url", get(authorization_url))
        .route("/callback", get(callback))
        .route("/token", get(session_token))
        .route("/logout", get(logout))
}

/// GET /url: the provider authorization URL for browser redirection.
async fn authorization_url(State(ctx): State<Arc<AppContext>>) -> Json<serde_json::Value> {
    Json(json!({ "url": ctx.auth.authorization_url() }))
}

#[derive(Debug, Deserialize)]
struct CallbackQuery {
    code: Option<String>,
}

/// GET /callback?code=: exchange the authorization code and store the token.
///
/// On success the browser is redirected back to the frontend with
/// `?auth=success`. A failed exchange mutates nothing.
async fn callback(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<CallbackQuery>,
) -> AppResult<Response> {
    let code = query
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AecError::InvalidInput("Missing authorization code".to_string()))?;

    let tokens = ctx.auth.exchange_code(&code).await?;
    ctx.tokens.set(tokens.access_token, tokens.refresh_token, tokens.expires_in).await;

    info!("Authorization code exchanged, session established");

    let location = format!("{}?auth=success", ctx.config.server.client_origin);
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// GET /token: the current session token for the frontend viewer.
///
/// `expiresAt` is epoch milliseconds. Responds 401 when no valid token is
/// held.
async fn session_token(State(ctx): State<Arc<AppContext>>) -> AppResult<Json<serde_json::Value>> {
    let tokens = ctx.tokens.current().await.ok_or(AecError::Unauthenticated)?;

    Ok(Json(json!({
        "accessToken": tokens.access_token,
        "expiresAt": tokens.expires_at.timestamp_millis(),
    })))
}

/// GET /logout: drop the session token.
async fn logout(State(ctx): State<Arc<AppContext>>) -> Json<serde_json::Value> {
    ctx.tokens.clear().await;
    info!("Session cleared");
    Json(json!({ "success": true }))
}
