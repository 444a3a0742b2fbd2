//! GraphQL relay route
//!
//! Accepts `{query, variables}` from the frontend and forwards it to the
//! AEC Data Model endpoint unmodified. The response, including any `errors`
//! member, passes through verbatim.

use std::sync::Arc;

use aecdash_domain::AecError;
use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Deserialize)]
pub struct GraphQlRequest {
    #[serde(default)]
    query: String,
    #[serde(default)]
    variables: Value,
}

/// POST /api/graphql
pub async fn execute(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<GraphQlRequest>,
) -> AppResult<Json<Value>> {
    if request.query.trim().is_empty() {
        return Err(AecError::InvalidInput("Missing GraphQL query".to_string()).into());
    }

    let body = ctx.graphql.execute(&request.query, request.variables).await?;
    Ok(Json(body))
}
