//! Data Management proxy routes
//!
//! Each handler forwards to the APS client and relays the JSON body
//! verbatim. Authentication is enforced inside the client, so an expired or
//! absent session answers 401 without an upstream call.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::Value;

use crate::context::AppContext;
use crate::error::AppResult;

pub fn router() -> Router<Arc<AppContext>> {
    Router::new()
        .route("/hubs", get(hubs))
        .route("/hubs/{hub_id}/projects", get(projects))
        .route("/projects/{project_id}/topFolders", get(top_folders))
        .route("/projects/{project_id}/folders/{folder_id}/contents", get(folder_contents))
}

async fn hubs(State(ctx): State<Arc<AppContext>>) -> AppResult<Json<Value>> {
    Ok(Json(ctx.aps.get_hubs().await?))
}

async fn projects(
    State(ctx): State<Arc<AppContext>>,
    Path(hub_id): Path<String>,
) -> AppResult<Json<Value>> {
    Ok(Json(ctx.aps.get_projects(&hub_id).await?))
}

async fn top_folders(
    State(ctx): State<Arc<AppContext>>,
    Path(project_id): Path<String>,
) -> AppResult<Json<Value>> {
    Ok(Json(ctx.aps.get_top_folders(&project_id).await?))
}

async fn folder_contents(
    State(ctx): State<Arc<AppContext>>,
    Path((project_id, folder_id)): Path<(String, String)>,
) -> AppResult<Json<Value>> {
    Ok(Json(ctx.aps.get_folder_contents(&project_id, &folder_id).await?))
}
