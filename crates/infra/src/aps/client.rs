//! APS Data Management client
//!
//! Forwards hub/project/folder listing calls to the APS REST endpoints with
//! the bearer token attached and relays the JSON response verbatim. There is
//! no retry, no backoff, and no circuit breaker: every failure is surfaced
//! directly to the caller as either `Unauthenticated`, `Network`, or
//! `Upstream` with the upstream status and body preserved.

use std::sync::Arc;
use std::time::Duration;

use aecdash_domain::constants::{DEFAULT_APS_BASE_URL, UPSTREAM_TIMEOUT_SECS};
use aecdash_domain::{AecError, Result};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::auth::AccessTokenProvider;

/// Configuration for the APS data client
#[derive(Debug, Clone)]
pub struct ApsClientConfig {
    /// Base URL for APS REST endpoints
    pub base_url: String,
    /// Timeout applied to each outbound request
    pub timeout: Duration,
}

impl Default for ApsClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_APS_BASE_URL.to_string(),
            timeout: Duration::from_secs(UPSTREAM_TIMEOUT_SECS),
        }
    }
}

/// Thin relay to the APS Data Management REST API
pub struct ApsClient {
    http: Client,
    config: ApsClientConfig,
    auth: Arc<dyn AccessTokenProvider>,
}

impl ApsClient {
    /// Create a new client.
    ///
    /// # Errors
    /// Returns `AecError::Config` if the HTTP client cannot be built.
    pub fn new(config: ApsClientConfig, auth: Arc<dyn AccessTokenProvider>) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AecError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, config, auth })
    }

    /// List all hubs visible to the session.
    #[instrument(skip(self))]
    pub async fn get_hubs(&self) -> Result<Value> {
        self.get_json("/project/v1/hubs".to_string()).await
    }

    /// List projects inside a hub.
    #[instrument(skip(self), fields(hub_id = %hub_id))]
    pub async fn get_projects(&self, hub_id: &str) -> Result<Value> {
        self.get_json(format!("/project/v1/hubs/{hub_id}/projects")).await
    }

    /// List the top-level folders of a project.
    ///
    /// APS addresses top folders through the owning hub, whose id is the
    /// project id with a `b.` prefix; the prefix is normalized so both bare
    /// and prefixed project ids work.
    #[instrument(skip(self), fields(project_id = %project_id))]
    pub async fn get_top_folders(&self, project_id: &str) -> Result<Value> {
        let hub_id = format!("b.{}", project_id.trim_start_matches("b."));
        self.get_json(format!("/project/v1/hubs/{hub_id}/projects/{project_id}/topFolders"))
            .await
    }

    /// List the contents of a folder.
    #[instrument(skip(self), fields(project_id = %project_id, folder_id = %folder_id))]
    pub async fn get_folder_contents(&self, project_id: &str, folder_id: &str) -> Result<Value> {
        self.get_json(format!("/data/v1/projects/{project_id}/folders/{folder_id}/contents"))
            .await
    }

    /// Perform an authenticated GET and relay the JSON body.
    ///
    /// The token is obtained first; when none is valid the call fails fast
    /// without touching the network.
    async fn get_json(&self, path: String) -> Result<Value> {
        let token = self.auth.access_token().await?;
        let url = format!("{}{}", self.config.base_url, path);

        debug!(url = %url, "Forwarding APS request");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| AecError::Network(e.to_string()))?;

        relay_json(response).await
    }
}

/// Relay an upstream response: non-2xx becomes `Upstream` with the status
/// and body preserved; success is parsed as opaque JSON and returned
/// unchanged.
pub(crate) async fn relay_json(response: Response) -> Result<Value> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "Upstream returned non-success status");
        return Err(AecError::Upstream { status: status.as_u16(), body });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| AecError::Internal(format!("Failed to parse upstream response: {e}")))
}

#[cfg(test)]
mod tests {
    //! Unit tests for aps::client.
    use std::sync::Arc;

    use async_trait::async_trait;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    struct MockTokenProvider {
        token: Option<String>,
    }

    #[async_trait]
    impl AccessTokenProvider for MockTokenProvider {
        async fn access_token(&self) -> Result<String> {
            self.token.clone().ok_or(AecError::Unauthenticated)
        }
    }

    fn client_for(upstream: &MockServer, token: Option<&str>) -> ApsClient {
        let config =
            ApsClientConfig { base_url: upstream.uri(), ..ApsClientConfig::default() };
        let auth = Arc::new(MockTokenProvider { token: token.map(str::to_string) });
        ApsClient::new(config, auth).unwrap()
    }

    #[tokio::test]
    async fn test_get_hubs_attaches_bearer_token() {
        let upstream = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/project/v1/hubs"))
            .and(header("authorization", "Bearer tok-1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})),
            )
            .expect(1)
            .mount(&upstream)
            .await;

        let client = client_for(&upstream, Some("tok-1"));
        let body = client.get_hubs().await.unwrap();
        assert_eq!(body, serde_json::json!({"data": []}));
    }

    #[tokio::test]
    async fn test_unauthenticated_fails_fast_without_upstream_call() {
        let upstream = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/project/v1/hubs"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&upstream)
            .await;

        let client = client_for(&upstream, None);
        let result = client.get_hubs().await;
        assert!(matches!(result, Err(AecError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_upstream_failure_preserves_status_and_body() {
        let upstream = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/project/v1/hubs/hub-1/projects"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&upstream)
            .await;

        let client = client_for(&upstream, Some("tok"));
        match client.get_projects("hub-1").await {
            Err(AecError::Upstream { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("expected upstream failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_top_folders_derives_hub_from_project_id() {
        let upstream = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/project/v1/hubs/b.proj-9/projects/b.proj-9/topFolders"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})),
            )
            .expect(1)
            .mount(&upstream)
            .await;

        let client = client_for(&upstream, Some("tok"));
        client.get_top_folders("b.proj-9").await.unwrap();
    }

    #[tokio::test]
    async fn test_top_folders_accepts_unprefixed_project_id() {
        let upstream = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/project/v1/hubs/b.proj-9/projects/proj-9/topFolders"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})),
            )
            .expect(1)
            .mount(&upstream)
            .await;

        let client = client_for(&upstream, Some("tok"));
        client.get_top_folders("proj-9").await.unwrap();
    }

    #[tokio::test]
    async fn test_folder_contents_passes_through_body_verbatim() {
        let upstream = MockServer::start().await;
        let payload = serde_json::json!({
            "jsonapi": {"version": "1.0"},
            "data": [{"type": "items", "id": "urn:1"}]
        });

        Mock::given(method("GET"))
            .and(path("/data/v1/projects/p1/folders/f1/contents"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
            .mount(&upstream)
            .await;

        let client = client_for(&upstream, Some("tok"));
        let body = client.get_folder_contents("p1", "f1").await.unwrap();
        assert_eq!(body, payload);
    }
}
