//! AEC Data Model GraphQL forwarder
//!
//! Accepts a free-form query string and variables mapping, attaches the
//! bearer token, and forwards the pair to the AEC GraphQL endpoint
//! unmodified. The response is relayed verbatim, including any `errors`
//! member: this layer does not parse or validate GraphQL.

use std::sync::Arc;
use std::time::Duration;

use aecdash_domain::constants::{DEFAULT_AEC_GRAPHQL_URL, UPSTREAM_TIMEOUT_SECS};
use aecdash_domain::{AecError, Result};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use super::auth::AccessTokenProvider;
use super::client::relay_json;

/// Thin relay to the AEC Data Model GraphQL endpoint
pub struct GraphQlForwarder {
    http: Client,
    endpoint: String,
    auth: Arc<dyn AccessTokenProvider>,
}

impl GraphQlForwarder {
    /// Create a forwarder for the given endpoint.
    ///
    /// # Errors
    /// Returns `AecError::Config` if the HTTP client cannot be built.
    pub fn new(endpoint: String, auth: Arc<dyn AccessTokenProvider>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(UPSTREAM_TIMEOUT_SECS))
            .build()
            .map_err(|e| AecError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, endpoint, auth })
    }

    /// Create a forwarder against the production AEC endpoint.
    ///
    /// # Errors
    /// Returns `AecError::Config` if the HTTP client cannot be built.
    pub fn production(auth: Arc<dyn AccessTokenProvider>) -> Result<Self> {
        Self::new(DEFAULT_AEC_GRAPHQL_URL.to_string(), auth)
    }

    /// Forward a query/variables pair and relay the JSON response verbatim.
    ///
    /// # Errors
    /// Fails fast with `Unauthenticated` when no valid token is held (no
    /// network call is made); transport failures become `Network`; non-2xx
    /// upstream answers become `Upstream` with status and body preserved.
    #[instrument(skip(self, query, variables))]
    pub async fn execute(&self, query: &str, variables: Value) -> Result<Value> {
        let token = self.auth.access_token().await?;

        debug!(endpoint = %self.endpoint, "Forwarding GraphQL request");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&token)
            .json(&serde_json::json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(|e| AecError::Network(e.to_string()))?;

        relay_json(response).await
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for aps::graphql.
    use std::sync::Arc;

    use async_trait::async_trait;
    use wiremock::matchers::{body_partial_json, header, method, path};
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

    fn forwarder_for(upstream: &MockServer, token: Option<&str>) -> GraphQlForwarder {
        let auth = Arc::new(MockTokenProvider { token: token.map(str::to_string) });
        GraphQlForwarder::new(format!("{}/graphql", upstream.uri()), auth).unwrap()
    }

    #[tokio::test]
    async fn test_execute_forwards_query_and_variables_unmodified() {
        let upstream = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(header("authorization", "Bearer tok"))
            .and(body_partial_json(serde_json::json!({
                "query": "query { hubs { id } }",
                "variables": {"limit": 5}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"hubs": []}
            })))
            .expect(1)
            .mount(&upstream)
            .await;

        let forwarder = forwarder_for(&upstream, Some("tok"));
        let body = forwarder
            .execute("query { hubs { id } }", serde_json::json!({"limit": 5}))
            .await
            .unwrap();
        assert_eq!(body, serde_json::json!({"data": {"hubs": []}}));
    }

    #[tokio::test]
    async fn test_execute_relays_graphql_errors_verbatim() {
        let upstream = MockServer::start().await;
        let payload = serde_json::json!({
            "data": null,
            "errors": [{"message": "field not found"}]
        });

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
            .mount(&upstream)
            .await;

        let forwarder = forwarder_for(&upstream, Some("tok"));
        let body = forwarder.execute("query { x }", Value::Null).await.unwrap();
        // The errors member passes through untouched
        assert_eq!(body, payload);
    }

    #[tokio::test]
    async fn test_execute_unauthenticated_makes_no_upstream_call() {
        let upstream = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&upstream)
            .await;

        let forwarder = forwarder_for(&upstream, None);
        let result = forwarder.execute("query { x }", Value::Null).await;
        assert!(matches!(result, Err(AecError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_execute_upstream_error_preserved() {
        let upstream = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .mount(&upstream)
            .await;

        let forwarder = forwarder_for(&upstream, Some("tok"));
        match forwarder.execute("query { x }", Value::Null).await {
            Err(AecError::Upstream { status, body }) => {
                assert_eq!(status, 429);
                assert_eq!(body, "slow down");
            }
            other => panic!("expected upstream failure, got {other:?}"),
        }
    }
}
