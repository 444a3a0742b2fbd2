//! Authorization-code exchange client
//!
//! Drives the credentialed leg of the three-legged flow: the browser brings
//! back an authorization code, and this client trades it for tokens at the
//! provider's token endpoint using HTTP Basic client credentials. Failures
//! are surfaced to the caller and never retried; this is a one-shot
//! interactive flow with no backoff.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::traits::AuthorizationFlow;
use super::types::{AuthConfig, TokenResponse};

/// Error type for authorization-code exchange operations
#[derive(Debug)]
pub enum AuthClientError {
    /// HTTP request failed before a response was received
    RequestFailed(reqwest::Error),

    /// The provider rejected the code or credentials; carries the provider's
    /// response payload verbatim
    Provider {
        /// HTTP status the provider answered with
        status: u16,
        /// Raw provider response body
        payload: String,
    },

    /// Failed to parse a successful response
    Parse(String),
}

impl std::fmt::Display for AuthClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequestFailed(e) => write!(f, "HTTP request failed: {e}"),
            Self::Provider { status, payload } => {
                write!(f, "Provider rejected exchange ({status}): {payload}")
            }
            Self::Parse(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl std::error::Error for AuthClientError {}

impl From<reqwest::Error> for AuthClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::RequestFailed(err)
    }
}

/// Client for the confidential authorization-code flow
///
/// Unlike public-client PKCE flows, this client authenticates to the token
/// endpoint with the client secret, so it must only ever run server-side.
#[derive(Debug, Clone)]
pub struct AuthCodeClient {
    config: AuthConfig,
    client: Client,
}

impl AuthCodeClient {
    /// Create a new client with the given configuration.
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { config, client }
    }

    /// Build the provider authorization URL for browser-based login.
    ///
    /// Pure function of the configuration; see
    /// [`AuthConfig::authorization_url`].
    #[must_use]
    pub fn authorization_url(&self) -> String {
        self.config.authorization_url()
    }

    /// Exchange an authorization code for tokens.
    ///
    /// Performs a form POST (`grant_type=authorization_code`) to the token
    /// endpoint, authenticated with HTTP Basic credentials built from the
    /// client id and secret.
    ///
    /// # Errors
    /// Returns an error if the request fails, the provider answers non-2xx,
    /// or the response body lacks an `access_token` field. The caller owns
    /// any token storage; a failed exchange mutates nothing.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, AuthClientError> {
        let form = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.config.callback_url.as_str()),
        ];

        debug!(endpoint = %self.config.token_endpoint, "Exchanging authorization code");

        let response = self
            .client
            .post(&self.config.token_endpoint)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.map_err(|e| AuthClientError::Parse(e.to_string()))?;

        // The provider's error payload is relayed verbatim; a 2xx body
        // without an access token is treated the same way.
        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|_| AuthClientError::Provider { status: status.as_u16(), payload: body.clone() })?;

        if !status.is_success() || value.get("access_token").is_none() {
            warn!(status = status.as_u16(), "Authorization-code exchange rejected");
            return Err(AuthClientError::Provider { status: status.as_u16(), payload: body });
        }

        serde_json::from_value(value).map_err(|e| AuthClientError::Parse(e.to_string()))
    }

    /// Get the configured redirect URI
    #[must_use]
    pub fn redirect_uri(&self) -> &str {
        &self.config.callback_url
    }

    /// Get a reference to the flow configuration
    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}

#[async_trait]
impl AuthorizationFlow for AuthCodeClient {
    fn authorization_url(&self) -> String {
        self.authorization_url()
    }

    async fn exchange_code(&self, code: &str) -> Result<TokenResponse, AuthClientError> {
        self.exchange_code(code).await
    }
}
