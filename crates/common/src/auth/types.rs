//! OAuth 2.0 types and structures
//!
//! Defines the session token, the provider's token-endpoint wire shapes, and
//! the configuration the authorization-code flow is a pure function of.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// OAuth 2.0 access and refresh tokens with expiry metadata
///
/// Exactly one `TokenSet` exists per process; it is created by a successful
/// authorization-code exchange and destroyed by logout or restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSet {
    /// Opaque access token attached as a bearer credential to upstream calls
    pub access_token: String,

    /// Refresh token for obtaining new access tokens
    /// Optional because some providers don't issue them; carried opaquely
    /// (no refresh exchange is implemented)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Token type (always "Bearer" for OAuth 2.0)
    pub token_type: String,

    /// Access token lifetime in seconds, as granted by the provider
    pub expires_in: i64,

    /// Absolute expiration instant (UTC), computed when the token is stored
    pub expires_at: DateTime<Utc>,
}

impl TokenSet {
    /// Create a new `TokenSet` with its expiry anchored to `now`.
    ///
    /// # Arguments
    /// * `access_token` - The access token
    /// * `refresh_token` - Optional refresh token
    /// * `expires_in` - Token lifetime in seconds
    /// * `now` - Instant the token was obtained
    #[must_use]
    pub fn new(
        access_token: String,
        refresh_token: Option<String>,
        expires_in: i64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            expires_at: now + Duration::seconds(expires_in),
        }
    }

    /// Check whether the token has expired as of `now`.
    ///
    /// The token is valid strictly before `expires_at`; at or after that
    /// instant it is expired. There is no grace threshold.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// OAuth token response from the authorization server
///
/// Standard OAuth 2.0 token response format (RFC 6749).
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: i64,
}

/// Configuration for the authorization-code flow
///
/// The authorization URL is a deterministic function of these fields; the
/// token exchange additionally uses the client secret as the HTTP Basic
/// password.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// OAuth client id
    pub client_id: String,

    /// Confidential client secret (HTTP Basic password at the token endpoint)
    pub client_secret: String,

    /// Redirect URI the provider sends the authorization code back to
    pub callback_url: String,

    /// Provider authorization endpoint
    pub authorize_endpoint: String,

    /// Provider token endpoint
    pub token_endpoint: String,

    /// Scopes to request (space-joined in the authorization URL)
    pub scopes: Vec<String>,
}

impl AuthConfig {
    /// Get scopes as a space-separated string
    #[must_use]
    pub fn scope_string(&self) -> String {
        self.scopes.join(" ")
    }

    /// Build the provider authorization URL.
    ///
    /// Pure function of the configuration: `response_type=code`, the client
    /// id, the percent-encoded redirect URI, and the percent-encoded scope
    /// list. No side effects.
    #[must_use]
    pub fn authorization_url(&self) -> String {
        format!(
            "{}?response_type=code&client_id={}&redirect_uri={}&scope={}",
            self.authorize_endpoint,
            self.client_id,
            urlencoding::encode(&self.callback_url),
            urlencoding::encode(&self.scope_string()),
        )
    }
}
