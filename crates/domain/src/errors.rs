//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for aecdash
///
/// The variants follow the failure taxonomy of the proxy layer: requests are
/// rejected before any network call (`InvalidInput`), fail because no valid
/// session token exists (`Unauthenticated`), fail at the provider during the
/// authorization-code exchange (`AuthExchange`), or fail upstream
/// (`Upstream`). Failures are surfaced to the caller synchronously and never
/// retried.
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum AecError {
    /// No valid session token is present. Expiry is a hard state: a stale
    /// token reads as absent and the user must re-authenticate.
    #[error("Not authenticated or token expired")]
    Unauthenticated,

    /// The provider rejected the authorization-code exchange. Carries the
    /// provider's error payload verbatim.
    #[error("Authorization exchange failed: {0}")]
    AuthExchange(String),

    /// An upstream API call returned a non-success status. The upstream
    /// status and body are preserved so the caller can relay them.
    #[error("Upstream failure ({status}): {body}")]
    Upstream {
        /// HTTP status code returned by the upstream service.
        status: u16,
        /// Raw upstream response body.
        body: String,
    },

    /// A GraphQL query executed but the response envelope carried errors.
    #[error("GraphQL query failed: {0}")]
    Query(String),

    /// Required input was missing or malformed; rejected before any network
    /// call is made.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failure talking to the provider or upstream API.
    #[error("Network error: {0}")]
    Network(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for aecdash operations
pub type Result<T> = std::result::Result<T, AecError>;
