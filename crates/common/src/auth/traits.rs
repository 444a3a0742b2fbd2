//! Traits for the authorization flow seam
//!
//! These traits enable dependency injection and testing by abstracting the
//! external OAuth provider.

use async_trait::async_trait;

use super::client::AuthClientError;
use super::types::TokenResponse;

/// Trait for the authorization-code flow
///
/// Abstracts the provider interaction so HTTP handlers can be tested with a
/// stub provider, and so a different provider could be swapped in without
/// touching the handlers.
#[async_trait]
pub trait AuthorizationFlow: Send + Sync {
    /// Build the provider authorization URL for browser-based login.
    fn authorization_url(&self) -> String;

    /// Exchange an authorization code for tokens.
    ///
    /// # Errors
    /// Returns an error if the provider rejects the code or the exchange
    /// fails; implementations must not mutate any token state themselves.
    async fn exchange_code(&self, code: &str) -> Result<TokenResponse, AuthClientError>;
}
