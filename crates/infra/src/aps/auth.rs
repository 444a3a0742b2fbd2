//! Access token provisioning for outbound APS calls
//!
//! Every proxied operation asks this seam for a usable bearer token before
//! touching the network. When no valid token exists the operation fails fast
//! with `Unauthenticated` and no upstream call is made.

use std::sync::Arc;

use aecdash_common::TokenStore;
use aecdash_domain::{AecError, Result};
use async_trait::async_trait;

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
/// It is also the seam where a shared multi-instance session store would
/// slot in without touching any client code.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get a valid access token.
    ///
    /// # Errors
    /// Returns `AecError::Unauthenticated` when no valid token is held. No
    /// refresh is attempted; expiry is a hard re-authenticate state.
    async fn access_token(&self) -> Result<String>;
}

/// Token provider backed by the in-process session token store.
pub struct StoreTokenProvider {
    store: Arc<TokenStore>,
}

impl StoreTokenProvider {
    /// Wrap the shared token store.
    #[must_use]
    pub fn new(store: Arc<TokenStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AccessTokenProvider for StoreTokenProvider {
    async fn access_token(&self) -> Result<String> {
        self.store
            .current()
            .await
            .map(|tokens| tokens.access_token)
            .ok_or(AecError::Unauthenticated)
    }
}
