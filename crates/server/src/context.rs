//! Shared application context
//!
//! Owns the long-lived pieces every handler needs: configuration, the
//! process-wide token store, the authorization flow, and the outbound APS
//! clients. Built once at startup and shared behind an `Arc`.

use std::sync::Arc;

use aecdash_common::auth::traits::AuthorizationFlow;
use aecdash_common::auth::types::AuthConfig;
use aecdash_common::auth::AuthCodeClient;
use aecdash_common::TokenStore;
use aecdash_domain::constants::APS_SCOPES;
use aecdash_domain::{Config, Result};
use aecdash_infra::{
    AccessTokenProvider, ApsClient, ApsClientConfig, GraphQlForwarder, StoreTokenProvider,
};

/// Application context holding all long-lived services
pub struct AppContext {
    pub config: Config,
    pub tokens: Arc<TokenStore>,
    pub auth: Arc<dyn AuthorizationFlow>,
    pub aps: Arc<ApsClient>,
    pub graphql: Arc<GraphQlForwarder>,
}

impl AppContext {
    /// Build the full production wiring from configuration.
    ///
    /// # Errors
    /// Returns `AecError::Config` if an outbound HTTP client cannot be
    /// built.
    pub fn new(config: Config) -> Result<Self> {
        let tokens = Arc::new(TokenStore::new());

        let auth_config = AuthConfig {
            client_id: config.aps.client_id.clone(),
            client_secret: config.aps.client_secret.clone(),
            callback_url: config.aps.callback_url.clone(),
            authorize_endpoint: config.aps.authorize_endpoint(),
            token_endpoint: config.aps.token_endpoint(),
            scopes: APS_SCOPES.iter().map(|s| (*s).to_string()).collect(),
        };
        let auth: Arc<dyn AuthorizationFlow> = Arc::new(AuthCodeClient::new(auth_config));

        let provider: Arc<dyn AccessTokenProvider> =
            Arc::new(StoreTokenProvider::new(tokens.clone()));
        let aps_config =
            ApsClientConfig { base_url: config.aps.base_url.clone(), ..ApsClientConfig::default() };
        let aps = Arc::new(ApsClient::new(aps_config, provider.clone())?);
        let graphql = Arc::new(GraphQlForwarder::new(config.aps.graphql_url.clone(), provider)?);

        Ok(Self { config, tokens, auth, aps, graphql })
    }

    /// Assemble a context from pre-built parts.
    ///
    /// Used by tests to substitute a stub authorization flow or point the
    /// clients at mock upstreams.
    #[must_use]
    pub fn from_parts(
        config: Config,
        tokens: Arc<TokenStore>,
        auth: Arc<dyn AuthorizationFlow>,
        aps: Arc<ApsClient>,
        graphql: Arc<GraphQlForwarder>,
    ) -> Self {
        Self { config, tokens, auth, aps, graphql }
    }
}
