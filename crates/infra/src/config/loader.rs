//! Configuration loader
//!
//! Loads application configuration from environment variables. Every value
//! has a sensible default so the server starts with nothing but the APS
//! credentials set.
//!
//! ## Environment Variables
//! - `APS_CLIENT_ID`: APS application client id
//! - `APS_CLIENT_SECRET`: APS application client secret
//! - `APS_CALLBACK_URL`: OAuth callback URL registered with the APS app
//! - `APS_BASE_URL`: Base URL for APS REST endpoints
//! - `AEC_DM_GRAPHQL_URL`: AEC Data Model GraphQL endpoint
//! - `PORT`: HTTP listen port
//! - `CLIENT_ORIGIN`: Frontend origin allowed by CORS and used for the
//!   post-login redirect

use aecdash_domain::constants::{
    DEFAULT_AEC_GRAPHQL_URL, DEFAULT_APS_BASE_URL, DEFAULT_CALLBACK_URL, DEFAULT_CLIENT_ORIGIN,
    DEFAULT_PORT,
};
use aecdash_domain::{AecError, ApsConfig, Config, Result, ServerConfig};

/// Load configuration from the process environment.
///
/// # Errors
/// Returns `AecError::Config` if a numeric variable has an invalid value.
pub fn load() -> Result<Config> {
    let config = load_from_env(|key| std::env::var(key).ok())?;

    if config.aps.client_id.is_empty() {
        tracing::warn!("APS_CLIENT_ID is not set; authentication will fail");
    }
    tracing::info!(port = config.server.port, "Configuration loaded from environment");

    Ok(config)
}

/// Build a configuration from a variable lookup function.
///
/// Taking the lookup as a parameter keeps tests free of process-global
/// environment mutation.
///
/// # Errors
/// Returns `AecError::Config` if `PORT` is present but not a valid port
/// number.
pub fn load_from_env(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
    let port = match lookup("PORT") {
        Some(raw) => raw
            .parse::<u16>()
            .map_err(|e| AecError::Config(format!("Invalid PORT value '{raw}': {e}")))?,
        None => DEFAULT_PORT,
    };

    Ok(Config {
        server: ServerConfig {
            port,
            client_origin: var_or(&lookup, "CLIENT_ORIGIN", DEFAULT_CLIENT_ORIGIN),
        },
        aps: ApsConfig {
            client_id: var_or(&lookup, "APS_CLIENT_ID", ""),
            client_secret: var_or(&lookup, "APS_CLIENT_SECRET", ""),
            callback_url: var_or(&lookup, "APS_CALLBACK_URL", DEFAULT_CALLBACK_URL),
            base_url: var_or(&lookup, "APS_BASE_URL", DEFAULT_APS_BASE_URL),
            graphql_url: var_or(&lookup, "AEC_DM_GRAPHQL_URL", DEFAULT_AEC_GRAPHQL_URL),
        },
    })
}

fn var_or(lookup: impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}
