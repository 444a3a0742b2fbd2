//! Common data types used throughout the application

use serde::{Deserialize, Serialize};

use crate::constants;

/// Autodesk Platform Services credentials and endpoints
///
/// The client secret is confidential and must never reach the browser; it
/// lives only in this backend's process environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApsConfig {
    /// OAuth client id registered with APS
    pub client_id: String,
    /// Confidential OAuth client secret
    pub client_secret: String,
    /// Redirect URI registered for the authorization-code flow
    pub callback_url: String,
    /// Base URL for APS REST endpoints
    pub base_url: String,
    /// AEC Data Model GraphQL endpoint
    pub graphql_url: String,
}

impl ApsConfig {
    /// APS authorization endpoint derived from the base URL.
    #[must_use]
    pub fn authorize_endpoint(&self) -> String {
        format!("{}{}", self.base_url, constants::APS_AUTHORIZE_PATH)
    }

    /// APS token endpoint derived from the base URL.
    #[must_use]
    pub fn token_endpoint(&self) -> String {
        format!("{}{}", self.base_url, constants::APS_TOKEN_PATH)
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the backend listens on
    pub port: u16,
    /// Browser client origin allowed by CORS and used for the post-login
    /// redirect
    pub client_origin: String,
}

/// Configuration for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub aps: ApsConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_aps_config() -> ApsConfig {
        ApsConfig {
            client_id: "abc".to_string(),
            client_secret: "secret".to_string(),
            callback_url: "https://host/cb".to_string(),
            base_url: constants::DEFAULT_APS_BASE_URL.to_string(),
            graphql_url: constants::DEFAULT_AEC_GRAPHQL_URL.to_string(),
        }
    }

    #[test]
    fn test_derived_endpoints() {
        let config = sample_aps_config();
        assert_eq!(
            config.authorize_endpoint(),
            "https://developer.api.autodesk.com/authentication/v2/authorize"
        );
        assert_eq!(
            config.token_endpoint(),
            "https://developer.api.autodesk.com/authentication/v2/token"
        );
    }
}
