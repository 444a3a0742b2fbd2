//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Autodesk Platform Services endpoints
pub const DEFAULT_APS_BASE_URL: &str = "https://developer.api.autodesk.com";
pub const DEFAULT_AEC_GRAPHQL_URL: &str = "https://developer.api.autodesk.com/aec/graphql";
pub const APS_AUTHORIZE_PATH: &str = "/authentication/v2/authorize";
pub const APS_TOKEN_PATH: &str = "/authentication/v2/token";

// OAuth scopes required for AEC Data Model and Data Management access
pub const APS_SCOPES: [&str; 5] =
    ["data:read", "data:write", "data:create", "account:read", "user:read"];

// Local development defaults
pub const DEFAULT_CALLBACK_URL: &str = "https://localhost:8080/auth/callback/";
pub const DEFAULT_CLIENT_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_PORT: u16 = 8080;

// Outbound HTTP client configuration
pub const UPSTREAM_TIMEOUT_SECS: u64 = 30;
