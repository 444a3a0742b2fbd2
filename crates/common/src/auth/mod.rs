//! OAuth session token lifecycle
//!
//! Covers the three-legged authorization-code flow against a confidential
//! OAuth provider and the in-memory session token it produces:
//! - Authorization URL construction (pure function of configuration)
//! - Authorization-code exchange using HTTP Basic client credentials
//! - Token storage with absolute-expiry validity checks
//!
//! No refresh-token exchange is performed anywhere in this module: expiry is
//! a hard "must re-authenticate" state. The refresh token is carried opaquely
//! so a future refresh flow would not need a storage migration.

pub mod client;
pub mod clock;
pub mod store;
pub mod traits;
pub mod types;

pub use client::{AuthClientError, AuthCodeClient};
pub use clock::{Clock, SystemClock};
pub use store::TokenStore;
pub use traits::AuthorizationFlow;
pub use types::{AuthConfig, TokenResponse, TokenSet};
