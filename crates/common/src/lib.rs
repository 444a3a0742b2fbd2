//! Common utilities shared across aecdash crates.
//!
//! The `auth` module is the heart of this crate: it owns the OAuth session
//! token lifecycle (authorization URL construction, authorization-code
//! exchange, in-memory token storage with expiry). The `testing` module
//! provides deterministic mocks for the seams `auth` exposes.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod auth;
pub mod testing;

pub use auth::client::{AuthClientError, AuthCodeClient};
pub use auth::clock::{Clock, SystemClock};
pub use auth::store::TokenStore;
pub use auth::traits::AuthorizationFlow;
pub use auth::types::{AuthConfig, TokenResponse, TokenSet};
