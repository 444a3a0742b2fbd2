//! Infrastructure layer for aecdash.
//!
//! Owns every outbound concern: the Autodesk Platform Services (APS) Data
//! Management client, the AEC Data Model GraphQL forwarder and its prepared
//! queries, and the environment-driven configuration loader.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod aps;
pub mod config;

pub use aps::auth::{AccessTokenProvider, StoreTokenProvider};
pub use aps::client::{ApsClient, ApsClientConfig};
pub use aps::graphql::GraphQlForwarder;
pub use aps::service::{AecDataService, PropertyUpdate, PropertyValue};
