//! Autodesk Platform Services outbound surface
//!
//! Everything here is a thin relay: a bearer token is attached, the request
//! is forwarded, and the upstream JSON comes back verbatim. This layer owns
//! no upstream schema; hubs, projects, folders, and elements are opaque
//! payloads whose contract belongs to APS.

pub mod auth;
pub mod client;
pub mod graphql;
pub mod queries;
pub mod service;
