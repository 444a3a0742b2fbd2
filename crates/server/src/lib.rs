//! HTTP surface for the aecdash backend.
//!
//! Wires the shared application context into an axum router: OAuth login
//! routes, Data Management proxy routes, the GraphQL forwarder route, and a
//! health probe. All handlers are thin; the work happens in the infra layer.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod context;
pub mod error;
pub mod routes;

pub use context::AppContext;
pub use error::{AppError, AppResult};
pub use routes::build_router;
