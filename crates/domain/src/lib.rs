//! Domain types shared across aecdash crates.
//!
//! Holds the error taxonomy, configuration types, and constants. This crate
//! performs no I/O; everything here is plain data.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod constants;
pub mod errors;
pub mod types;

pub use errors::{AecError, Result};
pub use types::{ApsConfig, Config, ServerConfig};
