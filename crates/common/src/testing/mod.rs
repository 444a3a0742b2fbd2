//! Test support utilities
//!
//! Deterministic mock implementations of the seams exposed by [`crate::auth`].

pub mod mocks;

pub use mocks::{ManualClock, StubAuthorizationFlow};
