//! Sample service library entry.
//!
//! Wires config, metrics, ops endpoints and the version-driven responder
//! into one axum router. Consumed by the binary (`main.rs`) and by
//! integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod responder;
pub mod router;
pub mod server;
