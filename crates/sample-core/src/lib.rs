//! sample-core: version profiles, randomness and request outcomes for the
//! sample service.
//!
//! Nothing in here knows about HTTP or the runtime. The service crate turns a
//! version string into a [`profile::VersionProfile`], draws from an
//! [`entropy::Entropy`] source and maps the result onto an
//! [`outcome::Outcome`].
//!
//! Panics, `unwrap`, and `expect` are compile-denied here; fallible paths
//! surface as [`SampleError`].

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod entropy;
pub mod error;
pub mod outcome;
pub mod profile;

/// Shared result type.
pub use error::{Result, SampleError};
