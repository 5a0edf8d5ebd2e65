//! Shared error type across sample-service crates.

use std::io;

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, SampleError>;

/// Unified error type used by core and service.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unsupported config schema version: {0}")]
    UnsupportedVersion(u32),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("internal: {0}")]
    Internal(String),
}

impl SampleError {
    /// Process exit status for a fatal startup error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SampleError::Config(_) | SampleError::UnsupportedVersion(_) => 2,
            SampleError::Bind { .. } | SampleError::Internal(_) => 1,
        }
    }
}
