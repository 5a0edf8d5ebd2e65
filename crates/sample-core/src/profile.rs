//! Canned behavior per deployment version.
//!
//! Each simulated variant maps to an error probability and a base latency.
//! Lookups are exact string matches; anything else (including the
//! `"unknown"` default) gets the healthy profile.

use std::time::Duration;

/// Version reported when `APP_VERSION` is absent.
pub const DEFAULT_VERSION: &str = "unknown";

/// Upper bound (exclusive) of the uniform jitter added on top of the base
/// latency, in milliseconds.
pub const JITTER_MS: u64 = 100;

const DEFAULT_ERROR_RATE: f64 = 0.001;
const DEFAULT_BASE_LATENCY_MS: u64 = 50;

/// Probability in `[0, 1]` that a request to `/` fails for `version`.
pub fn error_rate(version: &str) -> f64 {
    match version {
        "v2-bad" => 0.15,
        "v3-slow" => 0.02,
        _ => DEFAULT_ERROR_RATE,
    }
}

/// Base latency in milliseconds for `version`.
pub fn base_latency_ms(version: &str) -> u64 {
    match version {
        "v3-slow" => 400,
        _ => DEFAULT_BASE_LATENCY_MS,
    }
}

/// Resolved behavior for one version. Built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionProfile {
    version: String,
    error_rate: f64,
    base_latency: Duration,
}

impl VersionProfile {
    pub fn for_version(version: impl Into<String>) -> Self {
        let version = version.into();
        Self {
            error_rate: error_rate(&version),
            base_latency: Duration::from_millis(base_latency_ms(&version)),
            version,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn error_rate(&self) -> f64 {
        self.error_rate
    }

    pub fn base_latency(&self) -> Duration {
        self.base_latency
    }

    /// Base latency plus `jitter_ms` of uniform noise.
    pub fn delay(&self, jitter_ms: u64) -> Duration {
        self.base_latency + Duration::from_millis(jitter_ms)
    }
}

impl Default for VersionProfile {
    fn default() -> Self {
        Self::for_version(DEFAULT_VERSION)
    }
}
