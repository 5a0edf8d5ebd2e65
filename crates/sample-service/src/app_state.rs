//! Shared application state for the sample service.
//!
//! Everything a handler touches is injected here once at startup: the
//! resolved config, the version profile, the metrics registry and the random
//! source. Tests build their own state so registries never leak between them.

use std::sync::Arc;

use sample_core::entropy::{Entropy, SeededEntropy, ThreadEntropy};
use sample_core::profile::VersionProfile;

use crate::config::ServiceConfig;
use crate::obs::ServiceMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<ServiceMetrics>,
    entropy: Arc<dyn Entropy>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    profile: VersionProfile,
}

impl AppState {
    /// Build state with a fresh registry. Uses a seeded source when the config
    /// carries a seed, the thread RNG otherwise.
    pub fn new(cfg: ServiceConfig) -> Self {
        let entropy: Arc<dyn Entropy> = match cfg.seed {
            Some(seed) => Arc::new(SeededEntropy::new(seed)),
            None => Arc::new(ThreadEntropy),
        };
        Self::with_parts(cfg, Arc::new(ServiceMetrics::new()), entropy)
    }

    pub fn with_parts(
        cfg: ServiceConfig,
        metrics: Arc<ServiceMetrics>,
        entropy: Arc<dyn Entropy>,
    ) -> Self {
        let profile = VersionProfile::for_version(cfg.app_version.clone());
        Self {
            inner: Arc::new(AppStateInner { cfg, profile }),
            metrics,
            entropy,
        }
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn profile(&self) -> &VersionProfile {
        &self.inner.profile
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.metrics
    }

    pub fn entropy(&self) -> &dyn Entropy {
        self.entropy.as_ref()
    }
}
