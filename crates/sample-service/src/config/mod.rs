//! Service config loader.
//!
//! Defaults, then an optional strict YAML file named by
//! `SAMPLE_SERVICE_CONFIG`, then environment variables. Empty variables count
//! as unset.

pub mod schema;

use std::fs;

use sample_core::error::{Result, SampleError};

pub use schema::{FileConfig, ServiceConfig, ServiceSection};

pub const ENV_CONFIG_PATH: &str = "SAMPLE_SERVICE_CONFIG";
pub const ENV_APP_VERSION: &str = "APP_VERSION";
pub const ENV_PORT: &str = "PORT";
pub const ENV_SEED: &str = "SAMPLE_SERVICE_SEED";

pub fn load_from_file(path: &str) -> Result<FileConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SampleError::Config(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<FileConfig> {
    let cfg: FileConfig = serde_yaml::from_str(s)
        .map_err(|e| SampleError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve config from the process environment.
pub fn from_env() -> Result<ServiceConfig> {
    resolve(|key| std::env::var(key).ok())
}

/// Resolve config through `lookup` instead of the process environment.
pub fn resolve<F>(lookup: F) -> Result<ServiceConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let base = match non_empty(lookup(ENV_CONFIG_PATH)) {
        Some(path) => load_from_file(&path)?.service.into(),
        None => ServiceConfig::default(),
    };
    apply_env(base, lookup)
}

/// Overlay environment values on top of `cfg`.
pub fn apply_env<F>(mut cfg: ServiceConfig, lookup: F) -> Result<ServiceConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = non_empty(lookup(ENV_APP_VERSION)) {
        cfg.app_version = v;
    }
    if let Some(p) = non_empty(lookup(ENV_PORT)) {
        cfg.port = p
            .trim()
            .parse()
            .map_err(|e| SampleError::Config(format!("{ENV_PORT}={p:?} is not a valid port: {e}")))?;
    }
    if let Some(s) = non_empty(lookup(ENV_SEED)) {
        let seed = s
            .trim()
            .parse()
            .map_err(|e| SampleError::Config(format!("{ENV_SEED}={s:?} is not a u64: {e}")))?;
        cfg.seed = Some(seed);
    }
    Ok(cfg)
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}
