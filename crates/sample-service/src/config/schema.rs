use serde::Deserialize;
use sample_core::error::{Result, SampleError};
use sample_core::profile::DEFAULT_VERSION;

/// On-disk config file (strict).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub version: u32,

    #[serde(default)]
    pub service: ServiceSection,
}

impl FileConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SampleError::UnsupportedVersion(self.version));
        }
        self.service.validate()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSection {
    #[serde(default = "default_app_version")]
    pub app_version: String,

    #[serde(default = "default_listen_host")]
    pub listen_host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            app_version: default_app_version(),
            listen_host: default_listen_host(),
            port: default_port(),
            seed: None,
        }
    }
}

impl ServiceSection {
    pub fn validate(&self) -> Result<()> {
        if self.app_version.trim().is_empty() {
            return Err(SampleError::Config("service.app_version must not be empty".into()));
        }
        if self.listen_host.trim().is_empty() {
            return Err(SampleError::Config("service.listen_host must not be empty".into()));
        }
        Ok(())
    }
}

fn default_app_version() -> String {
    DEFAULT_VERSION.into()
}
fn default_listen_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    8080
}

/// Resolved runtime config. Built once in `main` and handed to the app state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub app_version: String,
    pub listen_host: String,
    pub port: u16,
    /// Seed for reproducible draws; `None` uses the thread RNG.
    pub seed: Option<u64>,
}

impl ServiceConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.listen_host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceSection::default().into()
    }
}

impl From<ServiceSection> for ServiceConfig {
    fn from(s: ServiceSection) -> Self {
        Self {
            app_version: s.app_version,
            listen_host: s.listen_host,
            port: s.port,
            seed: s.seed,
        }
    }
}
