//! Sample service
//!
//! Demo HTTP fixture for canary dashboards:
//! - `/` sleeps and fails according to `APP_VERSION`
//! - `/health`, `/ready` for probes
//! - `/metrics` in Prometheus text format

use tracing_subscriber::{fmt, EnvFilter};

use sample_core::error::Result;
use sample_service::{app_state::AppState, config, server};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "sample-service exiting");
        std::process::exit(e.exit_code());
    }
}

async fn run() -> Result<()> {
    let cfg = config::from_env()?;
    let listen = cfg.listen_addr();
    let listener = server::bind(&listen).await?;

    tracing::info!(
        version = %cfg.app_version,
        port = cfg.port,
        %listen,
        seeded = cfg.seed.is_some(),
        "sample-service starting"
    );
    tracing::info!("metrics endpoint: http://localhost:{}/metrics", cfg.port);

    server::serve(listener, AppState::new(cfg)).await
}
