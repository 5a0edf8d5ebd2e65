//! The `/` handler: simulated latency and synthetic errors per version.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tokio::time::{self, Instant};

use sample_core::outcome::Outcome;
use sample_core::profile::JITTER_MS;

use crate::app_state::AppState;

/// Endpoint label for every request served here, whatever the actual path.
pub const ROOT_ENDPOINT: &str = "/";

pub async fn root(State(state): State<AppState>) -> Response {
    let start = Instant::now();
    let profile = state.profile();
    let entropy = state.entropy();

    time::sleep(profile.delay(entropy.jitter_ms(JITTER_MS))).await;

    let outcome = Outcome::draw(profile.error_rate(), entropy);
    let status = StatusCode::from_u16(outcome.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = outcome.body(profile.version());

    let elapsed = start.elapsed();
    state
        .metrics()
        .record_request(ROOT_ENDPOINT, outcome.status_label(), elapsed);

    tracing::debug!(
        version = %profile.version(),
        status = outcome.status_code(),
        elapsed_ms = elapsed.as_millis() as u64,
        synthetic_error = outcome.is_error(),
        "served /"
    );

    (status, body).into_response()
}
