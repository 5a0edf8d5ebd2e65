//! Operational HTTP endpoints.
//!
//! - `/health`  : liveness
//! - `/ready`   : readiness (always ready, nothing to warm up)
//! - `/metrics` : Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;
use crate::obs::metrics::CONTENT_TYPE;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn ready() -> impl IntoResponse {
    (StatusCode::OK, "Ready")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.metrics().render();

    (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response()
}
