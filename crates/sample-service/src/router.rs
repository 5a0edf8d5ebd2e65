//! Axum router wiring.
//!
//! `/health`, `/ready` and `/metrics` are exact routes. `/` accepts any
//! method, and every other path falls through to the same responder.

use axum::{
    routing::{any, get},
    Router,
};

use crate::{app_state::AppState, ops, responder};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(responder::root))
        .route("/health", get(ops::health))
        .route("/ready", get(ops::ready))
        .route("/metrics", get(ops::metrics))
        .fallback(responder::root)
        .with_state(state)
}
