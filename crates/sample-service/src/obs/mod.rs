//! In-process metrics for the sample service.
//!
//! Counters and histograms are stored as atomics behind `DashMap` and rendered
//! in Prometheus text format by the `/metrics` handler.

pub mod metrics;

pub use metrics::{CounterVec, HistogramVec, ServiceMetrics};
