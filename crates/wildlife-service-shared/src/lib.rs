//! Shared infrastructure for the wildlife sightings HTTP service.
//!
//! This crate provides the HTTP glue around `wildlife-lib`:
//!
//! - [`AppState`]: Where to find the sightings document and static assets
//! - [`ServiceConfig`]: Environment-driven service configuration
//! - [`health`]: Liveness/readiness handlers
//! - [`ApiError`]: Mapping of library errors onto the JSON error bodies
//! - [`metrics`]: Prometheus metrics infrastructure
//! - [`logging`]: Structured JSON logging setup
//! - [`middleware`]: Request tracking and metrics middleware
//!
//! # Architecture
//!
//! Handlers stay thin; every query lives in `wildlife-lib`:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Load the sightings document (fresh per request)          │
//! │  - Call a wildlife-lib query                                │
//! │  - Serialize the result or map the error                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides fixture-backed state for handler
//! testing. Enable the `test-utils` feature to access it from dependent crates.

#![deny(warnings)]

mod api_error;
mod config;
mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use api_error::{from_lib_error, ApiError, ROUTE_NOT_FOUND_MESSAGE};
pub use config::{ConfigError, ServiceConfig, DEFAULT_PORT};
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_load_failed, record_query, record_sightings_loaded,
    MetricsConfig, MetricsError,
};
pub use middleware::{extract_or_generate_request_id, MetricsLayer, RequestId};
pub use state::AppState;
