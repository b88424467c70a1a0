//! Application state for the HTTP service.
//!
//! The state only records *where* things live. The sightings document is read
//! again on every call to [`AppState::load_sightings`], so edits to the file
//! are visible on the next request without a restart.

use std::path::Path;
use std::sync::Arc;

use wildlife_lib::dataset::{parse_sightings, read_failure};
use wildlife_lib::{Result, Sighting};

use crate::config::ServiceConfig;
use crate::metrics::{record_load_failed, record_sightings_loaded};

/// Shared application state for all axum handlers.
///
/// This struct is cheaply cloneable (using `Arc` internally) and should be
/// shared via axum's `State` extractor.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::get, extract::State};
/// use wildlife_service_shared::{AppState, ServiceConfig};
///
/// async fn handler(State(state): State<AppState>) {
///     let sightings = state.load_sightings().await;
///     // ... query sightings
/// }
///
/// let state = AppState::new(ServiceConfig::default());
/// let app = Router::new()
///     .route("/api/sightings", get(handler))
///     .with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            inner: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.inner
    }

    pub fn data_path(&self) -> &Path {
        &self.inner.data_path
    }

    pub fn public_dir(&self) -> &Path {
        &self.inner.public_dir
    }

    /// Read and decode the sightings document for a query, recording the
    /// outcome in the business metrics.
    ///
    /// Failures are logged with their cause by `wildlife-lib` and surface here
    /// as [`wildlife_lib::Error::DataUnavailable`].
    pub async fn load_sightings(&self) -> Result<Vec<Sighting>> {
        let outcome = self.read_sightings().await;

        match &outcome {
            Ok(sightings) => record_sightings_loaded(sightings.len()),
            Err(err) => record_load_failed(err.reason()),
        }

        outcome
    }

    /// Read and decode the sightings document without touching metrics.
    ///
    /// Used by probes so that polling does not skew load statistics.
    pub async fn read_sightings(&self) -> Result<Vec<Sighting>> {
        let path = self.data_path();
        match tokio::fs::read_to_string(path).await {
            Ok(text) => parse_sightings(&text),
            Err(source) => Err(read_failure(path, source)),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("data_path", &self.inner.data_path)
            .field("public_dir", &self.inner.public_dir)
            .field("views_dir", &self.inner.views_dir)
            .finish()
    }
}
