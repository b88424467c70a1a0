//! Wildlife sightings HTTP service binary.
//!
//! # Configuration
//!
//! - `WILDLIFE_DATA_PATH` - Path to the sightings JSON document (default: data/sightings.json)
//! - `WILDLIFE_PUBLIC_DIR` - Static asset directory (default: public)
//! - `WILDLIFE_VIEWS_DIR` - Directory holding index.html (default: views)
//! - `PORT` / `SERVICE_PORT` - HTTP port (default: 3000)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `METRICS_ENABLED`, `METRICS_PATH` - Prometheus endpoint

use std::net::SocketAddr;

use tracing::{error, info, warn};

use wildlife_service::app;
use wildlife_service_shared::{
    init_logging, init_metrics, AppState, LoggingConfig, MetricsConfig, ServiceConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("wildlife");
    init_logging(&logging_config);

    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    let config = ServiceConfig::from_env().map_err(|e| {
        error!(error = %e, "invalid service configuration");
        e
    })?;

    info!(
        data_path = %config.data_path.display(),
        public_dir = %config.public_dir.display(),
        views_dir = %config.views_dir.display(),
        port = config.port,
        "starting wildlife service"
    );

    // The document is read per request; a missing file at startup is only a warning.
    if !config.data_path.exists() {
        warn!(path = %config.data_path.display(), "sightings document not found");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let router = app(AppState::new(config), &metrics_config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "listening on");
    info!("open http://localhost:{}/", addr.port());

    axum::serve(listener, router).await?;

    Ok(())
}
