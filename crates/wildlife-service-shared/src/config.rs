//! Service configuration read from the environment.
//!
//! # Environment Variables
//!
//! - `WILDLIFE_DATA_PATH`: Sightings document (default: `data/sightings.json`)
//! - `WILDLIFE_PUBLIC_DIR`: Static asset directory (default: `public`)
//! - `WILDLIFE_VIEWS_DIR`: Directory holding `index.html` (default: `views`)
//! - `PORT`, then `SERVICE_PORT`: HTTP port (default: 3000)

use std::path::PathBuf;

use thiserror::Error;

use wildlife_lib::dataset::{DATA_PATH_ENV, DEFAULT_DATA_PATH};

/// Port used when neither `PORT` nor `SERVICE_PORT` is set.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid port {value:?} in {var}")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub data_path: PathBuf,
    pub public_dir: PathBuf,
    pub views_dir: PathBuf,
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            public_dir: PathBuf::from("public"),
            views_dir: PathBuf::from("views"),
            port: DEFAULT_PORT,
        }
    }
}

impl ServiceConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_path = lookup(DATA_PATH_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);
        let public_dir = lookup("WILDLIFE_PUBLIC_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.public_dir);
        let views_dir = lookup("WILDLIFE_VIEWS_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.views_dir);

        let port = match ["PORT", "SERVICE_PORT"]
            .into_iter()
            .find_map(|var| lookup(var).filter(|v| !v.is_empty()).map(|v| (var, v)))
        {
            Some((var, value)) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { var, value })?,
            None => defaults.port,
        };

        Ok(Self {
            data_path,
            public_dir,
            views_dir,
            port,
        })
    }

    pub fn index_path(&self) -> PathBuf {
        self.views_dir.join("index.html")
    }
}
