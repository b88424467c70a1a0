use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::error::Category;
use tracing::{debug, error};

use crate::error::{Error, LoadFailure, Result};
use crate::sighting::{Sighting, SightingsDocument};

/// Location of the sightings document when nothing else is configured.
pub const DEFAULT_DATA_PATH: &str = "data/sightings.json";

/// Environment variable overriding the sightings document location.
pub const DATA_PATH_ENV: &str = "WILDLIFE_DATA_PATH";

/// Resolve the sightings document location.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `WILDLIFE_DATA_PATH` environment variable.
/// 3. [`DEFAULT_DATA_PATH`], relative to the working directory.
pub fn resolve_data_path(target: Option<&Path>) -> PathBuf {
    if let Some(explicit) = target {
        return explicit.to_path_buf();
    }

    if let Some(env_path) = env::var_os(DATA_PATH_ENV) {
        if !env_path.is_empty() {
            return PathBuf::from(env_path);
        }
    }

    PathBuf::from(DEFAULT_DATA_PATH)
}

/// Read and decode the sightings document at `path`.
///
/// Every call hits storage; nothing is cached between calls.
pub fn load_sightings(path: &Path) -> Result<Vec<Sighting>> {
    let text = fs::read_to_string(path).map_err(|source| read_failure(path, source))?;
    parse_sightings(&text)
}

/// Decode an in-memory sightings document.
///
/// Accepts either a bare array of records or an object carrying them under
/// `sightings`. Anything else is reported as [`Error::DataUnavailable`].
pub fn parse_sightings(text: &str) -> Result<Vec<Sighting>> {
    let document: SightingsDocument = serde_json::from_str(text).map_err(|err| {
        let cause = match err.classify() {
            Category::Data => LoadFailure::Shape(err),
            Category::Syntax | Category::Eof | Category::Io => LoadFailure::Malformed(err),
        };
        unavailable(cause)
    })?;

    let sightings = document.into_sightings();
    debug!(count = sightings.len(), "decoded sightings document");
    Ok(sightings)
}

/// Wrap a storage read error, logging the concrete cause.
///
/// Exposed so async readers report failures exactly like [`load_sightings`].
pub fn read_failure(path: &Path, source: std::io::Error) -> Error {
    unavailable(LoadFailure::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn unavailable(cause: LoadFailure) -> Error {
    error!(reason = cause.reason(), error = ?cause, "failed to load sightings: {cause}");
    Error::from(cause)
}
