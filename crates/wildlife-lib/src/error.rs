use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the wildlife library.
pub type Result<T> = std::result::Result<T, Error>;

/// Index reported when an exact species lookup finds nothing.
pub const NOT_FOUND_INDEX: i64 = -1;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The sightings document could not be read, parsed, or validated.
    ///
    /// The message is deliberately generic; the concrete cause (which may name
    /// the storage path) is only reachable through [`std::error::Error::source`].
    #[error("Unable to load sightings data. Please try again later.")]
    DataUnavailable {
        #[source]
        cause: LoadFailure,
    },

    /// Raised when no species contains the requested search term.
    #[error("No {term} sighting found.")]
    NoSpeciesMatch { term: String },

    /// Raised when no species exactly equals the requested name.
    #[error("{name} not found.")]
    SpeciesNotFound { name: String },
}

impl Error {
    /// Short machine-readable label, used for metrics and log fields.
    pub fn reason(&self) -> &'static str {
        match self {
            Error::DataUnavailable { cause } => cause.reason(),
            Error::NoSpeciesMatch { .. } | Error::SpeciesNotFound { .. } => "not_found",
        }
    }

    /// Sentinel index carried by a failed exact lookup.
    pub fn index(&self) -> Option<i64> {
        match self {
            Error::SpeciesNotFound { .. } => Some(NOT_FOUND_INDEX),
            _ => None,
        }
    }
}

impl From<LoadFailure> for Error {
    fn from(cause: LoadFailure) -> Self {
        Error::DataUnavailable { cause }
    }
}

/// Underlying reason a sightings document failed to load.
#[derive(Debug, Error)]
pub enum LoadFailure {
    /// Storage could not be read.
    #[error("failed to read sightings data from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Storage contents are not valid JSON.
    #[error("sightings data is not valid JSON")]
    Malformed(#[source] serde_json::Error),

    /// Valid JSON that is neither an array of records nor an object with a
    /// `sightings` array of records.
    #[error("invalid sightings format: expected an array or an object with a 'sightings' array")]
    Shape(#[source] serde_json::Error),
}

impl LoadFailure {
    pub fn reason(&self) -> &'static str {
        match self {
            LoadFailure::Read { .. } => "read_error",
            LoadFailure::Malformed(_) => "malformed",
            LoadFailure::Shape(_) => "invalid_shape",
        }
    }
}
