//! Wildlife sightings library entry points.
//!
//! This crate exposes helpers to locate the sightings document, decode it
//! into [`Sighting`] records, and answer the fixed set of read-only queries
//! served over HTTP. Higher-level consumers (the HTTP service) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod query;
pub mod sighting;

pub use dataset::{load_sightings, parse_sightings, resolve_data_path, DEFAULT_DATA_PATH};
pub use error::{Error, LoadFailure, Result, NOT_FOUND_INDEX};
pub use query::{
    all, by_habitat, find_index_by_species_exact, search_species_contains, species_list,
    top_n_recent, verified_only, HabitatMatches, SpeciesPosition,
};
pub use sighting::{
    parse_date_value, parse_sighting_date, Sighting, SightingSummary, SightingsDocument,
};
