//! Read-only queries over a loaded list of sightings.
//!
//! Every function borrows the input slice and derives a new value from it;
//! none of them mutate or reorder the records they were given.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::sighting::{Sighting, SightingSummary};

static MISSING_SPECIES: Value = Value::Null;

/// Sightings recorded in a single habitat.
#[derive(Debug, Clone, Serialize)]
pub struct HabitatMatches<'a> {
    pub habitat: String,
    pub sightings: Vec<&'a Sighting>,
    pub count: usize,
}

/// Position of the first exact species match.
#[derive(Debug, Clone, Serialize)]
pub struct SpeciesPosition<'a> {
    pub index: usize,
    pub sighting: &'a Sighting,
}

/// Every sighting, in load order.
pub fn all(sightings: &[Sighting]) -> &[Sighting] {
    sightings
}

/// Sightings flagged as verified, in load order.
pub fn verified_only(sightings: &[Sighting]) -> Vec<&Sighting> {
    sightings.iter().filter(|s| s.is_verified()).collect()
}

/// Distinct species values in order of first appearance.
///
/// Values are compared as stored; a record without `species` contributes `null`.
pub fn species_list(sightings: &[Sighting]) -> Vec<&Value> {
    let mut distinct: Vec<&Value> = Vec::new();
    for sighting in sightings {
        let species = sighting
            .fields()
            .get("species")
            .unwrap_or(&MISSING_SPECIES);
        if !distinct.contains(&species) {
            distinct.push(species);
        }
    }
    distinct
}

/// Sightings whose habitat equals `habitat` exactly (case-sensitive).
pub fn by_habitat<'a>(sightings: &'a [Sighting], habitat: &str) -> HabitatMatches<'a> {
    let matches: Vec<&Sighting> = sightings
        .iter()
        .filter(|s| s.habitat() == Some(habitat))
        .collect();
    HabitatMatches {
        habitat: habitat.to_string(),
        count: matches.len(),
        sightings: matches,
    }
}

/// First sighting whose species contains `term`, ignoring case.
pub fn search_species_contains<'a>(sightings: &'a [Sighting], term: &str) -> Result<&'a Sighting> {
    let needle = term.to_lowercase();
    sightings
        .iter()
        .find(|s| {
            s.species()
                .is_some_and(|species| species.to_lowercase().contains(&needle))
        })
        .ok_or_else(|| Error::NoSpeciesMatch {
            term: term.to_string(),
        })
}

/// Index of the first sighting whose species equals `name` exactly.
pub fn find_index_by_species_exact<'a>(
    sightings: &'a [Sighting],
    name: &str,
) -> Result<SpeciesPosition<'a>> {
    sightings
        .iter()
        .position(|s| s.species() == Some(name))
        .map(|index| SpeciesPosition {
            index,
            sighting: &sightings[index],
        })
        .ok_or_else(|| Error::SpeciesNotFound {
            name: name.to_string(),
        })
}

/// The `n` most recent sightings, newest first, projected to [`SightingSummary`].
///
/// Unparsable or missing dates sort after every parsable one. Equal dates keep
/// load order.
pub fn top_n_recent(sightings: &[Sighting], n: usize) -> Vec<SightingSummary> {
    let mut ordered: Vec<(Option<chrono::NaiveDateTime>, &Sighting)> =
        sightings.iter().map(|s| (s.observed_at(), s)).collect();
    // `None < Some(_)`, so reversing the comparison puts unparsable dates last.
    ordered.sort_by(|a, b| b.0.cmp(&a.0));

    ordered
        .into_iter()
        .take(n)
        .map(|(_, s)| s.summary())
        .collect()
}
