//! Sighting records and the on-disk document that carries them.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single wildlife observation, kept exactly as stored.
///
/// The document only has to be a sequence of JSON objects; individual fields
/// are read leniently through the accessors. A field that is missing or of an
/// unexpected type simply never matches a query. Serializing a `Sighting`
/// reproduces the stored object, key order included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sighting {
    fields: Map<String, Value>,
}

impl Sighting {
    /// Raw stored fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn id(&self) -> Option<&Value> {
        self.fields.get("id")
    }

    /// Species label, when stored as a string.
    pub fn species(&self) -> Option<&str> {
        self.fields.get("species").and_then(Value::as_str)
    }

    /// Habitat label, when stored as a string.
    pub fn habitat(&self) -> Option<&str> {
        self.fields.get("habitat").and_then(Value::as_str)
    }

    pub fn location(&self) -> Option<&Value> {
        self.fields.get("location")
    }

    pub fn date(&self) -> Option<&Value> {
        self.fields.get("date")
    }

    /// Only a literal `true` counts as verified.
    pub fn is_verified(&self) -> bool {
        matches!(self.fields.get("verified"), Some(Value::Bool(true)))
    }

    /// Parsed observation time, or `None` when `date` is absent or unparsable.
    pub fn observed_at(&self) -> Option<NaiveDateTime> {
        self.date().and_then(parse_date_value)
    }

    /// Project onto the fixed field set returned by the recent-sightings query.
    ///
    /// Fields absent from the record stay absent in the projection.
    pub fn summary(&self) -> SightingSummary {
        let field = |name: &str| self.fields.get(name).cloned();
        SightingSummary {
            id: field("id"),
            species: field("species"),
            location: field("location"),
            habitat: field("habitat"),
            date: field("date"),
            verified: field("verified"),
        }
    }
}

impl From<Map<String, Value>> for Sighting {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Reduced sighting shape. Field order is part of the response contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SightingSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub habitat: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<Value>,
}

/// The two accepted document layouts.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SightingsDocument {
    /// `[ {...}, {...} ]`
    Bare(Vec<Sighting>),
    /// `{ "sightings": [ {...} ] }`
    Wrapped { sightings: Vec<Sighting> },
}

impl SightingsDocument {
    pub fn into_sightings(self) -> Vec<Sighting> {
        match self {
            SightingsDocument::Bare(sightings) => sightings,
            SightingsDocument::Wrapped { sightings } => sightings,
        }
    }
}

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];

/// Interpret a stored `date` value.
///
/// Strings go through [`parse_sighting_date`]; numbers are epoch milliseconds.
pub fn parse_date_value(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(raw) => parse_sighting_date(raw),
        Value::Number(n) => {
            let millis = n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))?;
            DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
        }
        _ => None,
    }
}

/// Parse a sighting date into a UTC point in time.
///
/// Accepts RFC 3339 timestamps, naive date-times, plain dates (`2024-05-01`,
/// `2024/05/01`, `May 1, 2024`, taken as midnight UTC) and the partial forms
/// `2024-05` and `2024` (first day of the period).
pub fn parse_sighting_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .or_else(|| parse_partial_date(raw))
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

// `YYYY-MM` or `YYYY`.
fn parse_partial_date(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.split('-');
    let year = parts.next().filter(|y| y.len() == 4)?.parse().ok()?;
    let month = match parts.next() {
        Some(m) if m.len() == 2 => m.parse().ok()?,
        Some(_) => return None,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, 1)
}
