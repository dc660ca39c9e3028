//! Nominatim `/search` response types.
//!
//! The endpoint returns a bare JSON array of candidates. Coordinates arrive
//! as decimal strings (`"26.2389"`), not numbers.

use serde::Deserialize;

/// A single candidate from `GET /search?format=json`.
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    #[serde(default)]
    pub place_id: Option<i64>,
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}
