//! HTTP client for the OpenStreetMap Nominatim search API.
//!
//! Resolves a postal code to a single [`GeoPoint`]. Calls are single-shot:
//! no retry and no caching across invocations.

use std::time::Duration;

use reqwest::{Client, Url};
use stockroute_core::GeoPoint;

use crate::error::GeocodeError;
use crate::types::NominatimPlace;

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/";

/// Client for the Nominatim `search` endpoint.
///
/// Use [`NominatimClient::new`] for production or
/// [`NominatimClient::with_base_url`] to point at a mock server in tests.
pub struct NominatimClient {
    client: Client,
    base_url: Url,
    country: String,
}

impl NominatimClient {
    /// Creates a client pointed at the public Nominatim instance.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str, country: &str) -> Result<Self, GeocodeError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs, user_agent, country)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        country: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join("search")` appends a segment
        // instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| GeocodeError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: parsed,
            country: country.to_owned(),
        })
    }

    /// Resolves `postal_code` to coordinates using the first candidate.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::NotFound`] if the provider returns no candidates.
    /// - [`GeocodeError::Timeout`] if the call exceeds the client timeout.
    /// - [`GeocodeError::Http`] on network failure.
    /// - [`GeocodeError::UnexpectedStatus`] on a non-2xx status.
    /// - [`GeocodeError::Deserialize`] if the body is not a candidate array.
    /// - [`GeocodeError::InvalidCoordinate`] if the first candidate's
    ///   latitude or longitude does not parse to an in-range number.
    pub async fn resolve(&self, postal_code: &str) -> Result<GeoPoint, GeocodeError> {
        let url = self.build_url(postal_code)?;
        tracing::debug!(postal_code, url = %url, "geocoding postal code");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let places: Vec<NominatimPlace> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("search(postalcode={postal_code})"),
                source: e,
            })?;

        let Some(first) = places.into_iter().next() else {
            return Err(GeocodeError::NotFound {
                postal_code: postal_code.to_owned(),
            });
        };

        let point = GeoPoint::new(
            parse_coordinate(postal_code, &first.lat)?,
            parse_coordinate(postal_code, &first.lon)?,
        );
        if !point.is_valid() {
            return Err(GeocodeError::InvalidCoordinate {
                postal_code: postal_code.to_owned(),
                value: format!("{},{}", first.lat, first.lon),
            });
        }

        tracing::debug!(
            postal_code,
            latitude = point.latitude,
            longitude = point.longitude,
            place_id = first.place_id,
            place = first.display_name.as_deref().unwrap_or(""),
            "postal code resolved"
        );
        Ok(point)
    }

    /// Builds the search URL with percent-encoded query parameters.
    fn build_url(&self, postal_code: &str) -> Result<Url, GeocodeError> {
        let mut url =
            self.base_url
                .join("search")
                .map_err(|e| GeocodeError::InvalidBaseUrl {
                    base_url: self.base_url.to_string(),
                    reason: e.to_string(),
                })?;
        url.query_pairs_mut()
            .append_pair("postalcode", postal_code)
            .append_pair("country", &self.country)
            .append_pair("format", "json");
        Ok(url)
    }
}

fn parse_coordinate(postal_code: &str, raw: &str) -> Result<f64, GeocodeError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| GeocodeError::InvalidCoordinate {
            postal_code: postal_code.to_owned(),
            value: raw.to_owned(),
        })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
