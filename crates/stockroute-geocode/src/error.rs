use thiserror::Error;

/// Errors returned by the postal code geocoder.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The provider answered but had no candidate for the postal code.
    #[error("no coordinates found for postal code {postal_code}")]
    NotFound { postal_code: String },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// The request exceeded the configured timeout.
    #[error("geocoder request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A candidate carried a latitude or longitude that is not a usable number.
    #[error("invalid coordinate '{value}' for postal code {postal_code}")]
    InvalidCoordinate { postal_code: String, value: String },

    #[error("invalid geocoder base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl From<reqwest::Error> for GeocodeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GeocodeError::Timeout(e)
        } else {
            GeocodeError::Http(e)
        }
    }
}

impl GeocodeError {
    /// True when the provider simply had no match, as opposed to a failed call.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, GeocodeError::NotFound { .. })
    }
}
