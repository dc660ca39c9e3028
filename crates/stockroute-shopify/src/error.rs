use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShopifyError {
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("Shopify request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Non-2xx response. `payload` is the body's `errors` value when present,
    /// otherwise a generic message.
    #[error("unexpected HTTP status {status} from Shopify Admin API: {payload}")]
    UnexpectedStatus {
        status: u16,
        payload: serde_json::Value,
    },

    /// 2xx response carrying a GraphQL `errors` array and no `data`.
    #[error("Shopify GraphQL errors: {errors}")]
    GraphQl { errors: serde_json::Value },

    /// 2xx response with neither `data` nor `errors`.
    #[error("Shopify response for product {product_id} had no data")]
    MissingData { product_id: String },

    #[error("product not found: {product_id}")]
    ProductNotFound { product_id: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid Admin API endpoint \"{endpoint}\": {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

impl From<reqwest::Error> for ShopifyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ShopifyError::Timeout(e)
        } else {
            ShopifyError::Http(e)
        }
    }
}

impl ShopifyError {
    /// The upstream error payload to surface to API callers, if this error
    /// carries one.
    #[must_use]
    pub fn upstream_payload(&self) -> Option<&serde_json::Value> {
        match self {
            ShopifyError::UnexpectedStatus { payload, .. } => Some(payload),
            ShopifyError::GraphQl { errors } => Some(errors),
            _ => None,
        }
    }
}
