//! HTTP client for the Shopify Admin GraphQL API.
//!
//! Only the product inventory query is implemented. Calls are single-shot:
//! no retry, no caching.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::ShopifyError;
use crate::query::PRODUCT_INVENTORY_QUERY;
use crate::types::{
    GraphQlRequest, GraphQlResponse, ProductInventory, ProductQueryData, ProductVariables,
};

/// Header Shopify reads the Admin API access token from.
pub(crate) const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Payload reported when a failed response carries no `errors` value.
pub const DEFAULT_ERROR_MESSAGE: &str = "Error fetching product data";

/// Client for a single store's Admin GraphQL endpoint.
pub struct AdminClient {
    client: Client,
    endpoint: Url,
    access_token: String,
}

impl AdminClient {
    /// Creates an `AdminClient` for `endpoint`, e.g.
    /// `https://{store}.myshopify.com/admin/api/2023-01/graphql.json`.
    ///
    /// # Errors
    ///
    /// - [`ShopifyError::InvalidEndpoint`] if `endpoint` is not an absolute URL.
    /// - [`ShopifyError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn new(
        endpoint: &str,
        access_token: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ShopifyError> {
        let endpoint = Url::parse(endpoint).map_err(|e| ShopifyError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            access_token: access_token.to_owned(),
        })
    }

    /// Fetches a product's variants and per-location `available` quantities.
    ///
    /// `product_id` is passed through untouched as the `$productId` variable.
    ///
    /// # Errors
    ///
    /// - [`ShopifyError::UnexpectedStatus`]: non-2xx status (not retried).
    /// - [`ShopifyError::GraphQl`]: 2xx with `errors` and no `data`.
    /// - [`ShopifyError::MissingData`]: 2xx with neither `data` nor `errors`.
    /// - [`ShopifyError::ProductNotFound`]: `data.product` is null.
    /// - [`ShopifyError::Timeout`] / [`ShopifyError::Http`]: transport failure.
    /// - [`ShopifyError::Deserialize`]: body does not match the query shape.
    pub async fn fetch_product_inventory(
        &self,
        product_id: &str,
    ) -> Result<ProductInventory, ShopifyError> {
        let request = GraphQlRequest {
            query: PRODUCT_INVENTORY_QUERY,
            variables: ProductVariables { product_id },
        };

        tracing::debug!(product_id, endpoint = %self.endpoint, "querying product inventory");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ShopifyError::UnexpectedStatus {
                status: status.as_u16(),
                payload: error_payload(&body),
            });
        }

        let parsed: GraphQlResponse<ProductQueryData> =
            serde_json::from_str(&body).map_err(|e| ShopifyError::Deserialize {
                context: format!("product inventory for {product_id}"),
                source: e,
            })?;

        let Some(data) = parsed.data else {
            return Err(match parsed.errors {
                Some(errors) if !errors.is_null() => ShopifyError::GraphQl { errors },
                _ => ShopifyError::MissingData {
                    product_id: product_id.to_owned(),
                },
            });
        };

        if let Some(errors) = parsed.errors.as_ref().filter(|e| !e.is_null()) {
            tracing::warn!(product_id, errors = %errors, "Shopify returned partial data with errors");
        }

        data.product.ok_or_else(|| ShopifyError::ProductNotFound {
            product_id: product_id.to_owned(),
        })
    }
}

/// Extracts a truthy `errors` value from a failed response body, falling back
/// to [`DEFAULT_ERROR_MESSAGE`] for non-JSON bodies or empty values.
fn error_payload(body: &str) -> serde_json::Value {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("errors").cloned())
        .filter(is_truthy)
        .unwrap_or_else(|| serde_json::Value::String(DEFAULT_ERROR_MESSAGE.to_owned()))
}

fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
