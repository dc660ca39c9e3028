use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use stockroute_core::SelectionResult;
use stockroute_geocode::GeocodeError;
use stockroute_shopify::ShopifyError;

use crate::lookup::{check_availability, LookupError};
use crate::middleware::RequestId;

use super::{ApiError, AppState};

pub(super) const MISSING_PARAMS: &str = "Missing pincode or productId";
pub(super) const OUT_OF_STOCK: &str = "Product is out of stock at all locations.";
pub(super) const PRODUCT_NOT_FOUND: &str = "Product not found";
pub(super) const NO_WAREHOUSE: &str = "No warehouse found near the provided pincode.";
pub(super) const PINCODE_NOT_FOUND: &str = "No coordinates found for the given pincode.";

#[derive(Debug, Deserialize)]
pub(super) struct CheckPincodeQuery {
    pub pincode: Option<String>,
    #[serde(rename = "productId")]
    pub product_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct AvailabilityBody {
    pub warehouse: String,
    pub quantity: i64,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub(super) struct OutOfStockBody {
    pub error: &'static str,
}

pub(super) async fn check_pincode(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<CheckPincodeQuery>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::warn!(
                request_id = %req_id.0,
                error = %rejection,
                "rejected malformed query string"
            );
            return ApiError::bad_request(MISSING_PARAMS).into_response();
        }
    };

    let (Some(pincode), Some(product_id)) = (
        query.pincode.filter(|p| !p.is_empty()),
        query.product_id.filter(|p| !p.is_empty()),
    ) else {
        return ApiError::bad_request(MISSING_PARAMS).into_response();
    };

    match check_availability(&state, &pincode, &product_id).await {
        Ok(result) => {
            let message = result.message();
            match (result, message) {
                (
                    SelectionResult::Available {
                        warehouse,
                        quantity,
                        tier,
                    },
                    Some(message),
                ) => {
                    tracing::info!(
                        request_id = %req_id.0,
                        pincode = %pincode,
                        product_id = %product_id,
                        %tier,
                        warehouse = %warehouse,
                        quantity,
                        "product available"
                    );
                    Json(AvailabilityBody {
                        warehouse,
                        quantity,
                        message,
                    })
                    .into_response()
                }
                _ => {
                    tracing::info!(
                        request_id = %req_id.0,
                        pincode = %pincode,
                        product_id = %product_id,
                        "product out of stock at all locations"
                    );
                    Json(OutOfStockBody {
                        error: OUT_OF_STOCK,
                    })
                    .into_response()
                }
            }
        }
        Err(e) => {
            log_lookup_error(&req_id, &pincode, &product_id, &e);
            map_lookup_error(&e, state.geocode_miss_not_found).into_response()
        }
    }
}

/// Collapses a stage failure to the client-visible error.
pub(super) fn map_lookup_error(error: &LookupError, geocode_miss_not_found: bool) -> ApiError {
    match error {
        LookupError::Geocode(GeocodeError::NotFound { .. }) if geocode_miss_not_found => {
            ApiError::not_found(PINCODE_NOT_FOUND)
        }
        LookupError::Inventory(ShopifyError::ProductNotFound { .. }) => {
            ApiError::not_found(PRODUCT_NOT_FOUND)
        }
        LookupError::Inventory(e) => match e.upstream_payload() {
            Some(payload) => ApiError::new("upstream_error", payload.clone()),
            None => ApiError::server_error(),
        },
        LookupError::NoWarehouse => ApiError::not_found(NO_WAREHOUSE),
        LookupError::Geocode(_) => ApiError::server_error(),
    }
}

fn log_lookup_error(req_id: &RequestId, pincode: &str, product_id: &str, error: &LookupError) {
    let expected = matches!(
        error,
        LookupError::Geocode(GeocodeError::NotFound { .. })
            | LookupError::Inventory(ShopifyError::ProductNotFound { .. })
    );
    if expected {
        tracing::warn!(
            request_id = %req_id.0,
            pincode,
            product_id,
            stage = error.stage(),
            error = %error,
            "availability lookup found nothing"
        );
    } else {
        tracing::error!(
            request_id = %req_id.0,
            pincode,
            product_id,
            stage = error.stage(),
            error = %error,
            "availability lookup failed"
        );
    }
}
