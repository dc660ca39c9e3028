//! The availability pipeline: geocode the postal code, fetch inventory,
//! pick the nearest warehouse, apply the fulfillment policy.

use stockroute_core::{resolve_availability, SelectionResult};
use stockroute_geocode::GeocodeError;
use stockroute_shopify::{flatten_inventory, ShopifyError};
use thiserror::Error;

use crate::api::AppState;

/// Failure of one pipeline stage. Keeps the upstream cause for logging.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("geocoding failed: {0}")]
    Geocode(#[from] GeocodeError),

    #[error("inventory fetch failed: {0}")]
    Inventory(#[from] ShopifyError),

    #[error("no warehouse available for selection")]
    NoWarehouse,
}

impl LookupError {
    pub fn stage(&self) -> &'static str {
        match self {
            LookupError::Geocode(_) => "geocode",
            LookupError::Inventory(_) => "fetch_inventory",
            LookupError::NoWarehouse => "select_nearest",
        }
    }
}

/// Runs the full pipeline for one request.
///
/// The geocoder and inventory calls are independent, so they run
/// concurrently. Their results are checked geocode-first so the reported
/// failure is the same one a sequential run would hit.
///
/// # Errors
///
/// Returns the first failing stage as a [`LookupError`].
pub async fn check_availability(
    state: &AppState,
    pincode: &str,
    product_id: &str,
) -> Result<SelectionResult, LookupError> {
    let (point, product) = tokio::join!(
        state.geocoder.resolve(pincode),
        state.shopify.fetch_product_inventory(product_id),
    );
    let point = point?;
    let product = product?;

    let records = flatten_inventory(&product);
    let nearest = state
        .registry
        .select_nearest(&point)
        .ok_or(LookupError::NoWarehouse)?;

    tracing::debug!(
        pincode,
        product_id,
        latitude = point.latitude,
        longitude = point.longitude,
        nearest = %nearest.postal_code,
        records = records.len(),
        "nearest warehouse selected"
    );

    Ok(resolve_availability(
        &records,
        &nearest.postal_code,
        &state.registry,
    ))
}
