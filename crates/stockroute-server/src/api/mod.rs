mod pincode;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use stockroute_core::WarehouseRegistry;
use stockroute_geocode::NominatimClient;
use stockroute_shopify::AdminClient;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, REQUEST_ID_HEADER};

/// Shared per-process state. Everything behind it is read-only.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<WarehouseRegistry>,
    pub geocoder: Arc<NominatimClient>,
    pub shopify: Arc<AdminClient>,
    /// Answer an unresolvable postal code with 404 instead of 500.
    pub geocode_miss_not_found: bool,
}

impl AppState {
    pub fn new(
        registry: WarehouseRegistry,
        geocoder: NominatimClient,
        shopify: AdminClient,
        geocode_miss_not_found: bool,
    ) -> Self {
        Self {
            registry: Arc::new(registry),
            geocoder: Arc::new(geocoder),
            shopify: Arc::new(shopify),
            geocode_miss_not_found,
        }
    }
}

/// Error response. Serialized as `{ "error": ... }`; `code` only picks the status.
#[derive(Debug)]
pub struct ApiError {
    code: &'static str,
    error: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: serde_json::Value,
}

impl ApiError {
    pub fn new(code: &'static str, error: impl Into<serde_json::Value>) -> Self {
        Self {
            code,
            error: error.into(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("bad_request", message)
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("not_found", message)
    }

    pub fn server_error() -> Self {
        Self::new("internal_error", "Server error")
    }

    pub fn status(&self) -> StatusCode {
        match self.code {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        (status, Json(ErrorBody { error: self.error })).into_response()
    }
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    timestamp: DateTime<Utc>,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/check-pincode", get(pincode::check_pincode))
        .route(
            "/.netlify/functions/checkPincode",
            get(pincode::check_pincode),
        )
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http())
                .layer(build_cors()),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthData {
        status: "ok",
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
