//! Integration tests for `NominatimClient` using wiremock HTTP mocks.

use std::time::Duration;

use stockroute_geocode::{GeocodeError, NominatimClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> NominatimClient {
    NominatimClient::with_base_url(base_url, 5, "stockroute-test/0.1", "India")
        .expect("client construction should not fail")
}

#[tokio::test]
async fn resolve_returns_first_candidate() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        {
            "place_id": 1,
            "lat": "26.2389",
            "lon": "73.0243",
            "display_name": "Jodhpur, Rajasthan, 342001, India"
        },
        {
            "place_id": 2,
            "lat": "10.0",
            "lon": "10.0",
            "display_name": "Somewhere else"
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("postalcode", "342001"))
        .and(query_param("country", "India"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let point = client.resolve("342001").await.expect("should resolve");

    assert!((point.latitude - 26.2389).abs() < 1e-9);
    assert!((point.longitude - 73.0243).abs() < 1e-9);
}

#[tokio::test]
async fn resolve_empty_array_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.resolve("000000").await.unwrap_err();

    assert!(err.is_not_found(), "expected NotFound, got: {err:?}");
    assert!(matches!(err, GeocodeError::NotFound { ref postal_code } if postal_code == "000000"));
}

#[tokio::test]
async fn resolve_non_2xx_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.resolve("342001").await.unwrap_err();

    assert!(
        matches!(err, GeocodeError::UnexpectedStatus { status: 503, .. }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn resolve_malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.resolve("342001").await.unwrap_err();

    assert!(
        matches!(err, GeocodeError::Deserialize { .. }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn resolve_unparseable_latitude_is_invalid_coordinate() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{ "lat": "", "lon": "73.0" }])),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.resolve("342001").await.unwrap_err();

    assert!(
        matches!(err, GeocodeError::InvalidCoordinate { .. }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn resolve_slow_provider_is_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = NominatimClient::with_base_url(&server.uri(), 1, "stockroute-test/0.1", "India")
        .expect("client");
    let err = client.resolve("342001").await.unwrap_err();

    assert!(matches!(err, GeocodeError::Timeout(_)), "got: {err:?}");
}

#[tokio::test]
async fn resolve_sends_configured_country() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("country", "Nepal"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{ "lat": "27.7", "lon": "85.3" }])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = NominatimClient::with_base_url(&server.uri(), 5, "stockroute-test/0.1", "Nepal")
        .expect("client");
    let point = client.resolve("44600").await.expect("should resolve");
    assert!((point.latitude - 27.7).abs() < 1e-9);
}
