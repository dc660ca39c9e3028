use super::*;

fn test_client(base_url: &str) -> NominatimClient {
    NominatimClient::with_base_url(base_url, 30, "stockroute-test/0.1", "India")
        .expect("client construction should not fail")
}

#[test]
fn build_url_constructs_search_query() {
    let client = test_client("https://nominatim.openstreetmap.org");
    let url = client.build_url("342001").unwrap();
    assert_eq!(
        url.as_str(),
        "https://nominatim.openstreetmap.org/search?postalcode=342001&country=India&format=json"
    );
}

#[test]
fn build_url_strips_trailing_slash() {
    let client = test_client("https://nominatim.openstreetmap.org///");
    let url = client.build_url("313001").unwrap();
    assert!(
        url.as_str()
            .starts_with("https://nominatim.openstreetmap.org/search?"),
        "got: {url}"
    );
}

#[test]
fn build_url_keeps_base_path_prefix() {
    let client = test_client("https://geo.example.com/nominatim");
    let url = client.build_url("342001").unwrap();
    assert!(
        url.as_str()
            .starts_with("https://geo.example.com/nominatim/search?"),
        "got: {url}"
    );
}

#[test]
fn build_url_encodes_special_characters() {
    let client = test_client("https://nominatim.openstreetmap.org");
    let url = client.build_url("34 2001&x=1").unwrap();
    assert!(
        url.as_str().contains("postalcode=34+2001%26x%3D1"),
        "postal code should be percent-encoded: {url}"
    );
}

#[test]
fn with_base_url_rejects_garbage() {
    let result = NominatimClient::with_base_url("not a url", 30, "ua", "India");
    assert!(matches!(result, Err(GeocodeError::InvalidBaseUrl { .. })));
}

#[test]
fn parse_coordinate_accepts_padded_decimal() {
    assert!((parse_coordinate("1", " 26.2389 ").unwrap() - 26.2389).abs() < 1e-9);
}

#[test]
fn parse_coordinate_rejects_text() {
    let err = parse_coordinate("342001", "north").unwrap_err();
    assert!(matches!(err, GeocodeError::InvalidCoordinate { ref value, .. } if value == "north"));
}

#[test]
fn place_keeps_optional_identity_fields() {
    let place: crate::types::NominatimPlace = serde_json::from_str(
        r#"{"place_id":281476393,"lat":"26.2389","lon":"73.0243","display_name":"Jodhpur, Rajasthan, India"}"#,
    )
    .expect("parse");
    assert_eq!(place.place_id, Some(281_476_393));
    assert_eq!(place.display_name.as_deref(), Some("Jodhpur, Rajasthan, India"));

    let bare: crate::types::NominatimPlace =
        serde_json::from_str(r#"{"lat":"24.5983","lon":"73.7243"}"#).expect("parse");
    assert!(bare.place_id.is_none());
}
