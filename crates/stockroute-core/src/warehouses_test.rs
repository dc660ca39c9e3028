use super::*;

fn site(code: &str, latitude: f64, longitude: f64) -> WarehouseSite {
    WarehouseSite {
        postal_code: code.to_string(),
        coordinates: GeoPoint::new(latitude, longitude),
    }
}

#[test]
fn builtin_registry_is_fully_mapped() {
    let registry = WarehouseRegistry::builtin();
    assert_eq!(registry.sites().len(), 2);
    assert!(registry.unmapped_postal_codes().is_empty());
    assert_eq!(
        registry.postal_code_for_location("Udaipur Warehouse"),
        Some("313001")
    );
    assert_eq!(
        registry.postal_code_for_location("Air force central school scheme Jodhpur"),
        Some("342001")
    );
}

#[test]
fn select_nearest_picks_jodhpur_for_a_jodhpur_point() {
    let registry = WarehouseRegistry::builtin();
    // Jodhpur railway station area
    let nearest = registry
        .select_nearest(&GeoPoint::new(26.2846, 73.0225))
        .expect("registry is non-empty");
    assert_eq!(nearest.postal_code, "342001");
}

#[test]
fn select_nearest_picks_udaipur_for_a_udaipur_point() {
    let registry = WarehouseRegistry::builtin();
    let nearest = registry
        .select_nearest(&GeoPoint::new(24.5854, 73.7125))
        .expect("registry is non-empty");
    assert_eq!(nearest.postal_code, "313001");
}

#[test]
fn select_nearest_on_empty_registry_is_none() {
    let registry = WarehouseRegistry::default();
    assert!(registry.is_empty());
    assert!(registry.select_nearest(&GeoPoint::new(0.0, 0.0)).is_none());
}

#[test]
fn select_nearest_tie_goes_to_first_entry() {
    // Both sites sit 1 degree of longitude from the equator origin.
    let registry = WarehouseRegistry::new(
        vec![site("east", 0.0, 1.0), site("west", 0.0, -1.0)],
        HashMap::new(),
    );
    let nearest = registry.select_nearest(&GeoPoint::new(0.0, 0.0)).unwrap();
    assert_eq!(nearest.postal_code, "east");

    let reversed = WarehouseRegistry::new(
        vec![site("west", 0.0, -1.0), site("east", 0.0, 1.0)],
        HashMap::new(),
    );
    let nearest = reversed.select_nearest(&GeoPoint::new(0.0, 0.0)).unwrap();
    assert_eq!(nearest.postal_code, "west");
}

#[test]
fn select_nearest_scans_every_entry() {
    let registry = WarehouseRegistry::new(
        vec![
            site("far", 10.0, 10.0),
            site("middle", 5.0, 5.0),
            site("near", 1.0, 1.0),
        ],
        HashMap::new(),
    );
    let nearest = registry.select_nearest(&GeoPoint::new(0.0, 0.0)).unwrap();
    assert_eq!(nearest.postal_code, "near");
}

#[test]
fn unmapped_postal_codes_reports_registry_gaps() {
    let registry = WarehouseRegistry::new(
        vec![site("342001", 26.2389, 73.0243), site("313001", 24.6, 73.7)],
        HashMap::from([("Jodhpur".to_string(), "342001".to_string())]),
    );
    assert_eq!(registry.unmapped_postal_codes(), vec!["313001"]);
}

#[test]
fn parse_registry_reads_yaml() {
    let yaml = r#"
warehouses:
  - postal_code: "342001"
    latitude: 26.2389
    longitude: 73.0243
    location_names: ["Air force central school scheme Jodhpur"]
  - postal_code: "313001"
    latitude: 24.598284
    longitude: 73.724251
    location_names: ["Udaipur Warehouse"]
"#;
    let registry = parse_registry(yaml).expect("valid registry");
    let codes: Vec<&str> = registry
        .sites()
        .iter()
        .map(|s| s.postal_code.as_str())
        .collect();
    assert_eq!(codes, vec!["342001", "313001"]);
    assert_eq!(
        registry.postal_code_for_location("Udaipur Warehouse"),
        Some("313001")
    );
}

#[test]
fn parse_registry_rejects_empty_list() {
    let result = parse_registry("warehouses: []");
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn parse_registry_rejects_duplicate_postal_code() {
    let yaml = r#"
warehouses:
  - { postal_code: "342001", latitude: 26.0, longitude: 73.0 }
  - { postal_code: "342001", latitude: 24.0, longitude: 73.0 }
"#;
    let err = parse_registry(yaml).unwrap_err();
    assert!(
        matches!(err, ConfigError::Validation(ref msg) if msg.contains("duplicate")),
        "got: {err:?}"
    );
}

#[test]
fn parse_registry_rejects_out_of_range_coordinates() {
    let yaml = r#"
warehouses:
  - { postal_code: "342001", latitude: 126.0, longitude: 73.0 }
"#;
    assert!(matches!(
        parse_registry(yaml),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn parse_registry_rejects_shared_location_name() {
    let yaml = r#"
warehouses:
  - { postal_code: "1", latitude: 1.0, longitude: 1.0, location_names: ["Main"] }
  - { postal_code: "2", latitude: 2.0, longitude: 2.0, location_names: ["Main"] }
"#;
    assert!(matches!(
        parse_registry(yaml),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn parse_registry_surfaces_yaml_errors() {
    let result = parse_registry("warehouses: [ {");
    assert!(matches!(result, Err(ConfigError::WarehousesFileParse(_))));
}

#[test]
fn load_registry_reports_missing_file() {
    let result = load_registry(Path::new("/nonexistent/warehouses.yaml"));
    assert!(matches!(result, Err(ConfigError::WarehousesFileIo { .. })));
}
