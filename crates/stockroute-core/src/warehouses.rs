//! Fixed warehouse registry: postal code → coordinates, plus the mapping from
//! inventory-system location names to warehouse postal codes.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseSite {
    pub postal_code: String,
    pub coordinates: GeoPoint,
}

/// One entry of the warehouses YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseConfig {
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Location names the inventory system reports for this warehouse.
    #[serde(default)]
    pub location_names: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct WarehousesFile {
    pub warehouses: Vec<WarehouseConfig>,
}

/// Read-only warehouse data shared by every request.
///
/// `sites` keeps file order; [`WarehouseRegistry::select_nearest`] relies on
/// it to break distance ties.
#[derive(Debug, Clone, Default)]
pub struct WarehouseRegistry {
    sites: Vec<WarehouseSite>,
    location_codes: HashMap<String, String>,
}

impl WarehouseRegistry {
    /// Builds a registry without validation. Names that point at postal codes
    /// missing from `sites` are kept; they simply never match the nearest tier.
    #[must_use]
    pub fn new(sites: Vec<WarehouseSite>, location_codes: HashMap<String, String>) -> Self {
        Self {
            sites,
            location_codes,
        }
    }

    /// The two warehouses the storefront ships from.
    #[must_use]
    pub fn builtin() -> Self {
        let sites = vec![
            WarehouseSite {
                postal_code: "342001".to_string(),
                coordinates: GeoPoint::new(26.2389, 73.0243),
            },
            WarehouseSite {
                postal_code: "313001".to_string(),
                coordinates: GeoPoint::new(24.598_284, 73.724_251),
            },
        ];
        let location_codes = HashMap::from([
            ("Udaipur Warehouse".to_string(), "313001".to_string()),
            (
                "Air force central school scheme Jodhpur".to_string(),
                "342001".to_string(),
            ),
        ]);
        Self::new(sites, location_codes)
    }

    /// Converts a parsed warehouses file into a registry after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] on an empty list, blank or duplicate
    /// postal codes, out-of-range coordinates, or a location name claimed by
    /// two warehouses.
    pub fn from_file(file: WarehousesFile) -> Result<Self, ConfigError> {
        validate_warehouses(&file)?;

        let mut sites = Vec::with_capacity(file.warehouses.len());
        let mut location_codes = HashMap::new();
        for warehouse in file.warehouses {
            for name in warehouse.location_names {
                location_codes.insert(name, warehouse.postal_code.clone());
            }
            sites.push(WarehouseSite {
                coordinates: GeoPoint::new(warehouse.latitude, warehouse.longitude),
                postal_code: warehouse.postal_code,
            });
        }

        Ok(Self::new(sites, location_codes))
    }

    #[must_use]
    pub fn sites(&self) -> &[WarehouseSite] {
        &self.sites
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Postal code of the warehouse the inventory system calls `location_name`.
    #[must_use]
    pub fn postal_code_for_location(&self, location_name: &str) -> Option<&str> {
        self.location_codes.get(location_name).map(String::as_str)
    }

    /// Registry postal codes that no location name maps to. Stock at these
    /// warehouses can only ever be offered through the fallback tier.
    #[must_use]
    pub fn unmapped_postal_codes(&self) -> Vec<&str> {
        let mapped: HashSet<&str> = self.location_codes.values().map(String::as_str).collect();
        self.sites
            .iter()
            .map(|s| s.postal_code.as_str())
            .filter(|code| !mapped.contains(code))
            .collect()
    }

    /// The warehouse closest to `point` by great-circle distance.
    ///
    /// Uses a strict less-than, so the earliest site wins an exact tie.
    /// Returns `None` only for an empty registry.
    #[must_use]
    pub fn select_nearest(&self, point: &GeoPoint) -> Option<&WarehouseSite> {
        let mut nearest: Option<(&WarehouseSite, f64)> = None;
        for site in &self.sites {
            let distance = point.distance_to(&site.coordinates);
            match nearest {
                Some((_, best)) if distance >= best => {}
                _ => nearest = Some((site, distance)),
            }
        }
        nearest.map(|(site, _)| site)
    }
}

/// Load and validate the warehouse registry from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_registry(path: &Path) -> Result<WarehouseRegistry, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::WarehousesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_registry(&content)
}

/// Parse and validate a warehouse registry from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_registry(yaml: &str) -> Result<WarehouseRegistry, ConfigError> {
    let file: WarehousesFile = serde_yaml::from_str(yaml)?;
    WarehouseRegistry::from_file(file)
}

fn validate_warehouses(file: &WarehousesFile) -> Result<(), ConfigError> {
    if file.warehouses.is_empty() {
        return Err(ConfigError::Validation(
            "at least one warehouse is required".to_string(),
        ));
    }

    let mut seen_codes = HashSet::new();
    let mut seen_names = HashSet::new();

    for warehouse in &file.warehouses {
        let code = warehouse.postal_code.trim();
        if code.is_empty() {
            return Err(ConfigError::Validation(
                "warehouse postal_code must be non-empty".to_string(),
            ));
        }

        if !seen_codes.insert(code) {
            return Err(ConfigError::Validation(format!(
                "duplicate warehouse postal_code: '{code}'"
            )));
        }

        let point = GeoPoint::new(warehouse.latitude, warehouse.longitude);
        if !point.is_valid() {
            return Err(ConfigError::Validation(format!(
                "warehouse '{code}' has out-of-range coordinates ({}, {})",
                warehouse.latitude, warehouse.longitude
            )));
        }

        for name in &warehouse.location_names {
            if name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "warehouse '{code}' has an empty location name"
                )));
            }
            if !seen_names.insert(name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "location name '{name}' is assigned to more than one warehouse"
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "warehouses_test.rs"]
mod tests;
