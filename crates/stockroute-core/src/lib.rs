pub mod app_config;
pub mod availability;
pub mod config;
pub mod geo;
pub mod warehouses;

pub use app_config::{AppConfig, Environment};
pub use availability::{resolve_availability, InventoryRecord, SelectionResult, SelectionTier};
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{haversine_meters, GeoPoint};
pub use warehouses::{load_registry, parse_registry, WarehouseRegistry, WarehouseSite};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read warehouses file {path}: {source}")]
    WarehousesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse warehouses file: {0}")]
    WarehousesFileParse(#[from] serde_yaml::Error),

    #[error("invalid warehouse registry: {0}")]
    Validation(String),
}
