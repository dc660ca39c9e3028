use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_SHOPIFY_ADMIN_API_URL: &str =
    "https://blue-city-store.myshopify.com/admin/api/2023-01/graphql.json";
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_bool = |var: &str, default: bool| -> Result<bool, ConfigError> {
        match lookup(var) {
            Err(_) => Ok(default),
            Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" | "" => Ok(false),
                other => Err(invalid(var, format!("expected a boolean, got '{other}'"))),
            },
        }
    };

    let shopify_access_token = require("SHOPIFY_API_KEY")?;
    let shopify_admin_api_url = or_default("SHOPIFY_ADMIN_API_URL", DEFAULT_SHOPIFY_ADMIN_API_URL);

    let env = parse_environment(&or_default("STOCKROUTE_ENV", "development"))?;
    let bind_addr = parse_addr("STOCKROUTE_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("STOCKROUTE_LOG_LEVEL", "info");

    let geocoder_url = or_default("STOCKROUTE_GEOCODER_URL", DEFAULT_GEOCODER_URL);
    let geocoder_country = or_default("STOCKROUTE_GEOCODER_COUNTRY", "India");
    let user_agent = or_default(
        "STOCKROUTE_USER_AGENT",
        "stockroute/0.1 (pincode-availability)",
    );

    let upstream_timeout_secs = parse_u64("STOCKROUTE_UPSTREAM_TIMEOUT_SECS", "10")?;
    if upstream_timeout_secs == 0 {
        return Err(invalid(
            "STOCKROUTE_UPSTREAM_TIMEOUT_SECS",
            "timeout must be at least 1 second".to_string(),
        ));
    }

    let warehouses_path = lookup("STOCKROUTE_WAREHOUSES_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);
    let geocode_miss_not_found = parse_bool("STOCKROUTE_GEOCODE_MISS_NOT_FOUND", false)?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        shopify_admin_api_url,
        shopify_access_token,
        geocoder_url,
        geocoder_country,
        user_agent,
        upstream_timeout_secs,
        warehouses_path,
        geocode_miss_not_found,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "STOCKROUTE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
