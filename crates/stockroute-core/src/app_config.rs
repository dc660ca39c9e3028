use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    /// Whether log output uses ANSI colors.
    pub fn ansi_logs(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Shopify Admin GraphQL endpoint, including the API version segment.
    pub shopify_admin_api_url: String,
    pub shopify_access_token: String,
    pub geocoder_url: String,
    /// Country name sent with every postal code lookup.
    pub geocoder_country: String,
    pub user_agent: String,
    pub upstream_timeout_secs: u64,
    /// `None` selects the built-in registry.
    pub warehouses_path: Option<PathBuf>,
    /// Report an unresolvable postal code as 404 instead of the generic 500.
    pub geocode_miss_not_found: bool,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("shopify_admin_api_url", &self.shopify_admin_api_url)
            .field("shopify_access_token", &"[redacted]")
            .field("geocoder_url", &self.geocoder_url)
            .field("geocoder_country", &self.geocoder_country)
            .field("user_agent", &self.user_agent)
            .field("upstream_timeout_secs", &self.upstream_timeout_secs)
            .field("warehouses_path", &self.warehouses_path)
            .field("geocode_miss_not_found", &self.geocode_miss_not_found)
            .finish()
    }
}
