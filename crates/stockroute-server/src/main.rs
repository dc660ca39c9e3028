mod api;
mod lookup;
mod middleware;

use stockroute_core::{load_registry, WarehouseRegistry};
use stockroute_geocode::NominatimClient;
use stockroute_shopify::AdminClient;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = stockroute_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(config.env.ansi_logs())
        .init();

    tracing::info!(config = ?config, "starting stockroute-server");

    let registry = match &config.warehouses_path {
        Some(path) => load_registry(path)?,
        None => WarehouseRegistry::builtin(),
    };
    for postal_code in registry.unmapped_postal_codes() {
        tracing::warn!(
            postal_code,
            "no inventory location maps to this warehouse; its stock can only be offered as fallback"
        );
    }
    tracing::info!(warehouses = registry.sites().len(), "warehouse registry loaded");

    let geocoder = NominatimClient::with_base_url(
        &config.geocoder_url,
        config.upstream_timeout_secs,
        &config.user_agent,
        &config.geocoder_country,
    )?;
    let shopify = AdminClient::new(
        &config.shopify_admin_api_url,
        &config.shopify_access_token,
        config.upstream_timeout_secs,
        &config.user_agent,
    )?;

    let app = build_app(AppState::new(
        registry,
        geocoder,
        shopify,
        config.geocode_miss_not_found,
    ));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
