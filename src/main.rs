//! Melody Magic server binary.
//!
//! Loads configuration, initializes logging, builds the PayPal gateway and
//! serves the HTTP API until Ctrl-C.

use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use melody_magic::adapters::http::{app_router, GenerationAppState};
use melody_magic::adapters::paypal::{PayPalConfig, PayPalGateway};
use melody_magic::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    if !config.paypal.has_credentials() {
        tracing::warn!("PayPal credentials are not set; every payment verification will fail");
    }

    let paypal = PayPalConfig::from_settings(&config.paypal);
    tracing::info!(
        mode = ?config.paypal.mode,
        base_url = paypal.base_url(),
        timeout_secs = paypal.timeout().as_secs(),
        "PayPal gateway configured"
    );

    let gateway = PayPalGateway::new(paypal)?;
    let state = GenerationAppState::new(Arc::new(gateway));
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        "Melody Magic server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured level. JSON output in production.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if server.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
