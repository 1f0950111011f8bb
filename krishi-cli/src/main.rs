//! REST gateway binary
//!
//! Loads configuration, builds the provider clients and serves the
//! agricultural assistant API.

use clap::Parser;
use krishi_core::config::GatewayConfig;
use krishi_core::{AgriGateway, server};
use std::error::Error;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(
    name = "krishi-gateway",
    version,
    about = "Agricultural assistant gateway for Gemini and weatherapi.com"
)]
struct Args {
    /// Configuration file path (defaults to config/gateway.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address, overrides the config file and PORT
    #[arg(long)]
    addr: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    init_tracing();
    info!("Starting krishi-gateway");
    debug!(config = ?args.config, addr = ?args.addr, "CLI arguments parsed");

    let mut config = GatewayConfig::load(args.config.as_deref())?;
    if let Some(addr) = args.addr {
        config.server.bind = addr;
    }

    info!(
        model = config.gemini.model.as_str(),
        forecast_days = config.weather.forecast_days,
        gemini_key = config.has_gemini_key(),
        weather_key = config.has_weather_key(),
        "Configuration loaded"
    );
    if !config.has_gemini_key() {
        warn!("Gemini key missing; model-backed endpoints will answer 500");
    }
    if !config.has_weather_key() {
        warn!("Weather key missing; the advisory endpoint will answer 500");
    }

    let addr = config.server.bind;
    let gateway = Arc::new(AgriGateway::from_config(config));

    info!(%addr, "REST server starting");
    server::serve(gateway, addr).await?;

    info!("Gateway stopped");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .init();
}
