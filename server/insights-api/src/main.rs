//! Binary entrypoint for the insights API.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use insights_api::{AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

  let config = ServiceConfig::from_env()?;
  tracing::debug!(?config, "loaded configuration");

  let state = Arc::new(AppState::new(&config));
  let app = insights_api::router(state);

  let addr = SocketAddr::new(config.bind, config.port);
  tracing::info!(%addr, "insights-api listening");

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
