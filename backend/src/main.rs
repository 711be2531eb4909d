//! Backend entry-point: selects a storage backend and serves the REST API.

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use backend::inbound::http::health::HealthState;
use backend::server::{build_storage, create_server, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(err) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %err, "tracing init failed");
    }

    let config = ServerConfig::from_env()?;
    let storage = build_storage(&config).await;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, &config, storage)?;
    info!(addr = %config.bind_addr(), "listening");
    server.await
}
