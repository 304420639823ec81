//! Users API entry-point: loads settings, builds the store, and serves the
//! REST endpoints, landing page, and OpenAPI docs.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use users_api::inbound::http::health::HealthState;
use users_api::outbound::memory::InMemoryUserStore;
use users_api::settings::ServerSettings;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let id_policy = settings
        .id_policy()
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let store = Arc::new(InMemoryUserStore::seeded(id_policy));
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), ServerConfig::new(bind_addr, store))?;
    info!(address = %bind_addr, id_policy = %id_policy, "users API listening");

    let handle = server.handle();
    actix_web::rt::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for shutdown signal");
            return;
        }
        info!("shutdown requested; draining");
        health_state.begin_draining();
        handle.stop(true).await;
    });

    server.await
}
