//! Backend entry-point: wires adapters, the registration use-case, and the
//! HTTP server.

mod server;

use std::sync::Arc;

use actix_web::{HttpServer, web};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::Registrar;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use backend::outbound::media::CloudinaryMediaStore;
use backend::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
use server::{ServerConfig, build_app};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env()?;

    let pool = DbPool::new(PoolConfig::new(config.database_url()))
        .await
        .map_err(|error| std::io::Error::other(error.to_string()))?;
    let media = CloudinaryMediaStore::new(config.cloudinary().clone())
        .map_err(|error| std::io::Error::other(error.to_string()))?;
    let registrar = Registrar::new(
        Arc::new(DieselUserRepository::new(pool)),
        Arc::new(media),
    );
    let state = web::Data::new(HttpState::new(Arc::new(registrar)));

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays accessible.
    let server_health_state = health_state.clone();
    let cors_origin = config.cors_origin().to_owned();
    let server = HttpServer::new(move || {
        build_app(
            state.clone(),
            server_health_state.clone(),
            cors_origin.clone(),
        )
    })
    .bind(config.bind_addr())?;

    health_state.mark_ready();
    server.run().await
}
