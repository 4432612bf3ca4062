//! Backend entry-point: seeds the stores and serves the recipe API.

mod server;

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use recipe_backend::example_data::{ExampleDataSettings, seed_stores_on_startup};
use recipe_backend::inbound::http::health::HealthState;
#[cfg(feature = "metrics")]
use server::make_metrics;
use server::{ServerConfig, ServerSettings, build_http_state, create_server};

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

    let settings = ServerSettings::load().map_err(std::io::Error::other)?;
    // Seed selection is environment-only so CLI flags stay with the listener.
    let example_settings =
        ExampleDataSettings::load_from_iter([OsString::from(env!("CARGO_PKG_NAME"))])
            .map_err(std::io::Error::other)?;
    let stores = seed_stores_on_startup(&example_settings).map_err(|err| {
        error!(error = %err, "startup seeding failed");
        std::io::Error::other(err)
    })?;
    let http_state = build_http_state(stores);

    let bind_addr = settings.bind_addr()?;
    let config = ServerConfig::new(bind_addr);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(make_metrics()?));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), http_state, config)?;
    info!(%bind_addr, "server listening");

    let handle = server.handle();
    actix_web::rt::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to listen for shutdown signal");
            return;
        }
        info!("shutdown requested");
        health_state.mark_unhealthy();
        handle.stop(true).await;
    });

    server.await?;
    info!("server stopped");
    Ok(())
}
