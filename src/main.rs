//! Two-party chat backend
//!
//! (c) Softlandia 2025

use two_party_chat_api::api;
use two_party_chat_api::build_provider;
use two_party_chat_api::config::Config;
use two_party_chat_api::infrastructure::database::{self, DatabaseConnection};

use anyhow::Context;
use axum::http::Method;
use di_axum::RouterServiceProviderExtensions;
use log::{error, info};
use tokio::runtime::{Builder, Runtime};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let runtime: Runtime = Builder::new_multi_thread().enable_all().build()?;

    runtime.block_on(web_server_task(config))
}

async fn web_server_task(config: Config) -> anyhow::Result<()> {
    let connection = DatabaseConnection::connect(&config)
        .await
        .with_context(|| format!("cannot open database {}", config.database_url))?;
    database::initialize(&connection)
        .await
        .context("failed to initialize database")?;

    let provider = build_provider(connection)?;

    let app = api::router()
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_headers(Any)
                    .allow_methods([Method::GET, Method::POST])
                    .allow_origin(AllowOrigin::list(config.cors_origins.clone())),
            ),
        )
        .with_provider(provider);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
