//! Runtime configuration, read from the environment (and `.env`, if present)

use anyhow::Context;
use axum::http::HeaderValue;
use std::env;
use std::net::SocketAddr;

const DEFAULT_DATABASE_URL: &str = "sqlite:chat.db";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5050";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub max_connections: u32,
    pub cors_origins: Vec<HeaderValue>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        dotenvy::dotenv().ok();
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, falling back to defaults
    /// for absent keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Config> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_owned())
            .parse()
            .context("BIND_ADDRESS must be a socket address")?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        anyhow::ensure!(
            max_connections > 0,
            "DATABASE_MAX_CONNECTIONS must be a positive integer"
        );

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_owned())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("invalid CORS origin `{origin}`"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Config {
            database_url,
            bind_address,
            max_connections,
            cors_origins,
        })
    }
}
