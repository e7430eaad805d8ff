use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_POOL_SIZE: u32 = 10;

/// Runtime configuration, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub pool_size: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Failed to load .env file: {}", e);
            }
        }

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        Ok(Self {
            database_url,
            bind_addr: parse_or(
                "BIND_ADDR",
                env::var("BIND_ADDR").ok(),
                SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            )?,
            pool_size: parse_or(
                "DATABASE_POOL_SIZE",
                env::var("DATABASE_POOL_SIZE").ok(),
                DEFAULT_POOL_SIZE,
            )?,
        })
    }
}

/// Parses an optional environment value, falling back to `default` when the
/// variable is unset or blank.
fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => value
            .parse()
            .with_context(|| format!("Invalid value for {key}: {value:?}")),
        _ => Ok(default),
    }
}
