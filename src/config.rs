use std::env;
use std::net::SocketAddr;

use anyhow::Context;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Reads settings from the process environment. Call after `dotenvy::dotenv()`
    /// so `.env` values are visible.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let raw_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid BIND_ADDR: {}", raw_addr))?;

        Ok(Config { bind_addr })
    }
}
