//! Server configuration from environment variables.
//!
//!   PLANETS_DATABASE_URL            — Postgres connection string (falls back to DATABASE_URL;
//!                                     when neither is set the server uses the in-memory store)
//!   PLANETS_BIND_ADDR               — listen address (default: 0.0.0.0:8080)
//!   PLANETS_DB_MAX_CONNECTIONS      — pool size (default: 10)
//!   PLANETS_DB_ACQUIRE_TIMEOUT_SECS — pool acquire timeout (default: 30)

use std::time::Duration;

use planets_postgres::PgConfig;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// `None` selects the in-memory store.
    pub database: Option<PgConfig>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable numbers fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bind_addr = lookup("PLANETS_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());

        let database = lookup("PLANETS_DATABASE_URL")
            .or_else(|| lookup("DATABASE_URL"))
            .filter(|url| !url.is_empty())
            .map(|url| {
                let mut pg = PgConfig::new(url);
                if let Some(n) = lookup("PLANETS_DB_MAX_CONNECTIONS").and_then(|v| v.parse().ok())
                {
                    pg.max_connections = n;
                }
                if let Some(secs) = lookup("PLANETS_DB_ACQUIRE_TIMEOUT_SECS")
                    .and_then(|v| v.parse().ok())
                {
                    pg.acquire_timeout = Duration::from_secs(secs);
                }
                pg
            });

        Self {
            bind_addr,
            database,
        }
    }
}
