//! Environment-driven server configuration.

use std::{env, fmt::Display, str::FromStr};

use modutree_db::DbConfig;
use tracing::{info, warn};

pub struct ServerConfig {
    /// TCP port the HTTP server listens on.
    pub port: u16,
    /// Document store connection settings.
    pub db: DbConfig,
}

impl ServerConfig {
    pub fn load() -> Self {
        Self {
            port: try_load("MODUTREE_PORT", "3000"),
            db: DbConfig {
                url: try_load("SURREAL_URL", "127.0.0.1:8000"),
                namespace: try_load("SURREAL_NAMESPACE", "modutree"),
                database: try_load("SURREAL_DATABASE", "main"),
                username: try_load("SURREAL_USERNAME", "root"),
                password: try_load("SURREAL_PASSWORD", "root"),
            },
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
