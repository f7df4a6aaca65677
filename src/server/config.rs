use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_TIMERS_OBSOLETE_AFTER_DAYS: u32 = 30;

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub listen_addr: SocketAddr,
    /// Timers older than this many days are deleted by housekeeping, `0` keeps them forever
    pub timers_obsolete_after_days: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required =
            |var: &str| lookup(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr =
            listen_addr
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "LISTEN_ADDR".to_string(),
                    reason: e.to_string(),
                })?;

        let timers_obsolete_after_days = match lookup("TIMERS_OBSOLETE_AFTER_DAYS") {
            Some(value) => value
                .parse::<u32>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "TIMERS_OBSOLETE_AFTER_DAYS".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_TIMERS_OBSOLETE_AFTER_DAYS,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            listen_addr,
            timers_obsolete_after_days,
        })
    }
}
