use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::modules::activities::core::activity::CapacityPolicy;

const LISTEN_ADDR: &str = "ACTIVITIES_LISTEN_ADDR";
const STATIC_DIR: &str = "ACTIVITIES_STATIC_DIR";
const CAPACITY_POLICY: &str = "ACTIVITIES_CAPACITY_POLICY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} is not a valid socket address: {value}")]
    InvalidListenAddr { name: &'static str, value: String },

    #[error("{name}: {reason}")]
    InvalidCapacityPolicy { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub capacity: CapacityPolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source; unset variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = match lookup(LISTEN_ADDR) {
            Some(value) => value
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::InvalidListenAddr {
                    name: LISTEN_ADDR,
                    value,
                })?,
            None => SocketAddr::from(([0, 0, 0, 0], 8000)),
        };

        let static_dir = lookup(STATIC_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("static"));

        let capacity = match lookup(CAPACITY_POLICY) {
            Some(value) => value
                .parse::<CapacityPolicy>()
                .map_err(|reason| ConfigError::InvalidCapacityPolicy {
                    name: CAPACITY_POLICY,
                    reason,
                })?,
            None => CapacityPolicy::default(),
        };

        Ok(Self {
            listen_addr,
            static_dir,
            capacity,
        })
    }
}
