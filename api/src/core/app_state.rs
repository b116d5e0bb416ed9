use std::{env, net::SocketAddr, path::PathBuf};

use overview_engine::OverviewAnalyzer;
use thiserror::Error;

/// Default listen address.
pub const DEFAULT_API_ADDRESS: &str = "0.0.0.0:3001";

/// Default front-end directory.
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Server configuration errors (startup only).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API_ADDRESS `{0}`: expected host:port")]
    InvalidAddress(String),
}

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind, e.g. `0.0.0.0:3001`.
    pub address: SocketAddr,
    /// Front-end directory; `index.html` inside it is the SPA fallback.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Load server settings from `API_ADDRESS` and `STATIC_DIR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("API_ADDRESS").ok().filter(|v| !v.trim().is_empty()),
            env::var("STATIC_DIR").ok().filter(|v| !v.trim().is_empty()),
        )
    }

    pub fn from_values(
        address: Option<String>,
        static_dir: Option<String>,
    ) -> Result<Self, ConfigError> {
        let address = address.unwrap_or_else(|| DEFAULT_API_ADDRESS.into());
        let address = address
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddress(address.clone()))?;

        Ok(Self {
            address,
            static_dir: PathBuf::from(static_dir.unwrap_or_else(|| DEFAULT_STATIC_DIR.into())),
        })
    }
}

/// Shared state for all HTTP handlers.
pub struct AppState<P> {
    /// Batch pipeline bound to the configured search provider.
    pub analyzer: OverviewAnalyzer<P>,
}

impl<P> AppState<P> {
    pub fn new(analyzer: OverviewAnalyzer<P>) -> Self {
        Self { analyzer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let cfg = ServerConfig::from_values(None, None).unwrap();
        assert_eq!(cfg.address.port(), 3001);
        assert_eq!(cfg.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn bad_address_is_rejected() {
        assert_eq!(
            ServerConfig::from_values(Some("localhost".into()), None).unwrap_err(),
            ConfigError::InvalidAddress("localhost".into())
        );
    }
}
