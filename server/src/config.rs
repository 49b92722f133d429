//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while reading server configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `HOST` is not an IP address.
    #[error("invalid HOST '{0}': expected an IP address")]
    InvalidHost(String),

    /// `PORT` is not a valid port number.
    #[error("invalid PORT '{0}': expected 1-65535")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Directory holding the compiled site (`pkg/` assets and static files).
    pub site_root: PathBuf,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind IP, default `0.0.0.0`
    /// - `PORT`: bind port, default `3000`
    /// - `SITE_ROOT`: static asset root, default `fallback_site_root`
    ///
    /// # Errors
    ///
    /// Returns an error if `HOST` is not an IP address or `PORT` is not a
    /// non-zero port number.
    pub fn from_env(fallback_site_root: &str) -> Result<Self, ConfigError> {
        Self::from_vars(fallback_site_root, |key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading variables through `var`.
    fn from_vars(fallback_site_root: &str, var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_host(var("HOST").as_deref())?;
        let port = parse_port(var("PORT").as_deref())?;
        let site_root = var("SITE_ROOT")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(fallback_site_root), PathBuf::from);

        Ok(Self { addr: SocketAddr::new(host, port), site_root })
    }
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let raw = raw.map_or(DEFAULT_HOST, str::trim);
    raw.parse().map_err(|_| ConfigError::InvalidHost(raw.to_owned()))
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim) else {
        return Ok(DEFAULT_PORT);
    };
    match raw.parse::<u16>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidPort(raw.to_owned())),
        Ok(port) => Ok(port),
    }
}
