//! Runtime configuration read from environment variables
//!
//! - `SOIL_HOST`: bind address (default `0.0.0.0`)
//! - `PORT`: listen port (default `3000`)
//! - `RUST_LOG`: tracing filter (default `soil_advisor_rust=info,tower_http=debug,warn`)

use crate::error::{Result, SoilError};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "soil_advisor_rust=info,tower_http=debug,warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    /// Read from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through an arbitrary key lookup (tests pass a map)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("SOIL_HOST") {
            config.host = host
                .trim()
                .parse()
                .map_err(|_| SoilError::config("SOIL_HOST", format!("'{}' is not an IP address", host)))?;
        }

        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| SoilError::config("PORT", format!("'{}' is not a valid port", port)))?;
        }

        config.log_filter = log_filter_from_lookup(&lookup);

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// `RUST_LOG` if set and non-blank, else the default filter
pub fn log_filter_from_env() -> String {
    log_filter_from_lookup(|key| std::env::var(key).ok())
}

fn log_filter_from_lookup<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup("RUST_LOG")
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("SOIL_HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_bad_port() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_blank_log_filter_uses_default() {
        assert_eq!(log_filter_from_lookup(lookup(&[("RUST_LOG", "  ")])), DEFAULT_LOG_FILTER);
        assert_eq!(log_filter_from_lookup(lookup(&[("RUST_LOG", "trace")])), "trace");
    }

    #[test]
    fn test_bad_port_does_not_affect_log_filter() {
        let pairs = [("PORT", "eighty"), ("RUST_LOG", "debug")];
        assert!(ServerConfig::from_lookup(lookup(&pairs)).is_err());
        assert_eq!(log_filter_from_lookup(lookup(&pairs)), "debug");
    }
}
