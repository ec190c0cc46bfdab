//! Server configuration.
//!
//! The binary is configured through environment variables only:
//!
//! * `SERIAL_BIND_ADDR` - socket address to listen on
//!   (default `127.0.0.1:3000`).
//! * `RUST_LOG` - log filter, read by the binary's subscriber.

use anyhow::{Context, Result};
use std::net::SocketAddr;

pub const BIND_ADDR_VAR: &str = "SERIAL_BIND_ADDR";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw
            .parse()
            .with_context(|| format!("{BIND_ADDR_VAR} is not a socket address: {raw:?}"))?;
        Ok(Self { bind_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_addr() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
    }

    #[test]
    fn test_bind_addr_override() {
        let config = ServerConfig::from_lookup(|key| {
            (key == BIND_ADDR_VAR).then(|| "0.0.0.0:8080".to_string())
        })
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
    }

    #[test]
    fn test_bad_bind_addr() {
        let err = ServerConfig::from_lookup(|_| Some("localhost".into())).unwrap_err();
        assert!(err.to_string().contains(BIND_ADDR_VAR));
    }
}
