//! Host configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),
    #[error("invalid HOST '{0}'")]
    InvalidHost(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub addr: SocketAddr,
}

impl HostConfig {
    /// Build the listen address from the environment, falling back to the
    /// Leptos `site-addr`.
    ///
    /// Optional:
    /// - `HOST`: bind IP, default from `site-addr`
    /// - `PORT`: bind port, default from `site-addr`
    pub fn from_env(fallback: SocketAddr) -> Result<Self, ConfigError> {
        let ip = parse_host(std::env::var("HOST").ok().as_deref(), fallback.ip())?;
        let port = parse_port(std::env::var("PORT").ok().as_deref(), fallback.port())?;
        Ok(Self { addr: SocketAddr::new(ip, port) })
    }
}

fn parse_port(raw: Option<&str>, default: u16) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_host(raw: Option<&str>, default: IpAddr) -> Result<IpAddr, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidHost(value.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
