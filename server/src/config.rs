//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

use crate::error::ServerError;

pub const DEFAULT_LOG_FILTER: &str = "server=info,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Overrides the port of the Leptos site address.
    pub port: Option<u16>,
    /// Cargo.toml carrying Leptos metadata; env-driven when absent.
    pub leptos_config: Option<String>,
    pub log_filter: String,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, overriding the Leptos `site-addr` port
    /// - `LEPTOS_CONFIG`: path to a Cargo.toml with Leptos metadata
    /// - `RUST_LOG`: tracing filter, default [`DEFAULT_LOG_FILTER`]
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_vars(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("LEPTOS_CONFIG").ok().as_deref(),
            std::env::var("RUST_LOG").ok().as_deref(),
        )
    }

    /// Build config from raw variable values; blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when `port` does not parse.
    pub fn from_vars(port: Option<&str>, leptos_config: Option<&str>, log_filter: Option<&str>) -> Result<Self, ServerError> {
        let port = match non_blank(port) {
            Some(raw) => Some(parse_port(raw)?),
            None => None,
        };
        Ok(Self {
            port,
            leptos_config: non_blank(leptos_config).map(str::to_owned),
            log_filter: non_blank(log_filter).unwrap_or(DEFAULT_LOG_FILTER).to_owned(),
        })
    }

    /// The address to bind: `site_addr` with the port override applied.
    pub fn bind_addr(&self, site_addr: SocketAddr) -> SocketAddr {
        match self.port {
            Some(port) => SocketAddr::new(site_addr.ip(), port),
            None => site_addr,
        }
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_port(raw: &str) -> Result<u16, ServerError> {
    raw.parse::<u16>()
        .map_err(|e| ServerError::Config(format!("invalid PORT {raw:?}: {e}")))
}
