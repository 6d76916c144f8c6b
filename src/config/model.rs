//! Server configuration model and environment loading.

use crate::cli::ServeCli;
use crate::error::{EatError, Result};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Environment variable holding the listen port.
pub const PORT_VAR: &str = "PORT";

/// Environment variable holding the deploy timestamp.
pub const DEPLOY_DATE_VAR: &str = "DEPLOY_DATE";

pub const VERSION_FILE_VAR: &str = "EAT_VERSION_FILE";
pub const HOST_VAR: &str = "EAT_HOST";

/// Rendered in place of the deploy date when none is set.
pub const UNKNOWN_DEPLOY_DATE: &str = "unknown";

pub const DEFAULT_VERSION_FILE: &str = "VERSION";
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub version_file: PathBuf,
    pub deploy_date: String,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// `EatError::Config` if `PORT` is missing or not a valid port number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_port = lookup(PORT_VAR).ok_or_else(|| {
            EatError::Config(format!(
                "{} is not set; it must name the port to listen on",
                PORT_VAR
            ))
        })?;
        let port = raw_port.trim().parse::<u16>().map_err(|e| {
            EatError::Config(format!(
                "{}='{}' is not a valid port number: {}",
                PORT_VAR, raw_port, e
            ))
        })?;

        Ok(Self {
            host: lookup(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            version_file: lookup(VERSION_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_VERSION_FILE)),
            deploy_date: lookup(DEPLOY_DATE_VAR)
                .unwrap_or_else(|| UNKNOWN_DEPLOY_DATE.to_string()),
        })
    }

    /// Apply command-line overrides.
    pub fn with_cli(mut self, cli: &ServeCli) -> Self {
        if let Some(ref path) = cli.version_file {
            self.version_file = path.clone();
        }
        if let Some(ref host) = cli.host {
            self.host = host.clone();
        }
        self
    }

    /// The socket address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|e| {
            EatError::Config(format!("invalid bind host '{}': {}", self.host, e))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
