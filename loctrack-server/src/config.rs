//! Startup configuration
//!
//! One canonical strategy for locating the database: an explicit
//! `DATABASE_URL` wins, otherwise the target (container or local) picks a
//! default URL. Tuning knobs come from `LOCTRACK_*` variables.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};

/// Database URL used when running inside the compose stack
pub const CONTAINER_DATABASE_URL: &str = "postgres://postgres:postgres@db:5432/location_tracker";

/// Database URL used on a developer machine
pub const LOCAL_DATABASE_URL: &str = "postgres://localhost/location_tracker";

/// Frontend origin allowed by CORS unless overridden
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_CONNECT_ATTEMPTS: u32 = 5;
const DEFAULT_RETRY_SECS: u64 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Where the database lives relative to this process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbTarget {
    Container,
    Local,
}

impl DbTarget {
    /// Parse `LOCTRACK_DB_TARGET`. Accepts `container`/`docker` and `local`.
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "container" | "docker" => Ok(Self::Container),
            "local" => Ok(Self::Local),
            other => Err(Error::Config(format!(
                "LOCTRACK_DB_TARGET must be 'container' or 'local', got '{}'",
                other
            ))),
        }
    }

    /// Guess the target from the filesystem (`/.dockerenv` marks a container).
    pub fn detect() -> Self {
        if Path::new("/.dockerenv").exists() {
            Self::Container
        } else {
            Self::Local
        }
    }

    pub fn default_url(self) -> &'static str {
        match self {
            Self::Container => CONTAINER_DATABASE_URL,
            Self::Local => LOCAL_DATABASE_URL,
        }
    }
}

/// Database connection settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    /// Attempts made at startup before giving up
    pub connect_attempts: u32,
    /// Fixed delay between startup attempts
    pub retry_interval: Duration,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Config for an explicit URL with default pool and retry settings.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            connect_attempts: DEFAULT_CONNECT_ATTEMPTS,
            retry_interval: Duration::from_secs(DEFAULT_RETRY_SECS),
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), DbTarget::detect())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// `detected` is used only when `LOCTRACK_DB_TARGET` is unset.
    pub fn from_lookup<F>(lookup: F, detected: DbTarget) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = match lookup("DATABASE_URL").filter(|u| !u.trim().is_empty()) {
            Some(url) => url,
            None => {
                let target = match lookup("LOCTRACK_DB_TARGET") {
                    Some(value) => DbTarget::parse(&value)?,
                    None => detected,
                };
                target.default_url().to_string()
            }
        };

        let mut config = Self::new(url);
        if let Some(n) = parse_var::<u32>(&lookup, "LOCTRACK_DB_MAX_CONNECTIONS")? {
            config.max_connections = n.max(1);
        }
        if let Some(n) = parse_var::<u32>(&lookup, "LOCTRACK_DB_CONNECT_ATTEMPTS")? {
            config.connect_attempts = n.max(1);
        }
        if let Some(secs) = parse_var::<u64>(&lookup, "LOCTRACK_DB_RETRY_SECS")? {
            config.retry_interval = Duration::from_secs(secs);
        }
        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("{} has an invalid value: '{}'", key, raw))),
        None => Ok(None),
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8000)
    pub bind_addr: SocketAddr,

    /// The single browser origin allowed by CORS
    pub allowed_origin: String,

    /// Upper bound on request bodies, CSV uploads included
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}
