//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::irail::IrailConfig;

const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:3000";

/// Errors from reading the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be 'stdio' or 'http', got '{value}'")]
    InvalidTransport { var: &'static str, value: String },

    #[error("invalid {var} '{value}': {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// How the server talks to its client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    #[default]
    Stdio,
    Http,
}

/// Everything `main` needs to start the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub transport: Transport,
    pub http_addr: SocketAddr,
    pub irail: IrailConfig,
    pub cache: CacheConfig,
    /// Alternative station dataset; the bundled one is used when unset.
    pub stations_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Read `IRAIL_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let transport = match get("IRAIL_TRANSPORT") {
            None => Transport::Stdio,
            Some(v) => match v.trim().to_ascii_lowercase().as_str() {
                "stdio" => Transport::Stdio,
                "http" => Transport::Http,
                _ => {
                    return Err(ConfigError::InvalidTransport {
                        var: "IRAIL_TRANSPORT",
                        value: v,
                    });
                }
            },
        };

        let http_addr = parse_var(
            "IRAIL_HTTP_ADDR",
            get("IRAIL_HTTP_ADDR").as_deref().unwrap_or(DEFAULT_HTTP_ADDR),
        )?;

        let mut irail = IrailConfig::default();
        if let Some(url) = get("IRAIL_BASE_URL") {
            irail = irail.with_base_url(url.trim());
        }
        if let Some(v) = get("IRAIL_RATE_LIMIT") {
            let rate: f64 = parse_var("IRAIL_RATE_LIMIT", &v)?;
            if !(rate.is_finite() && rate > 0.0) {
                return Err(ConfigError::InvalidValue {
                    var: "IRAIL_RATE_LIMIT",
                    value: v,
                    reason: "must be a positive number".to_string(),
                });
            }
            irail = irail.with_rate_limit(rate);
        }
        if let Some(v) = get("IRAIL_TIMEOUT_SECS") {
            irail = irail.with_timeout(parse_var("IRAIL_TIMEOUT_SECS", &v)?);
        }

        let mut cache = CacheConfig::default();
        if let Some(v) = get("IRAIL_CACHE_TTL_SECS") {
            cache.ttl = Duration::from_secs(parse_var("IRAIL_CACHE_TTL_SECS", &v)?);
        }

        Ok(Self {
            transport,
            http_addr,
            irail,
            cache,
            stations_path: get("IRAIL_STATIONS_PATH").map(PathBuf::from),
        })
    }
}

fn parse_var<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            var,
            value: value.to_string(),
            reason: e.to_string(),
        })
}
