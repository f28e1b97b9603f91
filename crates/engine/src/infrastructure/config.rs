//! Application configuration

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding the collection JSON files
    pub data_dir: PathBuf,

    /// Endpoint the server binds, selected by `FOLGEN_SECURE`
    pub transport: TransportConfig,

    /// CORS allowed origins (comma-separated, or "*" for any); unset disables CORS
    pub cors_allowed_origins: Option<String>,
}

/// Where and how the query endpoint is served
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Whether the secure endpoint set was selected
    pub secure: bool,
    pub host: String,
    pub port: u16,
}

impl TransportConfig {
    pub fn scheme(&self) -> &'static str {
        if self.secure {
            "https"
        } else {
            "http"
        }
    }

    /// Resolve the bind address; `host` may be an IP or a hostname.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))?
            .next()
            .with_context(|| format!("{} resolved to no address", self.host))
    }

    /// Public URL of the query endpoint, for startup logs.
    pub fn query_url(&self) -> String {
        format!("{}://{}:{}/api/query", self.scheme(), self.host, self.port)
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let secure = lookup("FOLGEN_SECURE")
            .map(|value| parse_flag(&value))
            .transpose()
            .context("FOLGEN_SECURE must be a boolean flag")?
            .unwrap_or(false);

        let (host_key, port_key, default_port) = if secure {
            ("SECURE_HOST", "SECURE_PORT", "443")
        } else {
            ("SERVER_HOST", "SERVER_PORT", "4000")
        };

        let transport = TransportConfig {
            secure,
            host: lookup(host_key).unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup(port_key)
                .unwrap_or_else(|| default_port.to_string())
                .parse()
                .with_context(|| format!("{port_key} must be a valid port number"))?,
        };

        Ok(Self {
            data_dir: lookup("FOLGEN_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./data")),
            transport,
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("unrecognized flag value `{other}`"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_to_plain_transport() {
        let config = config_from(&[]).unwrap();

        assert!(!config.transport.secure);
        assert_eq!(config.transport.host, "0.0.0.0");
        assert_eq!(config.transport.port, 4000);
        assert_eq!(config.transport.scheme(), "http");
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.cors_allowed_origins, None);
    }

    #[test]
    fn secure_flag_selects_secure_endpoint() {
        let config = config_from(&[
            ("FOLGEN_SECURE", "TRUE"),
            ("SECURE_HOST", "example.org"),
            ("SECURE_PORT", "8443"),
            ("SERVER_PORT", "9000"),
        ])
        .unwrap();

        assert!(config.transport.secure);
        assert_eq!(config.transport.host, "example.org");
        assert_eq!(config.transport.port, 8443);
        assert_eq!(config.transport.query_url(), "https://example.org:8443/api/query");
    }

    #[test]
    fn plain_mode_ignores_secure_endpoint() {
        let config = config_from(&[
            ("FOLGEN_SECURE", "no"),
            ("SECURE_PORT", "8443"),
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "9000"),
        ])
        .unwrap();

        assert_eq!(config.transport.port, 9000);
        assert_eq!(
            config.transport.socket_addr().unwrap(),
            "127.0.0.1:9000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(config_from(&[("SERVER_PORT", "http")]).is_err());
    }

    #[test]
    fn invalid_flag_is_rejected() {
        assert!(config_from(&[("FOLGEN_SECURE", "maybe")]).is_err());
    }

    #[test]
    fn blank_cors_origins_disable_cors() {
        let config = config_from(&[("CORS_ALLOWED_ORIGINS", "  ")]).unwrap();
        assert_eq!(config.cors_allowed_origins, None);
    }
}
