//! Configuration management for the quizbank admin panel

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Panel server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Question-bank backend configuration
    #[serde(default)]
    pub backend: BackendConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Page presentation configuration
    #[serde(default)]
    pub panel: PanelConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Backend REST API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the question-bank API, without the `/api` suffix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds; unset means requests never time out
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Page presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Title shown in the header and the browser tab
    #[serde(default = "default_title")]
    pub title: String,

    /// Where the browser loads htmx from
    #[serde(default = "default_htmx_src")]
    pub htmx_src: String,
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    5080
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_title() -> String {
    "Question Bank Admin".to_string()
}

fn default_htmx_src() -> String {
    "https://unpkg.com/htmx.org@2.0.3".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            htmx_src: default_htmx_src(),
        }
    }
}

impl ServerConfig {
    /// Socket address the panel server binds to
    ///
    /// # Errors
    ///
    /// Returns an error if host and port do not form a valid socket address.
    pub fn bind_address(&self) -> crate::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| crate::Error::Configuration {
                message: format!("invalid server address {}:{}: {e}", self.host, self.port),
            })
    }
}

impl BackendConfig {
    /// Configured request timeout, if any
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl LoggingConfig {
    /// Whether log lines are emitted as JSON
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from an optional file and the environment
    ///
    /// Without an explicit path, `quizbank.toml` (or any format the `config`
    /// crate understands under that stem) is read when present. Environment
    /// variables use the `QUIZBANK_` prefix and `__` between nested keys,
    /// e.g. `QUIZBANK_BACKEND__BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, parsed or validated.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("quizbank").required(false),
        };

        let config: Self = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("QUIZBANK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialization alone cannot catch
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> crate::Result<()> {
        let base_url = self.backend.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(crate::Error::Configuration {
                message: format!("backend.base_url must be an http(s) URL, got {base_url:?}"),
            });
        }

        if self.backend.request_timeout_secs == Some(0) {
            return Err(crate::Error::Configuration {
                message: "backend.request_timeout_secs must be greater than zero".to_string(),
            });
        }

        self.server.bind_address()?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::field_reassign_with_default)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5080);
        assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
        assert!(config.backend.request_timeout().is_none());
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.is_json());
        assert_eq!(config.panel.title, "Question Bank Admin");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(
                "[backend]\nbase_url = \"https://bank.example.org\"\nrequest_timeout_secs = 15\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.backend.base_url, "https://bank.example.org");
        assert_eq!(config.backend.request_timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.server.port, 5080);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_rejects_non_http_backend() {
        let mut config = Config::default();
        config.backend.base_url = "ftp://bank".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("backend.base_url"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = Config::default();
        config.backend.request_timeout_secs = Some(0);

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bind_address() {
        let server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8088,
        };
        assert_eq!(server.bind_address().unwrap().port(), 8088);

        let server = ServerConfig {
            host: "not a host".to_string(),
            port: 8088,
        };
        assert!(server.bind_address().is_err());
    }

    #[test]
    fn test_text_log_format() {
        let logging = LoggingConfig {
            level: "debug".to_string(),
            format: "text".to_string(),
        };
        assert!(!logging.is_json());
    }
}
