//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `bombilla.toml` in the working directory. Every field except the
//! Tapo credentials has a sensible default so the file is optional.
//! Environment variables take precedence over file values; the credentials
//! use the `TAPO_USER` / `TAPO_PASS` variable names.

use serde::Deserialize;

use bombilla_domain::address::LightAddress;

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Tapo cloud account credentials.
    pub tapo: TapoConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Addresses of the bulbs to register at startup.
    pub lights: Vec<LightAddress>,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Tapo cloud account credentials, consumed once at startup.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TapoConfig {
    /// Account identifier (email).
    pub username: String,
    /// Account secret.
    pub password: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `bombilla.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// Tapo credentials are missing after overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("bombilla.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("BOMBILLA_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("BOMBILLA_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("BOMBILLA_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("TAPO_USER") {
            self.tapo.username = val;
        }
        if let Ok(val) = std::env::var("TAPO_PASS") {
            self.tapo.password = val;
        }
        if let Ok(val) = std::env::var("BOMBILLA_LIGHTS") {
            self.lights = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(LightAddress::from)
                .collect();
        }
        if let Ok(val) = std::env::var("BOMBILLA_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.tapo.username.is_empty() || self.tapo.password.is_empty() {
            return Err(ConfigError::Validation(
                "tapo credentials are required (set TAPO_USER and TAPO_PASS)".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            tapo: TapoConfig::default(),
            logging: LoggingConfig::default(),
            lights: vec![
                LightAddress::new("172.20.10.5"),
                LightAddress::new("172.20.10.4"),
            ],
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "bombillad=info,bombilla=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
