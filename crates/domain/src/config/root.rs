use serde::{Deserialize, Serialize};

use super::client::ClientConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::zones::ZonesConfig;

const LOCAL_CONFIG_PATH: &str = "gethost.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/gethost/config.toml";

/// Main configuration structure shared by the server and the client
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Zones to transfer and how to refresh them
    #[serde(default)]
    pub zones: ZonesConfig,

    /// HTTP listener (server) and port to contact (client)
    #[serde(default)]
    pub server: ServerConfig,

    /// Client-side server URL and timeout
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. gethost.toml in current directory
    /// 3. /etc/gethost/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(url) = overrides.server_url {
            self.client.server_url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.verbose {
            self.logging.verbose = true;
        }
        if overrides.tracing {
            self.logging.tracing = true;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.zones.names.is_empty() {
            return Err(ConfigError::Validation("No zones configured".to_string()));
        }

        for zone in &self.zones.names {
            if !zone.ends_with('.') {
                return Err(ConfigError::Validation(format!(
                    "zone {} is not fully qualified. Maybe missing trailing '.'?",
                    zone
                )));
            }
        }

        if self.zones.refresh_interval == 0 {
            return Err(ConfigError::Validation(
                "refresh_interval must be greater than 0".to_string(),
            ));
        }

        if self.zones.transfer_timeout == 0 {
            return Err(ConfigError::Validation(
                "transfer_timeout must be greater than 0".to_string(),
            ));
        }

        if self.zones.lookup_timeout == 0 {
            return Err(ConfigError::Validation(
                "lookup_timeout must be greater than 0".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigError::Validation("Server port cannot be 0".to_string()));
        }

        if self.client.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "client timeout_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Base URL of the server's HTTP API, e.g. `http://localhost:8080`
    pub fn server_base_url(&self) -> String {
        format!(
            "{}:{}",
            self.client.server_url.trim_end_matches('/'),
            self.server.port
        )
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub server_url: Option<String>,
    pub log_level: Option<String>,
    pub verbose: bool,
    pub tracing: bool,
}
