use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::{fmt, fs, path::PathBuf, time::Duration};
use tracing::debug;
use url::Url;

pub const DEFAULT_APPLICATION_ID: &str = "snipeit";
pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = "config.yml";

pub const ENV_CONFIG_DIR: &str = "SNIPEIT_CONFIG_DIR";
pub const ENV_SERVER: &str = "SNIPEIT_SERVER";
pub const ENV_TOKEN: &str = "SNIPEIT_TOKEN";
pub const ENV_TIMEOUT: &str = "SNIPEIT_TIMEOUT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to resolve the configuration directory")]
    FailedToFindConfigurationDirectory,
    #[error("failed to load configuration data, because of: {cause:?}")]
    FailedToLoadData {
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("missing value for property {name:?}")]
    MissingRequiredPropertyValue { name: String },
    #[error("invalid server URL {url:?}: {cause}")]
    InvalidServerUrl { url: String, cause: url::ParseError },
    #[error("invalid value {value:?} for property {name:?}")]
    InvalidPropertyValue { name: String, value: String },
    #[error("the API token contains characters that cannot be sent in a header")]
    InvalidToken,
}

/// Connection settings for one Snipe-IT server.
///
/// Immutable once built. The token is never printed by `Debug`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    server: Url,
    token: String,
    /// Request timeout in seconds. No timeout is applied when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeout: Option<u64>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("server", &self.server.as_str())
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Build a configuration from a server URL such as
    /// `https://develop.snipeitapp.com` and an API token.
    ///
    /// The URL is stored as parsed. A trailing slash is harmless: it is
    /// dropped when request paths are appended to it.
    pub fn new(server: &str, token: &str) -> Result<ClientConfig, ConfigurationError> {
        let server = Url::parse(server).map_err(|cause| ConfigurationError::InvalidServerUrl {
            url: server.to_string(),
            cause,
        })?;
        let configuration = ClientConfig {
            server,
            token: token.to_string(),
            timeout: None,
        };
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    pub fn server(&self) -> &Url {
        &self.server
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        if self.token.trim().is_empty() {
            return Err(ConfigurationError::MissingRequiredPropertyValue {
                name: "token".to_string(),
            });
        }
        if self.server.host_str().map_or(true, str::is_empty) {
            return Err(ConfigurationError::MissingRequiredPropertyValue {
                name: "server".to_string(),
            });
        }
        Ok(())
    }

    /// Read `SNIPEIT_SERVER`, `SNIPEIT_TOKEN` and the optional `SNIPEIT_TIMEOUT`.
    pub fn from_env() -> Result<ClientConfig, ConfigurationError> {
        let server = required_env(ENV_SERVER)?;
        let token = required_env(ENV_TOKEN)?;
        let configuration = ClientConfig::new(&server, &token)?;

        match std::env::var(ENV_TIMEOUT) {
            Ok(value) => {
                let seconds =
                    value
                        .trim()
                        .parse()
                        .map_err(|_| ConfigurationError::InvalidPropertyValue {
                            name: ENV_TIMEOUT.to_string(),
                            value: value.clone(),
                        })?;
                Ok(configuration.with_timeout(seconds))
            }
            Err(_) => Ok(configuration),
        }
    }

    pub fn get_default_configuration_file_path() -> Result<PathBuf, ConfigurationError> {
        if let Ok(config_dir_str) = std::env::var(ENV_CONFIG_DIR) {
            let mut config_path = PathBuf::from(config_dir_str);
            config_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
            return Ok(config_path);
        }

        match config_dir() {
            Some(configuration_directory) => {
                let mut default_config_file_path = configuration_directory;
                default_config_file_path.push(DEFAULT_APPLICATION_ID);
                default_config_file_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
                Ok(default_config_file_path)
            }
            None => Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }
    }

    pub fn load_default() -> Result<ClientConfig, ConfigurationError> {
        let default_file_path = ClientConfig::get_default_configuration_file_path()?;
        debug!("Loading configuration from {}...", default_file_path.display());
        ClientConfig::load_from_file(default_file_path)
    }

    /// Load a YAML file with `server`, `token` and optionally `timeout` keys.
    pub fn load_from_file(path: PathBuf) -> Result<ClientConfig, ConfigurationError> {
        let text = fs::read_to_string(&path).map_err(|cause| ConfigurationError::FailedToLoadData {
            cause: Box::new(cause),
        })?;
        let configuration: ClientConfig =
            serde_yaml::from_str(&text).map_err(|cause| ConfigurationError::FailedToLoadData {
                cause: Box::new(cause),
            })?;
        configuration.validate()?;
        Ok(configuration)
    }
}

fn required_env(name: &str) -> Result<String, ConfigurationError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigurationError::MissingRequiredPropertyValue {
            name: name.to_string(),
        }),
    }
}
