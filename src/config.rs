use crate::error::{PetWalkError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
pub const HOST_ENV: &str = "PETWALK_HOST";
pub const PORT_ENV: &str = "PETWALK_PORT";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub openweathermap: OpenWeatherMapConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct OpenWeatherMapConfig {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl std::fmt::Debug for OpenWeatherMapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherMapConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
    #[serde(default = "default_cors")]
    pub cors: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: default_cors(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Ports may come through `${VAR}` substitution, so both numbers and
/// numeric strings are accepted.
fn deserialize_port<'de, D>(deserializer: D) -> std::result::Result<u16, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Number(u16),
        Text(String),
    }

    match Port::deserialize(deserializer)? {
        Port::Number(port) => Ok(port),
        Port::Text(value) => value.trim().parse::<u16>().map_err(|_| {
            D::Error::custom(format!(
                "invalid port '{}' - ensure {} environment variable is set",
                value, PORT_ENV
            ))
        }),
    }
}

impl Config {
    /// Load from a config file if one is found, otherwise from the
    /// environment. The result is validated before it is returned.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config = match config_override {
            Some(path) => {
                if !path.exists() {
                    return Err(PetWalkError::Config(format!(
                        "Config file not found at {:?}",
                        path
                    )));
                }
                Self::from_file(&path)?
            }
            None => match Self::find_config_path() {
                Some(path) => Self::from_file(&path)?,
                None => Self::from_env()?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!("Loading config from {}", path.display());

        let config_str = std::fs::read_to_string(path)
            .map_err(|e| PetWalkError::Config(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&config_str)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // Substitute environment variables
        let content = Self::substitute_env_vars(content)?;

        serde_yaml::from_str(&content)
            .map_err(|e| PetWalkError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_ENV).unwrap_or_default();

        let mut server = ServerConfig::default();
        if let Some(host) = lookup(HOST_ENV) {
            server.host = host;
        }
        if let Some(port) = lookup(PORT_ENV) {
            server.port = port.trim().parse().map_err(|_| {
                PetWalkError::Config(format!("invalid {} '{}'", PORT_ENV, port))
            })?;
        }

        Ok(Self {
            openweathermap: OpenWeatherMapConfig {
                api_key,
                base_url: default_base_url(),
                timeout_secs: default_timeout_secs(),
            },
            server,
        })
    }

    pub fn validate(&self) -> Result<()> {
        let key = self.openweathermap.api_key.trim();
        if key.is_empty() || key.starts_with("${") {
            return Err(PetWalkError::Config(format!(
                "Missing {}. Set it in the environment, a .env file, or config.yaml",
                API_KEY_ENV
            )));
        }
        if self.openweathermap.timeout_secs == 0 {
            return Err(PetWalkError::Config(
                "openweathermap.timeout_secs must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Then the XDG config directory
        dirs::config_dir()
            .map(|dir| dir.join("petwalk").join("config.yaml"))
            .filter(|path| path.exists())
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| PetWalkError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}
