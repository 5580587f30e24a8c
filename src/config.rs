//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.
//!
//! The plain structs compile everywhere (the web UI uses [`UiConfig`]
//! defaults); file and environment loading needs the `native` feature.

use serde::Deserialize;
use std::path::PathBuf;

/// Endpoint of the public placeholder API
pub const DEFAULT_EMPLOYEES_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub employees: EmployeesConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub mock_api: MockApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Employee fetcher configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesConfig {
    #[serde(default = "default_employees_url")]
    pub endpoint: String,

    /// Off unless set; the dashboard waits as long as the request takes
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_employees_url() -> String {
    DEFAULT_EMPLOYEES_URL.to_string()
}

impl Default for EmployeesConfig {
    fn default() -> Self {
        Self {
            endpoint: default_employees_url(),
            request_timeout_secs: None,
        }
    }
}

/// Timings shared by the gallery and the employee portal
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_toast_duration")]
    pub toast_duration_ms: u64,

    #[serde(default = "default_redirect_delay")]
    pub redirect_delay_ms: u64,

    #[serde(default = "default_success_indicator")]
    pub success_indicator_ms: u64,

    /// Submit buttons stay disabled and read "Loading..." for this long
    #[serde(default = "default_submit_busy")]
    pub submit_busy_ms: u64,
}

fn default_toast_duration() -> u64 {
    3000
}

fn default_redirect_delay() -> u64 {
    1000
}

fn default_success_indicator() -> u64 {
    3000
}

fn default_submit_busy() -> u64 {
    1000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration(),
            redirect_delay_ms: default_redirect_delay(),
            success_indicator_ms: default_success_indicator(),
            submit_busy_ms: default_submit_busy(),
        }
    }
}

/// Offline mock API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MockApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8090
}

impl Default for MockApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl MockApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(feature = "native")]
impl Config {
    /// Load configuration from a file
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &std::path::Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from an explicit path, the default locations, or the environment
    pub fn resolve(explicit: Option<&std::path::Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("showcase").join("config.toml")),
            Some(PathBuf::from("./showcase.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("SHOWCASE_EMPLOYEES_URL") {
            self.employees.endpoint = url;
        }

        if let Ok(host) = std::env::var("SHOWCASE_MOCK_HOST") {
            self.mock_api.host = host;
        }
        if let Ok(port) = std::env::var("SHOWCASE_MOCK_PORT") {
            if let Ok(p) = port.parse() {
                self.mock_api.port = p;
            }
        }

        if let Ok(level) = std::env::var("SHOWCASE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SHOWCASE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Showcase Configuration
#
# Environment variables override these settings:
# - SHOWCASE_EMPLOYEES_URL
# - SHOWCASE_MOCK_HOST
# - SHOWCASE_MOCK_PORT
# - SHOWCASE_LOG_LEVEL
# - SHOWCASE_LOG_FORMAT

[employees]
# Collection endpoint returning a JSON array of {id, name, email}
endpoint = "https://jsonplaceholder.typicode.com/users"

# Request timeout in seconds (unset = wait indefinitely)
# request_timeout_secs = 10

[ui]
# How long a toast stays on screen (ms)
toast_duration_ms = 3000

# Delay before redirecting after login, signup or logout (ms)
redirect_delay_ms = 1000

# How long the employee form success indicator stays visible (ms)
success_indicator_ms = 3000

# How long a submit button shows its busy state after a click (ms)
submit_busy_ms = 1000

[mock_api]
# Offline stand-in for the placeholder API
host = "127.0.0.1"
port = 8090

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.employees.endpoint, DEFAULT_EMPLOYEES_URL);
        assert_eq!(config.employees.request_timeout_secs, None);
        assert_eq!(config.ui.toast_duration_ms, 3000);
        assert_eq!(config.ui.redirect_delay_ms, 1000);
        assert_eq!(config.ui.submit_busy_ms, 1000);
        assert_eq!(config.mock_api.addr(), "127.0.0.1:8090");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.ui, UiConfig::default());
        assert_eq!(config.employees.endpoint, DEFAULT_EMPLOYEES_URL);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\ntoast_duration_ms = 500\nsubmit_busy_ms = 250\n\n[mock_api]\nport = 9999").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.ui.toast_duration_ms, 500);
        assert_eq!(config.ui.submit_busy_ms, 250);
        assert_eq!(config.ui.redirect_delay_ms, 1000);
        assert_eq!(config.mock_api.port, 9999);
        assert_eq!(config.mock_api.host, "127.0.0.1");
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(std::path::Path::new("/nonexistent/showcase.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui\ntoast_duration_ms = ").unwrap();
        assert!(matches!(Config::load(file.path()), Err(ConfigError::Parse { .. })));
    }
}
