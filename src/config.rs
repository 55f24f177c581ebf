//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the CLI keeps its copy of the wishes wall
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("azadi").to_string_lossy().to_string())
        .unwrap_or_else(|| "./azadi_data".to_string())
}

fn default_storage_key() -> String {
    crate::wishes::STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            key: default_storage_key(),
        }
    }
}

impl StorageConfig {
    /// Data directory with a leading `~` resolved to the home directory
    pub fn data_path(&self) -> PathBuf {
        expand_home(&self.data_dir, dirs::home_dir())
    }
}

fn expand_home(path: &str, home: Option<PathBuf>) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(path),
    };

    match home {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// Static page server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built page (`trunk build` output)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8047
}

fn default_dist_dir() -> String {
    "./azadi-ui/dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl ServerConfig {
    /// Socket address to bind
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

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// The first config file that exists wins. A file that exists but fails to
    /// load is an error; this runs before logging is set up, so the caller
    /// reports it.
    pub fn load_default() -> Result<(Self, ConfigSource), ConfigError> {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("azadi").join("config.toml")),
            Some(PathBuf::from("/etc/azadi/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    fn load_first(paths: &[PathBuf]) -> Result<(Self, ConfigSource), ConfigError> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => {
                let config = Self::load_with_env(path)?;
                Ok((config, ConfigSource::File(path.clone())))
            }
            None => Ok((Self::from_env(), ConfigSource::Environment)),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(data_dir) = var("AZADI_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }

        if let Some(host) = var("AZADI_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("AZADI_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Some(dist_dir) = var("AZADI_DIST_DIR") {
            self.server.dist_dir = dist_dir;
        }

        if let Some(level) = var("AZADI_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("AZADI_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Where `Config::load_default` got its settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// This file, plus environment overrides
    File(PathBuf),
    /// Built-in defaults plus environment overrides
    Environment,
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
    let data_dir = default_data_dir();
    format!(
        r#"# Azadi Configuration
#
# Environment variables override these settings:
# - AZADI_DATA_DIR
# - AZADI_HOST
# - AZADI_PORT
# - AZADI_DIST_DIR
# - AZADI_LOG_LEVEL
# - AZADI_LOG_FORMAT

[storage]
# Directory holding the wishes wall used by `azadi wish`
data_dir = {data_dir}

# Record name inside the data directory
key = "azadi-wishes"

[server]
# Host for `azadi serve`
host = "0.0.0.0"

# Port for `azadi serve`
port = 8047

# Built page directory (output of `trunk build --release` in azadi-ui)
dist_dir = "./azadi-ui/dist"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#,
        data_dir = toml::Value::String(data_dir),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.storage.key, "azadi-wishes");
        assert_eq!(config.server.addr(), "0.0.0.0:8047");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8047);
        assert_eq!(config.server.dist_dir, "./azadi-ui/dist");
        assert_eq!(config.storage.key, "azadi-wishes");
    }

    #[test]
    fn test_generated_config_has_real_data_dir() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert!(!config.storage.data_dir.starts_with('~'));
        assert_eq!(config.storage.data_dir, default_data_dir());
    }

    #[test]
    fn test_expand_home() {
        let home = Some(PathBuf::from("/home/ayesha"));

        assert_eq!(
            expand_home("~/.local/share/azadi", home.clone()),
            PathBuf::from("/home/ayesha/.local/share/azadi")
        );
        assert_eq!(expand_home("~", home.clone()), PathBuf::from("/home/ayesha"));
        assert_eq!(expand_home("~other/x", home.clone()), PathBuf::from("~other/x"));
        assert_eq!(expand_home("/var/azadi", home), PathBuf::from("/var/azadi"));
        assert_eq!(expand_home("~/x", None), PathBuf::from("~/x"));
    }

    #[test]
    fn test_tilde_data_dir_does_not_land_in_cwd() {
        let config = Config::parse("[storage]\ndata_dir = \"~/azadi-data\"\n").unwrap();
        let path = config.storage.data_path();

        if dirs::home_dir().is_some() {
            assert!(!path.starts_with("~"));
            assert!(path.ends_with("azadi-data"));
        }
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("AZADI_DATA_DIR", "/tmp/azadi"),
            ("AZADI_PORT", "3000"),
            ("AZADI_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.storage.data_dir, "/tmp/azadi");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|name| (name == "AZADI_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, 8047);
    }

    #[test]
    fn test_load_first_skips_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("config.toml");
        std::fs::write(&present, "[server]\nport = 9100\n").unwrap();

        let paths = vec![dir.path().join("absent.toml"), present.clone()];
        let (config, source) = Config::load_first(&paths).unwrap();

        assert_eq!(config.server.port, 9100);
        assert_eq!(source, ConfigSource::File(present));
    }

    #[test]
    fn test_load_first_without_files_uses_environment() {
        let dir = tempfile::tempdir().unwrap();
        let (_, source) = Config::load_first(&[dir.path().join("absent.toml")]).unwrap();
        assert_eq!(source, ConfigSource::Environment);
    }

    #[test]
    fn test_load_first_reports_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("config.toml");
        std::fs::write(&bad, "[storage\n").unwrap();

        let err = Config::load_first(&[bad]).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/azadi.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
