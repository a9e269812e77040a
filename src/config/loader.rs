use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/vitrine/config.toml` on Unix/macOS, or equivalent
    /// on other platforms via `dirs::config_dir()`. Falls back to the
    /// current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("vitrine").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The page size is at least 1
    /// - The auth mode is one of the known strategies
    /// - Every base URL is non-empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.defaults.page_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "defaults.page_size must be at least 1".to_string(),
            });
        }

        if !matches!(self.auth.mode.as_str(), "mock" | "remote") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "auth.mode must be \"mock\" or \"remote\", got '{}'",
                    self.auth.mode
                ),
            });
        }

        for (name, url) in [
            ("catalog.base_url", &self.catalog.base_url),
            ("auth.mock_url", &self.auth.mock_url),
            ("auth.remote_url", &self.auth.remote_url),
        ] {
            if url.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("{name} must not be empty"),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_from_full_file() {
        let file = write_config(
            r#"
[defaults]
timeout_seconds = 10
connect_timeout_seconds = 2
page_size = 25

[catalog]
base_url = "https://catalog.example.com"

[auth]
mode = "remote"
remote_url = "https://auth.example.com/api"
"#,
        );

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.defaults.timeout_seconds, 10);
        assert_eq!(config.defaults.page_size, 25);
        assert_eq!(config.catalog.base_url, "https://catalog.example.com");
        assert_eq!(config.auth.mode, "remote");
        assert_eq!(config.auth.remote_url, "https://auth.example.com/api");
        // Sections not present keep their defaults.
        assert_eq!(config.auth.mock_url, "http://localhost:3000");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let file = write_config("[defaults]\npage_size = 5\n");

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.defaults.page_size, 5);
        assert_eq!(config.defaults.timeout_seconds, 5);
        assert_eq!(config.catalog.base_url, "https://dummyjson.com");
        assert_eq!(config.auth.mode, "mock");
    }

    #[test]
    fn test_unknown_auth_mode_fails_validation() {
        let file = write_config("[auth]\nmode = \"oauth\"\n");
        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_zero_page_size_fails_validation() {
        let file = write_config("[defaults]\npage_size = 0\n");
        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let missing = Path::new("/nonexistent/vitrine-config.toml");
        assert!(matches!(
            Config::load_from(missing),
            Err(ConfigError::ReadError { .. })
        ));
    }

    #[test]
    fn test_defaults_pass_validation() {
        Config::default().validate().unwrap();
    }
}
