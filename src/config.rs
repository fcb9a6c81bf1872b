use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::PageSelection;

/// Configuration for the video list client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend connection settings
    pub backend: BackendConfig,

    /// Session token settings
    pub session: SessionConfig,

    /// Initial list controls
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the streaming API, without the `/api/v1` prefix
    pub base_url: String,

    /// Whole-request timeout (seconds)
    pub timeout_seconds: u64,

    /// Connection timeout (seconds)
    pub connect_timeout_seconds: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Value sent in the `x-access-token` header
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page size selected at startup
    pub default_limit: u32,

    /// Page number selected at startup
    pub default_page: u32,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://0.0.0.0:8000".to_string(),
            timeout_seconds: 30,
            connect_timeout_seconds: 10,
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            default_page: 1,
        }
    }
}

impl PaginationConfig {
    /// Selection the controller starts from.
    pub fn initial_selection(&self) -> crate::error::Result<PageSelection> {
        PageSelection::new(self.default_limit, self.default_page)
    }
}

/// Files tried by [`Config::load`], in order
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["video-list.toml", "config/video-list.toml"];

impl Config {
    /// Load configuration from the first existing default file, then apply
    /// environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_first(&DEFAULT_CONFIG_PATHS)?;
        config.apply_env()?;
        Ok(config)
    }

    /// Load the first of `paths` that exists, or the defaults when none does.
    ///
    /// A file that exists but does not parse is an error.
    pub fn load_first<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        for path in paths {
            let path = path.as_ref();
            if !path.exists() {
                continue;
            }
            let config = Self::load_from(path)?;
            tracing::info!("📄 Loaded configuration from: {}", path.display());
            return Ok(config);
        }

        tracing::debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific TOML file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&config_str)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Override settings from environment variables
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(base_url) = std::env::var("VIDEO_LIST_BASE_URL") {
            self.backend.base_url = base_url;
        }

        if let Ok(token) = std::env::var("VIDEO_LIST_ACCESS_TOKEN") {
            self.session.access_token = Some(token);
        }

        if let Ok(timeout) = std::env::var("VIDEO_LIST_TIMEOUT") {
            self.backend.timeout_seconds = timeout
                .parse()
                .with_context(|| format!("VIDEO_LIST_TIMEOUT is not a number: {}", timeout))?;
        }

        if let Ok(limit) = std::env::var("VIDEO_LIST_LIMIT") {
            self.pagination.default_limit = limit
                .parse()
                .with_context(|| format!("VIDEO_LIST_LIMIT is not a number: {}", limit))?;
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let config_str = toml::to_string_pretty(self)?;
        std::fs::write(path, config_str)?;
        tracing::info!("💾 Configuration saved to: {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.backend.base_url.trim().is_empty() {
            return Err(anyhow!("backend.base_url must not be empty"));
        }

        url::Url::parse(&self.backend.base_url)
            .with_context(|| format!("backend.base_url is not a valid URL: {}", self.backend.base_url))?;

        if self.backend.timeout_seconds == 0 {
            return Err(anyhow!("backend.timeout_seconds must be greater than 0"));
        }

        self.pagination
            .initial_selection()
            .map_err(|e| anyhow!("pagination defaults are invalid: {}", e))?;

        tracing::debug!("Configuration validation passed");
        Ok(())
    }

    /// Get runtime configuration summary
    pub fn summary(&self) -> String {
        format!(
            "Video List Configuration:\n\
            - Backend: {}\n\
            - Timeout: {}s\n\
            - Access Token: {}\n\
            - Initial Limit: {}\n\
            - Initial Page: {}",
            self.backend.base_url,
            self.backend.timeout_seconds,
            if self.session.access_token.is_some() { "set" } else { "not set" },
            self.pagination.default_limit,
            self.pagination.default_page,
        )
    }
}

/// Configuration builder for programmatic config creation
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.backend.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.config.backend.timeout_seconds = seconds;
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.config.session.access_token = Some(token.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.config.pagination.default_limit = limit;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.config.pagination.default_page = page;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, "http://0.0.0.0:8000");
        assert_eq!(config.pagination.default_limit, 10);
        assert_eq!(config.pagination.default_page, 1);
        assert!(config.session.access_token.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .with_base_url("http://localhost:9000")
            .with_limit(25)
            .with_page(2)
            .with_access_token("secret")
            .build();

        assert_eq!(config.backend.base_url, "http://localhost:9000");
        assert_eq!(
            config.pagination.initial_selection().unwrap(),
            PageSelection::new(25, 2).unwrap()
        );
        assert_eq!(config.session.access_token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_config_validation() {
        assert!(Config::default().validate().is_ok());
        assert!(ConfigBuilder::new().with_limit(0).build().validate().is_err());
        assert!(ConfigBuilder::new().with_base_url("nope").build().validate().is_err());
        assert!(ConfigBuilder::new().with_timeout(0).build().validate().is_err());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("video-list.toml");
        std::fs::write(
            &path,
            "[backend]\nbase_url = \"http://media.local:8000\"\n\n[pagination]\ndefault_limit = 5\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.backend.base_url, "http://media.local:8000");
        assert_eq!(config.backend.timeout_seconds, 30);
        assert_eq!(config.pagination.default_limit, 5);
        assert_eq!(config.pagination.default_page, 1);
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("saved.toml");

        let config = ConfigBuilder::new().with_limit(50).with_access_token("t0k3n").build();
        config.save(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.pagination.default_limit, 50);
        assert_eq!(reloaded.session.access_token.as_deref(), Some("t0k3n"));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        std::fs::write(&path, "[backend\nbase_url = ").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_load_first_without_files_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = [temp_dir.path().join("video-list.toml")];

        let config = Config::load_first(&paths).unwrap();
        assert_eq!(config.backend.base_url, "http://0.0.0.0:8000");
    }

    #[test]
    fn test_load_first_picks_first_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("video-list.toml");
        let present = temp_dir.path().join("fallback.toml");
        std::fs::write(&present, "[pagination]\ndefault_limit = 20\n").unwrap();

        let config = Config::load_first(&[missing, present]).unwrap();
        assert_eq!(config.pagination.default_limit, 20);
    }

    #[test]
    fn test_load_first_does_not_skip_broken_file() {
        let temp_dir = TempDir::new().unwrap();
        let broken = temp_dir.path().join("video-list.toml");
        let valid = temp_dir.path().join("fallback.toml");
        std::fs::write(&broken, "[backend\nbase_url = ").unwrap();
        std::fs::write(&valid, "[pagination]\ndefault_limit = 20\n").unwrap();

        let err = Config::load_first(&[broken, valid]).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid config file"));
    }
}
