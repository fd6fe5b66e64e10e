//! Configuration management for the Lectern service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{LecternError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub preferences: PreferenceConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Upstream scripture API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Base URL of the content API, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Static API key sent as the `api-key` header
    #[serde(default)]
    pub api_key: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_sec: u64,
}

/// Version and language preference lists
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PreferenceConfig {
    /// Version ids pinned to the top of the versions listing
    #[serde(default)]
    pub versions: Vec<String>,

    /// Language codes whose versions are included in the listing
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_base_url() -> String {
    "https://api.scripture.api.bible/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_languages() -> Vec<String> {
    [
        "eng", "ibo", "yor", "hau", "ara", "mlg", "heb", "amh", "fra", "spa", "cmn", "zho",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_sec: default_timeout(),
        }
    }
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self {
            versions: Vec::new(),
            languages: default_languages(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| LecternError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File location: `LECTERN_CONFIG` env var, then `./lectern.toml`,
    /// then built-in defaults.
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("LECTERN_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new("lectern.toml").exists() {
            Self::from_file("lectern.toml")?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Server configuration
        if let Ok(host) = env::var("LECTERN_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("LECTERN_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Upstream configuration. LECTERN_API_KEY wins over the legacy
        // API_BIBLE_KEY name.
        if let Ok(base_url) = env::var("LECTERN_UPSTREAM_BASE_URL") {
            self.upstream.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Ok(key) = env::var("LECTERN_API_KEY") {
            self.upstream.api_key = key;
        } else if let Ok(key) = env::var("API_BIBLE_KEY") {
            self.upstream.api_key = key;
        }
        if let Ok(timeout) = env::var("LECTERN_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.upstream.timeout_sec = t;
            }
        }

        // Preference lists, comma-separated
        if let Ok(versions) = env::var("LECTERN_PREFERRED_VERSIONS") {
            self.preferences.versions = split_list(&versions);
        }
        if let Ok(languages) = env::var("LECTERN_PREFERRED_LANGUAGES") {
            self.preferences.languages = split_list(&languages);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(LecternError::ConfigError(
                "Server port must be non-zero".to_string(),
            ));
        }

        if self.upstream.base_url.is_empty() {
            return Err(LecternError::ConfigError(
                "Upstream base URL must be set".to_string(),
            ));
        }

        if self.upstream.api_key.is_empty() {
            return Err(LecternError::ConfigError(
                "Upstream API key must be set (LECTERN_API_KEY)".to_string(),
            ));
        }

        if self.upstream.timeout_sec == 0 {
            return Err(LecternError::ConfigError(
                "Upstream timeout must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration (redacting sensitive values)
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Bind address: {}:{}", self.server.host, self.server.port);
        tracing::info!("  Upstream base URL: {}", self.upstream.base_url);
        tracing::info!(
            "  Upstream API key: {}",
            if self.upstream.api_key.is_empty() {
                "(not set)"
            } else {
                "(set)"
            }
        );
        tracing::info!("  Upstream timeout: {}s", self.upstream.timeout_sec);
        tracing::info!(
            "  Preferred versions: {} entries",
            self.preferences.versions.len()
        );
        tracing::info!(
            "  Preferred languages: {} entries",
            self.preferences.languages.len()
        );
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
