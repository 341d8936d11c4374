//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::chart::{MIN_CHART_HEIGHT, MIN_CHART_WIDTH};
use crate::dashboard::Section;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Dashboard presentation settings
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Section shown before any selection
    #[serde(default)]
    pub default_section: Section,

    #[serde(default = "default_title")]
    pub title: String,

    /// Analysis period shown under the title
    #[serde(default = "default_period")]
    pub period: String,

    #[serde(default = "default_chart_width")]
    pub chart_width: u32,

    #[serde(default = "default_chart_height")]
    pub chart_height: u32,
}

fn default_title() -> String {
    "Aadhaar Data Insights".to_string()
}

fn default_period() -> String {
    "UIDAI Hackathon 2025 | Analysis Period: Mar - Dec 2025".to_string()
}

fn default_chart_width() -> u32 {
    640
}

fn default_chart_height() -> u32 {
    400
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_section: Section::default(),
            title: default_title(),
            period: default_period(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
        }
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
    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> LoadedConfig {
        Self::search(&[], env_lookup)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<LoadedConfig, ConfigError> {
        let mut config = Self::load(path)?;
        let warnings = config.apply_overrides(env_lookup);
        Ok(LoadedConfig {
            config,
            source: Some(path.to_path_buf()),
            warnings,
        })
    }

    /// Load from default locations or environment
    pub fn load_default() -> LoadedConfig {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("aadhaar-insights").join("config.toml")),
            Some(PathBuf::from("/etc/aadhaar-insights/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::search(&config_paths, env_lookup)
    }

    /// Use the first readable, valid file in `paths`, then apply overrides
    ///
    /// Files that exist but fail to load are skipped and reported in the
    /// returned warnings.
    pub fn search<F>(paths: &[PathBuf], lookup: F) -> LoadedConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();

        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::load(path) {
                Ok(mut config) => {
                    warnings.extend(config.apply_overrides(&lookup));
                    return LoadedConfig {
                        config,
                        source: Some(path.clone()),
                        warnings,
                    };
                }
                Err(e) => warnings.push(format!("Skipping config file: {}", e)),
            }
        }

        let mut config = Config::default();
        warnings.extend(config.apply_overrides(&lookup));
        LoadedConfig {
            config,
            source: None,
            warnings,
        }
    }

    /// Apply overrides from any key lookup (the environment in production)
    ///
    /// Values that do not parse are left at their previous setting; one
    /// warning is returned per ignored value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();

        // Server overrides
        if let Some(host) = lookup("AADHAAR_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("AADHAAR_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(e) => warnings.push(format!("Ignoring AADHAAR_PORT={:?}: {}", port, e)),
            }
        }

        // Dashboard overrides
        if let Some(section) = lookup("AADHAAR_DEFAULT_SECTION") {
            match section.parse::<Section>() {
                Ok(s) => self.dashboard.default_section = s,
                Err(e) => warnings.push(format!("Ignoring AADHAAR_DEFAULT_SECTION: {}", e)),
            }
        }

        // Logging overrides
        if let Some(level) = lookup("AADHAAR_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("AADHAAR_LOG_FORMAT") {
            self.logging.format = format;
        }

        warnings
    }

    /// Reject values the server or chart layout cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "server.request_timeout_secs",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.dashboard.chart_width < MIN_CHART_WIDTH {
            return Err(ConfigError::Invalid {
                field: "dashboard.chart_width",
                reason: format!("must be at least {}", MIN_CHART_WIDTH),
            });
        }
        if self.dashboard.chart_height < MIN_CHART_HEIGHT {
            return Err(ConfigError::Invalid {
                field: "dashboard.chart_height",
                reason: format!("must be at least {}", MIN_CHART_HEIGHT),
            });
        }
        Ok(())
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// A loaded config and what happened while assembling it
///
/// Loading runs before the tracing subscriber exists, so nothing is logged
/// here. Binaries call [`LoadedConfig::log`] once logging is initialized.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the values came from; `None` when only defaults and env were used
    pub source: Option<PathBuf>,
    /// Skipped files and ignored override values
    pub warnings: Vec<String>,
}

impl LoadedConfig {
    /// Report the config source and every warning
    pub fn log(&self) {
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
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

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Aadhaar Insights Configuration
#
# Environment variables override these settings:
# - AADHAAR_HOST
# - AADHAAR_PORT
# - AADHAAR_DEFAULT_SECTION
# - AADHAAR_LOG_LEVEL
# - AADHAAR_LOG_FORMAT

[server]
# Server host
host = "0.0.0.0"

# Server port
port = 8090

# Allowed CORS origins (empty = any origin)
cors_origins = []

# Request timeout in seconds (at least 1)
request_timeout_secs = 30

[dashboard]
# Section shown on first load: overview, enrollment, biometric, demographic, comparison
default_section = "overview"

# Page title and subtitle
title = "Aadhaar Data Insights"
period = "UIDAI Hackathon 2025 | Analysis Period: Mar - Dec 2025"

# Chart size in pixels (at least 240 x 120)
chart_width = 640
chart_height = 400

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
