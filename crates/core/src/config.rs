use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Base URLs for the two query services
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointsConfig {
    /// Base URL of the primary (structured) query service
    #[serde(default = "default_primary_url")]
    pub primary_url: String,

    /// Base URL of the secondary (plain chat) query service
    #[serde(default = "default_secondary_url")]
    pub secondary_url: String,
}

fn default_primary_url() -> String {
    "http://127.0.0.1:5001".to_string()
}

fn default_secondary_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self { primary_url: default_primary_url(), secondary_url: default_secondary_url() }
    }
}

/// Query shaping options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryConfig {
    /// Number of retrieval matches requested per query (must be >= 1)
    #[serde(default = "default_top_k")]
    pub top_k: u32,
}

fn default_top_k() -> u32 {
    3
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self { top_k: default_top_k() }
    }
}

/// Auto-scroll tuning, in view pixels
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScrollConfig {
    /// Near-bottom threshold for passive scroll detection
    #[serde(default = "default_near_bottom_px")]
    pub near_bottom_px: f32,

    /// Near-bottom threshold for append-triggered reveal decisions
    #[serde(default = "default_reveal_threshold_px")]
    pub reveal_threshold_px: f32,

    /// Gap kept above a revealed entry's top edge
    #[serde(default = "default_reveal_margin_px")]
    pub reveal_margin_px: f32,

    /// Quiet period before a burst of scroll events is considered settled
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_near_bottom_px() -> f32 {
    80.0
}

fn default_reveal_threshold_px() -> f32 {
    120.0
}

fn default_reveal_margin_px() -> f32 {
    12.0
}

fn default_debounce_ms() -> u64 {
    80
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            near_bottom_px: default_near_bottom_px(),
            reveal_threshold_px: default_reveal_threshold_px(),
            reveal_margin_px: default_reveal_margin_px(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Transcript retention
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranscriptConfig {
    /// Oldest entries are dropped once this many are held (must be >= 1)
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

fn default_max_entries() -> usize {
    1000
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self { max_entries: default_max_entries() }
    }
}

/// Logging configuration for the `[logging]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default log level for stderr output (overridden by `CHATPANE_LOG`)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: "pretty", "json", or "compact"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), format: default_log_format() }
    }
}

/// Root configuration structure for chatpane.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub endpoints: EndpointsConfig,

    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub scroll: ScrollConfig,

    #[serde(default)]
    pub transcript: TranscriptConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(toml_str).map_err(|e| crate::Error::Config(format!("TOML parse error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        use crate::Error;

        if self.endpoints.primary_url.trim().is_empty() {
            return Err(Error::Config(ConfigError::EmptyUrl("primary_url").to_string()));
        }
        if self.endpoints.secondary_url.trim().is_empty() {
            return Err(Error::Config(ConfigError::EmptyUrl("secondary_url").to_string()));
        }
        if self.query.top_k == 0 {
            return Err(Error::Config(ConfigError::InvalidTopK.to_string()));
        }
        if self.transcript.max_entries == 0 {
            return Err(Error::Config(ConfigError::InvalidMaxEntries.to_string()));
        }
        if self.scroll.near_bottom_px < 0.0 || self.scroll.reveal_threshold_px < 0.0 || self.scroll.reveal_margin_px < 0.0
        {
            return Err(Error::Config(ConfigError::NegativeScrollTuning.to_string()));
        }

        Ok(())
    }

    /// Get example configuration (as a string)
    pub fn example() -> &'static str {
        r#"# chatpane configuration example
# Copy this file to chatpane.toml and customize as needed

[endpoints]
# Base URL of the primary (structured) query service
primary_url = "http://127.0.0.1:5001"
# Base URL of the secondary (plain chat) query service
secondary_url = "http://127.0.0.1:5000"

[query]
# Retrieval matches requested per query
top_k = 3

[scroll]
# Near-bottom threshold for passive scroll detection, in pixels
near_bottom_px = 80.0
# Near-bottom threshold for append-triggered reveal decisions
reveal_threshold_px = 120.0
# Gap kept above a revealed entry's top edge
reveal_margin_px = 12.0
# Quiet period before scroll events settle, in milliseconds
debounce_ms = 80

[transcript]
# Oldest entries are dropped beyond this count
max_entries = 1000

[logging]
# Level: trace, debug, info, warn, error (overridden by CHATPANE_LOG)
level = "warn"
# Format: "pretty", "json", or "compact" (overridden by CHATPANE_LOG_FORMAT)
format = "pretty"
"#
    }
}

/// Configuration-specific errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An endpoint URL is empty
    #[error("endpoint URL must not be empty: {0}")]
    EmptyUrl(&'static str),

    /// top_k must be positive
    #[error("query.top_k must be >= 1")]
    InvalidTopK,

    /// max_entries must be positive
    #[error("transcript.max_entries must be >= 1")]
    InvalidMaxEntries,

    /// Scroll thresholds must be non-negative
    #[error("scroll thresholds must be >= 0")]
    NegativeScrollTuning,
}
