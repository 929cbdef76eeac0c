//! Logging bootstrap for hosts embedding the chat pane.
//!
//! Sets up the tracing ecosystem with structured stderr output. There is no
//! file output; the controller keeps no persisted state of any kind.
//!
//! # Environment Variables
//!
//! - `CHATPANE_LOG`: Filter directive (like `RUST_LOG`), e.g., `chatpane=debug`
//! - `CHATPANE_LOG_FORMAT`: Output format for stderr: `pretty`, `json`, `compact`

use crate::Error;
use crate::config::LoggingConfig;
use std::env;
use std::io;
use std::str::FromStr;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format for stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Pretty, human-readable output with colors (default for TTY)
    #[default]
    Pretty,
    /// JSON output (one line per event)
    Json,
    /// Compact, single-line output
    Compact,
}

impl LogFormat {
    /// All available log formats.
    pub const VALUES: &[LogFormat] = &[LogFormat::Pretty, LogFormat::Json, LogFormat::Compact];

    /// Parse a log format from a string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            "compact" => Some(LogFormat::Compact),
            _ => None,
        }
    }

    /// Get the string representation of this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
            LogFormat::Compact => "compact",
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        LogFormat::parse_str(s).ok_or_else(|| format!("invalid log format: {}", s))
    }
}

/// Build an EnvFilter from the config level and environment variables.
fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    let filter = env::var("CHATPANE_LOG")
        .ok()
        .or_else(|| env::var("RUST_LOG").ok())
        .unwrap_or_else(|| config.level.clone());

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter))
}

/// Detect if stderr is a TTY for pretty formatting.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

/// Determine the stderr output format.
fn detect_format(config: &LoggingConfig) -> LogFormat {
    if let Ok(fmt_str) = env::var("CHATPANE_LOG_FORMAT")
        && let Some(fmt) = LogFormat::parse_str(&fmt_str)
    {
        return fmt;
    }

    if let Some(fmt) = LogFormat::parse_str(&config.format) {
        return fmt;
    }

    if is_tty() { LogFormat::Pretty } else { LogFormat::Compact }
}

/// Initialize the global tracing subscriber.
///
/// Uses the `[logging]` config section when given, environment variables
/// otherwise. Fails if a global subscriber is already installed.
pub fn init_logging(config: Option<LoggingConfig>) -> crate::Result<()> {
    let config = config.unwrap_or_default();
    let env_filter = build_env_filter(&config);
    let format = detect_format(&config);

    let registry = Registry::default().with(env_filter);

    let result = match format {
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(io::stderr).with_ansi(true))
            .try_init(),
        LogFormat::Json => registry.with(fmt::layer().json().with_writer(io::stderr)).try_init(),
        LogFormat::Compact => registry.with(fmt::layer().compact().with_writer(io::stderr)).try_init(),
    };

    result.map_err(|e| Error::Config(format!("failed to initialize logging: {}", e)))
}
