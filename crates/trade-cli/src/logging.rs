//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr (or a file) so that stdout carries only the tables and
//! messages meant for the user.
//!
//! # Log Levels
//!
//! - `error`: failures that abort a command
//! - `warn`: fallbacks, such as built-in reference codes replacing a file
//! - `info`: loaded reference counts, query and export summaries
//! - `debug`: resolution decisions and SQL text
//! - `trace`: per-search scoring details
//!
//! # Usage
//!
//! ```ignore
//! use tracing::level_filters::LevelFilter;
//! use trade_cli::logging::{init_logging, LogConfig};
//!
//! let config = LogConfig::default().with_level_filter(LevelFilter::INFO);
//! init_logging(&config).expect("init logging");
//! ```

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Crates whose events follow the configured level.
const WORKSPACE_TARGETS: [&str; 6] = [
    "trade_cli",
    "trade_ingest",
    "trade_match",
    "trade_model",
    "trade_output",
    "trade_store",
];

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level filter for workspace crates.
    pub level_filter: LevelFilter,
    /// Whether `RUST_LOG` may override `level_filter`.
    pub use_env_filter: bool,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
    /// Output format.
    pub format: LogFormat,
    /// Optional log file path. When set, logs are appended to the file.
    pub log_file: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-field format.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON lines with timestamps, for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    /// Let a valid `RUST_LOG` replace the level filter.
    #[must_use]
    pub fn with_env_filter(mut self, use_env_filter: bool) -> Self {
        self.use_env_filter = use_env_filter;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, with_ansi: bool) -> Self {
        self.with_ansi = with_ansi;
        self
    }

    /// Set the log file path (writes to stderr when None).
    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// This should be called once at application startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        init_logging_with_writer(config, Mutex::new(file));
    } else {
        init_logging_with_writer(config, io::stderr);
    }
    Ok(())
}

/// Initialize logging with a custom writer.
///
/// Terminal formats omit timestamps; JSON keeps them.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(build_env_filter(
        config.level_filter,
        config.use_env_filter,
    ));
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(config.with_ansi)
        .with_target(config.with_target);

    match config.format {
        LogFormat::Json => registry.with(layer.json().with_ansi(false)).init(),
        LogFormat::Compact => registry.with(layer.compact().without_time()).init(),
        LogFormat::Pretty => registry.with(layer.without_time()).init(),
    }
}

/// Build an `EnvFilter` for the given level.
///
/// When `use_env` is set, a valid `RUST_LOG` takes precedence.
fn build_env_filter(level_filter: LevelFilter, use_env: bool) -> EnvFilter {
    if use_env && let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(default_directives(level_filter))
}

/// Workspace crates at `level_filter`, everything else at warn.
fn default_directives(level_filter: LevelFilter) -> String {
    let level = level_filter.to_string().to_lowercase();
    let mut directives = vec![LevelFilter::WARN.min(level_filter).to_string().to_lowercase()];
    directives.extend(
        WORKSPACE_TARGETS
            .iter()
            .map(|target| format!("{target}={level}")),
    );
    directives.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_set_every_field() {
        let config = LogConfig::default()
            .with_level_filter(LevelFilter::DEBUG)
            .with_env_filter(false)
            .with_format(LogFormat::Json)
            .with_ansi(false)
            .with_log_file(Some(PathBuf::from("trade.log")));
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.with_ansi);
        assert_eq!(config.log_file, Some(PathBuf::from("trade.log")));
    }

    #[test]
    fn directives_cover_workspace_crates() {
        let directives = default_directives(LevelFilter::DEBUG);
        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("trade_match=debug"));
        assert!(directives.contains("trade_store=debug"));
    }

    #[test]
    fn quiet_levels_apply_to_external_crates() {
        let directives = default_directives(LevelFilter::ERROR);
        assert!(directives.starts_with("error,"));
    }
}
