//! Logging to a file through the global subscriber.
//!
//! Kept in its own test binary because the subscriber can only be installed
//! once per process.

use std::fs;

use tracing::level_filters::LevelFilter;
use trade_cli::logging::{LogConfig, LogFormat, init_logging};

#[test]
fn events_are_appended_to_the_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trade.log");
    fs::write(&path, "earlier run\n").unwrap();
    let config = LogConfig::default()
        .with_level_filter(LevelFilter::INFO)
        .with_env_filter(false)
        .with_format(LogFormat::Compact)
        .with_ansi(false)
        .with_log_file(Some(path.clone()));

    init_logging(&config).unwrap();
    tracing::warn!(records = 3, "reference codes fell back to defaults");
    tracing::debug!("below the configured level");

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("earlier run\n"));
    assert!(contents.contains("reference codes fell back to defaults"));
    assert!(contents.contains("records=3"));
    assert!(!contents.contains("below the configured level"));
}
