// src/logging.rs

//! Diagnostics go to stderr through a `tracing` fmt subscriber; stdout is
//! reserved for the `--dry-run` listing.
//!
//! The verbosity comes from `--log-level` when given, else from
//! `GRAPHVIEW_LOG`, else it is `info`. An unparsable `GRAPHVIEW_LOG` is
//! ignored.

use std::io;

use anyhow::{Result, anyhow};
use tracing::Level;

use crate::cli::LogLevel;

pub const LOG_ENV_VAR: &str = "GRAPHVIEW_LOG";

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Install the process-wide subscriber. Fails if one is already installed.
pub fn init_logging(flag: Option<LogLevel>) -> Result<()> {
    let env = std::env::var(LOG_ENV_VAR).ok();
    let level = effective_level(flag, env.as_deref());

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow!("cannot install the log subscriber: {e}"))
}

fn effective_level(flag: Option<LogLevel>, env: Option<&str>) -> Level {
    flag.map(Level::from)
        .or_else(|| env.and_then(|raw| raw.trim().parse().ok()))
        .unwrap_or(Level::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_environment() {
        assert_eq!(effective_level(Some(LogLevel::Warn), Some("trace")), Level::WARN);
    }

    #[test]
    fn environment_is_read_case_insensitively() {
        assert_eq!(effective_level(None, Some(" DEBUG ")), Level::DEBUG);
        assert_eq!(effective_level(None, Some("error")), Level::ERROR);
    }

    #[test]
    fn garbage_or_missing_environment_means_info() {
        assert_eq!(effective_level(None, Some("loud")), Level::INFO);
        assert_eq!(effective_level(None, None), Level::INFO);
    }
}
