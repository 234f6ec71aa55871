use serde::Deserialize;
use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with JSON formatting and environment-based filtering
///
/// This function sets up the logging infrastructure using tracing-subscriber:
/// - Uses environment variables for log level filtering (defaults to "info" if not set)
/// - Configures JSON output format for structured logging
/// - Flattens event fields for cleaner log output
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .json()
        .flatten_event(true)
        .init();
}

/// Access log strategy used when neither the config nor the CLI picks one.
pub fn default_log_mode() -> LogMode {
    if io::stdout().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Structured
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogMode {
    Pretty,
    Structured,
    Off,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

/// Dispatches a tracing event at a level chosen at runtime.
macro_rules! emit {
    ($level:expr, $($fields:tt)*) => {
        match $level {
            $crate::logging::LogLevel::Trace => ::tracing::trace!($($fields)*),
            $crate::logging::LogLevel::Debug => ::tracing::debug!($($fields)*),
            $crate::logging::LogLevel::Info  => ::tracing::info!($($fields)*),
            $crate::logging::LogLevel::Warn  => ::tracing::warn!($($fields)*),
            $crate::logging::LogLevel::Error => ::tracing::error!($($fields)*),
        }
    };
}

pub(crate) use emit;
