//! Logging service wrapper over `tracing`.
//!
//! [`init_logging`] installs the global subscriber; [`Logger`] is the thin
//! scoped handle the rest of the code logs through.

use std::fmt;
use std::str::FromStr;

use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use toolbelt_core::LogLevel;

use crate::error::RuntimeError;

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Compact => write!(f, "compact"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "full" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(RuntimeError::config(format!(
                "Invalid log format '{}': expected pretty, compact or json",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

pub fn tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

pub fn level_filter(level: LogLevel) -> LevelFilter {
    LevelFilter::from_level(tracing_level(level))
}

/// `RUST_LOG` wins when set; otherwise the configured level applies.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.as_filter()))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns `RuntimeError::Logging` if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), RuntimeError> {
    let registry = tracing_subscriber::registry().with(env_filter(config));
    let result = match config.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact())
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    };
    result.map_err(|e| RuntimeError::Logging(e.to_string()))?;

    tracing::debug!(level = %config.level, format = %config.format, "Logging initialized");
    Ok(())
}

/// Scoped logger; every event carries a `scope` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    scope: String,
}

impl Logger {
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// A logger for a nested scope, e.g. `app` -> `app::files`.
    pub fn child(&self, name: &str) -> Self {
        Self::new(format!("{}::{}", self.scope, name))
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        let scope = self.scope.as_str();
        match level {
            LogLevel::Error => tracing::error!(scope, "{}", message),
            LogLevel::Warn => tracing::warn!(scope, "{}", message),
            LogLevel::Info => tracing::info!(scope, "{}", message),
            LogLevel::Debug => tracing::debug!(scope, "{}", message),
            LogLevel::Trace => tracing::trace!(scope, "{}", message),
        }
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn capture_at(level: LogLevel, f: impl FnOnce()) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level_filter(level))
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        capture.contents()
    }

    #[test]
    fn test_logger_emits_scope_and_message() {
        let output = capture_at(LogLevel::Info, || {
            Logger::new("toolbelt").info("service started");
        });
        assert!(output.contains("INFO"));
        assert!(output.contains("scope=\"toolbelt\""));
        assert!(output.contains("service started"));
    }

    #[test]
    fn test_logger_respects_level() {
        let output = capture_at(LogLevel::Warn, || {
            let logger = Logger::new("toolbelt");
            logger.debug("hidden detail");
            logger.error("visible failure");
        });
        assert!(!output.contains("hidden detail"));
        assert!(output.contains("visible failure"));
    }

    #[test]
    fn test_child_scope() {
        let logger = Logger::new("app").child("files");
        assert_eq!(logger.scope(), "app::files");
    }

    #[test]
    fn test_level_conversions() {
        assert_eq!(tracing_level(LogLevel::Warn), Level::WARN);
        assert_eq!(level_filter(LogLevel::Trace), LevelFilter::TRACE);
        assert!(level_filter(LogLevel::Error) < level_filter(LogLevel::Debug));
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" compact ".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert_eq!("full".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!(matches!(
            "xml".parse::<LogFormat>(),
            Err(RuntimeError::Config(_))
        ));
    }
}
