//! Environment-driven runtime configuration.
//!
//! Variables (all optional):
//! - `APP_ENV`: deployment environment; unrecognized values fall back to
//!   `UNKNOWN` with a warning
//! - `LOG_LEVEL`: log level; an unrecognized value is an error
//! - `LOG_FORMAT`: `pretty`, `compact` or `json`
//! - `APP_WORKDIR`: directory to change into on startup

use std::path::PathBuf;

use toolbelt_core::common::StringExt;
use toolbelt_core::{Enumeration, Environment, LogLevel};

use crate::error::RuntimeError;
use crate::logging::{LogFormat, LoggingConfig};
use crate::ports::ProcessPort;

pub const APP_ENV: &str = "APP_ENV";
pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const LOG_FORMAT: &str = "LOG_FORMAT";
pub const APP_WORKDIR: &str = "APP_WORKDIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub environment: Environment,
    pub logging: LoggingConfig,
    pub workdir: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Loads `.env` (if any) and reads the process environment.
    pub fn from_env() -> Result<Self, RuntimeError> {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_process(process: &dyn ProcessPort) -> Result<Self, RuntimeError> {
        Self::from_lookup(|key| process.var(key))
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, RuntimeError> {
        // values are trimmed and blanks count as unset
        let get = |key: &str| lookup(key).and_then(|v| v.trim().to_string().into_option());

        let raw_env = get(APP_ENV);
        let environment = Environment::from_env_value(raw_env.as_deref());
        if let (Environment::Unknown, Some(raw)) = (environment, raw_env.as_deref()) {
            tracing::warn!(value = raw, "Unrecognized {}, falling back to {}", APP_ENV, environment);
        }

        let level = match get(LOG_LEVEL) {
            Some(raw) => LogLevel::from_value(raw)?,
            None => default_level(environment),
        };

        let format = match get(LOG_FORMAT) {
            Some(raw) => raw.parse::<LogFormat>()?,
            None => default_format(environment),
        };

        Ok(Self {
            environment,
            logging: LoggingConfig { level, format },
            workdir: get(APP_WORKDIR).map(PathBuf::from),
        })
    }
}

/// Log level used when `LOG_LEVEL` is not set.
pub fn default_level(environment: Environment) -> LogLevel {
    match environment {
        Environment::Development => LogLevel::Debug,
        Environment::Test => LogLevel::Warn,
        Environment::Production | Environment::Unknown => LogLevel::Info,
    }
}

/// Log format used when `LOG_FORMAT` is not set.
pub fn default_format(environment: Environment) -> LogFormat {
    match environment {
        Environment::Production => LogFormat::Json,
        Environment::Test => LogFormat::Compact,
        Environment::Development | Environment::Unknown => LogFormat::Pretty,
    }
}

/// Loads the nearest `.env` file, if there is one.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env");
            Some(path)
        }
        Err(e) if e.not_found() => None,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load .env");
            None
        }
    }
}
