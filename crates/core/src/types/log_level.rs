//! Log severity levels.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::enumeration::{
    AliasTable, DoesNotExist, Enumeration, RawValue, Registry, RegistryBuilder,
};

/// Log severity, most to least severe.
///
/// Each level carries a numeric severity (higher is more severe) that is
/// exported as the record's `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

const ALIASES: AliasTable = AliasTable::new(&[
    ("WARNING", "WARN"),
    ("ERR", "ERROR"),
    ("VERBOSE", "TRACE"),
]);

fn resolve_alias(raw: &RawValue) -> Option<RawValue> {
    ALIASES.resolve(raw)
}

static REGISTRY: LazyLock<Registry<LogLevel>> = LazyLock::new(|| {
    RegistryBuilder::new(LogLevel::TYPE_TAG)
        .member(LogLevel::Error, "ERROR")
        .and_then(|b| b.member(LogLevel::Warn, "WARN"))
        .and_then(|b| b.member(LogLevel::Info, "INFO"))
        .and_then(|b| b.member(LogLevel::Debug, "DEBUG"))
        .and_then(|b| b.member(LogLevel::Trace, "TRACE"))
        .and_then(|b| b.supported(LogLevel::VARIANTS))
        .map(|b| b.aliases(resolve_alias))
        .and_then(|b| b.build(LogLevel::VARIANTS))
        .expect("LogLevel definition is valid")
});

impl Enumeration for LogLevel {
    const TYPE_TAG: &'static str = "LogLevel";
    const VARIANTS: &'static [Self] = &[
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    fn registry() -> &'static Registry<Self> {
        &REGISTRY
    }

    fn secondary_value(&self) -> Option<i64> {
        Some(i64::from(self.severity()))
    }
}

impl LogLevel {
    pub fn severity(&self) -> u8 {
        match self {
            LogLevel::Error => 50,
            LogLevel::Warn => 40,
            LogLevel::Info => 30,
            LogLevel::Debug => 20,
            LogLevel::Trace => 10,
        }
    }

    /// True when a logger configured at `self` should emit `other`.
    pub fn enables(&self, other: LogLevel) -> bool {
        other.severity() >= self.severity()
    }

    /// Lower-case name as understood by `RUST_LOG`-style filters.
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for LogLevel {
    type Err = DoesNotExist;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse() {
        assert_eq!("info".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("Warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("err".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert_eq!("verbose".parse::<LogLevel>().unwrap(), LogLevel::Trace);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_all_levels_supported_in_order() {
        assert_eq!(LogLevel::supported(), LogLevel::VARIANTS);
    }

    #[test]
    fn test_enables() {
        assert!(LogLevel::Info.enables(LogLevel::Error));
        assert!(LogLevel::Info.enables(LogLevel::Info));
        assert!(!LogLevel::Info.enables(LogLevel::Debug));
        assert!(LogLevel::Trace.enables(LogLevel::Debug));
    }

    #[test]
    fn test_record_carries_severity() {
        assert_eq!(
            serde_json::to_value(LogLevel::Warn.to_record()).unwrap(),
            json!({"code": "WARN", "value": 40, "type_tag": "LogLevel"})
        );
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
        assert_eq!(LogLevel::default().as_filter(), "info");
    }
}
