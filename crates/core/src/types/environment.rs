//! Deployment environment flag.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::common::none_if_empty;
use crate::enumeration::{
    AliasTable, DoesNotExist, Enumeration, RawValue, Registry, RegistryBuilder, Strictness,
};

/// The environment the process runs in.
///
/// `Unknown` is registered so it can be looked up and displayed, but it is
/// not a supported environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    Production,
    #[default]
    Development,
    Test,
    Unknown,
}

const ALIASES: AliasTable = AliasTable::new(&[
    ("PROD", "PRODUCTION"),
    ("DEV", "DEVELOPMENT"),
    ("TESTING", "TEST"),
]);

fn resolve_alias(raw: &RawValue) -> Option<RawValue> {
    ALIASES.resolve(raw)
}

static REGISTRY: LazyLock<Registry<Environment>> = LazyLock::new(|| {
    RegistryBuilder::new(Environment::TYPE_TAG)
        .member(Environment::Production, "PRODUCTION")
        .and_then(|b| b.member(Environment::Development, "DEVELOPMENT"))
        .and_then(|b| b.member(Environment::Test, "TEST"))
        .and_then(|b| b.member(Environment::Unknown, "UNKNOWN"))
        .and_then(|b| {
            b.supported(&[
                Environment::Production,
                Environment::Development,
                Environment::Test,
            ])
        })
        .map(|b| b.aliases(resolve_alias))
        .and_then(|b| b.build(Environment::VARIANTS))
        .expect("Environment definition is valid")
});

impl Enumeration for Environment {
    const TYPE_TAG: &'static str = "Environment";
    const VARIANTS: &'static [Self] = &[
        Environment::Production,
        Environment::Development,
        Environment::Test,
        Environment::Unknown,
    ];

    fn registry() -> &'static Registry<Self> {
        &REGISTRY
    }
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    pub fn is_test(&self) -> bool {
        matches!(self, Environment::Test)
    }

    /// Reads an optional setting such as `APP_ENV`, falling back to `Unknown`
    /// for missing or unrecognized values.
    pub fn from_env_value(value: Option<&str>) -> Self {
        value
            .and_then(none_if_empty)
            .and_then(|v| Self::resolve(v, Strictness::Lenient).ok().flatten())
            .unwrap_or(Environment::Unknown)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for Environment {
    type Err = DoesNotExist;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(s)
    }
}
