//! Error types for enumeration definition and lookup.
//!
//! The two types are kept apart because they mean different things:
//! - [`DefinitionError`] is raised while an enumeration is being declared and
//!   signals a broken definition (a programmer error). It aborts startup.
//! - [`DoesNotExist`] is raised by strict lookups and signals that external
//!   data matched nothing. Callers recover from it, or avoid it entirely with
//!   a lenient lookup.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::value::Code;

/// Types a member code may have.
pub const EXPECTED_CODE_TYPES: &[&str] = &["string", "number"];

/// Structural failure while declaring an enumeration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// A required value was absent
    #[error("Missing required value: {field}")]
    MissingRequiredValue { field: &'static str },

    /// A value had a type outside the accepted set
    #[error("Invalid type for {field}: received {received}, expected one of [{}]", .expected.join(", "))]
    InvalidType {
        field: &'static str,
        received: &'static str,
        expected: &'static [&'static str],
    },

    /// Two members normalize to the same code
    #[error("Duplicate value in {type_tag}: {code} is already registered to {existing}")]
    DuplicateValue {
        type_tag: &'static str,
        code: Code,
        existing: String,
    },

    /// The same variant was declared twice
    #[error("Duplicate member in {type_tag}: {member} is already declared")]
    DuplicateMember {
        type_tag: &'static str,
        member: String,
    },

    /// A variant was never declared
    #[error("Undeclared member in {type_tag}: {member} has no code")]
    UndeclaredMember {
        type_tag: &'static str,
        member: String,
    },

    /// A supported variant was never registered
    #[error("Unregistered supported member in {type_tag}: {member}")]
    UnregisteredSupported {
        type_tag: &'static str,
        member: String,
    },

    /// A variant appears twice in the supported list
    #[error("Duplicate supported member in {type_tag}: {member}")]
    DuplicateSupported {
        type_tag: &'static str,
        member: String,
    },
}

impl DefinitionError {
    pub fn missing_required_value(field: &'static str) -> Self {
        Self::MissingRequiredValue { field }
    }

    /// Create an invalid type error against [`EXPECTED_CODE_TYPES`]
    pub fn invalid_type(field: &'static str, received: &'static str) -> Self {
        Self::InvalidType {
            field,
            received,
            expected: EXPECTED_CODE_TYPES,
        }
    }
}

/// Which way a failed lookup was going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupDirection {
    ValueToMember,
    MemberToValue,
}

impl fmt::Display for LookupDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupDirection::ValueToMember => write!(f, "value to member"),
            LookupDirection::MemberToValue => write!(f, "member to value"),
        }
    }
}

/// A strict lookup found nothing.
///
/// Value misses read `Environment has no member for value 'staging'`;
/// member misses read `Environment:STAGING has no registered value`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub struct DoesNotExist {
    pub queried: String,
    pub type_tag: &'static str,
    pub direction: LookupDirection,
}

impl fmt::Display for DoesNotExist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            LookupDirection::ValueToMember => {
                write!(f, "{} has no member for value '{}'", self.type_tag, self.queried)
            }
            LookupDirection::MemberToValue => write!(f, "{} has no registered value", self.queried),
        }
    }
}

impl DoesNotExist {
    pub fn value_to_member(type_tag: &'static str, queried: impl fmt::Display) -> Self {
        Self {
            queried: queried.to_string(),
            type_tag,
            direction: LookupDirection::ValueToMember,
        }
    }

    pub fn member_to_value(type_tag: &'static str, queried: impl fmt::Display) -> Self {
        Self {
            queried: queried.to_string(),
            type_tag,
            direction: LookupDirection::MemberToValue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_value_message() {
        let err = DefinitionError::missing_required_value("code");
        assert_eq!(err.to_string(), "Missing required value: code");
    }

    #[test]
    fn test_invalid_type_message() {
        let err = DefinitionError::invalid_type("code", "boolean");
        assert!(matches!(
            err,
            DefinitionError::InvalidType {
                received: "boolean",
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "Invalid type for code: received boolean, expected one of [string, number]"
        );
    }

    #[test]
    fn test_does_not_exist_value_to_member_message() {
        let err = DoesNotExist::value_to_member("Environment", "staging");
        assert_eq!(err.direction, LookupDirection::ValueToMember);
        assert_eq!(err.to_string(), "Environment has no member for value 'staging'");
    }

    #[test]
    fn test_does_not_exist_member_to_value_message() {
        let err = DoesNotExist::member_to_value("Environment", "Environment:STAGING");
        assert_eq!(err.direction, LookupDirection::MemberToValue);
        assert_eq!(
            err.to_string(),
            "Environment:STAGING has no registered value"
        );
    }
}
