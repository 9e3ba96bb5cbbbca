//! Enumeration members and their construction contract.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::error::DefinitionError;
use super::identity::MemberId;
use super::value::{normalize, Code, RawInput, RawValue};

/// One value of a closed enumeration.
///
/// Equality and hashing go through the identity only: two members with the
/// same code are still different members.
#[derive(Debug, Clone)]
pub struct Member {
    identity: MemberId,
    code: Code,
    raw: RawValue,
    type_tag: &'static str,
}

impl Member {
    /// Validates `code`, normalizes it and allocates a fresh identity.
    ///
    /// Registration into an owning registry is a separate step performed by
    /// [`RegistryBuilder::member`](super::RegistryBuilder::member).
    ///
    /// # Errors
    ///
    /// - `MissingRequiredValue` when `code` is null
    /// - `InvalidType` when `code` is neither a string nor a whole number
    pub fn new(type_tag: &'static str, code: impl Into<RawInput>) -> Result<Self, DefinitionError> {
        let raw = validate_code(code.into())?;
        let code = normalize(&raw);
        Ok(Self {
            identity: MemberId::allocate(),
            code,
            raw,
            type_tag,
        })
    }

    pub fn identity(&self) -> MemberId {
        self.identity
    }

    /// The normalized code.
    pub fn code(&self) -> &Code {
        &self.code
    }

    /// The code exactly as declared.
    pub fn raw_value(&self) -> &RawValue {
        &self.raw
    }

    pub fn type_tag(&self) -> &'static str {
        self.type_tag
    }

    /// Flat record for diagnostics or serialization.
    pub fn to_record(&self, value: Option<i64>) -> MemberRecord {
        MemberRecord {
            code: self.code.clone(),
            value,
            type_tag: self.type_tag.to_string(),
        }
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for Member {}

impl Hash for Member {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.type_tag, self.code)
    }
}

fn validate_code(input: RawInput) -> Result<RawValue, DefinitionError> {
    match input {
        RawInput::Null => Err(DefinitionError::missing_required_value("code")),
        RawInput::Str(s) => Ok(RawValue::Str(s)),
        RawInput::Int(n) => Ok(RawValue::Int(n)),
        RawInput::Float(f) if is_whole(f) => Ok(RawValue::Int(f as i64)),
        other => Err(DefinitionError::invalid_type("code", other.type_name())),
    }
}

// Whole, finite and inside i64 (the upper bound itself is not representable).
fn is_whole(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64
}

/// Plain structured view of a member.
///
/// `value` carries the secondary numeric value of enumerations that have
/// one (log severities) and is omitted otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub code: Code,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    pub type_tag: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_new_normalizes_string_code() {
        let member = Member::new("Color", "red").unwrap();
        assert_eq!(member.code(), &Code::Str("RED".into()));
        assert_eq!(member.raw_value(), &RawValue::from("red"));
        assert_eq!(member.type_tag(), "Color");
    }

    #[test]
    fn test_new_coerces_numeric_string() {
        let member = Member::new("Port", "8080").unwrap();
        assert_eq!(member.code(), &Code::Int(8080));
        // the declared spelling is kept for member -> value lookups
        assert_eq!(member.raw_value(), &RawValue::from("8080"));
    }

    #[test]
    fn test_new_accepts_whole_float() {
        let member = Member::new("Port", 80.0).unwrap();
        assert_eq!(member.code(), &Code::Int(80));
    }

    #[test]
    fn test_new_rejects_null() {
        let err = Member::new("Color", None::<&str>).unwrap_err();
        assert_eq!(err, DefinitionError::MissingRequiredValue { field: "code" });
    }

    #[test]
    fn test_new_rejects_non_code_types() {
        let inputs = [
            (RawInput::from(true), "boolean"),
            (RawInput::from(vec!["a", "b"]), "array"),
            (RawInput::from(Utc::now()), "date"),
            (RawInput::from(json!({"code": "x"})), "object"),
            (RawInput::from(1.5), "float"),
            (RawInput::from(f64::NAN), "float"),
        ];
        for (input, expected) in inputs {
            match Member::new("Color", input) {
                Err(DefinitionError::InvalidType { received, .. }) => assert_eq!(received, expected),
                other => panic!("expected InvalidType for {}, got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn test_identity_distinguishes_equal_codes() {
        let a = Member::new("Left", "X").unwrap();
        let b = Member::new("Right", "X").unwrap();
        let c = Member::new("Left", "X").unwrap();
        assert_eq!(a.code(), b.code());
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_display_is_type_and_code() {
        let member = Member::new("Environment", "production").unwrap();
        assert_eq!(member.to_string(), "Environment:PRODUCTION");
    }

    #[test]
    fn test_record_serialization() {
        let member = Member::new("LogLevel", "warn").unwrap();
        let record = member.to_record(Some(40));
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"code": "WARN", "value": 40, "type_tag": "LogLevel"})
        );

        let plain = member.to_record(None);
        assert_eq!(
            serde_json::to_value(&plain).unwrap(),
            json!({"code": "WARN", "type_tag": "LogLevel"})
        );
    }
}
