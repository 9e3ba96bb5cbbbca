//! Raw inputs, validated raw values, and their normalized canonical codes.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::parse_integer;

/// An untyped candidate handed to member construction.
///
/// Construction accepts anything that can be turned into a `RawInput` and
/// rejects everything that is not a string or a whole number, so the
/// variants mirror what a loosely-typed caller could plausibly pass.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<RawInput>),
    Date(DateTime<Utc>),
    Object,
}

impl RawInput {
    /// Diagnostic name of the input's type, as reported by `InvalidType`.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawInput::Null => "null",
            RawInput::Bool(_) => "boolean",
            RawInput::Int(_) => "integer",
            RawInput::Float(_) => "float",
            RawInput::Str(_) => "string",
            RawInput::List(_) => "array",
            RawInput::Date(_) => "date",
            RawInput::Object => "object",
        }
    }
}

macro_rules! raw_input_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawInput {
                fn from(value: $ty) -> Self {
                    RawInput::Int(i64::from(value))
                }
            }
        )*
    };
}

raw_input_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for RawInput {
    fn from(value: f64) -> Self {
        RawInput::Float(value)
    }
}

impl From<bool> for RawInput {
    fn from(value: bool) -> Self {
        RawInput::Bool(value)
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        RawInput::Str(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        RawInput::Str(value)
    }
}

impl From<DateTime<Utc>> for RawInput {
    fn from(value: DateTime<Utc>) -> Self {
        RawInput::Date(value)
    }
}

impl From<RawValue> for RawInput {
    fn from(value: RawValue) -> Self {
        match value {
            RawValue::Int(n) => RawInput::Int(n),
            RawValue::Str(s) => RawInput::Str(s),
        }
    }
}

impl<T: Into<RawInput>> From<Option<T>> for RawInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawInput::Null, Into::into)
    }
}

impl<T: Into<RawInput>> From<Vec<T>> for RawInput {
    fn from(value: Vec<T>) -> Self {
        RawInput::List(value.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for RawInput {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => RawInput::Null,
            Value::Bool(b) => RawInput::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => RawInput::Int(i),
                // u64 beyond i64::MAX and decimals both land here
                None => RawInput::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => RawInput::Str(s),
            Value::Array(items) => RawInput::List(items.into_iter().map(Into::into).collect()),
            Value::Object(_) => RawInput::Object,
        }
    }
}

/// A validated raw code: what a member was declared with and what lookups accept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Int(i64),
    Str(String),
}

impl RawValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::Str(s) => Some(s),
            RawValue::Int(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            RawValue::Int(n) => Some(*n),
            RawValue::Str(_) => None,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Int(n) => write!(f, "{}", n),
            RawValue::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Str(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Str(value)
    }
}

impl From<&String> for RawValue {
    fn from(value: &String) -> Self {
        RawValue::Str(value.clone())
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Int(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Int(i64::from(value))
    }
}

impl From<&RawValue> for RawValue {
    fn from(value: &RawValue) -> Self {
        value.clone()
    }
}

impl From<Code> for RawValue {
    fn from(code: Code) -> Self {
        match code {
            Code::Int(n) => RawValue::Int(n),
            Code::Str(s) => RawValue::Str(s),
        }
    }
}

/// The canonical comparison form of a raw value.
///
/// Strings are always upper-case and never integer-like; integer-like
/// strings have already become `Int`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Code {
    Int(i64),
    Str(String),
}

impl Code {
    /// Runs an already-normalized code through the normalizer again.
    ///
    /// Always returns a code equal to `self`.
    pub fn renormalize(&self) -> Code {
        normalize(&RawValue::from(self.clone()))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Code::Int(n) => write!(f, "{}", n),
            Code::Str(s) => write!(f, "{}", s),
        }
    }
}

/// Converts a raw value into its canonical comparison form.
///
/// Strings are trimmed. Integer-like strings become integers, other strings
/// are case-folded to upper case, integers pass through. Used identically on the construction
/// and lookup paths.
///
/// ```
/// use toolbelt_core::enumeration::{normalize, Code, RawValue};
///
/// assert_eq!(normalize(&RawValue::from("prod")), Code::Str("PROD".into()));
/// assert_eq!(normalize(&RawValue::from("42")), Code::Int(42));
/// assert_eq!(normalize(&RawValue::from(42)), Code::Int(42));
/// ```
pub fn normalize(raw: &RawValue) -> Code {
    match raw {
        RawValue::Int(n) => Code::Int(*n),
        RawValue::Str(s) => {
            let s = s.trim();
            match parse_integer(s) {
                Some(n) => Code::Int(n),
                None => Code::Str(fold_case(s)),
            }
        }
    }
}

// Lowering first maps compatibility forms (KELVIN SIGN, OHM SIGN, capital
// sharp s) onto the letters their lowercase spellings upper-case to.
fn fold_case(s: &str) -> String {
    s.to_lowercase().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uppercases_strings() {
        assert_eq!(normalize(&"production".into()), Code::Str("PRODUCTION".into()));
        assert_eq!(normalize(&"r+".into()), Code::Str("R+".into()));
        assert_eq!(normalize(&"straße".into()), Code::Str("STRASSE".into()));
    }

    #[test]
    fn test_normalize_trims_string_codes() {
        assert_eq!(normalize(&" production ".into()), Code::Str("PRODUCTION".into()));
        assert_eq!(normalize(&"\tr+\n".into()), Code::Str("R+".into()));
        assert_eq!(normalize(&"   ".into()), Code::Str(String::new()));
    }

    #[test]
    fn test_upper_and_lower_spellings_share_a_code() {
        for c in ['İ', 'ϴ', 'ẞ', '\u{2126}', '\u{212A}', '\u{212B}', 'a', 'ß', 'ǅ'] {
            let code = c.to_string();
            assert_eq!(
                normalize(&code.to_uppercase().into()),
                normalize(&code.to_lowercase().into()),
                "case variants of {:?} diverge",
                c
            );
            let once = normalize(&code.into());
            assert_eq!(once.renormalize(), once);
        }
    }

    #[test]
    fn test_normalize_coerces_integer_strings() {
        assert_eq!(normalize(&"42".into()), Code::Int(42));
        assert_eq!(normalize(&" -3 ".into()), Code::Int(-3));
        // decimals are not integer codes
        assert_eq!(normalize(&"4.5".into()), Code::Str("4.5".into()));
    }

    #[test]
    fn test_normalize_passes_integers_through() {
        assert_eq!(normalize(&RawValue::Int(0)), Code::Int(0));
        assert_eq!(normalize(&RawValue::Int(i64::MIN)), Code::Int(i64::MIN));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            RawValue::from("production"),
            RawValue::from("Dev"),
            RawValue::from("42"),
            RawValue::from(" 7 "),
            RawValue::from("a+"),
            RawValue::from(""),
            RawValue::from("ǅemal"),
            RawValue::from(-12),
        ];
        for raw in samples {
            let once = normalize(&raw);
            assert_eq!(once.renormalize(), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_raw_input_type_names() {
        assert_eq!(RawInput::from(true).type_name(), "boolean");
        assert_eq!(RawInput::from(vec![1, 2]).type_name(), "array");
        assert_eq!(RawInput::from(Utc::now()).type_name(), "date");
        assert_eq!(RawInput::from(None::<&str>).type_name(), "null");
        assert_eq!(RawInput::from(1.5).type_name(), "float");
    }

    #[test]
    fn test_raw_input_from_json() {
        use serde_json::json;

        assert_eq!(RawInput::from(json!(null)), RawInput::Null);
        assert_eq!(RawInput::from(json!(7)), RawInput::Int(7));
        assert_eq!(RawInput::from(json!("x")), RawInput::Str("x".into()));
        assert_eq!(RawInput::from(json!({"a": 1})), RawInput::Object);
        assert_eq!(
            RawInput::from(json!([true])),
            RawInput::List(vec![RawInput::Bool(true)])
        );
    }

    #[test]
    fn test_code_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Code::Int(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Code::Str("W".into())).unwrap(), "\"W\"");
    }
}
