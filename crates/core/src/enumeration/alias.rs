//! Alternate spellings resolved before normalization.

use super::value::RawValue;

/// Maps an alternate raw input to the canonical raw value, or `None` to
/// leave the input unchanged.
///
/// Only consulted on the lookup path, never while members are declared.
pub type AliasResolver = fn(&RawValue) -> Option<RawValue>;

/// Static `(alias, canonical)` pairs, matched ASCII case-insensitively
/// against trimmed string input.
#[derive(Debug, Clone, Copy)]
pub struct AliasTable {
    entries: &'static [(&'static str, &'static str)],
}

impl AliasTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    pub fn resolve(&self, raw: &RawValue) -> Option<RawValue> {
        let input = raw.as_str()?.trim();
        self.entries
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(input))
            .map(|(_, canonical)| RawValue::from(*canonical))
    }

    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: AliasTable = AliasTable::new(&[("prod", "PRODUCTION"), ("dev", "DEVELOPMENT")]);

    #[test]
    fn test_resolve_matches_case_insensitively() {
        assert_eq!(TABLE.resolve(&"PROD".into()), Some("PRODUCTION".into()));
        assert_eq!(TABLE.resolve(&" Dev ".into()), Some("DEVELOPMENT".into()));
    }

    #[test]
    fn test_resolve_passes_through_unknown_input() {
        assert_eq!(TABLE.resolve(&"production".into()), None);
        assert_eq!(TABLE.resolve(&RawValue::Int(1)), None);
    }
}
