//! Lookups against a finished registry.
//!
//! Every operation here is a pure read. Strict lookups turn a miss into
//! [`DoesNotExist`]; lenient lookups turn it into `None`.

use std::hash::Hash;

use super::error::DoesNotExist;
use super::member::Member;
use super::registry::Registry;
use super::value::{normalize, RawValue};

/// How a lookup treats a miss. Strict unless stated otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strictness {
    /// A miss is an error
    #[default]
    Strict,
    /// A miss is `None`
    Lenient,
}

impl Strictness {
    fn miss<T>(self, err: impl FnOnce() -> DoesNotExist) -> Result<Option<T>, DoesNotExist> {
        match self {
            Strictness::Strict => Err(err()),
            Strictness::Lenient => Ok(None),
        }
    }
}

impl<E: Copy + Eq + Hash> Registry<E> {
    /// Resolves a raw value to its variant: alias resolver, then
    /// normalizer, then the value table.
    ///
    /// A strict miss names the input as the caller supplied it.
    pub fn resolve_member(
        &self,
        raw: impl Into<RawValue>,
        strictness: Strictness,
    ) -> Result<Option<E>, DoesNotExist> {
        let raw = raw.into();
        let canonical = self.aliases.and_then(|resolve| resolve(&raw));
        let code = normalize(canonical.as_ref().unwrap_or(&raw));
        match self.value_to_member.get(&code) {
            Some(variant) => Ok(Some(*variant)),
            None => strictness.miss(|| DoesNotExist::value_to_member(self.type_tag, &raw)),
        }
    }

    /// Resolves a member back to the raw value it was declared with.
    pub fn resolve_value(
        &self,
        member: &Member,
        strictness: Strictness,
    ) -> Result<Option<&RawValue>, DoesNotExist> {
        match self.member_to_value.get(&member.identity()) {
            Some(raw) => Ok(Some(raw)),
            None => strictness.miss(|| DoesNotExist::member_to_value(self.type_tag, member)),
        }
    }

    /// Strict value lookup.
    pub fn get(&self, raw: impl Into<RawValue>) -> Result<E, DoesNotExist> {
        let raw = raw.into();
        self.resolve_member(raw.clone(), Strictness::Strict)?
            .ok_or_else(|| DoesNotExist::value_to_member(self.type_tag, &raw))
    }

    /// Lenient value lookup.
    pub fn find(&self, raw: impl Into<RawValue>) -> Option<E> {
        self.resolve_member(raw, Strictness::Lenient).ok().flatten()
    }

    /// True only when `candidate` belongs to this registry and is supported.
    ///
    /// Registered-but-unsupported members (sentinels) and members of any
    /// other registry are both reported as not members.
    pub fn is_member(&self, candidate: &Member) -> bool {
        self.supported
            .iter()
            .any(|variant| self.member(*variant).is_some_and(|member| member == candidate))
    }

    /// True when `variant` is in the supported list.
    pub fn is_supported(&self, variant: E) -> bool {
        self.supported.contains(&variant)
    }
}
