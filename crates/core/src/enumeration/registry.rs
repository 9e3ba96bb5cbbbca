//! Per-type bidirectional registries and the builder that fills them.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::alias::AliasResolver;
use super::error::DefinitionError;
use super::identity::MemberId;
use super::member::Member;
use super::value::{Code, RawInput, RawValue};

/// The member tables of one concrete enumeration.
///
/// Built once through [`RegistryBuilder`] and read-only afterwards, so a
/// shared `&'static Registry<E>` needs no locking.
pub struct Registry<E> {
    pub(crate) type_tag: &'static str,
    /// Declaration order
    pub(crate) entries: Vec<(E, Member)>,
    pub(crate) index: HashMap<E, usize>,
    pub(crate) value_to_member: HashMap<Code, E>,
    pub(crate) member_to_value: HashMap<MemberId, RawValue>,
    pub(crate) supported: Vec<E>,
    pub(crate) aliases: Option<AliasResolver>,
}

impl<E: Copy + Eq + Hash> Registry<E> {
    pub fn type_tag(&self) -> &'static str {
        self.type_tag
    }

    /// The member declared for `variant`, or `None` when the registry was
    /// built without it.
    pub fn member(&self, variant: E) -> Option<&Member> {
        self.index.get(&variant).map(|&i| &self.entries[i].1)
    }

    /// Every registered variant, in declaration order.
    pub fn variants(&self) -> impl Iterator<Item = E> + '_ {
        self.entries.iter().map(|(variant, _)| *variant)
    }

    /// Every registered member, in declaration order.
    pub fn members(&self) -> impl Iterator<Item = &Member> + '_ {
        self.entries.iter().map(|(_, member)| member)
    }

    /// The publicly recognized variants, in their declared order.
    pub fn supported(&self) -> &[E] {
        &self.supported
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The variant a registered member belongs to.
    pub fn variant_of(&self, member: &Member) -> Option<E> {
        self.entries
            .iter()
            .find(|(_, candidate)| candidate == member)
            .map(|(variant, _)| *variant)
    }
}

impl<E: fmt::Debug> fmt::Debug for Registry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("type_tag", &self.type_tag)
            .field("entries", &self.entries)
            .field("supported", &self.supported)
            .field("aliases", &self.aliases.is_some())
            .finish()
    }
}

/// Declares the members of one enumeration.
///
/// This is the only place a registry is ever mutated. Methods consume and
/// return the builder so a definition reads as one `?` chain:
///
/// ```
/// use toolbelt_core::enumeration::{RegistryBuilder, DefinitionError};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Light { On, Off }
///
/// fn define() -> Result<toolbelt_core::enumeration::Registry<Light>, DefinitionError> {
///     RegistryBuilder::new("Light")
///         .member(Light::On, "on")?
///         .member(Light::Off, "off")?
///         .supported(&[Light::On, Light::Off])?
///         .build(&[Light::On, Light::Off])
/// }
///
/// let registry = define().unwrap();
/// assert_eq!(registry.find("ON"), Some(Light::On));
/// ```
pub struct RegistryBuilder<E> {
    registry: Registry<E>,
}

impl<E: fmt::Debug> fmt::Debug for RegistryBuilder<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("registry", &self.registry)
            .finish()
    }
}

impl<E: Copy + Eq + Hash + fmt::Debug> RegistryBuilder<E> {
    pub fn new(type_tag: &'static str) -> Self {
        Self {
            registry: Registry {
                type_tag,
                entries: Vec::new(),
                index: HashMap::new(),
                value_to_member: HashMap::new(),
                member_to_value: HashMap::new(),
                supported: Vec::new(),
                aliases: None,
            },
        }
    }

    /// Constructs the member for `variant` and registers it.
    ///
    /// # Errors
    ///
    /// Any construction error from [`Member::new`], `DuplicateMember` when
    /// `variant` was already declared, and `DuplicateValue` when `code`
    /// normalizes to a code another member already holds.
    pub fn member(mut self, variant: E, code: impl Into<RawInput>) -> Result<Self, DefinitionError> {
        let type_tag = self.registry.type_tag;
        if self.registry.index.contains_key(&variant) {
            return Err(DefinitionError::DuplicateMember {
                type_tag,
                member: format!("{:?}", variant),
            });
        }

        let member = Member::new(type_tag, code)?;
        if let Some(existing) = self.registry.value_to_member.get(member.code()) {
            return Err(DefinitionError::DuplicateValue {
                type_tag,
                code: member.code().clone(),
                existing: format!("{:?}", existing),
            });
        }

        let registry = &mut self.registry;
        registry
            .value_to_member
            .insert(member.code().clone(), variant);
        registry
            .member_to_value
            .insert(member.identity(), member.raw_value().clone());
        registry.index.insert(variant, registry.entries.len());
        registry.entries.push((variant, member));
        Ok(self)
    }

    /// Sets the ordered list of publicly recognized variants.
    ///
    /// Registered variants left out of this list still resolve, but
    /// `is_member` reports them as unsupported.
    pub fn supported(mut self, variants: &[E]) -> Result<Self, DefinitionError> {
        let type_tag = self.registry.type_tag;
        let mut supported = Vec::with_capacity(variants.len());
        for variant in variants {
            if !self.registry.index.contains_key(variant) {
                return Err(DefinitionError::UnregisteredSupported {
                    type_tag,
                    member: format!("{:?}", variant),
                });
            }
            if supported.contains(variant) {
                return Err(DefinitionError::DuplicateSupported {
                    type_tag,
                    member: format!("{:?}", variant),
                });
            }
            supported.push(*variant);
        }
        self.registry.supported = supported;
        Ok(self)
    }

    /// Attaches an alias resolver consulted before normalization on lookups.
    pub fn aliases(mut self, resolver: AliasResolver) -> Self {
        self.registry.aliases = Some(resolver);
        self
    }

    /// Freezes the registry, checking that every one of `variants` was declared.
    pub fn build(self, variants: &[E]) -> Result<Registry<E>, DefinitionError> {
        if let Some(missing) = variants
            .iter()
            .find(|variant| !self.registry.index.contains_key(variant))
        {
            return Err(DefinitionError::UndeclaredMember {
                type_tag: self.registry.type_tag,
                member: format!("{:?}", missing),
            });
        }
        Ok(self.registry)
    }
}
