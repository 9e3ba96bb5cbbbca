//! Closed-set enumerations with runtime registration and validation.
//!
//! A concrete enumeration is a plain Rust `enum` whose variants each own a
//! [`Member`]: a validated, normalized code plus a process-unique identity.
//! The members live in a [`Registry`] that belongs to that one type, is
//! built once on first use, and is read-only from then on.
//!
//! # Defining an enumeration
//!
//! ```
//! use std::sync::LazyLock;
//! use toolbelt_core::enumeration::{Enumeration, Registry, RegistryBuilder};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Signal { Red, Green, Broken }
//!
//! static SIGNALS: LazyLock<Registry<Signal>> = LazyLock::new(|| {
//!     RegistryBuilder::new(Signal::TYPE_TAG)
//!         .member(Signal::Red, "red")
//!         .and_then(|b| b.member(Signal::Green, "green"))
//!         .and_then(|b| b.member(Signal::Broken, "broken"))
//!         .and_then(|b| b.supported(&[Signal::Red, Signal::Green]))
//!         .and_then(|b| b.build(Signal::VARIANTS))
//!         .expect("Signal definition is valid")
//! });
//!
//! impl Enumeration for Signal {
//!     const TYPE_TAG: &'static str = "Signal";
//!     const VARIANTS: &'static [Self] = &[Signal::Red, Signal::Green, Signal::Broken];
//!
//!     fn registry() -> &'static Registry<Self> {
//!         &SIGNALS
//!     }
//! }
//!
//! assert_eq!(Signal::from_value("RED").unwrap(), Signal::Red);
//! assert_eq!(Signal::find("amber"), None);
//! assert!(!Signal::Broken.is_supported());
//! ```
//!
//! # Failure semantics
//!
//! A broken definition fails with [`DefinitionError`] inside the `LazyLock`
//! and aborts on first use. Lookups fail with [`DoesNotExist`], which
//! callers handle or avoid with the lenient variants.

mod alias;
mod error;
mod identity;
mod lookup;
mod member;
mod registry;
mod value;

use std::fmt;
use std::hash::Hash;

pub use alias::{AliasResolver, AliasTable};
pub use error::{DefinitionError, DoesNotExist, LookupDirection, EXPECTED_CODE_TYPES};
pub use identity::MemberId;
pub use lookup::Strictness;
pub use member::{Member, MemberRecord};
pub use registry::{Registry, RegistryBuilder};
pub use value::{normalize, Code, RawInput, RawValue};

/// A concrete closed enumeration backed by its own [`Registry`].
pub trait Enumeration: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Shared by every member, used in diagnostics (`"Type:Code"`).
    const TYPE_TAG: &'static str;

    /// Every variant, supported or not. The registry refuses to build
    /// unless each one is declared.
    const VARIANTS: &'static [Self];

    /// The type's registry, built on first access.
    fn registry() -> &'static Registry<Self>;

    /// Secondary numeric value carried into [`MemberRecord::value`].
    fn secondary_value(&self) -> Option<i64> {
        None
    }

    /// Strict lookup from a raw value.
    fn from_value(raw: impl Into<RawValue>) -> Result<Self, DoesNotExist> {
        Self::registry().get(raw)
    }

    /// Lenient lookup from a raw value.
    fn find(raw: impl Into<RawValue>) -> Option<Self> {
        Self::registry().find(raw)
    }

    /// Lookup with an explicit strictness.
    fn resolve(raw: impl Into<RawValue>, strictness: Strictness) -> Result<Option<Self>, DoesNotExist> {
        Self::registry().resolve_member(raw, strictness)
    }

    /// The publicly recognized variants, in declared order.
    fn supported() -> &'static [Self] {
        Self::registry().supported()
    }

    /// The member this variant was declared with.
    ///
    /// # Panics
    ///
    /// If `registry()` was built without this variant. Registries built with
    /// `build(Self::VARIANTS)` declare every variant.
    fn member(&self) -> &'static Member {
        Self::registry()
            .member(*self)
            .expect("registry declares every variant")
    }

    /// The raw value this variant was declared with.
    fn value(&self) -> &'static RawValue {
        self.member().raw_value()
    }

    fn code(&self) -> &'static Code {
        self.member().code()
    }

    fn is_supported(&self) -> bool {
        Self::registry().is_supported(*self)
    }

    fn to_record(&self) -> MemberRecord {
        self.member().to_record(self.secondary_value())
    }
}
