//! # Toolbelt Core
//!
//! Pure building blocks with no I/O:
//!
//! - [`enumeration`]: closed-set enumerations backed by per-type registries
//!   with bidirectional lookup, normalization and validation
//! - [`types`]: the enumerations the rest of the toolbelt consumes
//!   (`Environment`, `LogLevel`, `FileMode`)
//! - [`common`]: small string, number, collection and date helpers

pub mod common;
pub mod enumeration;
pub mod types;

pub use enumeration::{
    normalize, AliasResolver, AliasTable, Code, DefinitionError, DoesNotExist, Enumeration,
    LookupDirection, Member, MemberId, MemberRecord, RawInput, RawValue, Registry,
    RegistryBuilder, Strictness,
};
pub use types::{Environment, FileMode, LogLevel};
