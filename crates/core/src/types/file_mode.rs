//! File-open modes in the familiar `r`/`w`/`a` notation.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::enumeration::{
    AliasTable, DoesNotExist, Enumeration, RawValue, Registry, RegistryBuilder,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileMode {
    /// `r`: read an existing file
    Read,
    /// `r+`: read and write an existing file
    ReadWrite,
    /// `w`: create or truncate, then write
    Write,
    /// `w+`: create or truncate, then read and write
    WriteRead,
    /// `a`: create if needed, append
    Append,
    /// `a+`: create if needed, read and append
    AppendRead,
}

const ALIASES: AliasTable = AliasTable::new(&[("READ", "r"), ("WRITE", "w"), ("APPEND", "a")]);

fn resolve_alias(raw: &RawValue) -> Option<RawValue> {
    ALIASES.resolve(raw)
}

static REGISTRY: LazyLock<Registry<FileMode>> = LazyLock::new(|| {
    RegistryBuilder::new(FileMode::TYPE_TAG)
        .member(FileMode::Read, "r")
        .and_then(|b| b.member(FileMode::ReadWrite, "r+"))
        .and_then(|b| b.member(FileMode::Write, "w"))
        .and_then(|b| b.member(FileMode::WriteRead, "w+"))
        .and_then(|b| b.member(FileMode::Append, "a"))
        .and_then(|b| b.member(FileMode::AppendRead, "a+"))
        .and_then(|b| b.supported(FileMode::VARIANTS))
        .map(|b| b.aliases(resolve_alias))
        .and_then(|b| b.build(FileMode::VARIANTS))
        .expect("FileMode definition is valid")
});

impl Enumeration for FileMode {
    const TYPE_TAG: &'static str = "FileMode";
    const VARIANTS: &'static [Self] = &[
        FileMode::Read,
        FileMode::ReadWrite,
        FileMode::Write,
        FileMode::WriteRead,
        FileMode::Append,
        FileMode::AppendRead,
    ];

    fn registry() -> &'static Registry<Self> {
        &REGISTRY
    }
}

impl FileMode {
    pub fn readable(&self) -> bool {
        !matches!(self, FileMode::Write | FileMode::Append)
    }

    pub fn writable(&self) -> bool {
        !matches!(self, FileMode::Read)
    }

    pub fn truncates(&self) -> bool {
        matches!(self, FileMode::Write | FileMode::WriteRead)
    }

    pub fn appends(&self) -> bool {
        matches!(self, FileMode::Append | FileMode::AppendRead)
    }

    /// True when opening in this mode creates a missing file.
    pub fn creates(&self) -> bool {
        self.truncates() || self.appends()
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for FileMode {
    type Err = DoesNotExist;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumeration::Code;

    #[test]
    fn test_parse_short_codes() {
        assert_eq!("r".parse::<FileMode>().unwrap(), FileMode::Read);
        assert_eq!("R+".parse::<FileMode>().unwrap(), FileMode::ReadWrite);
        assert_eq!("a+".parse::<FileMode>().unwrap(), FileMode::AppendRead);
        assert!("x".parse::<FileMode>().is_err());
    }

    #[test]
    fn test_parse_long_aliases() {
        assert_eq!(FileMode::find("read"), Some(FileMode::Read));
        assert_eq!(FileMode::find("Write"), Some(FileMode::Write));
        assert_eq!(FileMode::find("APPEND"), Some(FileMode::Append));
    }

    #[test]
    fn test_display_keeps_declared_case() {
        assert_eq!(FileMode::WriteRead.to_string(), "w+");
        assert_eq!(FileMode::WriteRead.code(), &Code::Str("W+".into()));
    }

    #[test]
    fn test_mode_predicates() {
        assert!(FileMode::Read.readable() && !FileMode::Read.writable());
        assert!(FileMode::ReadWrite.readable() && FileMode::ReadWrite.writable());
        assert!(!FileMode::ReadWrite.creates());
        assert!(FileMode::Write.truncates() && !FileMode::Write.readable());
        assert!(FileMode::Append.appends() && FileMode::Append.creates());
        assert!(FileMode::AppendRead.readable() && !FileMode::AppendRead.truncates());
    }
}
