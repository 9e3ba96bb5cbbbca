//! Process-unique member identities.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_MEMBER_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of one constructed member.
///
/// Allocated from a process-wide monotonic counter, so identities differ
/// even between members of unrelated enumerations that share a code. Not
/// stable across processes and deliberately not serializable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberId(u64);

impl MemberId {
    pub(crate) fn allocate() -> Self {
        Self(NEXT_MEMBER_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
