//! Port traits for process-level state.
//!
//! The process working directory and environment are global mutable state,
//! so they sit behind a trait that tests replace with a mock.

use std::io;
use std::path::{Path, PathBuf};

#[cfg_attr(test, mockall::automock)]
pub trait ProcessPort: Send + Sync {
    fn current_dir(&self) -> io::Result<PathBuf>;
    fn set_current_dir(&self, path: &Path) -> io::Result<()>;
    fn var(&self, key: &str) -> Option<String>;
}
