//! Process and working-directory wrappers.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::RuntimeError;
use crate::ports::ProcessPort;

/// The real process - touches the actual working directory and environment.
pub struct SystemProcess;

impl SystemProcess {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemProcess {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessPort for SystemProcess {
    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn set_current_dir(&self, path: &Path) -> io::Result<()> {
        std::env::set_current_dir(path)
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Working directory with a `pushd`/`popd` style history.
pub struct WorkingDirectory {
    process: Arc<dyn ProcessPort>,
    history: Vec<PathBuf>,
}

impl WorkingDirectory {
    pub fn new(process: Arc<dyn ProcessPort>) -> Self {
        Self {
            process,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Result<PathBuf, RuntimeError> {
        self.process
            .current_dir()
            .map_err(|e| RuntimeError::io(".", e))
    }

    /// Resolves `path` against the current directory; absolute paths pass through.
    pub fn resolve(&self, path: impl AsRef<Path>) -> Result<PathBuf, RuntimeError> {
        let path = path.as_ref();
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }
        Ok(self.current()?.join(path))
    }

    /// Changes into `path`, remembering where we were. Returns the new directory.
    pub fn push(&mut self, path: impl AsRef<Path>) -> Result<PathBuf, RuntimeError> {
        let previous = self.current()?;
        let target = self.resolve(path)?;
        self.process
            .set_current_dir(&target)
            .map_err(|e| RuntimeError::io(&target, e))?;
        tracing::debug!(from = %previous.display(), to = %target.display(), "Changed working directory");
        self.history.push(previous);
        Ok(target)
    }

    /// Returns to the directory before the last successful `push`.
    ///
    /// `None` when there is nothing to return to.
    pub fn pop(&mut self) -> Result<Option<PathBuf>, RuntimeError> {
        let Some(previous) = self.history.pop() else {
            return Ok(None);
        };
        if let Err(e) = self.process.set_current_dir(&previous) {
            // keep the entry so the caller can retry
            self.history.push(previous.clone());
            return Err(RuntimeError::io(previous, e));
        }
        Ok(Some(previous))
    }

    /// Number of directories that `pop` can return to.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn var(&self, key: &str) -> Option<String> {
        self.process.var(key)
    }
}
