//! File-system entities.
//!
//! Thin wrappers that pair a path with the operations we perform on it and
//! turn I/O failures into [`RuntimeError`]s that name the path.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use toolbelt_core::FileMode;

use crate::error::RuntimeError;

/// Open options matching the semantics of `mode`.
pub fn open_options(mode: FileMode) -> OpenOptions {
    let mut options = OpenOptions::new();
    options
        .read(mode.readable())
        .write(mode.writable() && !mode.appends())
        .append(mode.appends())
        .truncate(mode.truncates())
        .create(mode.creates());
    options
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileEntity {
    path: PathBuf,
}

impl FileEntity {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|e| e.to_str())
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn open(&self, mode: FileMode) -> Result<File, RuntimeError> {
        open_options(mode)
            .open(&self.path)
            .map_err(|e| RuntimeError::io(&self.path, e))
    }

    pub fn read_to_string(&self) -> Result<String, RuntimeError> {
        let mut contents = String::new();
        self.open(FileMode::Read)?
            .read_to_string(&mut contents)
            .map_err(|e| RuntimeError::io(&self.path, e))?;
        Ok(contents)
    }

    /// Writes `contents` using `mode`: `w` replaces, `a` appends, `r+`
    /// overwrites from the start of an existing file.
    pub fn write(&self, contents: &str, mode: FileMode) -> Result<(), RuntimeError> {
        if !mode.writable() {
            return Err(RuntimeError::InvalidMode {
                path: self.path.clone(),
                mode,
                operation: "write",
            });
        }
        let mut file = self.open(mode)?;
        file.write_all(contents.as_bytes())
            .map_err(|e| RuntimeError::io(&self.path, e))?;
        tracing::trace!(path = %self.path.display(), %mode, bytes = contents.len(), "Wrote file");
        Ok(())
    }

    pub fn size(&self) -> Result<u64, RuntimeError> {
        fs::metadata(&self.path)
            .map(|m| m.len())
            .map_err(|e| RuntimeError::io(&self.path, e))
    }

    pub fn modified(&self) -> Result<DateTime<Utc>, RuntimeError> {
        fs::metadata(&self.path)
            .and_then(|m| m.modified())
            .map(DateTime::<Utc>::from)
            .map_err(|e| RuntimeError::io(&self.path, e))
    }

    pub fn remove(&self) -> Result<(), RuntimeError> {
        fs::remove_file(&self.path).map_err(|e| RuntimeError::io(&self.path, e))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectoryEntity {
    path: PathBuf,
}

impl DirectoryEntity {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }

    /// Creates the directory and any missing parents.
    pub fn create_all(&self) -> Result<(), RuntimeError> {
        fs::create_dir_all(&self.path).map_err(|e| RuntimeError::io(&self.path, e))
    }

    /// Direct children, sorted by path.
    pub fn entries(&self) -> Result<Vec<PathBuf>, RuntimeError> {
        let mut entries = fs::read_dir(&self.path)
            .and_then(|dir| dir.map(|entry| entry.map(|e| e.path())).collect::<Result<Vec<_>, _>>())
            .map_err(|e| RuntimeError::io(&self.path, e))?;
        entries.sort();
        Ok(entries)
    }

    /// Direct child files, sorted by path.
    pub fn files(&self) -> Result<Vec<FileEntity>, RuntimeError> {
        Ok(self
            .entries()?
            .into_iter()
            .filter(|p| p.is_file())
            .map(FileEntity::new)
            .collect())
    }

    pub fn file(&self, name: impl AsRef<Path>) -> FileEntity {
        FileEntity::new(self.path.join(name))
    }

    pub fn subdirectory(&self, name: impl AsRef<Path>) -> DirectoryEntity {
        DirectoryEntity::new(self.path.join(name))
    }

    pub fn remove_all(&self) -> Result<(), RuntimeError> {
        fs::remove_dir_all(&self.path).map_err(|e| RuntimeError::io(&self.path, e))
    }
}
