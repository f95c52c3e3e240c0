//! Key-value storage backends for snapshots

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::error::Result;

/// Durable storage keyed by a save identifier
pub trait SaveStore: Send {
    /// Returns `Ok(None)` when nothing is stored under `key`
    fn read(&self, key: &str) -> Result<Option<String>>;

    fn write(&mut self, key: &str, contents: &str) -> Result<()>;

    /// Removing a missing key is not an error
    fn clear(&mut self, key: &str) -> Result<()>;
}

/// One JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SaveStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, contents: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        // write-then-rename so a crash never leaves a half-written save
        let tmp = self.dir.join(format!("{}.json.tmp", key));
        std::fs::write(&tmp, contents)?;
        std::fs::rename(&tmp, self.path_for(key))?;
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process store for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry
    pub fn with_entry(key: &str, contents: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), contents.to_string());
        store
    }

    /// Every write fails with an IO error, like a full or read-only disk
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SaveStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, contents: &str) -> Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::Other, "storage unavailable").into());
        }
        self.entries.insert(key.to_string(), contents.to_string());
        self.writes += 1;
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
