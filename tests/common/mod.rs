// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use parts::ports::FileStore;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Hash-style fences, as written for `#`.
#[allow(dead_code)]
pub const HASH_START: &str =
    "# ============================\n# PARTIALS>>>>>\n# ============================";

/// Closing counterpart of [`HASH_START`].
#[allow(dead_code)]
pub const HASH_END: &str =
    "# ============================\n# PARTIALS<<<<<\n# ============================";

/// In-memory [`FileStore`] keyed by full path.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
}

#[allow(dead_code)]
impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `contents` at `path`.
    pub fn put(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), contents.into());
    }

    /// Returns the raw contents stored at `path`.
    pub fn bytes(&self, path: impl AsRef<Path>) -> Vec<u8> {
        self.files.lock().unwrap()[path.as_ref()].clone()
    }

    /// Returns the contents stored at `path` as text.
    pub fn get(&self, path: impl AsRef<Path>) -> String {
        String::from_utf8(self.files.lock().unwrap()[path.as_ref()].clone()).unwrap()
    }
}

impl FileStore for MemoryStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect())
    }

    fn write(&self, path: &Path, contents: &[u8], _mode: u32) -> io::Result<()> {
        self.put(path, contents);
        Ok(())
    }
}

/// Sets or clears an environment variable and restores it on drop.
///
/// Tests using this must be `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    name: &'static str,
    previous: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Sets `name` to `value`.
    pub fn set(name: &'static str, value: &str) -> Self {
        let previous = std::env::var(name).ok();
        std::env::set_var(name, value);
        Self { name, previous }
    }

    /// Removes `name`.
    pub fn unset(name: &'static str) -> Self {
        let previous = std::env::var(name).ok();
        std::env::remove_var(name);
        Self { name, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.previous {
            Some(value) => std::env::set_var(self.name, value),
            None => std::env::remove_var(self.name),
        }
    }
}
