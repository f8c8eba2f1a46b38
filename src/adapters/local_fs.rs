// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local filesystem implementation of [`FileStore`].

use crate::ports::FileStore;
use directories::BaseDirs;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// [`FileStore`] over the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileStore;

impl LocalFileStore {
    /// Creates a new local store.
    pub fn new() -> Self {
        LocalFileStore
    }
}

impl FileStore for LocalFileStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            // fs::metadata follows symlinks, so a link to a directory is skipped too
            match fs::metadata(&path) {
                Ok(meta) if meta.is_dir() => continue,
                _ => files.push(path),
            }
        }
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    fn write(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;

        let mut file = options.open(path)?;
        file.write_all(contents)?;
        file.flush()
    }
}

/// Expands a leading `~` or `~/` to the current user's home directory.
///
/// Anything else, including `~user/...`, is returned unchanged. If the home
/// directory cannot be determined the path is returned unchanged as well.
///
/// # Examples
///
/// ```
/// use parts::adapters::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/etc/ssh/ssh_config"), PathBuf::from("/etc/ssh/ssh_config"));
/// assert_eq!(expand_tilde("~other/config"), PathBuf::from("~other/config"));
/// ```
pub fn expand_tilde(path: &str) -> PathBuf {
    if path != "~" && !path.starts_with("~/") {
        return PathBuf::from(path);
    }

    let Some(dirs) = BaseDirs::new() else {
        tracing::warn!("could not determine home directory, leaving '{}' as is", path);
        return PathBuf::from(path);
    };

    match path.strip_prefix("~/") {
        Some(rest) => dirs.home_dir().join(rest),
        None => dirs.home_dir().to_path_buf(),
    }
}
