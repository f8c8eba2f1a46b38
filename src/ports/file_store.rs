// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem port used by the partials commands.
//!
//! The commands only ever need three things from storage: read a whole
//! file, list the regular files of a directory, and replace a file's
//! contents. Keeping that behind a trait lets the merge logic be exercised
//! without touching disk.

use std::io;
use std::path::{Path, PathBuf};

/// Storage the partials commands read from and write to.
///
/// Errors are plain `io::Error`s; the commands attach the path and the role
/// of the file (aggregate, partial, directory) when converting them.
pub trait FileStore {
    /// Reads the whole file at `path`.
    ///
    /// Contents are raw bytes; files need not be UTF-8.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Lists the entries of `dir` that are not directories, sorted by file name.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// Replaces the contents of `path`.
    ///
    /// `mode` holds the Unix permission bits to use if the file has to be
    /// created; existing files keep their permissions.
    fn write(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()>;
}

impl<T: FileStore + ?Sized> FileStore for &T {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        (**self).list_files(dir)
    }

    fn write(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
        (**self).write(path, contents, mode)
    }
}
