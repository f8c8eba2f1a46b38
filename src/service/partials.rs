// SPDX-License-Identifier: MIT OR Apache-2.0

//! Build and remove commands for the partials section of an aggregate file.
//!
//! Building replaces whatever section is already present, so running it any
//! number of times yields the same bytes. Files are handled as raw bytes and
//! need not be UTF-8.

use crate::adapters::{expand_tilde, LocalFileStore};
use crate::domain::{CommentStyle, PartsError, Result, SectionMarkers};
use crate::ports::FileStore;
use std::path::PathBuf;

/// Permission bits for an aggregate file created by a build.
pub const BUILD_FILE_MODE: u32 = 0o600;

/// Permission bits for an aggregate file created by a removal.
pub const REMOVE_FILE_MODE: u32 = 0o644;

/// Result of [`PartialsBuildCommand::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// The aggregate file was rewritten.
    Written {
        /// Aggregate file path
        path: PathBuf,
        /// Length of the new content in bytes
        length: usize,
    },
    /// Dry run: nothing was written.
    DryRun {
        /// Aggregate file path
        path: PathBuf,
        /// Content that would have been written
        content: Vec<u8>,
    },
}

/// Result of [`PartialsRemoveCommand::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The section was removed and the file rewritten.
    Removed {
        /// Aggregate file path
        path: PathBuf,
        /// Number of bytes dropped
        removed: usize,
    },
    /// Dry run: the section was found but nothing was written.
    DryRun {
        /// Aggregate file path
        path: PathBuf,
        /// Length of the file before removal
        original_length: usize,
        /// Content that would have been written
        content: Vec<u8>,
    },
    /// Dry run: the file has no section.
    NothingToRemove {
        /// Aggregate file path
        path: PathBuf,
    },
}

/// Merges every file of a partials directory into an aggregate file.
///
/// # Examples
///
/// ```rust,no_run
/// use parts::service::{BuildOutcome, PartialsBuildCommand};
///
/// # fn main() -> parts::domain::Result<()> {
/// let mut command = PartialsBuildCommand::new("~/.ssh/config", "~/.ssh/config.d", "#");
/// command.set_dry_run(true);
/// if let BuildOutcome::DryRun { content, .. } = command.run()? {
///     print!("{}", String::from_utf8_lossy(&content));
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PartialsBuildCommand<S = LocalFileStore> {
    aggregate_file: PathBuf,
    partials_dir: PathBuf,
    markers: SectionMarkers,
    dry_run: bool,
    store: S,
}

impl PartialsBuildCommand {
    /// Creates a build command over the local filesystem.
    ///
    /// Both paths get `~` expanded. `comment_style` is resolved as described
    /// in [`CommentStyle::resolve`].
    pub fn new(aggregate_file: &str, partials_dir: &str, comment_style: &str) -> Self {
        Self::with_store(LocalFileStore::new(), aggregate_file, partials_dir, comment_style)
    }
}

impl<S: FileStore> PartialsBuildCommand<S> {
    /// Creates a build command over an arbitrary [`FileStore`].
    pub fn with_store(
        store: S,
        aggregate_file: &str,
        partials_dir: &str,
        comment_style: &str,
    ) -> Self {
        let aggregate_file = expand_tilde(aggregate_file);
        let style = CommentStyle::resolve(comment_style, &aggregate_file);
        Self {
            markers: SectionMarkers::new(&style),
            aggregate_file,
            partials_dir: expand_tilde(partials_dir),
            dry_run: false,
            store,
        }
    }

    /// Enables or disables dry-run mode.
    pub fn set_dry_run(&mut self, dry_run: bool) {
        self.dry_run = dry_run;
    }

    /// The fences this command writes.
    pub fn markers(&self) -> &SectionMarkers {
        &self.markers
    }

    /// Computes the new aggregate content without writing it.
    pub fn render(&self) -> Result<Vec<u8>> {
        let existing = self
            .store
            .read(&self.aggregate_file)
            .map_err(|source| PartsError::AggregateRead {
                path: self.aggregate_file.clone(),
                source,
            })?;

        let mut output = match self.markers.locate(&existing) {
            Some(span) => {
                tracing::debug!(
                    "replacing existing partials section in {}",
                    self.aggregate_file.display()
                );
                let mut kept = Vec::with_capacity(existing.len());
                kept.extend_from_slice(&existing[..span.start]);
                kept.extend_from_slice(&existing[span.end..]);
                kept
            }
            None => existing,
        };

        if !output.ends_with(b"\n") {
            output.push(b'\n');
        }
        output.extend_from_slice(self.markers.start.as_bytes());
        output.push(b'\n');

        let partials = self
            .store
            .list_files(&self.partials_dir)
            .map_err(|source| PartsError::PartialsDirRead {
                path: self.partials_dir.clone(),
                source,
            })?;
        tracing::debug!(
            "merging {} partials from {}",
            partials.len(),
            self.partials_dir.display()
        );

        for path in partials {
            let contents = self
                .store
                .read(&path)
                .map_err(|source| PartsError::PartialRead {
                    path: path.clone(),
                    source,
                })?;
            output.extend_from_slice(&contents);
            output.push(b'\n');
        }

        output.extend_from_slice(self.markers.end.as_bytes());
        output.push(b'\n');
        Ok(output)
    }

    /// Rebuilds the section, writing the result unless in dry-run mode.
    pub fn run(&self) -> Result<BuildOutcome> {
        let content = self.render()?;
        let path = self.aggregate_file.clone();

        if self.dry_run {
            return Ok(BuildOutcome::DryRun { path, content });
        }

        self.store
            .write(&path, &content, BUILD_FILE_MODE)
            .map_err(|source| PartsError::AggregateWrite {
                path: path.clone(),
                source,
            })?;
        tracing::info!("wrote {} bytes to {}", content.len(), path.display());

        Ok(BuildOutcome::Written {
            path,
            length: content.len(),
        })
    }
}

/// Strips the partials section from an aggregate file.
#[derive(Debug, Clone)]
pub struct PartialsRemoveCommand<S = LocalFileStore> {
    aggregate_file: PathBuf,
    comment_style: String,
    markers: SectionMarkers,
    dry_run: bool,
    store: S,
}

impl PartialsRemoveCommand {
    /// Creates a remove command over the local filesystem.
    pub fn new(aggregate_file: &str, comment_style: &str) -> Self {
        Self::with_store(LocalFileStore::new(), aggregate_file, comment_style)
    }
}

impl<S: FileStore> PartialsRemoveCommand<S> {
    /// Creates a remove command over an arbitrary [`FileStore`].
    pub fn with_store(store: S, aggregate_file: &str, comment_style: &str) -> Self {
        let aggregate_file = expand_tilde(aggregate_file);
        let style = CommentStyle::resolve(comment_style, &aggregate_file);
        Self {
            markers: SectionMarkers::new(&style),
            comment_style: comment_style.to_string(),
            aggregate_file,
            dry_run: false,
            store,
        }
    }

    /// Enables or disables dry-run mode.
    pub fn set_dry_run(&mut self, dry_run: bool) {
        self.dry_run = dry_run;
    }

    /// Removes the section, writing the result unless in dry-run mode.
    ///
    /// Newlines left dangling before the section collapse into one.
    pub fn run(&self) -> Result<RemoveOutcome> {
        let path = self.aggregate_file.clone();
        let existing = self
            .store
            .read(&path)
            .map_err(|source| PartsError::AggregateRead {
                path: path.clone(),
                source,
            })?;

        let Some(span) = self.markers.locate(&existing) else {
            if self.dry_run {
                return Ok(RemoveOutcome::NothingToRemove { path });
            }
            return Err(PartsError::SectionNotFound {
                path,
                comment_style: self.comment_style.clone(),
            });
        };

        let mut before = &existing[..span.start];
        while let [rest @ .., b'\n'] = before {
            before = rest;
        }
        let mut content = Vec::with_capacity(existing.len());
        content.extend_from_slice(before);
        content.push(b'\n');
        content.extend_from_slice(&existing[span.end..]);

        if self.dry_run {
            return Ok(RemoveOutcome::DryRun {
                path,
                original_length: existing.len(),
                content,
            });
        }

        self.store
            .write(&path, &content, REMOVE_FILE_MODE)
            .map_err(|source| PartsError::AggregateWrite {
                path: path.clone(),
                source,
            })?;
        tracing::info!("removed partials section from {}", path.display());

        Ok(RemoveOutcome::Removed {
            path,
            removed: existing.len().saturating_sub(content.len()),
        })
    }
}
