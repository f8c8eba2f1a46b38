// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line front end for the partials commands.
//!
//! Parses `parts [-n] [-r] <aggregate-file> [partials-directory] <comment-style>`,
//! runs the selected command and renders its outcome.

use crate::domain::{PartsError, Result};
use crate::service::{BuildOutcome, PartialsBuildCommand, PartialsRemoveCommand, RemoveOutcome};
use clap::Parser;
use std::io::Write;

const LONG_ABOUT: &str = "\
Merge the files of a partials directory into a marked section of an aggregate
file, or remove that section again. Running a build any number of times yields
the same file.

Comment styles: \"#\", \"//\", \"--\", \"/*\", \";\", \"%\", \"<!--\", \"'\", \"rem\", \"::\",
\"auto\" to pick one from the file extension, or any other string to use it
verbatim as a line comment prefix. Pass \"--\" after a literal `--`.";

const AFTER_HELP: &str = "\
Examples:
  parts ~/.ssh/config ~/.ssh/config.d \"#\"
  parts schema.sql ./sql-partials auto
  parts --dry-run ~/.ssh/config ~/.ssh/config.d \"#\"
  parts --remove styles.css \"/*\"";

/// Parsed command line of the `parts` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use parts::adapters::{Cli, Invocation};
///
/// let cli = Cli::try_parse_from(["parts", "--remove", "config.py", "auto"]).unwrap();
/// assert!(matches!(cli.invocation(), Ok(Invocation::Remove { .. })));
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "parts",
    version,
    about = "Merge partial files into a marked section of an aggregate file",
    long_about = LONG_ABOUT,
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Preview changes without modifying files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Remove the partials section from the aggregate file
    #[arg(short, long)]
    pub remove: bool,

    /// <aggregate-file> [partials-directory] <comment-style>
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}

/// A validated command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Merge partials into the aggregate file.
    Build {
        /// File receiving the section
        aggregate_file: String,
        /// Directory holding the partials
        partials_dir: String,
        /// Comment style as typed
        comment_style: String,
    },
    /// Strip the section from the aggregate file.
    Remove {
        /// File holding the section
        aggregate_file: String,
        /// Comment style as typed
        comment_style: String,
    },
}

impl Cli {
    /// Checks the positional count against the selected mode.
    pub fn invocation(&self) -> Result<Invocation> {
        if self.remove {
            return match self.args.as_slice() {
                [aggregate_file, comment_style] => Ok(Invocation::Remove {
                    aggregate_file: aggregate_file.clone(),
                    comment_style: comment_style.clone(),
                }),
                other => Err(PartsError::InvalidArguments {
                    message: format!(
                        "remove mode requires exactly 2 arguments: <aggregate-file> <comment-style>, got {}",
                        other.len()
                    ),
                }),
            };
        }

        match self.args.as_slice() {
            [aggregate_file, partials_dir, comment_style] => Ok(Invocation::Build {
                aggregate_file: aggregate_file.clone(),
                partials_dir: partials_dir.clone(),
                comment_style: comment_style.clone(),
            }),
            other => Err(PartsError::InvalidArguments {
                message: format!(
                    "build mode requires exactly 3 arguments: <aggregate-file> <partials-directory> <comment-style>, got {}",
                    other.len()
                ),
            }),
        }
    }

    /// Runs the selected command, writing any report to `out`.
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        match self.invocation()? {
            Invocation::Build {
                aggregate_file,
                partials_dir,
                comment_style,
            } => {
                let mut command =
                    PartialsBuildCommand::new(&aggregate_file, &partials_dir, &comment_style);
                command.set_dry_run(self.dry_run);
                write_build_report(out, &command.run()?)?;
            }
            Invocation::Remove {
                aggregate_file,
                comment_style,
            } => {
                let mut command = PartialsRemoveCommand::new(&aggregate_file, &comment_style);
                command.set_dry_run(self.dry_run);
                write_remove_report(out, &command.run()?)?;
            }
        }
        Ok(())
    }
}

/// Writes what a build did. A real write is silent.
pub fn write_build_report(out: &mut impl Write, outcome: &BuildOutcome) -> std::io::Result<()> {
    match outcome {
        BuildOutcome::Written { .. } => Ok(()),
        BuildOutcome::DryRun { path, content } => {
            writeln!(out, "DRY RUN: Would write to '{}'", path.display())?;
            write_preview(out, content)?;
            writeln!(out, "Total length: {} characters", content.len())
        }
    }
}

/// Writes what a removal did.
pub fn write_remove_report(out: &mut impl Write, outcome: &RemoveOutcome) -> std::io::Result<()> {
    match outcome {
        RemoveOutcome::Removed { path, .. } => {
            writeln!(out, "✅ Removed partials section from '{}'", path.display())
        }
        RemoveOutcome::DryRun {
            path,
            original_length,
            content,
        } => {
            writeln!(
                out,
                "DRY RUN: Would remove partials section from '{}'",
                path.display()
            )?;
            writeln!(out, "Original length: {} characters", original_length)?;
            writeln!(out, "New length: {} characters", content.len())?;
            writeln!(
                out,
                "Removed {} characters",
                original_length.saturating_sub(content.len())
            )?;
            write_preview(out, content)
        }
        RemoveOutcome::NothingToRemove { path } => writeln!(
            out,
            "DRY RUN: No partials section found in '{}' to remove",
            path.display()
        ),
    }
}

fn write_preview(out: &mut impl Write, content: &[u8]) -> std::io::Result<()> {
    writeln!(out, "Content preview:")?;
    writeln!(out, "--- BEGIN FILE CONTENT ---")?;
    out.write_all(content)?;
    writeln!(out, "--- END FILE CONTENT ---")
}
