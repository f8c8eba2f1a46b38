// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the crate.
//!
//! Settings resolution and the partials commands share one error enum. All
//! variants derive their messages through `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for settings and partials operations.
///
/// Marked `#[non_exhaustive]` so new failure modes can be added without
/// breaking downstream matches.
///
/// # Examples
///
/// ```
/// use parts::domain::errors::PartsError;
///
/// fn lookup() -> Result<String, PartsError> {
///     Err(PartsError::ConfigKeyNotFound {
///         key: "SECRET_KEY".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PartsError {
    /// The requested configuration key was not found in any source.
    #[error("Configuration key not found: {key}")]
    ConfigKeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// An error occurred in a configuration source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a configuration file or value.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The aggregate file could not be read.
    #[error("failed to read aggregate file '{}': {source}", path.display())]
    AggregateRead {
        /// Path of the aggregate file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The aggregate file could not be written.
    #[error("failed to write aggregate file '{}': {source}", path.display())]
    AggregateWrite {
        /// Path of the aggregate file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The partials directory could not be listed.
    #[error("failed to read partials directory '{}': {source}", path.display())]
    PartialsDirRead {
        /// Path of the partials directory
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A single partial file could not be read.
    #[error("failed to read partial file '{}': {source}", path.display())]
    PartialRead {
        /// Path of the partial file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Remove mode found no marked section in the aggregate file.
    #[error(
        "no partials section found in file '{}' (looking for comment style '{comment_style}')",
        path.display()
    )]
    SectionNotFound {
        /// Path of the aggregate file
        path: PathBuf,
        /// The comment style as given by the caller
        comment_style: String,
    },

    /// The command line did not have the shape the selected mode needs.
    #[error("{message}")]
    InvalidArguments {
        /// Human readable description of the problem
        message: String,
    },

    /// Any other I/O error, e.g. while writing a report to the terminal.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, PartsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_key_not_found_error() {
        let error = PartsError::ConfigKeyNotFound {
            key: "SECRET_KEY".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration key not found: SECRET_KEY");
    }

    #[test]
    fn test_source_error() {
        let error = PartsError::SourceError {
            source_name: "env".to_string(),
            message: "Failed to read environment".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Configuration source 'env' error: Failed to read environment"
        );
    }

    #[test]
    fn test_aggregate_read_error_names_path() {
        let error = PartsError::AggregateRead {
            path: PathBuf::from("/nonexistent/file"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let message = error.to_string();
        assert!(message.starts_with("failed to read aggregate file '/nonexistent/file'"));
        assert!(message.ends_with("not found"));
    }

    #[test]
    fn test_partials_dir_error() {
        let error = PartsError::PartialsDirRead {
            path: PathBuf::from("/nonexistent/dir"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(error
            .to_string()
            .contains("failed to read partials directory '/nonexistent/dir'"));
    }

    #[test]
    fn test_section_not_found_error() {
        let error = PartsError::SectionNotFound {
            path: PathBuf::from("ssh_config"),
            comment_style: "#".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "no partials section found in file 'ssh_config' (looking for comment style '#')"
        );
    }

    #[test]
    fn test_invalid_arguments_is_verbatim() {
        let error = PartsError::InvalidArguments {
            message: "remove mode requires exactly 2 arguments".to_string(),
        };
        assert_eq!(error.to_string(), "remove mode requires exactly 2 arguments");
    }

    #[test]
    fn test_io_error_conversion() {
        let error = PartsError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(matches!(error, PartsError::IoError(_)));
    }

    #[test]
    fn test_io_source_is_exposed() {
        use std::error::Error as _;

        let error = PartsError::AggregateWrite {
            path: PathBuf::from("agg"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.source().is_some());
    }
}
