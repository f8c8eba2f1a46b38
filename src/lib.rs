// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application settings with environment overrides, and a tool that merges
//! partial config files into a marked section of an aggregate file.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: core types and rules ([`Settings`](domain::Settings),
//!   [`CommentStyle`](domain::CommentStyle), section markers, errors)
//! - **Ports**: trait definitions for the outside world (`ConfigSource`,
//!   `ConfigParser`, `FileStore`)
//! - **Adapters**: environment variables, YAML files, the local filesystem
//!   and the command line
//! - **Service**: the configuration service, settings loading and the
//!   partials build/remove commands
//!
//! # Feature Flags
//!
//! - `yaml`: YAML settings files (default)
//! - `env`: environment variable source (default)
//! - `cli`: the `parts` command line and its log subscriber (default)
//!
//! # Quick Start
//!
//! ```rust
//! use parts::prelude::*;
//!
//! # #[cfg(feature = "env")]
//! # fn main() -> parts::domain::Result<()> {
//! let settings = parts::service::load_settings()?;
//! assert_eq!(settings.cache.timeout, 300);
//! assert!(settings.logging.console_enabled());
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "env"))]
//! # fn main() {}
//! ```
//!
//! Merging partials:
//!
//! ```rust,no_run
//! use parts::prelude::*;
//!
//! # fn main() -> parts::domain::Result<()> {
//! PartialsBuildCommand::new("~/.ssh/config", "~/.ssh/config.d", "#").run()?;
//! PartialsRemoveCommand::new("~/.ssh/config", "#").run()?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        CommentStyle, ConfigKey, ConfigValue, ConfigurationService, PartsError, Result,
        SectionMarkers, Settings,
    };
    pub use crate::ports::{ConfigParser, ConfigSource, FileStore};
    pub use crate::service::{
        BuildOutcome, DefaultConfigService, PartialsBuildCommand, PartialsRemoveCommand,
        RemoveOutcome,
    };

    // Re-export adapters based on feature flags
    pub use crate::adapters::LocalFileStore;
    #[cfg(feature = "cli")]
    pub use crate::adapters::Cli;
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarAdapter;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::{YamlFileAdapter, YamlParser};
}
