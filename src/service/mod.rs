// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer.
//!
//! Wires adapters to the domain: the configuration service and settings
//! loading on one side, the partials build/remove commands on the other.

pub mod default_service;
pub mod partials;
pub mod settings_loader;

// Re-export commonly used types
pub use default_service::{ConfigurationServiceBuilder, DefaultConfigService};
pub use partials::{BuildOutcome, PartialsBuildCommand, PartialsRemoveCommand, RemoveOutcome};
#[cfg(feature = "env")]
pub use settings_loader::load_settings;
#[cfg(all(feature = "env", feature = "yaml"))]
pub use settings_loader::load_settings_with_file;
