// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer.
//!
//! Concrete implementations of the ports: configuration sources, the local
//! filesystem store and the command-line front end.

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "env")]
pub mod env_var;
pub mod local_fs;
#[cfg(feature = "yaml")]
pub mod yaml_file;

// Re-export adapters based on feature flags
#[cfg(feature = "cli")]
pub use cli::{Cli, Invocation};
#[cfg(feature = "env")]
pub use env_var::EnvVarAdapter;
pub use local_fs::{expand_tilde, LocalFileStore};
#[cfg(feature = "yaml")]
pub use yaml_file::{YamlFileAdapter, YamlParser};
