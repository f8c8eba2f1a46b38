// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions for external interfaces.
//!
//! Settings sources, file parsers and the filesystem used by the partials
//! commands are all reached through these traits.

pub mod file_store;
pub mod parser;
pub mod source;

// Re-export commonly used traits
pub use file_store::FileStore;
pub use parser::ConfigParser;
pub use source::ConfigSource;
