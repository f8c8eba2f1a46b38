// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and logic.
//!
//! Nothing in here touches the process environment or the filesystem; that
//! is the adapters' job.

pub mod comment_style;
pub mod config_key;
pub mod config_value;
pub mod errors;
pub mod markers;
pub mod service;
pub mod settings;

// Re-export commonly used types
pub use comment_style::CommentStyle;
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use errors::{PartsError, Result};
pub use markers::{SectionMarkers, SectionSpan};
pub use service::ConfigurationService;
pub use settings::{CacheConfig, HandlerConfig, LoggingConfig, RootLoggerConfig, Settings};
