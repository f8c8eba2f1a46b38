// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loading [`Settings`] from the standard sources.
//!
//! Precedence, highest first: environment, settings file, built-in defaults.

#[cfg(feature = "env")]
use crate::domain::{Result, Settings};
#[cfg(feature = "env")]
use crate::service::DefaultConfigService;

/// Loads settings with `SECRET_KEY` taken from the process environment.
///
/// # Examples
///
/// ```rust
/// let settings = parts::service::load_settings().unwrap();
/// assert_eq!(settings.database_url, "sqlite:///app.db");
/// ```
#[cfg(feature = "env")]
pub fn load_settings() -> Result<Settings> {
    let service = DefaultConfigService::builder().with_env_vars().build()?;
    Ok(Settings::from_service(&service))
}

/// Loads settings with a YAML file layered below the environment.
///
/// The file may set `SECRET_KEY`; an environment variable of the same name
/// still wins.
#[cfg(all(feature = "env", feature = "yaml"))]
pub fn load_settings_with_file(path: impl AsRef<std::path::Path>) -> Result<Settings> {
    let service = DefaultConfigService::builder()
        .with_yaml_file(path)?
        .with_env_vars()
        .build()?;
    Ok(Settings::from_service(&service))
}
