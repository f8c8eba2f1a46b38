// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration service trait definition.
//!
//! `ConfigurationService` is what settings loading talks to. It hides how
//! many sources exist and in which order they are consulted.

use crate::domain::{ConfigKey, ConfigValue, Result};

/// The main configuration service trait.
///
/// # Examples
///
/// ```rust
/// use parts::domain::{ConfigKey, ConfigValue, ConfigurationService, Result};
///
/// struct Fixed;
///
/// impl ConfigurationService for Fixed {
///     fn get(&self, _key: &ConfigKey) -> Result<ConfigValue> {
///         Ok(ConfigValue::from("value"))
///     }
///
///     fn reload(&mut self) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// let service = Fixed;
/// assert_eq!(service.get(&ConfigKey::from("SECRET_KEY")).unwrap().as_str(), "value");
/// ```
pub trait ConfigurationService {
    /// Retrieves the value for `key` from the highest-priority source that has it.
    ///
    /// Returns [`PartsError::ConfigKeyNotFound`] when no source knows the key.
    ///
    /// [`PartsError::ConfigKeyNotFound`]: crate::domain::PartsError::ConfigKeyNotFound
    fn get(&self, key: &ConfigKey) -> Result<ConfigValue>;

    /// Re-reads every underlying source and drops cached values.
    fn reload(&mut self) -> Result<()>;
}
