// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! `ConfigSource` is the port every settings override comes through. The
//! environment and YAML files are the two shipped implementations.

use crate::domain::{ConfigKey, ConfigValue, Result};

/// A trait for configuration sources.
///
/// # Priority
///
/// Higher priority sources are consulted first. The shipped adapters use:
///
/// - **2**: Environment variables
/// - **1**: Settings files
///
/// # Examples
///
/// ```rust
/// use parts::ports::ConfigSource;
/// use parts::domain::{ConfigKey, ConfigValue, Result};
///
/// struct Vault;
///
/// impl ConfigSource for Vault {
///     fn name(&self) -> &str {
///         "vault"
///     }
///
///     fn priority(&self) -> u8 {
///         3
///     }
///
///     fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
///         Ok((key.as_str() == "SECRET_KEY").then(|| ConfigValue::from("from-vault")))
///     }
///
///     fn reload(&mut self) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait ConfigSource: Send + Sync {
    /// Short identifier used in logs and error messages, e.g. `"env"`.
    fn name(&self) -> &str;

    /// Precedence of this source; higher wins.
    fn priority(&self) -> u8;

    /// Looks up `key`.
    ///
    /// * `Ok(Some(value))` - the source has the key
    /// * `Ok(None)` - the source does not have the key
    /// * `Err(_)` - the source could not be queried
    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>>;

    /// Re-reads the underlying data.
    fn reload(&mut self) -> Result<()>;
}
