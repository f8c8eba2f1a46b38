// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type.
//!
//! Sources hand back raw strings and settings keep them as text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw configuration value as produced by a [`ConfigSource`].
///
/// [`ConfigSource`]: crate::ports::ConfigSource
///
/// # Examples
///
/// ```
/// use parts::domain::ConfigValue;
///
/// let value = ConfigValue::from("s3cr3t");
/// assert_eq!(value.as_str(), "s3cr3t");
/// assert_eq!(value.into_string(), "s3cr3t");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value, returning the inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
