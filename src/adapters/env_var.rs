// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable configuration source adapter.

use crate::domain::{ConfigKey, ConfigValue, PartsError, Result};
use crate::ports::ConfigSource;
use std::collections::{HashMap, HashSet};
use std::env;
use std::sync::{PoisonError, RwLock};

/// Maximum length for environment variable names
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Configuration source backed by the process environment.
///
/// Variable names are used as keys exactly as spelled, so `SECRET_KEY` in
/// the environment answers `ConfigKey::from("SECRET_KEY")`. The environment
/// is snapshotted on first access; call [`ConfigSource::reload`] to pick up
/// later changes.
///
/// Variables whose value is not valid Unicode or exceeds 1 MiB are left out
/// of the snapshot. Looking one of them up is an error rather than a miss,
/// so the service logs it before falling back.
///
/// # Priority
///
/// Environment variables have a priority of 2 and override settings files
/// (priority 1).
///
/// # Examples
///
/// ```rust
/// use parts::adapters::EnvVarAdapter;
/// use parts::domain::ConfigKey;
/// use parts::ports::ConfigSource;
/// use std::collections::HashMap;
///
/// let mut values = HashMap::new();
/// values.insert("SECRET_KEY".to_string(), "foo".to_string());
///
/// let adapter = EnvVarAdapter::with_values(values);
/// let value = adapter.get(&ConfigKey::from("SECRET_KEY")).unwrap();
/// assert_eq!(value.unwrap().as_str(), "foo");
/// ```
#[derive(Debug)]
pub struct EnvVarAdapter {
    /// Snapshot of the environment, filled lazily
    cache: RwLock<Option<Snapshot>>,
}

#[derive(Debug, Default)]
struct Snapshot {
    values: HashMap<String, String>,
    /// Names present in the environment whose values were not loaded
    skipped: HashSet<String>,
}

impl EnvVarAdapter {
    /// Creates an adapter over the real process environment.
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(None),
        }
    }

    /// Creates an adapter over a fixed set of variables.
    ///
    /// Intended for tests that must not depend on, or mutate, the real
    /// environment. [`ConfigSource::reload`] on such an adapter switches it
    /// over to the real environment.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            cache: RwLock::new(Some(Snapshot {
                values,
                skipped: HashSet::new(),
            })),
        }
    }

    fn load() -> Snapshot {
        let mut snapshot = Snapshot::default();

        // vars_os so that a single non-unicode variable does not panic the load
        for (key, value) in env::vars_os() {
            let Some(key) = key.to_str() else {
                tracing::debug!("Skipping environment variable with non-unicode name {:?}", key);
                continue;
            };
            if key.len() > MAX_ENV_KEY_LEN {
                tracing::debug!(
                    "Skipping environment variable with oversized name: key_len={} (max {})",
                    key.len(),
                    MAX_ENV_KEY_LEN
                );
                continue;
            }

            match value.to_str() {
                Some(value) if value.len() <= MAX_ENV_VALUE_LEN => {
                    snapshot.values.insert(key.to_string(), value.to_string());
                }
                _ => {
                    tracing::debug!("Skipping unusable value of environment variable {}", key);
                    snapshot.skipped.insert(key.to_string());
                }
            }
        }

        tracing::debug!("Loaded {} environment variables", snapshot.values.len());
        snapshot
    }

    fn with_snapshot<T>(&self, f: impl FnOnce(&Snapshot) -> T) -> T {
        {
            let guard = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(snapshot) = guard.as_ref() {
                return f(snapshot);
            }
        }

        let mut guard = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        f(&*guard.get_or_insert_with(Self::load))
    }
}

impl Default for EnvVarAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for EnvVarAdapter {
    fn name(&self) -> &str {
        "env"
    }

    fn priority(&self) -> u8 {
        2
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        self.with_snapshot(|snapshot| {
            if let Some(value) = snapshot.values.get(key.as_str()) {
                return Ok(Some(ConfigValue::from(value.as_str())));
            }
            if snapshot.skipped.contains(key.as_str()) {
                return Err(PartsError::SourceError {
                    source_name: self.name().to_string(),
                    message: format!(
                        "environment variable {} is set but is not valid unicode or exceeds {} bytes",
                        key, MAX_ENV_VALUE_LEN
                    ),
                    source: None,
                });
            }
            Ok(None)
        })
    }

    fn reload(&mut self) -> Result<()> {
        *self.cache.get_mut().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
