// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default configuration service implementation.
//!
//! Aggregates any number of [`ConfigSource`]s and answers lookups from the
//! highest-priority source that has the key.

use crate::domain::{ConfigKey, ConfigValue, ConfigurationService, PartsError, Result};
use crate::ports::ConfigSource;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Priority-ordered set of configuration sources with a lookup cache.
///
/// # Examples
///
/// ```rust
/// use parts::domain::{ConfigKey, ConfigurationService};
/// use parts::service::DefaultConfigService;
///
/// # #[cfg(feature = "env")]
/// # fn main() -> parts::domain::Result<()> {
/// let service = DefaultConfigService::builder()
///     .with_env_vars()
///     .build()?;
///
/// let secret = service.get(&ConfigKey::from("SECRET_KEY"));
/// # let _ = secret;
/// # Ok(())
/// # }
/// # #[cfg(not(feature = "env"))]
/// # fn main() {}
/// ```
pub struct DefaultConfigService {
    /// Sources, highest priority first
    sources: Vec<Box<dyn ConfigSource>>,
    /// Values already resolved, keyed by key name
    cache: RwLock<HashMap<String, ConfigValue>>,
}

impl DefaultConfigService {
    /// Creates a service without sources.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a new configuration service builder.
    pub fn builder() -> ConfigurationServiceBuilder {
        ConfigurationServiceBuilder::new()
    }

    /// Adds a source and re-sorts by priority.
    ///
    /// Sources with equal priority keep their insertion order.
    pub fn add_source(&mut self, source: Box<dyn ConfigSource>) {
        tracing::debug!(
            "Adding configuration source '{}' (priority {})",
            source.name(),
            source.priority()
        );
        self.sources.push(source);
        self.sources
            .sort_by_key(|s| std::cmp::Reverse(s.priority()));
        self.invalidate_cache();
    }

    fn invalidate_cache(&self) {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn query_sources(&self, key: &ConfigKey) -> Option<ConfigValue> {
        for source in &self.sources {
            match source.get(key) {
                Ok(Some(value)) => {
                    tracing::debug!("Resolved '{}' from source '{}'", key, source.name());
                    return Some(value);
                }
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!(
                        "Error querying source '{}' for key '{}': {}",
                        source.name(),
                        key,
                        e
                    );
                    continue;
                }
            }
        }
        None
    }
}

impl Default for DefaultConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationService for DefaultConfigService {
    fn get(&self, key: &ConfigKey) -> Result<ConfigValue> {
        if let Some(value) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key.as_str())
        {
            return Ok(value.clone());
        }

        let value = self
            .query_sources(key)
            .ok_or_else(|| PartsError::ConfigKeyNotFound {
                key: key.as_str().to_string(),
            })?;

        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.as_str().to_string(), value.clone());

        Ok(value)
    }

    fn reload(&mut self) -> Result<()> {
        for source in &mut self.sources {
            if let Err(e) = source.reload() {
                tracing::warn!("Failed to reload source '{}': {}", source.name(), e);
            }
        }

        self.invalidate_cache();
        Ok(())
    }
}

/// Builder for [`DefaultConfigService`].
#[derive(Default)]
pub struct ConfigurationServiceBuilder {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigurationServiceBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an arbitrary source.
    pub fn with_source(mut self, source: Box<dyn ConfigSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Adds the process environment as a source.
    #[cfg(feature = "env")]
    pub fn with_env_vars(self) -> Self {
        use crate::adapters::EnvVarAdapter;
        self.with_source(Box::new(EnvVarAdapter::new()))
    }

    /// Adds a YAML settings file as a source.
    ///
    /// Fails if the file cannot be read or parsed.
    #[cfg(feature = "yaml")]
    pub fn with_yaml_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        use crate::adapters::YamlFileAdapter;
        let adapter = YamlFileAdapter::from_file(path)?;
        Ok(self.with_source(Box::new(adapter)))
    }

    /// Builds the service.
    pub fn build(self) -> Result<DefaultConfigService> {
        let mut service = DefaultConfigService::new();
        for source in self.sources {
            service.add_source(source);
        }
        Ok(service)
    }
}
