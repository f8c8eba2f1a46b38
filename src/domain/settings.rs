// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application settings namespace.
//!
//! [`Settings`] is the process-wide set of named constants: a debug flag, the
//! secret key, the database URL, the cache backend and the logging layout.
//! Only `SECRET_KEY` can be overridden at load time; everything else is fixed.

use crate::domain::{ConfigKey, ConfigurationService, PartsError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Name of the variable that overrides [`Settings::secret_key`].
pub const SECRET_KEY_VAR: &str = "SECRET_KEY";

/// Secret used when no source provides `SECRET_KEY`.
pub const DEFAULT_SECRET_KEY: &str = "default-secret";

/// Database connection URI.
pub const DATABASE_URL: &str = "sqlite:///app.db";

/// Cache backend name.
pub const CACHE_BACKEND: &str = "redis";

/// Cache server address.
pub const CACHE_LOCATION: &str = "127.0.0.1:6379";

/// Cache entry timeout in seconds.
pub const CACHE_TIMEOUT_SECS: u64 = 300;

/// Handler class that writes records to the console.
pub const STREAM_HANDLER_CLASS: &str = "logging.StreamHandler";

/// Name of the one handler the default layout defines.
pub const CONSOLE_HANDLER: &str = "console";

/// The loaded settings.
///
/// Serialized field names match the constant names applications import
/// (`DEBUG`, `SECRET_KEY`, `DATABASE_URL`, `CACHE_CONFIG`, `LOGGING`).
///
/// # Examples
///
/// ```
/// use parts::domain::Settings;
///
/// let settings = Settings::default();
/// assert!(!settings.debug);
/// assert_eq!(settings.database_url, "sqlite:///app.db");
/// assert_eq!(settings.cache.timeout, 300);
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Debug mode switch.
    #[serde(rename = "DEBUG")]
    pub debug: bool,
    /// Signing secret, overridable through `SECRET_KEY`.
    #[serde(rename = "SECRET_KEY")]
    pub secret_key: String,
    /// Database connection URI.
    #[serde(rename = "DATABASE_URL")]
    pub database_url: String,
    /// Cache backend configuration.
    #[serde(rename = "CACHE_CONFIG")]
    pub cache: CacheConfig,
    /// Logging layout.
    #[serde(rename = "LOGGING")]
    pub logging: LoggingConfig,
}

/// Cache backend configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Backend name, e.g. `redis`.
    pub backend: String,
    /// `host:port` of the cache server.
    pub location: String,
    /// Entry timeout in seconds.
    pub timeout: u64,
}

/// Logging layout: named handlers plus the root logger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Schema version of the layout.
    pub version: u32,
    /// Handlers keyed by name.
    pub handlers: BTreeMap<String, HandlerConfig>,
    /// The root logger.
    pub root: RootLoggerConfig,
}

/// A single log handler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerConfig {
    /// Handler implementation name.
    pub class: String,
}

/// Root logger level and the handlers it feeds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootLoggerConfig {
    /// Level name, e.g. `INFO`.
    pub level: String,
    /// Names of handlers in [`LoggingConfig::handlers`].
    pub handlers: Vec<String>,
}

impl Settings {
    /// Builds settings, taking `SECRET_KEY` from `service` when it has one.
    ///
    /// A key that is present but empty is kept as the empty string.
    pub fn from_service(service: &dyn ConfigurationService) -> Self {
        let key = ConfigKey::from(SECRET_KEY_VAR);
        let secret_key = match service.get(&key) {
            Ok(value) => value.into_string(),
            Err(e) => {
                tracing::debug!("{}, using default secret", e);
                DEFAULT_SECRET_KEY.to_string()
            }
        };

        Self {
            secret_key,
            ..Self::default()
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            database_url: DATABASE_URL.to_string(),
            cache: CacheConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("debug", &self.debug)
            .field("secret_key", &"[REDACTED]")
            .field("database_url", &self.database_url)
            .field("cache", &self.cache)
            .field("logging", &self.logging)
            .finish()
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CACHE_BACKEND.to_string(),
            location: CACHE_LOCATION.to_string(),
            timeout: CACHE_TIMEOUT_SECS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        let mut handlers = BTreeMap::new();
        handlers.insert(
            CONSOLE_HANDLER.to_string(),
            HandlerConfig {
                class: STREAM_HANDLER_CLASS.to_string(),
            },
        );

        Self {
            version: 1,
            handlers,
            root: RootLoggerConfig {
                level: "INFO".to_string(),
                handlers: vec![CONSOLE_HANDLER.to_string()],
            },
        }
    }
}

impl LoggingConfig {
    /// Maps the root level name onto a `tracing` level.
    ///
    /// `CRITICAL` has no `tracing` counterpart and becomes `ERROR`; `NOTSET`
    /// becomes `TRACE`.
    pub fn root_level(&self) -> Result<tracing::Level> {
        match self.root.level.to_ascii_uppercase().as_str() {
            "CRITICAL" | "ERROR" => Ok(tracing::Level::ERROR),
            "WARNING" | "WARN" => Ok(tracing::Level::WARN),
            "INFO" => Ok(tracing::Level::INFO),
            "DEBUG" => Ok(tracing::Level::DEBUG),
            "NOTSET" | "TRACE" => Ok(tracing::Level::TRACE),
            other => Err(PartsError::ParseError {
                message: format!("unknown root log level '{}'", other),
                source: None,
            }),
        }
    }

    /// Returns true when the root logger feeds a console stream handler.
    pub fn console_enabled(&self) -> bool {
        self.root.handlers.iter().any(|name| {
            self.handlers
                .get(name)
                .is_some_and(|handler| handler.class == STREAM_HANDLER_CLASS)
        })
    }
}
