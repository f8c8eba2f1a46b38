// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML settings file adapter.
//!
//! Lets a deployment pin settings overrides (in practice `SECRET_KEY`) in a
//! file that sits below the environment in precedence.

use crate::domain::{ConfigKey, ConfigValue, PartsError, Result};
use crate::ports::{ConfigParser, ConfigSource};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum accepted settings file size (10MB)
const MAX_YAML_FILE_SIZE: u64 = 10 * 1024 * 1024;

const SOURCE_NAME: &str = "yaml-file";

/// Flattens YAML documents into dotted keys.
///
/// # Examples
///
/// ```rust
/// use parts::adapters::YamlParser;
/// use parts::ports::ConfigParser;
///
/// let parsed = YamlParser::new()
///     .parse("SECRET_KEY: abc\nCACHE_CONFIG:\n  timeout: 60\n")
///     .unwrap();
/// assert_eq!(parsed.get("SECRET_KEY"), Some(&"abc".to_string()));
/// assert_eq!(parsed.get("CACHE_CONFIG.timeout"), Some(&"60".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    fn flatten(value: &serde_yaml::Value, prefix: &str, out: &mut HashMap<String, String>) {
        let child = |key: &str| {
            if prefix.is_empty() {
                key.to_string()
            } else {
                format!("{}.{}", prefix, key)
            }
        };

        match value {
            serde_yaml::Value::Mapping(map) => {
                for (key, val) in map {
                    if let Some(key) = key.as_str() {
                        Self::flatten(val, &child(key), out);
                    }
                }
            }
            serde_yaml::Value::Sequence(seq) => {
                for (i, val) in seq.iter().enumerate() {
                    Self::flatten(val, &child(&i.to_string()), out);
                }
            }
            serde_yaml::Value::String(s) => {
                out.insert(prefix.to_string(), s.clone());
            }
            serde_yaml::Value::Number(n) => {
                out.insert(prefix.to_string(), n.to_string());
            }
            serde_yaml::Value::Bool(b) => {
                out.insert(prefix.to_string(), b.to_string());
            }
            serde_yaml::Value::Null => {
                out.insert(prefix.to_string(), String::new());
            }
            serde_yaml::Value::Tagged(tagged) => Self::flatten(&tagged.value, prefix, out),
        }
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| PartsError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        let mut result = HashMap::new();
        Self::flatten(&value, "", &mut result);
        Ok(result)
    }
}

/// Settings source backed by a YAML file.
///
/// # Priority
///
/// Files have priority 1 and are overridden by environment variables.
///
/// # Examples
///
/// ```rust,no_run
/// use parts::adapters::YamlFileAdapter;
///
/// let adapter = YamlFileAdapter::from_file("/etc/myapp/settings.yaml").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct YamlFileAdapter {
    file_path: PathBuf,
    values: HashMap<String, String>,
    parser: YamlParser,
}

impl YamlFileAdapter {
    /// Loads and parses the file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let requested = path.as_ref();
        let file_path = requested
            .canonicalize()
            .map_err(|e| source_error(requested, "Invalid or inaccessible path", e))?;

        let parser = YamlParser::new();
        let values = read_values(&file_path, &parser)?;
        tracing::debug!(
            "Loaded {} settings from {}",
            values.len(),
            file_path.display()
        );

        Ok(Self {
            file_path,
            values,
            parser,
        })
    }
}

fn source_error(path: &Path, what: &str, err: std::io::Error) -> PartsError {
    PartsError::SourceError {
        source_name: SOURCE_NAME.to_string(),
        message: format!(
            "{}: {}",
            what,
            path.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("<unknown>")
        ),
        source: Some(Box::new(err)),
    }
}

fn read_values(path: &Path, parser: &YamlParser) -> Result<HashMap<String, String>> {
    let metadata =
        fs::metadata(path).map_err(|e| source_error(path, "Failed to read file metadata", e))?;

    if metadata.len() > MAX_YAML_FILE_SIZE {
        return Err(PartsError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_YAML_FILE_SIZE
            ),
            source: None,
        });
    }

    let content = fs::read_to_string(path)
        .map_err(|e| source_error(path, "Failed to read configuration file", e))?;
    parser.parse(&content)
}

impl ConfigSource for YamlFileAdapter {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn priority(&self) -> u8 {
        1
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        Ok(self
            .values
            .get(key.as_str())
            .map(|v| ConfigValue::from(v.as_str())))
    }

    fn reload(&mut self) -> Result<()> {
        self.values = read_values(&self.file_path, &self.parser)?;
        Ok(())
    }
}
