// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.

use crate::domain::Result;
use std::collections::HashMap;

/// Turns the text of a settings file into a flat key-value map.
///
/// Nested structures are flattened with dot notation, so
///
/// ```yaml
/// CACHE_CONFIG:
///   timeout: 300
/// ```
///
/// becomes `CACHE_CONFIG.timeout -> "300"`. Top-level keys keep their exact
/// spelling.
pub trait ConfigParser {
    /// Parses `content` into a flat map.
    fn parse(&self, content: &str) -> Result<HashMap<String, String>>;
}
