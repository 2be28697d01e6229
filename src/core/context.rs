//! Request context handed to visibility predicates and badge suppliers.
//!
//! The menu layer never interprets the context; it only forwards it. Hosts
//! put whatever they need in the attribute bag (user id, roles, counters).

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RequestContext {
    pub path: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, JsonValue>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.attributes.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key).and_then(|v| v.as_bool()).unwrap_or(false)
    }

    /// Parse a `key=value` pair as given on the command line.
    ///
    /// Values that parse as JSON (`true`, `42`, `"x"`) keep their type;
    /// anything else is stored as a string.
    pub fn parse_attr(raw: &str) -> Option<(String, JsonValue)> {
        let (key, value) = raw.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        let value = serde_json::from_str(value.trim())
            .unwrap_or_else(|_| JsonValue::String(value.trim().to_string()));
        Some((key.to_string(), value))
    }
}
