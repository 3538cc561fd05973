use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    String(String),
    Number(i64),
    Bool(bool),
}

impl MetadataValue {
    /// Text form of a truthy value; `None` for `""`, `0` and `false`.
    pub fn as_label(&self) -> Option<String> {
        match self {
            MetadataValue::String(s) if !s.is_empty() => Some(s.clone()),
            MetadataValue::Number(n) if *n != 0 => Some(n.to_string()),
            MetadataValue::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    inner: BTreeMap<String, MetadataValue>,
}

impl Metadata {
    pub fn new() -> Self {
        Metadata {
            inner: BTreeMap::new(),
        }
    }

    pub fn insert_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), MetadataValue::String(value.into()));
    }

    pub fn insert_number(&mut self, key: impl Into<String>, value: i64) {
        self.inner.insert(key.into(), MetadataValue::Number(value));
    }

    pub fn insert_bool(&mut self, key: impl Into<String>, value: bool) {
        self.inner.insert(key.into(), MetadataValue::Bool(value));
    }

    // Keys in `other` win.
    pub fn merge(&mut self, other: Metadata) {
        for (k, v) in other.inner {
            self.inner.insert(k, v);
        }
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.inner.get(key)
    }

    /// The `category` label, if present and truthy.
    pub fn category(&self) -> Option<String> {
        self.get("category").and_then(MetadataValue::as_label)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MetadataValue)> {
        self.inner.iter()
    }
}
