//! Ordered configuration mapping with typed accessors.
//!
//! [`ConfigMap`] is the in-memory shape of every parsed YAML or JSON
//! document. Keys keep their document order; values stay untyped until read
//! through an accessor, so one type serves configs of any schema.

use serde::{Serialize, Serializer};
use serde_yaml::{Mapping, Value};

/// An ordered key-value view over a parsed configuration document.
///
/// Top-level keys are addressed with [`get`](Self::get), nested values with
/// [`lookup`](Self::lookup) and a dot-separated path. The typed getters
/// return `None` when the key is absent or holds a different type; callers
/// decide whether that is an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigMap {
    root: Mapping,
}

impl ConfigMap {
    /// Wrap a parsed document. Fails when there is no mapping to expose.
    pub(crate) fn from_document(document: Value) -> std::result::Result<Self, &'static str> {
        match document {
            Value::Mapping(root) => Ok(ConfigMap { root }),
            Value::Null => Err("the document is empty"),
            _ => Err("the document root is not a mapping"),
        }
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Look up a single top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(&Value::from(key))
    }

    /// Walk a dot-separated path through nested mappings, e.g.
    /// `"training.optimizer.learning_rate"`.
    ///
    /// Keys that themselves contain a dot are only reachable through
    /// [`get`](Self::get).
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let mut current = self.get(parts.next()?)?;
        for part in parts {
            current = current.get(part)?;
        }
        Some(current)
    }

    /// String value at `path`.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.lookup(path)?.as_str()
    }

    /// Boolean value at `path`.
    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.lookup(path)?.as_bool()
    }

    /// Signed integer value at `path`.
    pub fn get_i64(&self, path: &str) -> Option<i64> {
        self.lookup(path)?.as_i64()
    }

    /// Unsigned integer value at `path`.
    pub fn get_u64(&self, path: &str) -> Option<u64> {
        self.lookup(path)?.as_u64()
    }

    /// Float value at `path`. Integer values widen to `f64`.
    pub fn get_f64(&self, path: &str) -> Option<f64> {
        self.lookup(path)?.as_f64()
    }

    /// Sequence value at `path`.
    pub fn get_sequence(&self, path: &str) -> Option<&Vec<Value>> {
        self.lookup(path)?.as_sequence()
    }

    /// Nested mapping at `path`, cloned into its own `ConfigMap`.
    pub fn get_map(&self, path: &str) -> Option<ConfigMap> {
        match self.lookup(path)? {
            Value::Mapping(mapping) => Some(ConfigMap {
                root: mapping.clone(),
            }),
            _ => None,
        }
    }

    /// Iterate entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.root.iter()
    }

    /// Top-level string keys in document order. Non-string keys are kept in
    /// the mapping but skipped here.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.iter().filter_map(|(key, _)| key.as_str())
    }

    /// Borrow the underlying mapping.
    pub fn as_mapping(&self) -> &Mapping {
        &self.root
    }
}

impl From<Mapping> for ConfigMap {
    fn from(root: Mapping) -> Self {
        ConfigMap { root }
    }
}

impl Serialize for ConfigMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}
