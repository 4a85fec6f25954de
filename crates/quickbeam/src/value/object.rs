//! Object values: string-keyed property maps

use indexmap::IndexMap;

use super::Value;

/// A plain object with string keys.
///
/// Uses IndexMap to preserve insertion order (for predictable display
/// and iteration).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    properties: IndexMap<String, Value>,
}

impl Object {
    /// Create an empty object
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property (builder pattern)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Insert or replace a property, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.properties.insert(key.into(), value.into())
    }

    /// Get a property by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Check whether a property exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the object has no properties
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over properties in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.properties.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_order() {
        let obj = Object::new().with("b", 2).with("a", 1);
        let keys: Vec<_> = obj.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_insert_replaces() {
        let mut obj = Object::new().with("x", 1);
        let previous = obj.insert("x", 2);
        assert_eq!(previous, Some(Value::from(1)));
        assert_eq!(obj.get("x"), Some(&Value::from(2)));
        assert_eq!(obj.len(), 1);
    }

    #[test]
    fn test_from_iterator() {
        let obj: Object = vec![("10", "ten"), ("3", "three")].into_iter().collect();
        assert!(obj.contains_key("3"));
        assert!(!obj.is_empty());
    }
}
