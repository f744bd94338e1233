//! Ordered map type for JSONH objects.
//!
//! This module provides [`JsonhMap`], a wrapper around [`IndexMap`] that
//! keeps object members in insertion order. Duplicate property names
//! overwrite the stored value in place (last write wins).
//!
//! ## Examples
//!
//! ```rust
//! use serde_jsonh::{JsonhMap, JsonhValue};
//!
//! let mut map = JsonhMap::new();
//! map.insert("name".to_string(), JsonhValue::from("Alice"));
//! map.insert("age".to_string(), JsonhValue::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to JSONH values.
///
/// # Examples
///
/// ```rust
/// use serde_jsonh::{JsonhMap, JsonhValue};
///
/// let mut map = JsonhMap::new();
/// map.insert("first".to_string(), JsonhValue::from(1));
/// map.insert("second".to_string(), JsonhValue::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonhMap(IndexMap<String, crate::JsonhValue>);

impl JsonhMap {
    /// Creates an empty `JsonhMap`.
    #[must_use]
    pub fn new() -> Self {
        JsonhMap(IndexMap::new())
    }

    /// Creates an empty `JsonhMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JsonhMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the value is replaced and
    /// the old value returned; the key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonh::{JsonhMap, JsonhValue};
    ///
    /// let mut map = JsonhMap::new();
    /// assert!(map.insert("key".to_string(), JsonhValue::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), JsonhValue::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::JsonhValue) -> Option<crate::JsonhValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::JsonhValue> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::JsonhValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::JsonhValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in
    /// insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::JsonhValue> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::JsonhValue>> for JsonhMap {
    fn from(map: HashMap<String, crate::JsonhValue>) -> Self {
        JsonhMap(map.into_iter().collect())
    }
}

impl From<JsonhMap> for HashMap<String, crate::JsonhValue> {
    fn from(map: JsonhMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for JsonhMap {
    type Item = (String, crate::JsonhValue);
    type IntoIter = indexmap::map::IntoIter<String, crate::JsonhValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, crate::JsonhValue)> for JsonhMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::JsonhValue)>>(iter: T) -> Self {
        JsonhMap(IndexMap::from_iter(iter))
    }
}
