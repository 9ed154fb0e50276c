//! Ordered map type for hashtable literals.
//!
//! [`PsMap`] wraps an [`IndexMap`] so keys come back in source order. That
//! order carries through to JSON output and to rewritten `@{ }` text.
//!
//! Inserting a key that is already present replaces its value but keeps the
//! key at its original position, so `@{ a = 1 b = 2 a = 3 }` yields `a = 3`
//! followed by `b = 2`.
//!
//! ## Examples
//!
//! ```rust
//! use serde_psdata::{PsMap, PsValue};
//!
//! let mut map = PsMap::new();
//! map.insert("name".to_string(), PsValue::from("Alice"));
//! map.insert("age".to_string(), PsValue::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::PsValue;
use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of identifier keys to values.
///
/// ```rust
/// use serde_psdata::{PsMap, PsValue};
///
/// let mut map = PsMap::new();
/// map.insert("first".to_string(), PsValue::from(1));
/// map.insert("second".to_string(), PsValue::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PsMap(IndexMap<String, PsValue>);

impl PsMap {
    #[must_use]
    pub fn new() -> Self {
        PsMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PsMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the value it replaced.
    ///
    /// ```rust
    /// use serde_psdata::{PsMap, PsValue};
    ///
    /// let mut map = PsMap::new();
    /// assert!(map.insert("key".to_string(), PsValue::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), PsValue::from(43)).is_some());
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: String, value: PsValue) -> Option<PsValue> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PsValue> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut PsValue> {
        self.0.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, PsValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, PsValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, PsValue> {
        self.0.iter()
    }
}

impl From<HashMap<String, PsValue>> for PsMap {
    fn from(map: HashMap<String, PsValue>) -> Self {
        PsMap(map.into_iter().collect())
    }
}

impl IntoIterator for PsMap {
    type Item = (String, PsValue);
    type IntoIter = indexmap::map::IntoIter<String, PsValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PsMap {
    type Item = (&'a String, &'a PsValue);
    type IntoIter = indexmap::map::Iter<'a, String, PsValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, PsValue)> for PsMap {
    fn from_iter<T: IntoIterator<Item = (String, PsValue)>>(iter: T) -> Self {
        PsMap(IndexMap::from_iter(iter))
    }
}
