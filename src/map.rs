//! Ordered entry store for section values.
//!
//! This module provides [`EntryMap`], a wrapper around [`IndexMap`] that keeps
//! keys in first-insertion order. Serialized output walks the map in that
//! order, so a parsed file reproduces its key layout on the way out.
//!
//! ## Examples
//!
//! ```rust
//! use sini::EntryMap;
//!
//! let mut map = EntryMap::new();
//! map.insert("name".to_string(), "Alice".to_string());
//! map.insert("age".to_string(), "30".to_string());
//!
//! let keys: Vec<_> = map.keys().map(String::as_str).collect();
//! assert_eq!(keys, ["name", "age"]);
//! ```

use indexmap::IndexMap;

/// An insertion-ordered map of keys to raw string values.
///
/// Overwriting an existing key keeps its original position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryMap(IndexMap<String, String>);

impl EntryMap {
    #[must_use]
    pub fn new() -> Self {
        EntryMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        EntryMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sini::EntryMap;
    ///
    /// let mut map = EntryMap::new();
    /// assert!(map.insert("key".to_string(), "1".to_string()).is_none());
    /// assert_eq!(map.insert("key".to_string(), "2".to_string()).as_deref(), Some("1"));
    /// ```
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&String> {
        self.0.get(key)
    }

    /// Returns the stored key and value for `key`.
    #[must_use]
    pub fn get_key_value(&self, key: &str) -> Option<(&String, &String)> {
        self.0.get_key_value(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, shifting later entries down so the remaining order is
    /// unchanged.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
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
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, String> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl IntoIterator for EntryMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a EntryMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for EntryMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        EntryMap(IndexMap::from_iter(iter))
    }
}

impl Extend<(String, String)> for EntryMap {
    fn extend<T: IntoIterator<Item = (String, String)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
