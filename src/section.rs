//! Sections and key handles.
//!
//! A [`Section`] owns an ordered set of key/value entries. It does not know
//! its own name; the owning [`Sini`](crate::Sini) addresses it externally.
//!
//! ## Access Modes
//!
//! Keys can be reached three ways, each with its own existence contract:
//!
//! - [`Section::get`]: typed read, fails with [`Error::KeyNotFound`] when the
//!   key is absent
//! - [`Section::at`] / [`Section::at_mut`]: strict handle to an existing
//!   entry, fails with [`Error::Proxy`] when the key is absent
//! - [`Section::entry`]: deferred handle that never fails by itself. The key
//!   is only created by [`Proxy::assign`], and reading it before any
//!   assignment fails with [`Error::Proxy`]
//!
//! ```rust
//! use sini::{Error, Section};
//!
//! let mut section = Section::new();
//!
//! let proxy = section.entry("port");
//! assert!(matches!(proxy.value::<u16>(), Err(Error::Proxy { .. })));
//!
//! section.entry("port").assign(8080);
//! assert_eq!(section.get::<u16>("port").unwrap(), 8080);
//! assert_eq!(section.at("port").unwrap().as_str(), "8080");
//! ```

use crate::{EntryMap, Error, FromValue, Result, ToValue};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A named group of key/value entries, minus the name.
///
/// Values are always stored as strings. Typed values are computed on demand
/// through [`ToValue`] and [`FromValue`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Section {
    entries: EntryMap,
}

impl Section {
    /// Creates an empty section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the textual form of `value` at `key`, overwriting any previous
    /// value. Returns `self` so calls can be chained.
    ///
    /// Values must fit on one line. The text format has no escapes, so a
    /// `\n` inside a value would be read back as further entries or section
    /// headers; debug builds panic when serializing such a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sini::Section;
    ///
    /// let mut section = Section::new();
    /// section.set("a", 42).set("b", "asdf").set("c", 4.5);
    /// assert_eq!(section.get_str("c"), Some("4.5"));
    /// ```
    pub fn set<K, T>(&mut self, key: K, value: T) -> &mut Self
    where
        K: Into<String>,
        T: ToValue,
    {
        self.entries.insert(key.into(), value.to_value());
        self
    }

    /// Reads the value at `key` as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent, or
    /// [`Error::Conversion`] if the stored string is not a valid `T`.
    pub fn get<T: FromValue>(&self, key: &str) -> Result<T> {
        let value = self.entries.get(key).ok_or_else(|| Error::key_not_found(key))?;
        T::from_value(value)
    }

    /// Returns the raw stored string at `key`, if any.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns a read-only handle to an existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Proxy`] if the key is absent.
    pub fn at<'a>(&'a self, key: &str) -> Result<Ref<'a>> {
        self.entries
            .get_key_value(key)
            .map(|(key, value)| Ref { key, value })
            .ok_or_else(|| Error::proxy(key))
    }

    /// Returns a mutable handle to an existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Proxy`] if the key is absent.
    pub fn at_mut(&mut self, key: &str) -> Result<Proxy<'_>> {
        if !self.entries.contains_key(key) {
            return Err(Error::proxy(key));
        }
        Ok(Proxy {
            section: self,
            key: key.to_string(),
        })
    }

    /// Returns a deferred handle to `key`, whether or not it exists.
    ///
    /// Mere access never creates the key. See [`Proxy`].
    pub fn entry<K: Into<String>>(&mut self, key: K) -> Proxy<'_> {
        Proxy {
            section: self,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes `key`, returning its stored string. Remaining keys keep their
    /// order.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the underlying entry store.
    #[must_use]
    pub fn entries(&self) -> &EntryMap {
        &self.entries
    }
}

impl From<EntryMap> for Section {
    fn from(entries: EntryMap) -> Self {
        Section { entries }
    }
}

impl<K, V> FromIterator<(K, V)> for Section
where
    K: Into<String>,
    V: ToValue,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut section = Section::new();
        for (key, value) in iter {
            section.set(key, value);
        }
        section
    }
}

/// A deferred, mutable handle to a `(section, key)` location.
///
/// The key may or may not exist. Existence is checked when the handle is
/// read, and the key is created when the handle is assigned. The handle
/// borrows its section, so it cannot outlive it.
///
/// # Examples
///
/// ```rust
/// use sini::Sini;
///
/// let mut sini = Sini::new();
/// sini[""].entry("test").assign(42);
/// assert_eq!(sini[""].entry("test").value::<String>().unwrap(), "42");
///
/// sini[""].entry("test").assign(99);
/// assert_eq!(sini[""].entry("test").value::<i32>().unwrap(), 99);
/// ```
#[derive(Debug)]
pub struct Proxy<'a> {
    section: &'a mut Section,
    key: String,
}

impl Proxy<'_> {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns `true` if the bound key currently holds a value.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.section.contains_key(&self.key)
    }

    /// Stores the textual form of `value` at the bound key, creating the entry
    /// if absent. The same single-line rule as [`Section::set`] applies.
    pub fn assign<T: ToValue>(&mut self, value: T) -> &mut Self {
        self.section.entries.insert(self.key.clone(), value.to_value());
        self
    }

    /// Reads the bound entry as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Proxy`] if nothing has been assigned to the key, or
    /// [`Error::Conversion`] if the stored string is not a valid `T`.
    pub fn value<T: FromValue>(&self) -> Result<T> {
        T::from_value(self.as_str()?)
    }

    /// Returns the raw stored string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Proxy`] if nothing has been assigned to the key.
    pub fn as_str(&self) -> Result<&str> {
        self.section
            .get_str(&self.key)
            .ok_or_else(|| Error::proxy(&self.key))
    }
}

impl PartialEq<str> for Proxy<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str().is_ok_and(|value| value == other)
    }
}

impl PartialEq<&str> for Proxy<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str().is_ok_and(|value| value == *other)
    }
}

/// A read-only handle to an entry that is known to exist.
///
/// Returned by [`Section::at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ref<'a> {
    key: &'a str,
    value: &'a str,
}

impl<'a> Ref<'a> {
    #[must_use]
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// Reads the entry as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] if the stored string is not a valid `T`.
    pub fn value<T: FromValue>(&self) -> Result<T> {
        T::from_value(self.value)
    }

    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.value
    }
}

impl PartialEq<str> for Ref<'_> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for Ref<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl fmt::Display for Ref<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value)
    }
}

impl Serialize for Section {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SectionVisitor;

        impl<'de> Visitor<'de> for SectionVisitor {
            type Value = Section;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of string keys to string values")
            }

            fn visit_map<V>(self, mut visitor: V) -> std::result::Result<Section, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut entries = EntryMap::with_capacity(visitor.size_hint().unwrap_or(0));
                while let Some((key, value)) = visitor.next_entry::<String, String>()? {
                    entries.insert(key, value);
                }
                Ok(Section { entries })
            }
        }

        deserializer.deserialize_map(SectionVisitor)
    }
}
