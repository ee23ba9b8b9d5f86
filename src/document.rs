//! The INI document.
//!
//! [`Sini`] owns an ordered mapping of section names to [`Section`]s. The
//! empty name `""` is reserved for the default section, which holds the
//! entries that appear before any `[section]` header.
//!
//! ## Section Access
//!
//! | Method | Missing section |
//! |--------|-----------------|
//! | [`Sini::add_section`] / [`Sini::section_mut`] / `sini[name]` (mutable) | created |
//! | [`Sini::at`] / [`Sini::at_mut`] | [`Error::SectionNotFound`] |
//! | [`Sini::get_section`] | `None` |
//! | `sini[name]` (shared) | panics |
//!
//! ```rust
//! use sini::Sini;
//!
//! let mut sini = Sini::new();
//! sini.add_section("").set("a", 42);
//! sini[""].set("b", "asdf");
//! sini.add_section("A").set("c", 4.5);
//!
//! let text = sini.to_string();
//! assert_eq!(text, "a=42\nb=asdf\n\n[A]\nc=4.5\n\n");
//!
//! let parsed: Sini = text.parse().unwrap();
//! assert_eq!(parsed[""].get::<i32>("a").unwrap(), 42);
//! assert_eq!(parsed["A"].get::<f64>("c").unwrap(), 4.5);
//! ```

use crate::de::Parser;
use crate::{Error, Result, Section, Serializer, WriteOptions};
use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer as _};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// An INI document: named sections in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sini {
    sections: IndexMap<String, Section>,
}

impl Sini {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `text` into this document.
    ///
    /// Sections and keys from `text` are merged into the existing content:
    /// new ones are appended in first-seen order and existing keys are
    /// overwritten. The merge only happens if the whole text parses, so a
    /// failed parse leaves the document untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for an unterminated section header, a line
    /// without a `=` separator, or an unterminated quoted value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sini::Sini;
    ///
    /// let mut sini = Sini::new();
    /// sini.parse("[A]\nx = 1\n").unwrap();
    /// assert!(sini.parse("[A]\ny = 2\n[broken\n").is_err());
    /// assert!(!sini["A"].contains_key("y"));
    /// ```
    pub fn parse(&mut self, text: &str) -> Result<()> {
        let mut staged = Sini::new();
        Parser::new(text).parse_into(&mut staged)?;
        self.merge(staged);
        Ok(())
    }

    /// Moves every section and entry of `other` into this document.
    pub fn merge(&mut self, other: Sini) {
        for (name, section) in other.sections {
            let target = self.add_section(name);
            for (key, value) in section.iter() {
                target.set(key, value);
            }
        }
    }

    /// Returns the section called `name`, creating it if absent.
    pub fn add_section<N: Into<String>>(&mut self, name: N) -> &mut Section {
        self.sections.entry(name.into()).or_default()
    }

    /// Returns the section called `name`, creating it if absent.
    ///
    /// Same as mutable indexing with `sini[name]`.
    pub fn section_mut(&mut self, name: &str) -> &mut Section {
        // avoid allocating the name when the section already exists
        if !self.sections.contains_key(name) {
            self.sections.insert(name.to_string(), Section::new());
        }
        &mut self.sections[name]
    }

    /// Returns the section called `name` without creating it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SectionNotFound`] if the section does not exist.
    pub fn at(&self, name: &str) -> Result<&Section> {
        self.sections
            .get(name)
            .ok_or_else(|| Error::section_not_found(name))
    }

    /// Mutable counterpart of [`Sini::at`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::SectionNotFound`] if the section does not exist.
    pub fn at_mut(&mut self, name: &str) -> Result<&mut Section> {
        self.sections
            .get_mut(name)
            .ok_or_else(|| Error::section_not_found(name))
    }

    #[must_use]
    pub fn get_section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    #[must_use]
    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Removes a section. Remaining sections keep their order.
    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        self.sections.shift_remove(name)
    }

    /// Iterates over `(name, section)` pairs in first-seen order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, section)| (name.as_str(), section))
    }

    /// Returns the number of sections, including an empty default section.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Serializes the document with custom options.
    ///
    /// `to_string()` produces the canonical form.
    #[must_use]
    pub fn to_string_with_options(&self, options: WriteOptions) -> String {
        let mut serializer = Serializer::new(options);
        serializer.serialize(self);
        serializer.into_inner()
    }
}

impl FromStr for Sini {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut sini = Sini::new();
        Parser::new(s).parse_into(&mut sini)?;
        Ok(sini)
    }
}

impl fmt::Display for Sini {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with_options(WriteOptions::default()))
    }
}

impl Index<&str> for Sini {
    type Output = Section;

    /// # Panics
    ///
    /// Panics if the section does not exist. Shared access cannot create it;
    /// use [`Sini::at`] for a fallible lookup.
    fn index(&self, name: &str) -> &Section {
        match self.sections.get(name) {
            Some(section) => section,
            None => panic!("section [{}] not found", name),
        }
    }
}

impl IndexMut<&str> for Sini {
    fn index_mut(&mut self, name: &str) -> &mut Section {
        self.section_mut(name)
    }
}

impl<N: Into<String>> FromIterator<(N, Section)> for Sini {
    fn from_iter<I: IntoIterator<Item = (N, Section)>>(iter: I) -> Self {
        let mut sini = Sini::new();
        for (name, section) in iter {
            sini.sections.insert(name.into(), section);
        }
        sini
    }
}

impl Serialize for Sini {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, section) in self.sections() {
            map.serialize_entry(name, section)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Sini {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SiniVisitor;

        impl<'de> Visitor<'de> for SiniVisitor {
            type Value = Sini;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of section names to sections")
            }

            fn visit_map<V>(self, mut visitor: V) -> std::result::Result<Sini, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut sections = IndexMap::with_capacity(visitor.size_hint().unwrap_or(0));
                while let Some((name, section)) = visitor.next_entry::<String, Section>()? {
                    sections.insert(name, section);
                }
                Ok(Sini { sections })
            }
        }

        deserializer.deserialize_map(SiniVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_on_empty_document() {
        let sini = Sini::new();
        assert_eq!(sini.at(""), Err(Error::section_not_found("")));
        assert!(sini.at("A").unwrap_err().is_not_found());
    }

    #[test]
    fn test_at_never_creates() {
        let mut sini = Sini::new();
        assert!(sini.at_mut("A").is_err());
        assert!(sini.is_empty());
    }

    #[test]
    fn test_add_section_is_idempotent() {
        let mut sini = Sini::new();
        sini.add_section("A").set("x", 1);
        sini.add_section("A").set("y", 2);
        assert_eq!(sini.len(), 1);
        assert_eq!(sini["A"].len(), 2);
    }

    #[test]
    fn test_index_mut_creates() {
        let mut sini = Sini::new();
        sini["B"].set("x", 1);
        sini["A"].set("y", 2);
        let names: Vec<_> = sini.sections().map(|(name, _)| name).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    #[should_panic(expected = "section [missing] not found")]
    fn test_shared_index_panics_on_missing() {
        let sini = Sini::new();
        let _ = &sini["missing"];
    }

    #[test]
    fn test_parse_merges_into_existing() {
        let mut sini = Sini::new();
        sini.add_section("A").set("x", 1);
        sini.parse("[B]\ny=2\n[A]\nx=3\nz=4\n").unwrap();

        assert_eq!(sini.to_string(), "[A]\nx=3\nz=4\n\n[B]\ny=2\n\n");
    }

    #[test]
    fn test_failed_parse_leaves_document_untouched() {
        let mut sini = Sini::new();
        sini.add_section("A").set("x", 1);
        let before = sini.clone();

        let err = sini.parse("x=2\n[A]\nno separator\n").unwrap_err();
        assert!(err.is_parse());
        assert_eq!(sini, before);
    }

    #[test]
    fn test_remove_section() {
        let mut sini: Sini = "[A]\n[B]\n[C]\n".parse().unwrap();
        assert!(sini.remove_section("B").is_some());
        assert!(!sini.contains_section("B"));
        assert_eq!(sini.to_string(), "[A]\n\n[C]\n\n");
    }
}
