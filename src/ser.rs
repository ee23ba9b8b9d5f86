//! INI serialization.
//!
//! This module provides the [`Serializer`] that regenerates canonical text
//! from a [`Sini`] document.
//!
//! ## Output Rules
//!
//! - **Default section first**: written without a `[...]` header, and only
//!   when it holds entries
//! - **Named sections**: `[name]` on its own line, then the entries, then a
//!   blank line, even for sections with no entries
//! - **Entries**: `key=value` with no spaces around `=`
//! - **Quote minimization**: a value is quoted if and only if it has leading
//!   or trailing whitespace
//!
//! ## Usage
//!
//! Most users should use [`Sini::to_string`](ToString::to_string) or the
//! functions in the crate root:
//!
//! ```rust
//! use sini::{Serializer, Sini, WriteOptions};
//!
//! let mut sini = Sini::new();
//! sini.add_section("").set("foo", "  horse  ");
//!
//! let mut serializer = Serializer::new(WriteOptions::new());
//! serializer.serialize(&sini);
//! assert_eq!(serializer.into_inner(), "foo=\"  horse  \"\n\n");
//! ```

use crate::{KeyOrder, Section, Sini, WriteOptions};

/// The INI serializer.
///
/// Serialization cannot fail: every in-memory document has a text form.
pub struct Serializer {
    output: String,
    options: WriteOptions,
}

impl Serializer {
    pub fn new(options: WriteOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends the text form of `sini` to the output.
    pub fn serialize(&mut self, sini: &Sini) {
        if let Some(default) = sini.get_section("") {
            if !default.is_empty() {
                self.write_entries(default);
                self.output.push('\n');
            }
        }

        let mut named: Vec<(&str, &Section)> =
            sini.sections().filter(|(name, _)| !name.is_empty()).collect();
        if self.options.key_order == KeyOrder::Sorted {
            named.sort_unstable_by(|a, b| a.0.cmp(b.0));
        }

        for (name, section) in named {
            self.output.push('[');
            self.output.push_str(name);
            self.output.push_str("]\n");
            self.write_entries(section);
            self.output.push('\n');
        }
    }

    fn write_entries(&mut self, section: &Section) {
        let mut entries: Vec<(&str, &str)> = section.iter().collect();
        if self.options.key_order == KeyOrder::Sorted {
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        }

        for (key, value) in entries {
            self.output.push_str(key);
            self.output.push('=');
            self.write_value(value);
            self.output.push('\n');
        }
    }

    /// Values whose edges would be lost to trimming on the next parse, or
    /// whose leading quote would be read as an opening quote.
    ///
    /// The parser only looks at the first and last character, so wrapping in
    /// either quote style gives the value back verbatim.
    #[inline]
    fn needs_quotes(s: &str) -> bool {
        s.trim() != s || s.starts_with(['\'', '"'])
    }

    #[inline]
    fn write_value(&mut self, s: &str) {
        debug_assert!(
            !s.contains('\n'),
            "value {:?} spans more than one line",
            s
        );
        if Self::needs_quotes(s) {
            let quote = self.options.quote.as_char();
            self.output.push(quote);
            self.output.push_str(s);
            self.output.push(quote);
        } else {
            self.output.push_str(s);
        }
    }
}
