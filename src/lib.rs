//! # sini
//!
//! A small library for reading, mutating, and writing INI-style configuration
//! text.
//!
//! ## What does it handle?
//!
//! Key/value pairs grouped into named sections, plus a default unnamed section
//! for entries that appear before any header:
//!
//! ```text
//! name = Alice
//!
//! [server]
//! host = example.com
//! motd = '  welcome  '
//! ```
//!
//! Sections and keys keep their first-seen order, values are stored as strings
//! and converted to typed values on demand, and serialization regenerates a
//! canonical text form. See the [`format`] module for the exact rules.
//!
//! ## Quick Start
//!
//! ```rust
//! use sini::Sini;
//!
//! let mut sini: Sini = "c = \t42\n a = b \n\n[section1]\n  e='  asdf  '\n".parse().unwrap();
//!
//! assert_eq!(sini[""].get::<i32>("c").unwrap(), 42);
//! assert_eq!(sini["section1"].get::<String>("e").unwrap(), "  asdf  ");
//!
//! sini["section1"].set("f", 4.5);
//! assert_eq!(
//!     sini.to_string(),
//!     "c=42\na=b\n\n[section1]\ne=\"  asdf  \"\nf=4.5\n\n"
//! );
//! ```
//!
//! ## Deferred Key Handles
//!
//! [`Section::entry`] returns a [`Proxy`] for a key whether or not it exists.
//! Assigning through it creates the key; reading it first is an error:
//!
//! ```rust
//! use sini::{Error, Sini};
//!
//! let mut sini = Sini::new();
//! assert!(matches!(sini[""].entry("test").value::<i32>(), Err(Error::Proxy { .. })));
//!
//! sini[""].entry("test").assign(42);
//! assert_eq!(sini[""].entry("test").value::<f64>().unwrap(), 42.0);
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`Result`]. Strict lookups
//! ([`Sini::at`], [`Section::at`], [`Section::get`]) fail on missing sections
//! or keys, typed reads fail on strings that do not parse as the requested
//! type, and parsing fails on the first structural problem with its line
//! number.

pub mod convert;
pub mod de;
pub mod document;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod section;
pub mod ser;

pub use convert::{FromValue, ToValue};
pub use de::Parser;
pub use document::Sini;
pub use error::{Error, Result};
pub use map::EntryMap;
pub use options::{KeyOrder, QuoteStyle, WriteOptions};
pub use section::{Proxy, Ref, Section};
pub use ser::Serializer;

use std::io;

/// Serialize a document to its canonical text form.
///
/// # Examples
///
/// ```rust
/// use sini::{to_string, Sini};
///
/// let mut sini = Sini::new();
/// sini.add_section("").set("foo", "  horse  ");
/// assert_eq!(to_string(&sini), "foo=\"  horse  \"\n\n");
/// ```
#[must_use]
pub fn to_string(sini: &Sini) -> String {
    to_string_with_options(sini, WriteOptions::default())
}

/// Serialize a document with custom options.
///
/// # Examples
///
/// ```rust
/// use sini::{to_string_with_options, Sini, WriteOptions};
///
/// let mut sini = Sini::new();
/// sini.add_section("").set("b", 1).set("a", 2);
/// assert_eq!(to_string_with_options(&sini, WriteOptions::sorted()), "a=2\nb=1\n\n");
/// ```
#[must_use]
pub fn to_string_with_options(sini: &Sini, options: WriteOptions) -> String {
    sini.to_string_with_options(options)
}

/// Serialize a document to a writer in canonical text form.
///
/// # Examples
///
/// ```rust
/// use sini::{to_writer, Sini};
///
/// let mut sini = Sini::new();
/// sini.add_section("A").set("x", 1);
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &sini).unwrap();
/// assert_eq!(buffer, b"[A]\nx=1\n\n");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn to_writer<W>(writer: W, sini: &Sini) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, sini, WriteOptions::default())
}

/// Serialize a document to a writer with custom options.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn to_writer_with_options<W>(mut writer: W, sini: &Sini, options: WriteOptions) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(sini, options);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Parse a document from INI text.
///
/// # Examples
///
/// ```rust
/// use sini::from_str;
///
/// let sini = from_str("[A]\nc = 4.5\n").unwrap();
/// assert_eq!(sini["A"].get::<f64>("c").unwrap(), 4.5);
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] if the text is structurally invalid. The error
/// carries the line number and the offending line.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Sini> {
    s.parse()
}

/// Parse a document from an I/O stream of INI text.
///
/// # Examples
///
/// ```rust
/// use sini::from_reader;
/// use std::io::Cursor;
///
/// let sini = from_reader(Cursor::new(b"a = 1\n")).unwrap();
/// assert_eq!(sini[""].get::<u32>("a").unwrap(), 1);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the text is not valid INI.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Sini>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Parse a document from bytes of INI text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or not valid INI.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Sini> {
    let s = std::str::from_utf8(v).map_err(Error::custom)?;
    from_str(s)
}
