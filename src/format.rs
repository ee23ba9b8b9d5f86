//! INI Text Format
//!
//! This module documents the text format read and written by this library.
//! It contains no code.
//!
//! # Overview
//!
//! A file is a sequence of lines. Each line is trimmed of surrounding
//! whitespace before it is interpreted, and blank lines carry no meaning.
//!
//! ```text
//! name = Alice
//! greeting = '  hello  '
//!
//! [server]
//! host = example.com
//! port = 8080
//! ```
//!
//! # Sections
//!
//! A line starting with `[` is a section header and must end with `]`. The
//! text between the brackets is the section name, taken verbatim. Entries
//! that appear before the first header belong to the **default section**,
//! named by the empty string. `[]` switches back to the default section.
//!
//! A header may appear more than once; later occurrences continue filling
//! the same section.
//!
//! Sections are single-level. There are no nested sections.
//!
//! # Entries
//!
//! Every other line is an entry and must contain a `=`. The line is split on
//! the **first** `=`, so values may themselves contain `=`:
//!
//! ```text
//! url = postgres://db?sslmode=require
//! ```
//!
//! Whitespace around the key and the value is insignificant. Keys are unique
//! within a section: when a key repeats, the last value wins and the key
//! keeps the position of its first occurrence.
//!
//! # Quoting
//!
//! A value whose first character is `'` or `"` must end with the same
//! character. The text between the quotes is stored verbatim, which is the
//! only way to keep leading or trailing whitespace:
//!
//! | Source | Stored value |
//! |--------|--------------|
//! | `a =  hello ` | `hello` |
//! | `a = '  hello  '` | `  hello  ` |
//! | `a = "say 'hi'"` | `say 'hi'` |
//! | `a = it's` | `it's` |
//!
//! Quotes inside a value are literal; there are no escape sequences. Values
//! span exactly one line. A value stored programmatically must not contain a
//! newline: it would be written as-is and re-read as separate lines, which
//! can open new sections or entries. Debug builds panic when serializing one.
//!
//! # Errors
//!
//! Parsing stops at the first of:
//!
//! - a header without its closing `]`
//! - an entry line without `=`
//! - a quoted value without its matching closing quote
//!
//! # Canonical Form
//!
//! The serializer regenerates text independently of the source formatting:
//!
//! 1. The default section comes first, without a header, if it has entries
//! 2. Every other section follows as `[name]`, in first-seen order
//! 3. Entries are written `key=value`, in first-seen order
//! 4. Every section block, including the default one, ends with a blank line
//! 5. A value is wrapped in double quotes if and only if it has leading or
//!    trailing whitespace, or starts with `'` or `"`
//!
//! ```text
//! c=	42            →   c=42
//!  a = b                a=b
//!
//! [section1]            [section1]
//!   e='  asdf  '        e="  asdf  "
//! g  ="as123df"         g=as123df
//! ```
//!
//! Rule 5 quotes a value such as `'x'` as `"'x'"`. Written bare, its quotes
//! would be stripped on the next parse, and `"x` would not parse at all.
//!
//! Parsing canonical text and serializing it again yields the same text.
//!
//! # Typed Values
//!
//! Values are stored as strings. Typed reads parse the stored string with the
//! standard textual rules of the requested type, and typed writes store the
//! value's display form:
//!
//! | Written | Stored | Read back as |
//! |---------|--------|--------------|
//! | `42_i32` | `42` | `i32`, `f64`, `String` |
//! | `4.5_f64` | `4.5` | `f64`, `String` |
//! | `42.0_f64` | `42` | `i32`, `f64`, `String` |
//! | `true` | `true` | `bool`, `String` |
//!
//! A stored string that is not a valid value of the requested type is an
//! error, never a silent default.
