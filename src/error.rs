//! Error types for INI parsing and typed access.
//!
//! ## Error Categories
//!
//! - **Parse Errors**: Structural problems in the source text, with the line
//!   number and the offending line
//! - **Not Found**: Strict lookup of a section or key that does not exist
//! - **Proxy Errors**: Reading a key through a [`Proxy`](crate::Proxy) before
//!   anything was assigned to it
//! - **Conversion Errors**: A stored string that is not a valid value of the
//!   requested type
//!
//! ## Examples
//!
//! ```rust
//! use sini::{from_str, Error};
//!
//! let result = from_str("[general\nkey=value\n");
//! assert!(matches!(result, Err(Error::Parse { line: 1, .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Structural violation in the source text
    #[error("Parse error at line {line}: {msg}\n{context}")]
    Parse {
        line: usize,
        msg: String,
        context: String,
    },

    /// Strict section lookup of a missing section
    #[error("Section not found: [{0}]")]
    SectionNotFound(String),

    /// Typed read of a missing key
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// Read through a proxy whose key holds no value
    #[error("No value assigned to key '{key}'")]
    Proxy { key: String },

    /// Stored string is not a valid value of the requested type
    #[error("Cannot convert '{value}' to {target}")]
    Conversion { value: String, target: &'static str },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a parse error for the given 1-based line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sini::Error;
    ///
    /// let err = Error::parse(3, "missing key/value separator", "oops");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn parse(line: usize, msg: &str, context: &str) -> Self {
        Error::Parse {
            line,
            msg: msg.to_string(),
            context: context.to_string(),
        }
    }

    /// Creates an error for a section name that is not in the document.
    pub fn section_not_found(name: &str) -> Self {
        Error::SectionNotFound(name.to_string())
    }

    /// Creates an error for a key that is not in the section.
    pub fn key_not_found(key: &str) -> Self {
        Error::KeyNotFound(key.to_string())
    }

    /// Creates an error for a read through a handle whose key does not exist.
    pub fn proxy(key: &str) -> Self {
        Error::Proxy {
            key: key.to_string(),
        }
    }

    /// Creates a conversion error for `value` that could not become a `target`.
    pub fn conversion(value: &str, target: &'static str) -> Self {
        Error::Conversion {
            value: value.to_string(),
            target,
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error from the underlying error's message.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for errors raised while parsing text.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }

    /// Returns `true` when a strict lookup missed a section or key.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Error::SectionNotFound(_) | Error::KeyNotFound(_))
    }

    #[must_use]
    pub const fn is_proxy(&self) -> bool {
        matches!(self, Error::Proxy { .. })
    }

    #[must_use]
    pub const fn is_conversion(&self) -> bool {
        matches!(self, Error::Conversion { .. })
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
