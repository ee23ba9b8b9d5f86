//! Configuration options for INI serialization.
//!
//! This module provides types to customize the text produced by the
//! serializer:
//!
//! - [`WriteOptions`]: Main configuration struct
//! - [`KeyOrder`]: Emit sections and keys in insertion order or sorted
//! - [`QuoteStyle`]: Which quote character wraps values that need quoting
//!
//! The defaults produce the canonical form.
//!
//! ## Examples
//!
//! ```rust
//! use sini::{to_string_with_options, KeyOrder, Sini, WriteOptions};
//!
//! let mut sini = Sini::new();
//! sini.add_section("").set("c", 42).set("a", "b");
//!
//! let options = WriteOptions::new().with_key_order(KeyOrder::Sorted);
//! assert_eq!(to_string_with_options(&sini, options), "a=b\nc=42\n\n");
//! ```

/// Order in which sections and keys are emitted.
///
/// The default section is always written first regardless of ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyOrder {
    /// First-insertion order, as stored in the document.
    #[default]
    Insertion,
    /// Byte-wise lexicographic order.
    Sorted,
}

/// Quote character used for values with leading or trailing whitespace.
///
/// # Examples
///
/// ```rust
/// use sini::QuoteStyle;
///
/// assert_eq!(QuoteStyle::Double.as_char(), '"');
/// assert_eq!(QuoteStyle::Single.as_char(), '\'');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    #[default]
    Double,
    Single,
}

impl QuoteStyle {
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            QuoteStyle::Double => '"',
            QuoteStyle::Single => '\'',
        }
    }
}

/// Configuration options for INI serialization.
///
/// # Examples
///
/// ```rust
/// use sini::{KeyOrder, QuoteStyle, WriteOptions};
///
/// // Canonical output
/// let options = WriteOptions::new();
/// assert_eq!(options.key_order, KeyOrder::Insertion);
///
/// // Custom configuration
/// let options = WriteOptions::new()
///     .with_key_order(KeyOrder::Sorted)
///     .with_quote(QuoteStyle::Single);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WriteOptions {
    pub key_order: KeyOrder,
    pub quote: QuoteStyle,
}

impl WriteOptions {
    /// Creates default options (insertion order, double quotes).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that sort sections and keys for diff-stable output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sini::{KeyOrder, WriteOptions};
    ///
    /// assert_eq!(WriteOptions::sorted().key_order, KeyOrder::Sorted);
    /// ```
    #[must_use]
    pub fn sorted() -> Self {
        WriteOptions {
            key_order: KeyOrder::Sorted,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    /// Sets the quote character for values that need quoting.
    ///
    /// Values without leading or trailing whitespace are never quoted.
    #[must_use]
    pub fn with_quote(mut self, quote: QuoteStyle) -> Self {
        self.quote = quote;
        self
    }
}
