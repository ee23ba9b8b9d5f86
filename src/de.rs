//! INI parsing.
//!
//! This module provides the [`Parser`], a line-oriented state machine that
//! turns raw text into a [`Sini`] document.
//!
//! ## Overview
//!
//! - **Line based**: input is split on `\n`; each line is trimmed and blank
//!   lines are skipped
//! - **Section tracking**: `[name]` switches the current section, creating it
//!   if needed. Lines before any header belong to the default section `""`
//! - **Entries**: `key = value`, split on the first `=`. Key and value are
//!   trimmed unless the value is wrapped in matching `'` or `"` quotes, in
//!   which case the text between the quotes is kept verbatim
//! - **Error reporting**: parsing stops at the first structural error, which
//!   carries the 1-based line number and the offending line
//!
//! ## Usage
//!
//! Most users should use [`Sini::parse`] or [`from_str`](crate::from_str):
//!
//! ```rust
//! use sini::from_str;
//!
//! let sini = from_str("name = Alice\n[server]\nport = 8080\n").unwrap();
//! assert_eq!(sini[""].get::<String>("name").unwrap(), "Alice");
//! assert_eq!(sini["server"].get::<u16>("port").unwrap(), 8080);
//! ```

use crate::{Error, Result, Sini};

/// The INI parser.
///
/// Created via [`Parser::new`] and driven by [`Parser::parse_into`].
pub struct Parser<'a> {
    input: &'a str,
    line: usize,
    current: &'a str, // Section that receives entries
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser {
            input,
            line: 0,
            current: "",
        }
    }

    /// Parses the whole input into `sini`.
    ///
    /// Sections and keys are created in first-occurrence order; a repeated
    /// key overwrites the earlier value in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] on the first unterminated section header,
    /// line without a `=` separator, or unterminated quoted value. `sini` may
    /// hold the entries read before the failing line.
    pub fn parse_into(&mut self, sini: &mut Sini) -> Result<()> {
        let input = self.input;
        for (index, raw) in input.split('\n').enumerate() {
            self.line = index + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if line.starts_with('[') {
                self.current = self.parse_header(line)?;
                sini.add_section(self.current);
            } else {
                let (key, value) = self.parse_entry(line)?;
                sini.add_section(self.current).set(key, value);
            }
        }
        Ok(())
    }

    fn error(&self, msg: &str, context: &str) -> Error {
        Error::parse(self.line, msg, context)
    }

    fn parse_header(&self, line: &'a str) -> Result<&'a str> {
        if line.len() < 2 || !line.ends_with(']') {
            return Err(self.error("unterminated section header", line));
        }
        Ok(&line[1..line.len() - 1])
    }

    fn parse_entry(&self, line: &'a str) -> Result<(&'a str, &'a str)> {
        let eq_pos = line
            .find('=')
            .ok_or_else(|| self.error("missing key/value separator", line))?;

        let key = line[..eq_pos].trim();
        let value = self.parse_value(line[eq_pos + 1..].trim(), line)?;
        Ok((key, value))
    }

    /// Strips a matching pair of quotes, keeping the inner text verbatim.
    fn parse_value(&self, raw: &'a str, line: &str) -> Result<&'a str> {
        match raw.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                if raw.len() < 2 || !raw.ends_with(quote) {
                    return Err(self.error("unterminated quoted value", line));
                }
                Ok(&raw[1..raw.len() - 1])
            }
            _ => Ok(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Sini> {
        let mut sini = Sini::new();
        Parser::new(input).parse_into(&mut sini)?;
        Ok(sini)
    }

    #[test]
    fn test_default_section_entries() {
        let sini = parse("c=\t42\n a = b \n").unwrap();
        let section = sini.at("").unwrap();
        assert_eq!(section.get_str("c"), Some("42"));
        assert_eq!(section.get_str("a"), Some("b"));
        assert_eq!(section.keys().collect::<Vec<_>>(), ["c", "a"]);
    }

    #[test]
    fn test_quoted_values_keep_whitespace() {
        let sini = parse("  e='  asdf  '\ng  =\"as123df\"\nh = \"\"\n").unwrap();
        let section = sini.at("").unwrap();
        assert_eq!(section.get_str("e"), Some("  asdf  "));
        assert_eq!(section.get_str("g"), Some("as123df"));
        assert_eq!(section.get_str("h"), Some(""));
    }

    #[test]
    fn test_interior_quotes_are_literal() {
        let sini = parse("a = it's fine\nb = say \"hi\"\n").unwrap();
        assert_eq!(sini[""].get_str("a"), Some("it's fine"));
        assert_eq!(sini[""].get_str("b"), Some("say \"hi\""));
    }

    #[test]
    fn test_split_on_first_separator() {
        let sini = parse("url = a=b=c\n").unwrap();
        assert_eq!(sini[""].get_str("url"), Some("a=b=c"));
    }

    #[test]
    fn test_section_reopened() {
        let sini = parse("[A]\nx=1\n[B]\ny=2\n[A]\nz=3\n").unwrap();
        let names: Vec<_> = sini.sections().map(|(name, _)| name).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(sini["A"].keys().collect::<Vec<_>>(), ["x", "z"]);
    }

    #[test]
    fn test_empty_header_addresses_default_section() {
        let sini = parse("[A]\nx=1\n[]\ny=2\n").unwrap();
        assert_eq!(sini[""].get_str("y"), Some("2"));
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let sini = parse("a=1\nb=2\na=3\n").unwrap();
        assert_eq!(sini[""].get_str("a"), Some("3"));
        assert_eq!(sini[""].keys().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let sini = parse("[A]\r\nx = 1\r\n").unwrap();
        assert_eq!(sini["A"].get::<i32>("x").unwrap(), 1);
    }

    #[test]
    fn test_unterminated_header() {
        let err = parse("a=b\n\n[asdf\ne=f\n\n").unwrap_err();
        assert_eq!(err, Error::parse(3, "unterminated section header", "[asdf"));

        assert!(parse("[").unwrap_err().is_parse());
    }

    #[test]
    fn test_missing_separator() {
        let err = parse("[A]\njust a line\n").unwrap_err();
        assert_eq!(
            err,
            Error::parse(2, "missing key/value separator", "just a line")
        );
    }

    #[test]
    fn test_malformed_quotes() {
        for input in ["a = 'open", "a = \"open", "a = 'mixed\"", "a = \"", "a = ' "] {
            let err = parse(input).unwrap_err();
            assert!(
                matches!(&err, Error::Parse { msg, .. } if msg == "unterminated quoted value"),
                "{input:?} gave {err:?}"
            );
        }
    }
}
