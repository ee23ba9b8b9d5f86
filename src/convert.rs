//! Conversion between stored strings and typed values.
//!
//! Every value in a [`Section`](crate::Section) is stored as a `String`. Typed
//! values are views computed on demand through two traits:
//!
//! - [`ToValue`]: renders a Rust value as its stored string
//! - [`FromValue`]: parses a stored string back into a Rust value
//!
//! The supported set is closed: `String`, the integer types, `f32`/`f64`,
//! `bool` and `char`. String slices can be written but not read back, since a
//! read always produces an owned value.
//!
//! ## Examples
//!
//! ```rust
//! use sini::{FromValue, ToValue};
//!
//! assert_eq!(42_i32.to_value(), "42");
//! assert_eq!(4.5_f64.to_value(), "4.5");
//! assert_eq!(i32::from_value("42").unwrap(), 42);
//! assert!(i32::from_value("forty-two").is_err());
//! ```

use crate::{Error, Result};

/// Types that can be stored as an INI value.
pub trait ToValue {
    /// Returns the textual form written into the entry store.
    fn to_value(&self) -> String;
}

/// Types that can be read back from a stored INI value.
///
/// Parsing is strict: the stored string must be a complete, valid rendering of
/// the target type. There is no silent fallback to a default.
pub trait FromValue: Sized {
    /// Parses `value` into `Self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] if `value` is not a valid `Self`.
    fn from_value(value: &str) -> Result<Self>;
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> String {
        (**self).to_value()
    }
}

impl ToValue for str {
    fn to_value(&self) -> String {
        self.to_string()
    }
}

impl ToValue for String {
    fn to_value(&self) -> String {
        self.clone()
    }
}

impl FromValue for String {
    fn from_value(value: &str) -> Result<Self> {
        Ok(value.to_string())
    }
}

macro_rules! impl_parsed_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl ToValue for $t {
                fn to_value(&self) -> String {
                    self.to_string()
                }
            }

            impl FromValue for $t {
                fn from_value(value: &str) -> Result<Self> {
                    value
                        .parse::<$t>()
                        .map_err(|_| Error::conversion(value, stringify!($t)))
                }
            }
        )*
    };
}

impl_parsed_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_conversions() {
        assert_eq!(i64::from_value("-17").unwrap(), -17);
        assert_eq!(u8::from_value("255").unwrap(), 255);
        assert!(u8::from_value("256").is_err());
        assert!(u32::from_value("-1").is_err());
        // stored values are already trimmed, so padding is garbage
        assert!(i32::from_value(" 42").is_err());
    }

    #[test]
    fn test_float_conversions() {
        assert_eq!(f64::from_value("4.5").unwrap(), 4.5);
        assert_eq!(f64::from_value("42").unwrap(), 42.0);
        assert_eq!(42.0_f64.to_value(), "42");
        assert_eq!(f32::from_value("0.25").unwrap(), 0.25);
    }

    #[test]
    fn test_string_identity() {
        assert_eq!(String::from_value("  asdf  ").unwrap(), "  asdf  ");
        assert_eq!("asdf".to_value(), "asdf");
        assert_eq!(String::from("x y").to_value(), "x y");
    }

    #[test]
    fn test_bool_and_char() {
        assert!(bool::from_value("true").unwrap());
        assert!(bool::from_value("yes").is_err());
        assert_eq!(char::from_value("x").unwrap(), 'x');
        assert!(char::from_value("xy").is_err());
    }

    #[test]
    fn test_conversion_error_names_target() {
        let err = f64::from_value("four").unwrap_err();
        assert_eq!(err, Error::conversion("four", "f64"));
    }
}
