//! # serde_jsonh
//!
//! A Serde-compatible streaming parser for the JSONH ("JSON for Humans")
//! format.
//!
//! ## What is JSONH?
//!
//! JSONH is a human-authored superset of JSON. Everything JSON accepts,
//! JSONH accepts with the same meaning, and human authors additionally
//! get:
//!
//! - **Comments**: `# hash`, `// line`, `/* block */`, and (V2) nestable
//!   `/=* … *=/` block comments
//! - **Quoteless strings**: `name: Ada Lovelace` needs no quotes
//! - **Braceless root objects**: top-level `key: value` pairs without
//!   `{ … }`
//! - **Multi-line strings**: three or more quotes open a heredoc-style
//!   string with automatic indentation stripping
//! - **Richer numbers**: `0xDEAD_BEEF`, `0b1010.1`, `0o17`, digit
//!   separators, and fractional exponents like `1.2e3.4`
//! - **Verbatim strings** (V2): `@"C:\temp"` disables escape processing
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_jsonh::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Config {
//!     name: String,
//!     retries: u32,
//!     verbose: bool,
//! }
//!
//! let jsonh = r#"
//! name: app        # a quoteless string
//! retries: 3       // comments are allowed anywhere
//! verbose: true
//! "#;
//!
//! let config: Config = from_str(jsonh).unwrap();
//! assert_eq!(
//!     config,
//!     Config { name: "app".to_string(), retries: 3, verbose: true }
//! );
//! ```
//!
//! ## Layered API
//!
//! Three layers, each also available against byte input with optional
//! encoding detection, or any `Iterator<Item = char>`:
//!
//! - [`tokenize`] — the raw token stream, comments included
//! - [`parse_value`] — a dynamically-typed [`JsonhValue`] tree
//! - [`from_str`] — any type implementing `serde::Deserialize`
//!
//! ```rust
//! use serde_jsonh::{parse_value, JsonhValue};
//!
//! let value = parse_value("[1, two, /* skipped */ 3]").unwrap();
//! let items = value.as_array().unwrap();
//! assert_eq!(items.len(), 3);
//! assert_eq!(items[1].as_str(), Some("two"));
//! ```
//!
//! ## Error Handling
//!
//! Errors are returned as values; the first error ends the parse. See
//! [`Error`] for the failure categories.

pub mod de;
pub mod decode;
pub mod error;
pub mod macros;
pub mod map;
pub mod number;
pub mod options;
pub mod syntax;
pub mod token;
pub mod tokenizer;
pub mod value;

mod builder;
mod cursor;

pub use de::from_value;
pub use decode::Encoding;
pub use error::{Error, Result};
pub use map::JsonhMap;
pub use options::{JsonhOptions, JsonhVersion};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;
pub use value::JsonhValue as Value;
pub use value::{JsonhValue, Number};

use serde::Deserialize;
use std::io;

/// Tokenizes a string of JSONH text with default options.
///
/// The returned tokenizer is an iterator of `Result<Token>`; the stream
/// ends after the root element or the first error.
///
/// # Examples
///
/// ```rust
/// use serde_jsonh::{tokenize, TokenKind};
///
/// let comment_count = tokenize("[1, # one\n 2]")
///     .filter_map(|t| t.ok())
///     .filter(|t| t.kind == TokenKind::Comment)
///     .count();
/// assert_eq!(comment_count, 1);
/// ```
pub fn tokenize(source: &str) -> Tokenizer<std::str::Chars<'_>> {
    tokenize_with_options(source, JsonhOptions::default())
}

/// Tokenizes a string of JSONH text with custom options.
pub fn tokenize_with_options(source: &str, options: JsonhOptions) -> Tokenizer<std::str::Chars<'_>> {
    Tokenizer::from_str(source, options)
}

/// Parses a string of JSONH text into a [`JsonhValue`] tree.
///
/// # Examples
///
/// ```rust
/// use serde_jsonh::parse_value;
///
/// let value = parse_value("a: 1\nb: [true, null]").unwrap();
/// let object = value.as_object().unwrap();
/// assert_eq!(object.get("a").and_then(|v| v.as_i64()), Some(1));
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid JSONH.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_value(source: &str) -> Result<JsonhValue> {
    parse_value_with_options(source, JsonhOptions::default())
}

/// Parses a string of JSONH text into a [`JsonhValue`] tree with custom
/// options.
///
/// # Examples
///
/// ```rust
/// use serde_jsonh::{parse_value_with_options, JsonhOptions};
///
/// // a truncated document still parses with `incomplete_inputs`
/// let options = JsonhOptions::new().with_incomplete_inputs(true);
/// let value = parse_value_with_options("[1, 2", options).unwrap();
/// assert_eq!(value.as_array().unwrap().len(), 2);
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid JSONH under `options`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_value_with_options(source: &str, options: JsonhOptions) -> Result<JsonhValue> {
    Tokenizer::from_str(source, options).parse_element()
}

/// Deserializes an instance of type `T` from a string of JSONH text.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use serde_jsonh::from_str;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x: 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid JSONH or cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'de, T>(source: &str) -> Result<T>
where
    T: Deserialize<'de>,
{
    from_str_with_options(source, JsonhOptions::default())
}

/// Deserializes an instance of type `T` from a string of JSONH text with
/// custom options.
///
/// # Examples
///
/// ```rust
/// use serde_jsonh::{from_str_with_options, JsonhOptions};
///
/// let options = JsonhOptions::new().with_parse_single_element(true);
/// assert!(from_str_with_options::<Vec<i64>>("[1] [2]", options).is_err());
/// assert_eq!(
///     from_str_with_options::<Vec<i64>>("[1] # done", options).unwrap(),
///     vec![1]
/// );
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid JSONH under `options` or
/// cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<'de, T>(source: &str, options: JsonhOptions) -> Result<T>
where
    T: Deserialize<'de>,
{
    de::from_value(parse_value_with_options(source, options)?)
}

/// Deserializes an instance of type `T` from bytes of JSONH text.
///
/// The encoding is sniffed from a leading BOM (UTF-8, UTF-16 LE/BE,
/// UTF-32 LE/BE) and defaults to UTF-8.
///
/// # Examples
///
/// ```rust
/// use serde_jsonh::from_slice;
///
/// let numbers: Vec<i64> = from_slice(b"[1, 2, 3]").unwrap();
/// assert_eq!(numbers, vec![1, 2, 3]);
/// ```
///
/// # Errors
///
/// Returns an error if the bytes cannot be decoded, are not valid JSONH,
/// or cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'de, T>(bytes: &[u8]) -> Result<T>
where
    T: Deserialize<'de>,
{
    from_slice_with_options(bytes, None, JsonhOptions::default())
}

/// Deserializes an instance of type `T` from bytes of JSONH text with an
/// optional explicit encoding and custom options.
///
/// # Errors
///
/// Returns an error if the bytes cannot be decoded, are not valid JSONH
/// under `options`, or cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice_with_options<'de, T>(
    bytes: &[u8],
    encoding: Option<Encoding>,
    options: JsonhOptions,
) -> Result<T>
where
    T: Deserialize<'de>,
{
    let text = decode::decode(bytes, encoding)?;
    from_str_with_options(&text, options)
}

/// Deserializes an instance of type `T` from an I/O stream of JSONH.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use serde_jsonh::from_reader;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let reader = Cursor::new(b"x: 1\ny: 2");
/// let point: Point = from_reader(reader).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the bytes cannot be decoded, the
/// input is not valid JSONH, or it cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    from_reader_with_options(reader, JsonhOptions::default())
}

/// Deserializes an instance of type `T` from an I/O stream of JSONH with
/// custom options.
///
/// # Errors
///
/// Returns an error if reading fails, the bytes cannot be decoded, the
/// input is not valid JSONH under `options`, or it cannot be deserialized
/// to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R, T>(mut reader: R, options: JsonhOptions) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_slice_with_options(&bytes, None, options)
}

/// Advances through `source` looking for a top-level property named
/// `property_name`, without materializing any values.
///
/// # Examples
///
/// ```rust
/// use serde_jsonh::find_property_value;
///
/// let jsonh = "{ a: 1, b: { c: 2 }, c: 3 }";
/// assert!(find_property_value(jsonh, "c"));
/// assert!(!find_property_value(jsonh, "d"));
/// ```
#[must_use]
pub fn find_property_value(source: &str, property_name: &str) -> bool {
    Tokenizer::from_str(source, JsonhOptions::default()).find_property_value(property_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_from_str_struct() {
        let jsonh = r#"
        id: 123
        name: Alice
        active: true
        tags: [admin, user]
        "#;
        let user: User = from_str(jsonh).unwrap();
        assert_eq!(
            user,
            User {
                id: 123,
                name: "Alice".to_string(),
                active: true,
                tags: vec!["admin".to_string(), "user".to_string()],
            }
        );
    }

    #[test]
    fn test_from_str_is_a_json_superset() {
        let json = r#"{"id": 1, "name": "Bob", "active": false, "tags": []}"#;
        let user: User = from_str(json).unwrap();
        assert_eq!(user.name, "Bob");
        assert!(user.tags.is_empty());
    }

    #[test]
    fn test_parse_value_braceless() {
        let value = parse_value("a: b\nc: d").unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.get("a").and_then(|v| v.as_str()), Some("b"));
        assert_eq!(object.get("c").and_then(|v| v.as_str()), Some("d"));
    }

    #[test]
    fn test_from_slice_with_bom() {
        let numbers: Vec<i64> = from_slice(b"\xef\xbb\xbf[1, 2]").unwrap();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_from_value() {
        let value = parse_value("[1, 2, 3]").unwrap();
        let numbers: Vec<i64> = from_value(value).unwrap();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_find_property_value_braceless_root() {
        assert!(find_property_value("a: 1\nb: 2", "b"));
        assert!(!find_property_value("a: 1\nb: 2", "c"));
    }
}
