//! Error types for JSONH parsing.
//!
//! All parsing failures are surfaced as values of the [`Error`] enum; the
//! token stream ends with the first error and nothing is recovered. Errors
//! produced while tokenizing carry the cursor position (the number of
//! characters consumed from the source) to aid diagnostics.
//!
//! ## Examples
//!
//! ```rust
//! use serde_jsonh::{parse_value, Error};
//!
//! let result = parse_value("{ \"a\": ");
//! assert!(matches!(result, Err(Error::UnexpectedEof { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while parsing JSONH.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// The input ended where more characters were required.
    #[error("unexpected end of input at position {position}: expected {expected}")]
    UnexpectedEof { position: u64, expected: String },

    /// A character that no rule can accept at this point.
    #[error("unexpected character at position {position}: {msg}")]
    UnexpectedChar { position: u64, msg: String },

    /// Opening another container would cross the configured depth limit.
    #[error("exceeded maximum depth of {max_depth} at position {position}")]
    DepthExceeded { position: u64, max_depth: usize },

    /// A `\u`, `\x` or `\U` sequence with the wrong digits, or an escape
    /// that does not form a valid code point.
    #[error("malformed escape sequence at position {position}: {msg}")]
    MalformedEscape { position: u64, msg: String },

    /// A braceless object somewhere other than the document root.
    #[error("braceless object is only allowed at the document root (position {position})")]
    NestedBracelessObject { position: u64 },

    /// Trailing content after the root element in single-element mode.
    #[error("expected a single element, found further content at position {position}")]
    ExpectedSingleElement { position: u64 },

    /// A normalized number literal that could not be converted to a value.
    #[error("number conversion failed: {msg}")]
    NumberConversion { msg: String },

    /// Byte input that could not be decoded with the selected encoding.
    #[error("decode error: {0}")]
    Decode(String),

    /// IO error while reading input.
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error raised by a `Deserialize` implementation.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(position: u64, expected: &str) -> Self {
        Error::UnexpectedEof {
            position,
            expected: expected.to_string(),
        }
    }

    /// Creates an unexpected-character error.
    pub fn unexpected_char(position: u64, msg: &str) -> Self {
        Error::UnexpectedChar {
            position,
            msg: msg.to_string(),
        }
    }

    /// Creates a depth-limit error.
    pub fn depth_exceeded(position: u64, max_depth: usize) -> Self {
        Error::DepthExceeded {
            position,
            max_depth,
        }
    }

    /// Creates a malformed-escape error.
    pub fn malformed_escape(position: u64, msg: &str) -> Self {
        Error::MalformedEscape {
            position,
            msg: msg.to_string(),
        }
    }

    /// Creates a number-conversion error.
    pub fn number_conversion(msg: &str) -> Self {
        Error::NumberConversion {
            msg: msg.to_string(),
        }
    }

    /// Creates an I/O error.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonh::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
