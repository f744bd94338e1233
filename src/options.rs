//! Configuration options for JSONH parsing.
//!
//! This module provides types to customize parser behavior:
//!
//! - [`JsonhOptions`]: Main configuration struct
//! - [`JsonhVersion`]: Selects which revision of the JSONH syntax is accepted
//!
//! ## Examples
//!
//! ```rust
//! use serde_jsonh::{parse_value_with_options, JsonhOptions, JsonhVersion};
//!
//! // V2 syntax (the default): `@` marks a verbatim string
//! let value = parse_value_with_options("[@null]", JsonhOptions::new()).unwrap();
//! assert_eq!(value.as_array().unwrap()[0].as_str(), Some("null"));
//!
//! // Restrict the parser to V1, where `@` is an ordinary character
//! let options = JsonhOptions::new().with_version(JsonhVersion::V1);
//! let value = parse_value_with_options("[@null]", options).unwrap();
//! assert_eq!(value.as_array().unwrap()[0].as_str(), Some("@null"));
//! ```

/// The major versions of the JSONH syntax.
///
/// V2 adds the `@` verbatim-string prefix and `/=…*…*=/` nestable block
/// comments, and reserves `@` in quoteless strings.
///
/// # Examples
///
/// ```rust
/// use serde_jsonh::JsonhVersion;
///
/// assert!(JsonhVersion::Latest.supports(JsonhVersion::V2));
/// assert!(JsonhVersion::V2.supports(JsonhVersion::V1));
/// assert!(!JsonhVersion::V1.supports(JsonhVersion::V2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum JsonhVersion {
    /// The latest released version (currently [`JsonhVersion::V2`]).
    #[default]
    Latest,
    /// Version 1 of the syntax.
    V1,
    /// Version 2 of the syntax.
    V2,
}

impl JsonhVersion {
    /// Resolves `Latest` to the concrete version it currently stands for.
    #[must_use]
    pub const fn effective(self) -> u32 {
        match self {
            JsonhVersion::Latest | JsonhVersion::V2 => 2,
            JsonhVersion::V1 => 1,
        }
    }

    /// Returns `true` if this version includes the features of `other`.
    #[must_use]
    pub const fn supports(self, other: JsonhVersion) -> bool {
        self.effective() >= other.effective()
    }
}

/// Configuration options for JSONH parsing.
///
/// # Examples
///
/// ```rust
/// use serde_jsonh::{JsonhOptions, JsonhVersion};
///
/// // Defaults: latest version, depth limit of 64
/// let options = JsonhOptions::new();
/// assert_eq!(options.max_depth, 64);
///
/// // Custom configuration
/// let options = JsonhOptions::new()
///     .with_version(JsonhVersion::V1)
///     .with_max_depth(8)
///     .with_incomplete_inputs(true);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct JsonhOptions {
    /// The syntax version to accept.
    pub version: JsonhVersion,
    /// Whether input after the root element (other than trailing comments
    /// and whitespace) is rejected.
    pub parse_single_element: bool,
    /// Hard limit on nested `{…}`/`[…]` containers.
    pub max_depth: usize,
    /// Whether end of input inside an open container silently closes it
    /// instead of being an error.
    pub incomplete_inputs: bool,
    /// Whether numbers are delivered as exact arbitrary-precision values
    /// instead of IEEE-754 doubles.
    pub big_numbers: bool,
}

impl Default for JsonhOptions {
    fn default() -> Self {
        JsonhOptions {
            version: JsonhVersion::default(),
            parse_single_element: false,
            max_depth: 64,
            incomplete_inputs: false,
            big_numbers: false,
        }
    }
}

impl JsonhOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the configured version includes the features of
    /// `version`.
    #[must_use]
    pub const fn supports(&self, version: JsonhVersion) -> bool {
        self.version.supports(version)
    }

    /// Sets the syntax version to accept.
    #[must_use]
    pub fn with_version(mut self, version: JsonhVersion) -> Self {
        self.version = version;
        self
    }

    /// Requires the input to contain exactly one element.
    ///
    /// After the root element, only comments and whitespace may remain.
    #[must_use]
    pub fn with_parse_single_element(mut self, parse_single_element: bool) -> Self {
        self.parse_single_element = parse_single_element;
        self
    }

    /// Sets the container nesting limit. Primitives do not count.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Allows truncated input: end of input inside an open container
    /// closes the container instead of failing.
    #[must_use]
    pub fn with_incomplete_inputs(mut self, incomplete_inputs: bool) -> Self {
        self.incomplete_inputs = incomplete_inputs;
        self
    }

    /// Delivers numbers as exact arbitrary-precision values.
    ///
    /// When disabled (the default), numbers are folded to `f64` and
    /// overflow saturates to ±∞.
    #[must_use]
    pub fn with_big_numbers(mut self, big_numbers: bool) -> Self {
        self.big_numbers = big_numbers;
        self
    }
}
