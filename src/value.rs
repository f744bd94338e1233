//! Dynamic value representation for parsed JSONH documents.
//!
//! [`JsonhValue`] is the tree the parser builds when no target type is
//! known at compile time: a closed sum over null, booleans, numbers,
//! strings, arrays, and insertion-ordered objects. [`Number`] backs the
//! numeric variant and comes in two shapes, an IEEE-754 double (the
//! default) or an exact decimal when parsing with `big_numbers`.
//!
//! Trees can be built from literals, from the [`jsonh!`](crate::jsonh)
//! macro, or by the parser itself; the accessors below take them apart
//! again:
//!
//! ```rust
//! use serde_jsonh::parse_value;
//!
//! let tree = parse_value("name: Ada\nscores: [1, 2.5]").unwrap();
//! let object = tree.as_object().unwrap();
//!
//! assert_eq!(object.get("name").and_then(|v| v.as_str()), Some("Ada"));
//!
//! let scores = object.get("scores").and_then(|v| v.as_array()).unwrap();
//! assert_eq!(scores[0].as_i64(), Some(1));
//! assert_eq!(scores[1].as_f64(), Some(2.5));
//! assert_eq!(scores[1].as_i64(), None);
//! ```

use crate::JsonhMap;
use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Any value a JSONH document can contain.
///
/// # Examples
///
/// ```rust
/// use serde_jsonh::{JsonhValue, Number};
///
/// let null = JsonhValue::Null;
/// let num = JsonhValue::Number(Number::Float(42.0));
/// let text = JsonhValue::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum JsonhValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<JsonhValue>),
    Object(JsonhMap),
}

/// A numeric value parsed from a JSONH number literal.
///
/// Which variant the parser produces depends on the `big_numbers`
/// option: off (the default) folds every literal to a double, with
/// overflow saturating to ±∞; on keeps the exact decimal, so
/// `0.1` really is one tenth and hundred-digit integers survive.
///
/// # Examples
///
/// ```rust
/// use serde_jsonh::Number;
///
/// let double = Number::Float(3.5);
/// assert!(double.is_float());
/// assert_eq!(double.as_f64(), 3.5);
/// assert_eq!(double.as_i64(), None);
/// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    /// An IEEE-754 double.
    Float(f64),
    /// An exact arbitrary-precision decimal (`big_numbers` mode).
    Big(BigDecimal),
}

impl Number {
    /// Returns `true` if this is a double-backed value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` if this is an exact arbitrary-precision value.
    #[inline]
    #[must_use]
    pub const fn is_big(&self) -> bool {
        matches!(self, Number::Big(_))
    }

    /// Converts this number to an `i64` if it is whole and in range.
    ///
    /// Both representations qualify: `Float(3.0)` converts, `Float(3.5)`
    /// and values outside `i64` do not.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64
                {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            Number::Big(d) => {
                let truncated = d.with_scale_round(0, RoundingMode::Down);
                if truncated == *d {
                    truncated.to_i64()
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`.
    ///
    /// Exact values round to the nearest double, so precision beyond
    /// 53 bits is lost here; use [`Number::as_big`] to keep it.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Float(f) => *f,
            Number::Big(d) => d.to_f64().unwrap_or(f64::NAN),
        }
    }

    /// If this is an exact value, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_big(&self) -> Option<&BigDecimal> {
        match self {
            Number::Big(d) => Some(d),
            _ => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Float(fl) => write!(f, "{}", fl),
            Number::Big(d) => write!(f, "{}", d),
        }
    }
}

impl JsonhValue {
    /// A short name for this value's type, as used in error messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonh::JsonhValue;
    ///
    /// assert_eq!(JsonhValue::Null.type_name(), "null");
    /// assert_eq!(JsonhValue::from(1).type_name(), "number");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            JsonhValue::Null => "null",
            JsonhValue::Bool(_) => "boolean",
            JsonhValue::Number(_) => "number",
            JsonhValue::String(_) => "string",
            JsonhValue::Array(_) => "array",
            JsonhValue::Object(_) => "object",
        }
    }

    /// `true` for the null value.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, JsonhValue::Null)
    }

    /// `true` for a boolean.
    #[must_use]
    pub fn is_bool(&self) -> bool {
        self.as_bool().is_some()
    }

    /// `true` for a number, double-backed or exact.
    #[must_use]
    pub fn is_number(&self) -> bool {
        self.as_number().is_some()
    }

    /// `true` for a string.
    #[must_use]
    pub fn is_string(&self) -> bool {
        self.as_str().is_some()
    }

    /// `true` for an array.
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.as_array().is_some()
    }

    /// `true` for an object.
    #[must_use]
    pub fn is_object(&self) -> bool {
        self.as_object().is_some()
    }

    /// The boolean payload, if this is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonhValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The underlying [`Number`], if this is a number.
    ///
    /// Go through this to tell a double-backed number from an exact
    /// `big_numbers` one; the [`JsonhValue::as_i64`] and
    /// [`JsonhValue::as_f64`] shortcuts below erase that distinction.
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            JsonhValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Borrows the text, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonhValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// This value as an `i64`, when it is a whole number in range.
    ///
    /// ```rust
    /// use serde_jsonh::parse_value;
    ///
    /// assert_eq!(parse_value("0x40").unwrap().as_i64(), Some(64));
    /// assert_eq!(parse_value("1.5").unwrap().as_i64(), None);
    /// ```
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    /// This value as an `f64`, when it is any kind of number.
    ///
    /// An exact value is rounded to the nearest double.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    /// Borrows the items, if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[JsonhValue]> {
        match self {
            JsonhValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Borrows the members, if this is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&JsonhMap> {
        match self {
            JsonhValue::Object(members) => Some(members),
            _ => None,
        }
    }
}

impl fmt::Display for JsonhValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonhValue::Null => write!(f, "null"),
            JsonhValue::Bool(b) => write!(f, "{}", b),
            JsonhValue::Number(n) => write!(f, "{}", n),
            JsonhValue::String(s) => write!(f, "{:?}", s),
            JsonhValue::Array(arr) => {
                write!(
                    f,
                    "[{}]",
                    arr.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
            JsonhValue::Object(obj) => {
                write!(
                    f,
                    "{{{}}}",
                    obj.iter()
                        .map(|(k, v)| format!("{:?}: {}", k, v))
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
        }
    }
}

impl Serialize for JsonhValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsonhValue::Null => serializer.serialize_unit(),
            JsonhValue::Bool(b) => serializer.serialize_bool(*b),
            // Whole numbers project as integers so that integer inputs
            // survive a trip through the double representation.
            JsonhValue::Number(n) => match n.as_i64() {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(n.as_f64()),
            },
            JsonhValue::String(s) => serializer.serialize_str(s),
            JsonhValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            JsonhValue::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for JsonhValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct JsonhValueVisitor;

        impl<'de> Visitor<'de> for JsonhValueVisitor {
            type Value = JsonhValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSONH value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(JsonhValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(JsonhValue::Number(Number::Float(value as f64)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(JsonhValue::Number(Number::Float(value as f64)))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(JsonhValue::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(JsonhValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(JsonhValue::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(JsonhValue::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(JsonhValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(JsonhValue::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = JsonhMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(JsonhValue::Object(values))
            }
        }

        deserializer.deserialize_any(JsonhValueVisitor)
    }
}

// Extraction into plain Rust types, with type mismatches reported
// through the crate error.
impl TryFrom<JsonhValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: JsonhValue) -> crate::Result<Self> {
        match value.as_i64() {
            Some(whole) => Ok(whole),
            None => Err(crate::Error::custom(format!(
                "expected a whole number, found {}",
                value.type_name()
            ))),
        }
    }
}

impl TryFrom<JsonhValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: JsonhValue) -> crate::Result<Self> {
        value.as_f64().ok_or_else(|| {
            crate::Error::custom(format!("expected a number, found {}", value.type_name()))
        })
    }
}

impl TryFrom<JsonhValue> for bool {
    type Error = crate::Error;

    fn try_from(value: JsonhValue) -> crate::Result<Self> {
        value.as_bool().ok_or_else(|| {
            crate::Error::custom(format!("expected a boolean, found {}", value.type_name()))
        })
    }
}

impl TryFrom<JsonhValue> for String {
    type Error = crate::Error;

    fn try_from(value: JsonhValue) -> crate::Result<Self> {
        match value {
            JsonhValue::String(s) => Ok(s),
            other => Err(crate::Error::custom(format!(
                "expected a string, found {}",
                other.type_name()
            ))),
        }
    }
}

// Every primitive number becomes a double, matching what the parser
// produces with default options.
macro_rules! from_primitive_number {
    ($($primitive:ty),* $(,)?) => {$(
        impl From<$primitive> for Number {
            fn from(value: $primitive) -> Self {
                Number::Float(value as f64)
            }
        }

        impl From<$primitive> for JsonhValue {
            fn from(value: $primitive) -> Self {
                JsonhValue::Number(Number::Float(value as f64))
            }
        }
    )*};
}

from_primitive_number!(i8, i16, i32, i64, u8, u16, u32, f32, f64);

impl From<BigDecimal> for Number {
    fn from(value: BigDecimal) -> Self {
        Number::Big(value)
    }
}

impl From<bool> for JsonhValue {
    fn from(value: bool) -> Self {
        JsonhValue::Bool(value)
    }
}

impl From<BigDecimal> for JsonhValue {
    fn from(value: BigDecimal) -> Self {
        JsonhValue::Number(Number::Big(value))
    }
}

impl From<String> for JsonhValue {
    fn from(value: String) -> Self {
        JsonhValue::String(value)
    }
}

impl From<&str> for JsonhValue {
    fn from(value: &str) -> Self {
        JsonhValue::String(value.to_string())
    }
}

impl From<Vec<JsonhValue>> for JsonhValue {
    fn from(value: Vec<JsonhValue>) -> Self {
        JsonhValue::Array(value)
    }
}

impl From<JsonhMap> for JsonhValue {
    fn from(value: JsonhMap) -> Self {
        JsonhValue::Object(value)
    }
}
