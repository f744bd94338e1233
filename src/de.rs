//! Deserializing parsed JSONH values into Rust types.
//!
//! [`JsonhValue`] implements `serde::Deserializer` directly, so a parsed
//! tree plugs straight into any `Deserialize` type. Arrays and objects
//! are handed to serde's own `de::value` adapters rather than bespoke
//! access types; the format-specific decisions live in `deserialize_any`
//! (how the two number representations surface) and `deserialize_enum`
//! (which shapes count as a variant).
//!
//! Most users go through [`crate::from_str`], which composes parsing
//! with [`from_value`].
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_jsonh::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Server {
//!     host: String,
//!     port: u16,
//! }
//!
//! let jsonh = "host: localhost\nport: 8080";
//! let server: Server = from_str(jsonh).unwrap();
//! assert_eq!(
//!     server,
//!     Server { host: "localhost".to_string(), port: 8080 }
//! );
//! ```

use crate::value::JsonhValue;
use crate::{Error, Result};
use serde::de::value::{MapAccessDeserializer, MapDeserializer, SeqDeserializer};
use serde::de::IntoDeserializer;
use serde::{de, forward_to_deserialize_any};

/// Deserializes an instance of `T` from an already-parsed value tree.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<'de, T>(value: JsonhValue) -> Result<T>
where
    T: de::Deserialize<'de>,
{
    T::deserialize(value)
}

impl<'de> IntoDeserializer<'de, Error> for JsonhValue {
    type Deserializer = JsonhValue;

    fn into_deserializer(self) -> JsonhValue {
        self
    }
}

impl<'de> de::Deserializer<'de> for JsonhValue {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            JsonhValue::Null => visitor.visit_unit(),
            JsonhValue::Bool(b) => visitor.visit_bool(b),
            // Whole numbers visit as integers so integer-typed fields
            // accept the double-backed representation.
            JsonhValue::Number(n) => match n.as_i64() {
                Some(whole) => visitor.visit_i64(whole),
                None => visitor.visit_f64(n.as_f64()),
            },
            JsonhValue::String(s) => visitor.visit_string(s),
            JsonhValue::Array(items) => {
                visitor.visit_seq(SeqDeserializer::new(items.into_iter()))
            }
            JsonhValue::Object(members) => {
                visitor.visit_map(MapDeserializer::new(members.into_iter()))
            }
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            JsonhValue::Null => visitor.visit_none(),
            value => visitor.visit_some(value),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            // A bare string names a unit variant.
            JsonhValue::String(variant) => visitor.visit_enum(variant.into_deserializer()),
            // Externally tagged: a single member, variant name to content.
            JsonhValue::Object(members) => {
                if members.len() != 1 {
                    return Err(Error::custom(
                        "expected an object with exactly one member for an enum variant",
                    ));
                }
                visitor.visit_enum(MapAccessDeserializer::new(MapDeserializer::new(
                    members.into_iter(),
                )))
            }
            other => Err(Error::custom(format!(
                "cannot deserialize {} as an enum",
                other.type_name()
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}
