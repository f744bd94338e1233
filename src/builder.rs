//! Assembles the token stream into a value tree.
//!
//! The builder keeps an explicit stack of open containers instead of
//! recursing: each frame owns the container being filled and, for
//! objects, the property name waiting for its value. Comments are
//! dropped, duplicate property names overwrite, and the root value is
//! returned as soon as its closing token arrives.

use crate::error::{Error, Result};
use crate::map::JsonhMap;
use crate::number;
use crate::token::TokenKind;
use crate::tokenizer::Tokenizer;
use crate::value::{JsonhValue, Number};

enum Frame {
    Object {
        map: JsonhMap,
        pending: Option<String>,
    },
    Array {
        items: Vec<JsonhValue>,
    },
}

impl<I: Iterator<Item = char>> Tokenizer<I> {
    /// Drives this tokenizer to completion and builds the root element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonh::{JsonhOptions, Tokenizer};
    ///
    /// // any character iterator works as a source
    /// let chars = "a: 1".chars().filter(|c| *c != '\u{0}');
    /// let mut tokenizer = Tokenizer::from_chars(chars, JsonhOptions::new());
    /// let value = tokenizer.parse_element().unwrap();
    /// assert!(value.is_object());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the remaining input is not a valid element.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn parse_element(&mut self) -> Result<JsonhValue> {
        build_element(self)
    }
}

/// Drives the tokenizer to completion and returns the root element.
pub(crate) fn build_element<I: Iterator<Item = char>>(
    tokenizer: &mut Tokenizer<I>,
) -> Result<JsonhValue> {
    let mut stack: Vec<Frame> = Vec::new();

    while let Some(result) = tokenizer.next_token() {
        let token = result?;
        let leaf = match token.kind {
            TokenKind::Comment => continue,
            TokenKind::Null => JsonhValue::Null,
            TokenKind::True => JsonhValue::Bool(true),
            TokenKind::False => JsonhValue::Bool(false),
            TokenKind::String => JsonhValue::String(token.value),
            TokenKind::Number => {
                number_value(&token.value, tokenizer.options().big_numbers)?
            }
            TokenKind::PropertyName => {
                match stack.last_mut() {
                    Some(Frame::Object { pending, .. }) => *pending = Some(token.value),
                    _ => return Err(Error::custom("property name outside an object")),
                }
                continue;
            }
            TokenKind::StartObject => {
                stack.push(Frame::Object {
                    map: JsonhMap::new(),
                    pending: None,
                });
                continue;
            }
            TokenKind::StartArray => {
                stack.push(Frame::Array { items: Vec::new() });
                continue;
            }
            TokenKind::EndObject | TokenKind::EndArray => {
                // A frame closing with a pending name means the input was
                // truncated after `name:`; the dangling name is dropped.
                let value = match stack.pop() {
                    Some(Frame::Object { map, .. }) => JsonhValue::Object(map),
                    Some(Frame::Array { items }) => JsonhValue::Array(items),
                    None => return Err(Error::custom("container end without a start")),
                };
                if let Some(root) = submit(&mut stack, value)? {
                    return finish_root(tokenizer, root);
                }
                continue;
            }
        };
        if let Some(root) = submit(&mut stack, leaf)? {
            return finish_root(tokenizer, root);
        }
    }

    Err(Error::unexpected_eof(Tokenizer::position(tokenizer), "an element"))
}

/// Places a finished value: into the open container, or out as the root.
fn submit(stack: &mut Vec<Frame>, value: JsonhValue) -> Result<Option<JsonhValue>> {
    match stack.last_mut() {
        None => Ok(Some(value)),
        Some(Frame::Array { items }) => {
            items.push(value);
            Ok(None)
        }
        Some(Frame::Object { map, pending }) => {
            let Some(name) = pending.take() else {
                return Err(Error::custom("value without a property name"));
            };
            map.insert(name, value);
            Ok(None)
        }
    }
}

fn finish_root<I: Iterator<Item = char>>(
    tokenizer: &mut Tokenizer<I>,
    root: JsonhValue,
) -> Result<JsonhValue> {
    if tokenizer.options().parse_single_element {
        tokenizer.read_end_of_elements()?;
    }
    Ok(root)
}

fn number_value(text: &str, big_numbers: bool) -> Result<JsonhValue> {
    if big_numbers {
        Ok(JsonhValue::Number(Number::Big(number::parse(text)?)))
    } else {
        Ok(JsonhValue::Number(Number::Float(number::parse_f64(text)?)))
    }
}
