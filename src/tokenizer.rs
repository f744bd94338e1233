//! The streaming JSONH tokenizer.
//!
//! [`Tokenizer`] lazily turns a character source into a sequence of
//! [`Token`]s, pulled one at a time through [`Tokenizer::next_token`] or
//! the [`Iterator`] impl. The first error ends the stream; no recovery is
//! attempted.
//!
//! Containers are tracked with an explicit frame stack rather than
//! recursion, so arbitrarily nested input is bounded only by the
//! configured `max_depth`.
//!
//! ## Examples
//!
//! ```rust
//! use serde_jsonh::{tokenize, TokenKind};
//!
//! let kinds: Vec<TokenKind> = tokenize("{\n  \"a\": \"b\"\n}")
//!     .map(|t| t.unwrap().kind)
//!     .collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::StartObject,
//!         TokenKind::PropertyName,
//!         TokenKind::String,
//!         TokenKind::EndObject,
//!     ]
//! );
//! ```

use crate::cursor::{is_newline, is_whitespace, Cursor};
use crate::decode::{decode, Encoding};
use crate::error::{Error, Result};
use crate::options::{JsonhOptions, JsonhVersion};
use crate::token::{Token, TokenKind};
use std::collections::VecDeque;

/// Characters that end quoteless strings and property names.
const RESERVED_CHARS_V1: [char; 11] = [
    '\\', ',', ':', '[', ']', '{', '}', '/', '#', '"', '\'',
];
const RESERVED_CHARS_V2: [char; 12] = [
    '\\', ',', ':', '[', ']', '{', '}', '/', '#', '"', '\'', '@',
];

/// An open container being tokenized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Frame {
    Object,
    Array,
    /// A root object whose braces are omitted; closed by end of input.
    Braceless,
}

/// What the machine does next once the token queue drains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Read comments/whitespace, then one element (container or primitive).
    BeginElement,
    /// The top frame decides: next member, or close.
    InContainer,
    /// An element inside the top frame just finished: trailing
    /// comments/whitespace and an optional comma.
    AfterValue,
    Done,
    Failed,
}

/// A pull-based tokenizer over any character source.
pub struct Tokenizer<I: Iterator<Item = char>> {
    cursor: Cursor<I>,
    options: JsonhOptions,
    depth: usize,
    frames: Vec<Frame>,
    queue: VecDeque<Token>,
    state: State,
    failure: Option<Error>,
}

impl<'a> Tokenizer<std::str::Chars<'a>> {
    /// Constructs a tokenizer reading from a string slice.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(source: &'a str, options: JsonhOptions) -> Self {
        Self::from_chars(source.chars(), options)
    }
}

impl Tokenizer<std::vec::IntoIter<char>> {
    /// Constructs a tokenizer reading from bytes.
    ///
    /// With no explicit `encoding` the bytes are sniffed for a BOM
    /// (UTF-8, UTF-16 LE/BE, UTF-32 LE/BE) and default to UTF-8.
    pub fn from_slice(
        bytes: &[u8],
        encoding: Option<Encoding>,
        options: JsonhOptions,
    ) -> Result<Self> {
        let text = decode(bytes, encoding)?;
        let chars: Vec<char> = text.chars().collect();
        Ok(Self::from_chars(chars.into_iter(), options))
    }
}

impl<I: Iterator<Item = char>> Tokenizer<I> {
    /// Constructs a tokenizer reading from an arbitrary character iterator.
    pub fn from_chars(source: I, options: JsonhOptions) -> Self {
        Tokenizer {
            cursor: Cursor::new(source),
            options,
            depth: 0,
            frames: Vec::new(),
            queue: VecDeque::new(),
            state: State::BeginElement,
            failure: None,
        }
    }

    /// The options this tokenizer was created with.
    pub fn options(&self) -> &JsonhOptions {
        &self.options
    }

    /// The number of characters consumed from the source so far.
    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    /// Produces the next token of the root element, or the terminal error.
    ///
    /// Returns `None` once the element is complete or an error has been
    /// delivered.
    pub fn next_token(&mut self) -> Option<Result<Token>> {
        loop {
            if let Some(token) = self.queue.pop_front() {
                return Some(Ok(token));
            }
            if let Some(error) = self.failure.take() {
                self.state = State::Failed;
                return Some(Err(error));
            }
            if matches!(self.state, State::Done | State::Failed) {
                return None;
            }
            if let Err(error) = self.step() {
                // Tokens queued before the failure still go out first.
                self.failure = Some(error);
            }
        }
    }

    /// Skips whitespace and reports whether any non-whitespace remains.
    pub fn has_token(&mut self) -> bool {
        self.read_whitespace();
        self.cursor.peek().is_some()
    }

    /// Drains trailing comments and whitespace, then requires end of input.
    ///
    /// Used in single-element mode to reject content after the root
    /// element. Returns the trailing comment tokens.
    pub fn read_end_of_elements(&mut self) -> Result<Vec<Token>> {
        let mut comments = Vec::new();
        self.read_comments_and_whitespace(&mut comments)?;
        if self.cursor.peek().is_some() {
            return Err(Error::ExpectedSingleElement {
                position: self.cursor.position(),
            });
        }
        Ok(comments)
    }

    /// Advances the token stream until a property name at depth 1 equals
    /// `property_name`.
    ///
    /// Returns `true` when found; `false` at end of input or on error.
    /// Values are never materialized.
    pub fn find_property_value(&mut self, property_name: &str) -> bool {
        let mut current_depth: i64 = 0;
        while let Some(result) = self.next_token() {
            let Ok(token) = result else {
                return false;
            };
            match token.kind {
                TokenKind::StartObject | TokenKind::StartArray => current_depth += 1,
                TokenKind::EndObject | TokenKind::EndArray => current_depth -= 1,
                TokenKind::PropertyName => {
                    if current_depth == 1 && token.value == property_name {
                        return true;
                    }
                }
                _ => {}
            }
        }
        false
    }

    fn reserved_chars(&self) -> &'static [char] {
        if self.options.supports(JsonhVersion::V2) {
            &RESERVED_CHARS_V2
        } else {
            &RESERVED_CHARS_V1
        }
    }

    fn step(&mut self) -> Result<()> {
        match self.state {
            State::BeginElement => self.begin_element(),
            State::InContainer => self.continue_container(),
            State::AfterValue => self.after_value(),
            State::Done | State::Failed => Ok(()),
        }
    }

    fn begin_element(&mut self) -> Result<()> {
        self.skip_comments_and_whitespace()?;
        let Some(next) = self.cursor.peek() else {
            if !self.frames.is_empty() && self.options.incomplete_inputs {
                // The open container closes itself on the next step.
                self.state = State::InContainer;
                return Ok(());
            }
            return Err(Error::unexpected_eof(self.cursor.position(), "an element"));
        };
        match next {
            '{' => {
                self.cursor.read();
                self.open_container(Frame::Object, TokenKind::StartObject)
            }
            '[' => {
                self.cursor.read();
                self.open_container(Frame::Array, TokenKind::StartArray)
            }
            _ => {
                let primitive = self.read_primitive_element()?;
                self.finish_primitive(primitive)
            }
        }
    }

    fn open_container(&mut self, frame: Frame, kind: TokenKind) -> Result<()> {
        if self.depth + 1 > self.options.max_depth {
            return Err(Error::depth_exceeded(
                self.cursor.position(),
                self.options.max_depth,
            ));
        }
        self.depth += 1;
        self.queue.push_back(Token::empty(kind));
        self.frames.push(frame);
        self.state = State::InContainer;
        Ok(())
    }

    fn close_container(&mut self, kind: TokenKind) {
        self.queue.push_back(Token::empty(kind));
        self.depth = self.depth.saturating_sub(1);
        self.frames.pop();
        self.element_finished();
    }

    fn element_finished(&mut self) {
        if self.frames.is_empty() {
            self.state = State::Done;
        } else {
            self.state = State::AfterValue;
        }
    }

    fn after_value(&mut self) -> Result<()> {
        self.skip_comments_and_whitespace()?;
        self.cursor.read_if(',');
        self.state = State::InContainer;
        Ok(())
    }

    fn continue_container(&mut self) -> Result<()> {
        self.skip_comments_and_whitespace()?;
        let Some(&frame) = self.frames.last() else {
            return Err(Error::custom("no container is open"));
        };
        match frame {
            Frame::Object => match self.cursor.peek() {
                None => {
                    if self.options.incomplete_inputs {
                        self.close_container(TokenKind::EndObject);
                        Ok(())
                    } else {
                        Err(Error::unexpected_eof(
                            self.cursor.position(),
                            "`}` to end object",
                        ))
                    }
                }
                Some('}') => {
                    self.cursor.read();
                    self.close_container(TokenKind::EndObject);
                    Ok(())
                }
                Some(_) => self.begin_property(),
            },
            Frame::Braceless => match self.cursor.peek() {
                None => {
                    self.close_container(TokenKind::EndObject);
                    Ok(())
                }
                Some(_) => self.begin_property(),
            },
            Frame::Array => match self.cursor.peek() {
                None => {
                    if self.options.incomplete_inputs {
                        self.close_container(TokenKind::EndArray);
                        Ok(())
                    } else {
                        Err(Error::unexpected_eof(
                            self.cursor.position(),
                            "`]` to end array",
                        ))
                    }
                }
                Some(']') => {
                    self.cursor.read();
                    self.close_container(TokenKind::EndArray);
                    Ok(())
                }
                Some(_) => {
                    self.state = State::BeginElement;
                    Ok(())
                }
            },
        }
    }

    /// Property name in any string form, comments, then the `:` separator.
    fn begin_property(&mut self) -> Result<()> {
        let name = self.read_string()?;
        self.skip_comments_and_whitespace()?;
        if !self.cursor.read_if(':') {
            return Err(Error::unexpected_char(
                self.cursor.position(),
                "expected `:` after property name in object",
            ));
        }
        self.queue
            .push_back(Token::new(TokenKind::PropertyName, name.value));
        self.state = State::BeginElement;
        Ok(())
    }

    /// A primitive has been read; decide whether it was actually the first
    /// property name of a braceless root object.
    fn finish_primitive(&mut self, primitive: Token) -> Result<()> {
        let mut buffered = Vec::new();
        self.read_comments_and_whitespace(&mut buffered)?;
        if self.cursor.read_if(':') {
            if !self.frames.is_empty() {
                return Err(Error::NestedBracelessObject {
                    position: self.cursor.position(),
                });
            }
            self.open_container(Frame::Braceless, TokenKind::StartObject)?;
            self.queue.extend(buffered);
            self.queue
                .push_back(Token::new(TokenKind::PropertyName, primitive.value));
            self.state = State::BeginElement;
        } else {
            self.queue.push_back(primitive);
            self.queue.extend(buffered);
            self.element_finished();
        }
        Ok(())
    }

    fn read_primitive_element(&mut self) -> Result<Token> {
        let Some(next) = self.cursor.peek() else {
            return Err(Error::unexpected_eof(self.cursor.position(), "an element"));
        };
        if matches!(next, '0'..='9' | '-' | '+' | '.') {
            self.read_number_or_quoteless_string()
        } else if matches!(next, '"' | '\'')
            || (self.options.supports(JsonhVersion::V2) && next == '@')
        {
            self.read_string()
        } else {
            self.read_quoteless_string(String::new(), false)
        }
    }

    fn read_whitespace(&mut self) {
        while let Some(next) = self.cursor.peek() {
            if !is_whitespace(next) {
                return;
            }
            self.cursor.read();
        }
    }

    fn skip_comments_and_whitespace(&mut self) -> Result<()> {
        loop {
            self.read_whitespace();
            if matches!(self.cursor.peek(), Some('#') | Some('/')) {
                let comment = self.read_comment()?;
                self.queue.push_back(comment);
            } else {
                return Ok(());
            }
        }
    }

    fn read_comments_and_whitespace(&mut self, out: &mut Vec<Token>) -> Result<()> {
        loop {
            self.read_whitespace();
            if matches!(self.cursor.peek(), Some('#') | Some('/')) {
                out.push(self.read_comment()?);
            } else {
                return Ok(());
            }
        }
    }

    fn read_comment(&mut self) -> Result<Token> {
        let mut block_comment = false;
        let mut open_equals = 0usize;

        if self.cursor.read_if('#') {
            // hash comment
        } else if self.cursor.read_if('/') {
            if self.cursor.read_if('/') {
                // line comment
            } else if self.cursor.read_if('*') {
                block_comment = true;
            } else if self.options.supports(JsonhVersion::V2) && self.cursor.peek() == Some('=') {
                block_comment = true;
                while self.cursor.read_if('=') {
                    open_equals += 1;
                }
                if !self.cursor.read_if('*') {
                    return Err(Error::unexpected_char(
                        self.cursor.position(),
                        "expected `*` to open a nestable block comment",
                    ));
                }
            } else {
                return Err(Error::unexpected_char(
                    self.cursor.position(),
                    "`/` does not start a comment",
                ));
            }
        } else {
            return Err(Error::unexpected_char(
                self.cursor.position(),
                "expected a comment",
            ));
        }

        let mut comment = String::new();
        loop {
            let next = self.cursor.read();
            if block_comment {
                let Some(next) = next else {
                    return Err(Error::unexpected_eof(
                        self.cursor.position(),
                        "end of block comment",
                    ));
                };
                if next == '*' {
                    if self.options.supports(JsonhVersion::V2) {
                        // The closer must repeat the opener's `=` count
                        // exactly; a shorter run is comment body.
                        let mut close_equals = 0usize;
                        while close_equals < open_equals && self.cursor.read_if('=') {
                            close_equals += 1;
                        }
                        if close_equals < open_equals || self.cursor.peek() != Some('/') {
                            comment.push('*');
                            for _ in 0..close_equals {
                                comment.push('=');
                            }
                            continue;
                        }
                    }
                    if self.cursor.read_if('/') {
                        return Ok(Token::new(TokenKind::Comment, comment));
                    }
                    comment.push('*');
                    continue;
                }
                comment.push(next);
            } else {
                match next {
                    None => return Ok(Token::new(TokenKind::Comment, comment)),
                    Some(next) if is_newline(next) => {
                        return Ok(Token::new(TokenKind::Comment, comment))
                    }
                    Some(next) => comment.push(next),
                }
            }
        }
    }

    fn read_string(&mut self) -> Result<Token> {
        let mut is_verbatim = false;
        if self.options.supports(JsonhVersion::V2) && self.cursor.read_if('@') {
            is_verbatim = true;
            match self.cursor.peek() {
                None => {
                    return Err(Error::unexpected_eof(
                        self.cursor.position(),
                        "a string after the verbatim `@`",
                    ))
                }
                Some(next) if matches!(next, '#' | '/') || is_whitespace(next) => {
                    return Err(Error::unexpected_char(
                        self.cursor.position(),
                        "a string must immediately follow the verbatim `@`",
                    ));
                }
                Some(_) => {}
            }
        }

        let Some(quote) = self.cursor.read_any(&['"', '\'']) else {
            return self.read_quoteless_string(String::new(), is_verbatim);
        };

        let mut open_quotes = 1usize;
        while self.cursor.read_if(quote) {
            open_quotes += 1;
        }

        // Two consecutive quotes is the empty string, not a multi-quote.
        if open_quotes == 2 {
            return Ok(Token::new(TokenKind::String, String::new()));
        }

        let mut close_quotes = 0usize;
        let mut string = String::new();
        loop {
            let Some(next) = self.cursor.read() else {
                return Err(Error::unexpected_eof(
                    self.cursor.position(),
                    "end of string",
                ));
            };

            // A closing run that fell short is part of the string body.
            if next != quote {
                for _ in 0..close_quotes {
                    string.push(quote);
                }
                close_quotes = 0;
            }

            if next == quote {
                close_quotes += 1;
                if close_quotes == open_quotes {
                    break;
                }
            } else if next == '\\' {
                if is_verbatim {
                    string.push(next);
                } else if let Some(escaped) = self.read_escape_sequence(None)? {
                    string.push(escaped);
                }
            } else {
                string.push(next);
            }
        }

        if open_quotes > 1 {
            string = strip_multiline_indentation(&string);
        }
        Ok(Token::new(TokenKind::String, string))
    }

    fn read_quoteless_string(&mut self, initial: String, is_verbatim: bool) -> Result<Token> {
        let mut named_literal_possible = !is_verbatim;
        let mut string = initial;

        loop {
            let Some(next) = self.cursor.peek() else {
                break;
            };
            if next == '\\' {
                self.cursor.read();
                if is_verbatim {
                    string.push(next);
                } else if let Some(escaped) = self.read_escape_sequence(None)? {
                    string.push(escaped);
                }
                named_literal_possible = false;
            } else if self.reserved_chars().contains(&next) || is_newline(next) {
                break;
            } else {
                self.cursor.read();
                string.push(next);
            }
        }

        if string.is_empty() {
            return Err(Error::unexpected_char(
                self.cursor.position(),
                "empty quoteless string",
            ));
        }

        let string = string.trim_matches(|c: char| is_whitespace(c)).to_string();

        // An unescaped `null`/`true`/`false` is the literal, not a string.
        if named_literal_possible {
            match string.as_str() {
                "null" => return Ok(Token::new(TokenKind::Null, "null")),
                "true" => return Ok(Token::new(TokenKind::True, "true")),
                "false" => return Ok(Token::new(TokenKind::False, "false")),
                _ => {}
            }
        }
        Ok(Token::new(TokenKind::String, string))
    }

    /// After a complete number: whitespace that stays on the line followed
    /// by `\` or a non-reserved character means the "number" keeps going
    /// as a quoteless string.
    fn detect_quoteless_string(&mut self, whitespace: &mut String) -> bool {
        loop {
            let Some(next) = self.cursor.peek() else {
                break;
            };
            if is_newline(next) {
                return false;
            }
            if !is_whitespace(next) {
                break;
            }
            whitespace.push(next);
            self.cursor.read();
        }
        match self.cursor.peek() {
            Some(next) => next == '\\' || !self.reserved_chars().contains(&next),
            None => false,
        }
    }

    fn read_number_or_quoteless_string(&mut self) -> Result<Token> {
        let mut number = String::new();
        match self.read_number(&mut number) {
            Ok(token) => {
                let mut whitespace = String::new();
                if self.detect_quoteless_string(&mut whitespace) {
                    let mut prefix = token.value;
                    prefix.push_str(&whitespace);
                    self.read_quoteless_string(prefix, false)
                } else {
                    Ok(token)
                }
            }
            // Whatever accumulated seeds a quoteless string instead.
            Err(_) => self.read_quoteless_string(number, false),
        }
    }

    fn read_number(&mut self, number: &mut String) -> Result<Token> {
        if let Some(sign) = self.cursor.read_any(&['-', '+']) {
            number.push(sign);
        }

        let mut base_digits: &'static str = "0123456789";
        let mut has_base_prefix = false;
        let mut has_leading_zero = false;
        if self.cursor.read_if('0') {
            number.push('0');
            has_leading_zero = true;

            if let Some(base_char) = self.cursor.read_any(&['x', 'X']) {
                number.push(base_char);
                base_digits = "0123456789abcdef";
                has_base_prefix = true;
                has_leading_zero = false;
            } else if let Some(base_char) = self.cursor.read_any(&['b', 'B']) {
                number.push(base_char);
                base_digits = "01";
                has_base_prefix = true;
                has_leading_zero = false;
            } else if let Some(base_char) = self.cursor.read_any(&['o', 'O']) {
                number.push(base_char);
                base_digits = "01234567";
                has_base_prefix = true;
                has_leading_zero = false;
            }
        }

        let mantissa_start = number.len();
        self.read_digits(number, base_digits, has_base_prefix, has_leading_zero)?;

        if matches!(number.chars().last(), Some('e') | Some('E')) {
            // Under a hex base `e` was consumed as a digit; a sign right
            // after it turns it into the exponent marker instead.
            if let Some(exponent_sign) = self.cursor.read_any(&['-', '+']) {
                number.push(exponent_sign);

                if has_base_prefix && number.len() == mantissa_start + 2 {
                    return Err(Error::unexpected_char(
                        self.cursor.position(),
                        "missing digit between base prefix and exponent",
                    ));
                }
                self.read_digits(number, base_digits, false, false)?;
            }
        } else if let Some(exponent_char) = self.cursor.read_any(&['e', 'E']) {
            number.push(exponent_char);
            if let Some(exponent_sign) = self.cursor.read_any(&['-', '+']) {
                number.push(exponent_sign);
            }
            self.read_digits(number, base_digits, false, false)?;
        }

        Ok(Token::new(TokenKind::Number, number.clone()))
    }

    fn read_digits(
        &mut self,
        number: &mut String,
        base_digits: &str,
        has_base_prefix: bool,
        has_leading_zero: bool,
    ) -> Result<()> {
        if !has_base_prefix && !has_leading_zero && self.cursor.peek() == Some('_') {
            return Err(Error::unexpected_char(
                self.cursor.position(),
                "leading `_` in number",
            ));
        }

        let mut is_fraction = false;
        let mut is_empty = !has_leading_zero;

        loop {
            let Some(next) = self.cursor.peek() else {
                break;
            };
            if base_digits.contains(next.to_ascii_lowercase()) {
                self.cursor.read();
                number.push(next);
                is_empty = false;
            } else if next == '.' {
                if number.ends_with('_') {
                    return Err(Error::unexpected_char(
                        self.cursor.position(),
                        "`.` must not follow `_` in number",
                    ));
                }
                self.cursor.read();
                number.push(next);
                is_empty = false;
                if is_fraction {
                    return Err(Error::unexpected_char(
                        self.cursor.position(),
                        "duplicate `.` in number",
                    ));
                }
                is_fraction = true;
            } else if next == '_' {
                if number.ends_with('.') {
                    return Err(Error::unexpected_char(
                        self.cursor.position(),
                        "`_` must not follow `.` in number",
                    ));
                }
                self.cursor.read();
                number.push(next);
                is_empty = false;
            } else {
                break;
            }
        }

        if is_empty {
            return Err(Error::unexpected_char(
                self.cursor.position(),
                "empty number",
            ));
        }
        if !number.chars().any(|c| !matches!(c, '.' | '-' | '+' | '_')) {
            return Err(Error::unexpected_char(
                self.cursor.position(),
                "number must have at least one digit",
            ));
        }
        if number.ends_with('_') {
            return Err(Error::unexpected_char(
                self.cursor.position(),
                "trailing `_` in number",
            ));
        }
        Ok(())
    }

    fn read_escape_sequence(&mut self, high_surrogate: Option<u32>) -> Result<Option<char>> {
        let Some(escape_char) = self.cursor.read() else {
            return Err(Error::unexpected_eof(
                self.cursor.position(),
                "an escape sequence",
            ));
        };

        if high_surrogate.is_some() && !matches!(escape_char, 'u' | 'x' | 'U') {
            return Err(Error::malformed_escape(
                self.cursor.position(),
                "expected a low surrogate after a high surrogate",
            ));
        }

        match escape_char {
            '\\' => Ok(Some('\\')),
            'b' => Ok(Some('\u{0008}')),
            'f' => Ok(Some('\u{000C}')),
            'n' => Ok(Some('\n')),
            'r' => Ok(Some('\r')),
            't' => Ok(Some('\t')),
            'v' => Ok(Some('\u{000B}')),
            '0' => Ok(Some('\0')),
            'a' => Ok(Some('\u{0007}')),
            'e' => Ok(Some('\u{001B}')),
            'u' => self.read_hex_escape(4, high_surrogate),
            'x' => self.read_hex_escape(2, high_surrogate),
            'U' => self.read_hex_escape(8, high_surrogate),
            next if is_newline(next) => {
                // An escaped newline is removed; CR LF counts as one.
                if next == '\r' {
                    self.cursor.read_if('\n');
                }
                Ok(None)
            }
            other => Ok(Some(other)),
        }
    }

    fn read_hex_sequence(&mut self, length: usize) -> Result<u32> {
        let mut value: u32 = 0;
        for _ in 0..length {
            let Some(digit) = self.cursor.read().and_then(|c| c.to_digit(16)) else {
                return Err(Error::malformed_escape(
                    self.cursor.position(),
                    "incorrect number of hexadecimal digits in escape sequence",
                ));
            };
            value = value * 16 + digit;
        }
        Ok(value)
    }

    fn read_hex_escape(&mut self, length: usize, high_surrogate: Option<u32>) -> Result<Option<char>> {
        let code_point = self.read_hex_sequence(length)?;

        if let Some(high) = high_surrogate {
            let combined = combine_surrogates(high, code_point).ok_or_else(|| {
                Error::malformed_escape(self.cursor.position(), "surrogate out of range")
            })?;
            return match char::from_u32(combined) {
                Some(combined_char) => Ok(Some(combined_char)),
                None => Err(Error::malformed_escape(
                    self.cursor.position(),
                    "escape does not encode a valid code point",
                )),
            };
        }

        // A high surrogate immediately followed by another escape is the
        // first half of a UTF-16 pair.
        if is_high_surrogate(code_point) && self.cursor.read_if('\\') {
            return self.read_escape_sequence(Some(code_point));
        }
        match char::from_u32(code_point) {
            Some(code_point_char) => Ok(Some(code_point_char)),
            None => Err(Error::malformed_escape(
                self.cursor.position(),
                "escape does not encode a valid code point",
            )),
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for Tokenizer<I> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Strips the shared indentation of a multi-quoted string body.
///
/// Five passes: find the leading whitespace-then-newline head, find the
/// trailing newline-then-whitespace tail and its width `W`, strip the
/// tail, strip the head, then remove up to `W` leading whitespace
/// characters from every remaining line. If the head or tail is absent
/// the body is returned untouched.
fn strip_multiline_indentation(body: &str) -> String {
    let mut chars: Vec<char> = body.chars().collect();

    // Pass 1: leading whitespace up to and including the first newline.
    let mut head_len = None;
    let mut index = 0;
    while index < chars.len() {
        let next = chars[index];
        if is_newline(next) {
            if next == '\r' && chars.get(index + 1) == Some(&'\n') {
                index += 1;
            }
            head_len = Some(index + 1);
            break;
        }
        if !is_whitespace(next) {
            break;
        }
        index += 1;
    }
    let Some(head_len) = head_len else {
        return body.to_string();
    };

    // Pass 2: the last newline, with only whitespace after it. The
    // whitespace count is the common indent width.
    let mut tail_start = None;
    let mut indent = 0usize;
    let mut index = 0;
    while index < chars.len() {
        let next = chars[index];
        if is_newline(next) {
            tail_start = Some(index);
            indent = 0;
            if next == '\r' && chars.get(index + 1) == Some(&'\n') {
                index += 1;
            }
        } else if is_whitespace(next) {
            indent += 1;
        } else {
            tail_start = None;
            indent = 0;
        }
        index += 1;
    }
    let Some(tail_start) = tail_start else {
        return body.to_string();
    };

    // Pass 3: strip the tail. Pass 4: strip the head, which can overlap
    // the tail when the body is whitespace only.
    chars.truncate(tail_start);
    let head_len = head_len.min(chars.len());
    chars.drain(..head_len);

    // Pass 5: drop up to `indent` leading whitespace chars per line,
    // stopping early at the first non-whitespace character.
    if indent > 0 {
        let mut stripped = Vec::with_capacity(chars.len());
        let mut line_start = true;
        let mut skipped = 0usize;
        for &next in &chars {
            if is_newline(next) {
                stripped.push(next);
                line_start = true;
                skipped = 0;
            } else if line_start && is_whitespace(next) && skipped < indent {
                skipped += 1;
            } else {
                line_start = false;
                stripped.push(next);
            }
        }
        chars = stripped;
    }

    chars.into_iter().collect()
}

const fn combine_surrogates(high: u32, low: u32) -> Option<u32> {
    if !is_high_surrogate(high) || !is_low_surrogate(low) {
        return None;
    }
    Some(0x10000 + (((high - 0xD800) << 10) | (low - 0xDC00)))
}

const fn is_high_surrogate(code_point: u32) -> bool {
    code_point >= 0xD800 && code_point <= 0xDBFF
}

const fn is_low_surrogate(code_point: u32) -> bool {
    code_point >= 0xDC00 && code_point <= 0xDFFF
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        Tokenizer::from_str(source, JsonhOptions::new())
            .map(|result| result.unwrap())
            .collect()
    }

    #[test]
    fn test_basic_object_stream() {
        let tokens = tokens("{\n  \"a\": \"b\"\n}");
        assert_eq!(
            tokens,
            vec![
                Token::empty(TokenKind::StartObject),
                Token::new(TokenKind::PropertyName, "a"),
                Token::new(TokenKind::String, "b"),
                Token::empty(TokenKind::EndObject),
            ]
        );
    }

    #[test]
    fn test_named_literals() {
        assert_eq!(tokens("null")[0].kind, TokenKind::Null);
        assert_eq!(tokens("true")[0].kind, TokenKind::True);
        assert_eq!(tokens("false")[0].kind, TokenKind::False);
        assert_eq!(tokens("nullx")[0].kind, TokenKind::String);
    }

    #[test]
    fn test_comment_payloads() {
        let tokens = tokens("# one\n// two\n/* three */ 0");
        let payloads: Vec<&str> = tokens
            .iter()
            .filter(|t| t.is_comment())
            .map(|t| t.value.as_str())
            .collect();
        assert_eq!(payloads, vec![" one", " two", " three "]);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Number);
    }

    #[test]
    fn test_number_upgrades_to_quoteless() {
        let tokens = tokens("12 monkeys");
        assert_eq!(tokens[0], Token::new(TokenKind::String, "12 monkeys"));
    }

    #[test]
    fn test_stream_ends_after_error() {
        let mut tokenizer = Tokenizer::from_str("[1,", JsonhOptions::new());
        let mut saw_error = false;
        while let Some(result) = tokenizer.next_token() {
            if result.is_err() {
                saw_error = true;
            } else {
                assert!(!saw_error, "token after error");
            }
        }
        assert!(saw_error);
        assert!(tokenizer.next_token().is_none());
    }

    #[test]
    fn test_multiline_indentation_stripping() {
        assert_eq!(strip_multiline_indentation("\n  hello\n  "), "hello");
        assert_eq!(
            strip_multiline_indentation("\n  hello\n    world\n  "),
            "hello\n  world"
        );
        // no trailing newline-then-whitespace: untouched
        assert_eq!(
            strip_multiline_indentation("\n  hello world  "),
            "\n  hello world  "
        );
        // less-indented lines lose only what they have
        assert_eq!(
            strip_multiline_indentation("\n  a\n b\n  "),
            "a\nb"
        );
        // whitespace-only body collapses
        assert_eq!(strip_multiline_indentation("  \n  "), "");
    }

    #[test]
    fn test_find_property_value() {
        let mut tokenizer = Tokenizer::from_str(
            "{ \"a\": 1, \"b\": { \"c\": 2 }, \"c\": 3 }",
            JsonhOptions::new(),
        );
        assert!(tokenizer.find_property_value("c"));
        // the match is the top-level `c`, past the nested object
        let next = tokenizer.next_token().unwrap().unwrap();
        assert_eq!(next, Token::new(TokenKind::Number, "3"));
    }

    #[test]
    fn test_has_token() {
        let mut tokenizer = Tokenizer::from_str("  \n\t ", JsonhOptions::new());
        assert!(!tokenizer.has_token());
        let mut tokenizer = Tokenizer::from_str("  x", JsonhOptions::new());
        assert!(tokenizer.has_token());
    }
}
