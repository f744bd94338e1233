//! JSONH Syntax Reference
//!
//! This module documents the JSONH ("JSON for Humans") syntax as accepted
//! by this library. JSONH is a superset of JSON: every valid JSON document
//! parses to the same result, while human authors gain comments, quoteless
//! strings, multi-line strings, braceless root objects, and richer number
//! literals.
//!
//! # Versions
//!
//! Two revisions exist. V2 (the default) adds the `@` verbatim-string
//! prefix and `/=…*…*=/` nestable block comments, and reserves `@` in
//! quoteless strings. Select a revision with
//! [`JsonhOptions::with_version`](crate::JsonhOptions::with_version).
//!
//! # Comments
//!
//! ```text
//! # a hash comment, to end of line
//! // a line comment, to end of line
//! /* a block comment */
//! /=* a nestable block comment, containing /==* another *==/ *=/   (V2)
//! ```
//!
//! A nestable block comment opens with `/`, one or more `=`, then `*`, and
//! closes only with `*`, exactly the same number of `=`, then `/`. A `*`
//! followed by too few `=`, or by anything other than `/`, stays part of
//! the comment body.
//!
//! # Strings
//!
//! Four forms:
//!
//! | Form | Example |
//! |------|---------|
//! | Double-quoted | `"hello\nworld"` |
//! | Single-quoted | `'hello'` |
//! | Multi-quoted | `"""  indented body  """` (three or more quotes) |
//! | Quoteless | `hello world` |
//!
//! ## Escape sequences
//!
//! ```text
//! \\  \b  \f  \n  \r  \t  \v  \0  \a  \e
//! \xHH       two hex digits
//! \uHHHH     four hex digits (UTF-16 surrogate pairs combine)
//! \UHHHHHHHH eight hex digits
//! \<newline> removed (line continuation)
//! \<other>   that literal character
//! ```
//!
//! ## Multi-quoted strings
//!
//! A run of three or more identical quotes opens a string closed by the
//! same run length. Shared indentation is stripped: a leading
//! whitespace-then-newline, a trailing newline-then-whitespace, and up to
//! the trailing run's width of leading whitespace on every line:
//!
//! ```text
//! greeting: """
//!     hello
//!       world
//!     """
//! ```
//!
//! parses as `"hello\n  world"`.
//!
//! ## Quoteless strings
//!
//! Any run of characters not containing a reserved character
//! (`\ , : [ ] { } / # " '`, plus `@` in V2) or a newline. Surrounding
//! whitespace is trimmed. A quoteless `null`, `true` or `false` with no
//! escapes is the named literal instead of a string.
//!
//! ## Verbatim strings (V2)
//!
//! `@` immediately before any string form disables escape processing and
//! the named-literal upgrade: `@null` is the string `"null"`, and
//! `@"C:\temp"` keeps its backslash.
//!
//! # Numbers
//!
//! ```text
//! 42  -1.5  +.25  1e-3  1.2e3.4
//! 0xDEAD_BEEF  0b1010.1  0o17  0x5e+3
//! ```
//!
//! Bases: `0x` (hex), `0b` (binary), `0o` (octal), all case-insensitive.
//! `_` separates digit groups. Exponents are powers of ten and may be
//! fractional. In hex numbers `e` is a digit; it only marks an exponent
//! when a sign follows (`0x5e3` is 1507, `0x5e+3` is 5000).
//!
//! Anything that fails to parse as a number falls back to a quoteless
//! string: `0xe+2` is the string `"0xe+2"`, and `12 monkeys` is one
//! string.
//!
//! # Objects and arrays
//!
//! ```text
//! {
//!   name: Ada        # commas are optional
//!   scores: [1 2 3]
//! }
//! ```
//!
//! Property names may use any string form. Duplicate names keep the last
//! value.
//!
//! ## Braceless root objects
//!
//! At the document root only, `{` `}` may be omitted; the object is
//! recognized when a primitive is followed by `:`:
//!
//! ```text
//! a: b
//! c: d
//! ```
//!
//! parses as `{"a": "b", "c": "d"}`.
//!
//! # Whitespace and newlines
//!
//! Newlines are LF, CR, U+2028 and U+2029; CR LF counts as one newline.
//! Whitespace is the Unicode whitespace classification plus the BOM.

// This module contains only documentation; no implementation code
