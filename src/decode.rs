//! Decoding byte input into characters.
//!
//! JSONH sources may arrive as raw bytes. When the caller does not name an
//! encoding, the leading bytes are sniffed for a byte order mark; without
//! one the input is taken as UTF-8. A decoded BOM survives as U+FEFF,
//! which the tokenizer treats as whitespace.

use crate::error::{Error, Result};

/// The character encodings recognized for byte input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

impl Encoding {
    /// Determines the encoding of `bytes` from its BOM, defaulting to UTF-8.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonh::Encoding;
    ///
    /// assert_eq!(Encoding::detect(b"\xff\xfe\x31\x00"), Encoding::Utf16Le);
    /// assert_eq!(Encoding::detect(b"[1]"), Encoding::Utf8);
    /// ```
    #[must_use]
    pub fn detect(bytes: &[u8]) -> Encoding {
        // The UTF-32 LE mark starts with the UTF-16 LE mark; check the
        // longer one first.
        if bytes.starts_with(&[0x00, 0x00, 0xFE, 0xFF]) {
            Encoding::Utf32Be
        } else if bytes.starts_with(&[0xFF, 0xFE, 0x00, 0x00]) {
            Encoding::Utf32Le
        } else if bytes.starts_with(&[0xFE, 0xFF]) {
            Encoding::Utf16Be
        } else if bytes.starts_with(&[0xFF, 0xFE]) {
            Encoding::Utf16Le
        } else {
            Encoding::Utf8
        }
    }
}

/// Decodes `bytes` with the given encoding, or the sniffed one.
pub(crate) fn decode(bytes: &[u8], encoding: Option<Encoding>) -> Result<String> {
    let encoding = encoding.unwrap_or_else(|| Encoding::detect(bytes));
    match encoding {
        Encoding::Utf8 => std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|e| Error::Decode(format!("invalid UTF-8: {e}"))),
        Encoding::Utf16Le => decode_utf16(bytes, u16::from_le_bytes),
        Encoding::Utf16Be => decode_utf16(bytes, u16::from_be_bytes),
        Encoding::Utf32Le => decode_utf32(bytes, u32::from_le_bytes),
        Encoding::Utf32Be => decode_utf32(bytes, u32::from_be_bytes),
    }
}

fn decode_utf16(bytes: &[u8], combine: fn([u8; 2]) -> u16) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(Error::Decode(
            "UTF-16 input has an odd number of bytes".to_string(),
        ));
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| combine([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|e| Error::Decode(format!("invalid UTF-16: {e}")))
}

fn decode_utf32(bytes: &[u8], combine: fn([u8; 4]) -> u32) -> Result<String> {
    if bytes.len() % 4 != 0 {
        return Err(Error::Decode(
            "UTF-32 input length is not a multiple of four bytes".to_string(),
        ));
    }
    bytes
        .chunks_exact(4)
        .map(|quad| {
            let unit = combine([quad[0], quad[1], quad[2], quad[3]]);
            char::from_u32(unit)
                .ok_or_else(|| Error::Decode(format!("invalid UTF-32 code point {unit:#x}")))
        })
        .collect()
}
