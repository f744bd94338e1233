//! Parsing of normalized JSONH number literals.
//!
//! The tokenizer guarantees number tokens are syntactically valid; this
//! module converts the literal text to an exact base-10 value. JSONH
//! numbers may be written in binary, octal, decimal or hexadecimal, may
//! use `_` digit separators, and may carry a fractional part and a
//! fractional exponent:
//!
//! ```rust
//! use bigdecimal::BigDecimal;
//! use std::str::FromStr;
//!
//! let value = serde_jsonh::number::parse("0b101.1").unwrap();
//! assert_eq!(value, BigDecimal::from_str("5.5").unwrap());
//!
//! let value = serde_jsonh::number::parse("0x5e+3").unwrap();
//! assert_eq!(value, BigDecimal::from_str("5000").unwrap());
//! ```
//!
//! The exponent is always a power of ten, whatever the mantissa base.

use crate::error::{Error, Result};
use bigdecimal::{BigDecimal, FromPrimitive, RoundingMode, ToPrimitive, Zero};
use num_bigint::BigInt;
use std::str::FromStr;

/// Decimal places used when expanding a fractional exponent.
pub const DEFAULT_DECIMALS: i64 = 15;

// Materializing 10^n digit-by-digit is linear in n, so gigantic literal
// exponents are rejected instead of expanded.
const MAX_EXPONENT: i64 = 100_000;

/// Parses a normalized JSONH number literal into an exact decimal value,
/// using [`DEFAULT_DECIMALS`] places for fractional-exponent expansion.
pub fn parse(text: &str) -> Result<BigDecimal> {
    parse_with_decimals(text, DEFAULT_DECIMALS)
}

/// Parses a normalized JSONH number literal into an exact decimal value.
///
/// `decimals` bounds the expansion of a fractional exponent; integral
/// exponents are applied exactly.
pub fn parse_with_decimals(text: &str, decimals: i64) -> Result<BigDecimal> {
    let digits: String = text.chars().filter(|&c| c != '_').collect();

    let (negative, rest) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, digits.strip_prefix('+').unwrap_or(digits.as_str())),
    };

    let (base, rest) = strip_base_prefix(rest);
    let (mantissa_text, exponent_text) = split_exponent(rest, base);

    if mantissa_text.is_empty() {
        return Err(Error::number_conversion(&format!(
            "no digits in number `{text}`"
        )));
    }
    let mantissa = parse_fractional(mantissa_text, base)?;

    let mut value = match exponent_text {
        Some(exponent_text) => {
            let (exponent_negative, exponent_digits) = match exponent_text.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, exponent_text.strip_prefix('+').unwrap_or(exponent_text)),
            };
            let mut exponent = parse_fractional(exponent_digits, base)?;
            if exponent_negative {
                exponent = -exponent;
            }
            mantissa * ten_pow(exponent, decimals)?
        }
        None => mantissa,
    };

    if negative {
        value = -value;
    }
    Ok(value)
}

/// Parses a normalized JSONH number literal into an `f64`.
///
/// Plain decimal literals go through the host float parser so the result
/// stays correctly rounded; everything else takes the exact path and is
/// folded afterwards. Overflow saturates to ±∞.
pub(crate) fn parse_f64(text: &str) -> Result<f64> {
    let digits: String = text.chars().filter(|&c| c != '_').collect();
    if let Ok(value) = digits.parse::<f64>() {
        return Ok(value);
    }
    let value = parse(text)?;
    Ok(value.to_f64().unwrap_or(f64::NAN))
}

fn strip_base_prefix(text: &str) -> (u32, &str) {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => return (16, &text[2..]),
            b'b' | b'B' => return (2, &text[2..]),
            b'o' | b'O' => return (8, &text[2..]),
            _ => {}
        }
    }
    (10, text)
}

// Under base 16 `e` is a digit; it only marks an exponent when followed by
// a mandatory sign.
fn split_exponent(text: &str, base: u32) -> (&str, Option<&str>) {
    let bytes = text.as_bytes();
    for (index, &byte) in bytes.iter().enumerate() {
        if byte == b'e' || byte == b'E' {
            if base == 16 && !matches!(bytes.get(index + 1), Some(b'+') | Some(b'-')) {
                continue;
            }
            return (&text[..index], Some(&text[index + 1..]));
        }
    }
    (text, None)
}

/// Parses an unsigned, possibly fractional digit run in the given base.
fn parse_fractional(text: &str, base: u32) -> Result<BigDecimal> {
    if base == 10 {
        // Fast path: the host decimal parser handles the span directly.
        let trimmed = text.trim_end_matches('.');
        let normalized = if trimmed.starts_with('.') {
            format!("0{trimmed}")
        } else if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        };
        return BigDecimal::from_str(&normalized).map_err(|_| {
            Error::number_conversion(&format!("invalid decimal digits in `{text}`"))
        });
    }

    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (text, ""),
    };

    let mut value = BigDecimal::from(parse_radix(whole, base)?);
    if !fraction.is_empty() {
        // Bases 2, 8 and 16 are powers of two, so fraction / base^k equals
        // fraction * 5^m / 10^m with m = k * log2(base). Exact, no division.
        let bits: usize = match base {
            2 => 1,
            8 => 3,
            _ => 4,
        };
        let scale = fraction.len() * bits;
        let mut numerator = parse_radix(fraction, base)?;
        let five = BigInt::from(5);
        for _ in 0..scale {
            numerator = numerator * &five;
        }
        value = value + BigDecimal::new(numerator, scale as i64);
    }
    Ok(value)
}

fn parse_radix(text: &str, base: u32) -> Result<BigInt> {
    if text.is_empty() {
        return Ok(BigInt::from(0));
    }
    BigInt::parse_bytes(text.as_bytes(), base).ok_or_else(|| {
        Error::number_conversion(&format!("invalid digits for base {base} in `{text}`"))
    })
}

/// Raises ten to a possibly fractional decimal exponent.
fn ten_pow(exponent: BigDecimal, decimals: i64) -> Result<BigDecimal> {
    let whole = exponent.with_scale_round(0, RoundingMode::Down);
    let whole_int = whole
        .to_i64()
        .filter(|n| (-MAX_EXPONENT..=MAX_EXPONENT).contains(n))
        .ok_or_else(|| Error::number_conversion("exponent out of range"))?;

    // Scale of -n makes the unit coefficient worth 10^n.
    let mut result = BigDecimal::new(BigInt::from(1), -whole_int);

    let fraction = exponent - whole;
    if !fraction.is_zero() {
        let fraction = fraction
            .to_f64()
            .ok_or_else(|| Error::number_conversion("fractional exponent out of range"))?;
        let factor = BigDecimal::from_f64(10f64.powf(fraction))
            .ok_or_else(|| Error::number_conversion("fractional exponent out of range"))?;
        result = result * factor.with_scale_round(decimals, RoundingMode::Down);
    }
    Ok(result)
}
