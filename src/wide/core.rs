/// Decimal text I/O for 128-bit signed integers.
///
/// The fast integer formatting crates stop at 64 bits, so conversion for
/// the full i128 range is hand-rolled: digit accumulation on the way in,
/// repeated divide-by-10 on the way out. Pure and allocation-light; no
/// state, no concurrency concerns.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WideParseError {
    #[error("empty input")]
    Empty,
    #[error("invalid digit {0:?}")]
    InvalidDigit(char),
    #[error("value out of range for a 128-bit integer")]
    OutOfRange,
}

/// Parse a decimal token, with an optional leading `-`, into an i128.
///
/// The magnitude accumulates in a u128 so the one value whose magnitude
/// exceeds `i128::MAX` (namely `i128::MIN`) still parses without overflow.
pub fn parse_wide(token: &str) -> Result<i128, WideParseError> {
    let bytes = token.as_bytes();
    let (negative, digits) = match bytes.split_first() {
        Some((&b'-', rest)) => (true, rest),
        Some(_) => (false, bytes),
        None => return Err(WideParseError::Empty),
    };
    if digits.is_empty() {
        return Err(WideParseError::Empty);
    }

    let mut magnitude: u128 = 0;
    for &b in digits {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return Err(WideParseError::InvalidDigit(b as char));
        }
        magnitude = magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(d as u128))
            .ok_or(WideParseError::OutOfRange)?;
    }

    let limit = if negative {
        i128::MAX as u128 + 1
    } else {
        i128::MAX as u128
    };
    if magnitude > limit {
        return Err(WideParseError::OutOfRange);
    }
    // For i128::MIN the cast alone already yields the right value and the
    // wrapping negation is a no-op.
    if negative {
        Ok((magnitude as i128).wrapping_neg())
    } else {
        Ok(magnitude as i128)
    }
}

/// Format an i128 as decimal: least-significant digits extracted by
/// modulo/divide, collected in reverse, `-` prefix for negatives.
pub fn format_wide(value: i128) -> String {
    if value == 0 {
        return "0".to_string();
    }
    // unsigned_abs sidesteps the negation overflow at i128::MIN.
    let mut magnitude = value.unsigned_abs();
    let mut digits = String::with_capacity(40);
    while magnitude > 0 {
        digits.push(char::from(b'0' + (magnitude % 10) as u8));
        magnitude /= 10;
    }
    if value < 0 {
        digits.push('-');
    }
    digits.chars().rev().collect()
}
