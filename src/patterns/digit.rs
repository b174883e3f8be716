//! Unicode decimal digits, the same set the extraction patterns' `\d` matches.

use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    static ref DECIMAL_DIGIT: Regex = Regex::new(r"^\d$").unwrap();
}

pub fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Value of a decimal digit from any script.
///
/// Decimal digits always come in contiguous, ordered runs of ten, and runs
/// may sit back to back, so the value is the offset from the start of the
/// enclosing block of digits, modulo ten.
pub fn decimal_value(c: char) -> Option<u32> {
    if c.is_ascii_digit() {
        return c.to_digit(10);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((c as u32 - start) % 10)
}

/// Parses an integer the way an integer literal parser would: surrounding
/// whitespace and one leading sign are allowed, digits may be from any
/// script. Overflow is a parse failure.
pub fn parse_int(value: &str) -> Option<i64> {
    let value = value.trim();
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    if digits.is_empty() {
        return None;
    }

    let mut total: i64 = 0;
    for c in digits.chars() {
        let digit = decimal_value(c)?;
        total = total.checked_mul(10)?.checked_add(i64::from(digit))?;
    }
    Some(if negative { -total } else { total })
}
