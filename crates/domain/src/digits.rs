// crates/domain/src/digits.rs
//! Numeric values of Unicode decimal digits (`\p{Nd}`).
//!
//! Unicode assigns every decimal digit set as ten contiguous code points,
//! zero first, so a digit's value is its offset from the start of its run
//! of digits, modulo ten.

use std::sync::OnceLock;

use regex::Regex;

fn digit_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d$").expect("digit pattern is a valid regex"))
}

/// Whether `c` is a Unicode decimal digit, the same class `\d` matches.
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || digit_regex().is_match(c.encode_utf8(&mut [0; 4]))
}

/// Value of a decimal digit, or `None` for anything else.
pub fn decimal_value(c: char) -> Option<u32> {
    if let Some(value) = c.to_digit(10) {
        return Some(value);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let code = u32::from(c);
    let mut start = code;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((code - start) % 10)
}

/// Reads a run of decimal digits in any script as a `u64`.
///
/// `None` if `digits` is empty, holds a non-digit, or does not fit.
pub fn parse_decimal(digits: &str) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0u64, |acc, c| {
        let value = decimal_value(c)?;
        acc.checked_mul(10)?.checked_add(u64::from(value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_digits() {
        assert_eq!(decimal_value('0'), Some(0));
        assert_eq!(decimal_value('9'), Some(9));
        assert_eq!(decimal_value('a'), None);
    }

    #[test]
    fn other_scripts() {
        assert_eq!(decimal_value('\u{0660}'), Some(0));
        assert_eq!(decimal_value('\u{0667}'), Some(7));
        assert_eq!(decimal_value('\u{FF15}'), Some(5));
        assert_eq!(decimal_value('\u{0E59}'), Some(9));
    }

    #[test]
    fn adjacent_digit_sets() {
        // Mathematical bold, double-struck, sans-serif ... sit back to back
        assert_eq!(decimal_value('\u{1D7CE}'), Some(0));
        assert_eq!(decimal_value('\u{1D7D8}'), Some(0));
        assert_eq!(decimal_value('\u{1D7E3}'), Some(1));
        assert_eq!(decimal_value('\u{1D7FF}'), Some(9));
    }

    #[test]
    fn numeric_but_not_decimal() {
        assert_eq!(decimal_value('\u{00B2}'), None);
        assert_eq!(decimal_value('\u{2160}'), None);
        assert_eq!(decimal_value('\u{00BD}'), None);
    }

    #[test]
    fn parses_mixed_scripts() {
        assert_eq!(parse_decimal("2\u{0661}"), Some(21));
        assert_eq!(parse_decimal("\u{FF10}\u{FF14}"), Some(4));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("1x"), None);
    }

    #[test]
    fn overflow_is_none() {
        assert_eq!(parse_decimal("18446744073709551615"), Some(u64::MAX));
        assert_eq!(parse_decimal("18446744073709551616"), None);
    }
}
