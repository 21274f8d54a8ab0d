//! String-to-safe-integer parsing.
//!
//! Reproduces `Number.parseInt` semantics: skip leading whitespace, take one
//! optional sign, resolve the radix (with `0x`/`0X` detection), then parse
//! the longest valid digit prefix. Prefix parsing is contractual — trailing
//! garbage is ignored, never an error — so `"3.14"` parses as 3 and
//! `"1e9+7"` as 1.

use crate::integer::SafeInteger;

/// Smallest radix accepted without falling back to detection.
const RADIX_MIN: u32 = 2;
/// Largest radix accepted without falling back to detection.
const RADIX_MAX: u32 = 36;

/// Parses the longest valid integer prefix of `text` as a safe integer.
///
/// A radix in `2..=36` selects the digit alphabet; with radix 16 a leading
/// `0x`/`0X` (after the sign) is stripped. A missing or out-of-range radix
/// falls back to detection: a `0x`/`0X` prefix selects 16, anything else 10.
/// There is no octal detection, so `"08"` parses as 8.
///
/// Returns `None` when no digits are found or when the parsed magnitude
/// exceeds [`SafeInteger::MAX`]. Never panics, for any input.
///
/// ```
/// use safeint::{SafeInteger, parse_safe_integer};
///
/// assert_eq!(parse_safe_integer("42", None), SafeInteger::new(42));
/// assert_eq!(parse_safe_integer("3.14", None), SafeInteger::new(3)); // stops at '.'
/// assert_eq!(parse_safe_integer("deadbeef", Some(16)), SafeInteger::new(0xdead_beef));
/// assert_eq!(parse_safe_integer("deadbeef", None), None);
/// ```
pub fn parse_safe_integer(text: &str, radix: Option<u32>) -> Option<SafeInteger> {
    let s = text.trim_start().as_bytes();
    let mut i = 0;

    let mut negative = false;
    if i < s.len() && (s[i] == b'+' || s[i] == b'-') {
        negative = s[i] == b'-';
        i += 1;
    }

    let base = match radix {
        Some(r) if (RADIX_MIN..=RADIX_MAX).contains(&r) => {
            if r == 16 && has_hex_prefix(&s[i..]) {
                i += 2;
            }
            r
        }
        // Unspecified or out-of-range radix: 0x/0X selects 16, else 10.
        _ => {
            if has_hex_prefix(&s[i..]) {
                i += 2;
                16
            } else {
                10
            }
        }
    };

    let mut acc: u64 = 0;
    let mut any_digits = false;
    while i < s.len() {
        let Some(digit) = digit_value(s[i], base) else {
            break;
        };
        any_digits = true;
        // acc was at most SafeInteger::MAX after the previous round, so the
        // multiply-add stays far below u64::MAX even at radix 36.
        acc = acc * u64::from(base) + u64::from(digit);
        if acc > SafeInteger::MAX.get() as u64 {
            return None;
        }
        i += 1;
    }

    if !any_digits {
        return None;
    }

    let value = if negative { -(acc as i64) } else { acc as i64 };
    SafeInteger::new(value)
}

/// True for a `0x`/`0X` prefix at the start of `s`.
///
/// Unlike C `strtol`, the prefix is stripped whether or not a hex digit
/// follows, so `"0x"` and `"0xz"` end up with no digits at all.
fn has_hex_prefix(s: &[u8]) -> bool {
    s.len() >= 2 && s[0] == b'0' && (s[1] == b'x' || s[1] == b'X')
}

/// Maps an ASCII digit or letter to its value, if below `base`.
fn digit_value(c: u8, base: u32) -> Option<u32> {
    let digit = match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'z' => c - b'a' + 10,
        b'A'..=b'Z' => c - b'A' + 10,
        _ => return None,
    };
    let digit = u32::from(digit);
    if digit < base { Some(digit) } else { None }
}
