//! Interpretation of flag value text as booleans and integers

/// Read a flag value as a boolean
///
/// An empty value (bare flag or `-FOO=`) is `true`. Otherwise the value is
/// `true` unless its first character is `'0'`.
pub(crate) fn is_truthy(value: &str) -> bool {
    !value.starts_with('0')
}

/// Parse a value as a base-10 integer the way C's `atoi` does
///
/// Leading whitespace and one optional sign are accepted, followed by the
/// longest run of ASCII digits. Anything after the digits is ignored. Text
/// without digits reads as `0`; out-of-range values saturate.
pub(crate) fn parse_int_lenient(value: &str) -> i64 {
    let s = value.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut acc: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        let step = |v: i64| {
            if negative {
                v.checked_sub(digit)
            } else {
                v.checked_add(digit)
            }
        };
        let next = acc.checked_mul(10).and_then(step);
        match next {
            Some(v) => acc = v,
            None => return if negative { i64::MIN } else { i64::MAX },
        }
    }
    acc
}

/// Parse a value as a base-10 integer, rejecting trailing garbage
///
/// Surrounding whitespace is trimmed and an empty value reads as `0`.
pub(crate) fn parse_int_strict(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy() {
        assert!(is_truthy(""));
        assert!(is_truthy("1"));
        assert!(is_truthy("yes"));
        assert!(is_truthy("verbose"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("0x10"));
    }

    #[test]
    fn test_lenient_int() {
        assert_eq!(parse_int_lenient("11"), 11);
        assert_eq!(parse_int_lenient("-42"), -42);
        assert_eq!(parse_int_lenient("+7"), 7);
        assert_eq!(parse_int_lenient("  15"), 15);
        assert_eq!(parse_int_lenient("12abc"), 12);
        assert_eq!(parse_int_lenient(""), 0);
        assert_eq!(parse_int_lenient("NaN"), 0);
        assert_eq!(parse_int_lenient("NotANumber"), 0);
        assert_eq!(parse_int_lenient("-"), 0);
    }

    #[test]
    fn test_lenient_int_skips_only_ascii_whitespace() {
        assert_eq!(parse_int_lenient("\t\n 7"), 7);
        assert_eq!(parse_int_lenient(" \u{a0}7"), 0);
        assert_eq!(parse_int_lenient("\u{2003}7"), 0);
    }

    #[test]
    fn test_lenient_int_saturates() {
        assert_eq!(parse_int_lenient("99999999999999999999"), i64::MAX);
        assert_eq!(parse_int_lenient("-99999999999999999999"), i64::MIN);
        assert_eq!(parse_int_lenient("-9223372036854775808"), i64::MIN);
    }

    #[test]
    fn test_strict_int() {
        assert_eq!(parse_int_strict("11"), Some(11));
        assert_eq!(parse_int_strict(" -3 "), Some(-3));
        assert_eq!(parse_int_strict(""), Some(0));
        assert_eq!(parse_int_strict("12abc"), None);
        assert_eq!(parse_int_strict("NaN"), None);
    }
}
