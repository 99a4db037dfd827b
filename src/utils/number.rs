//! Lenient number parsing shared by the filter, the sort policy and the
//! downtime calculator.

/// Leading-integer parse: optional sign then digits, the rest is ignored.
///
/// `"30"`, `" 30 "` and `"30.0"` give 30; `"W30"` and `""` give `None`.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let t = s.trim_start();
    let (neg, rest) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };

    let digits: &str = {
        let end = rest
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return None;
    }

    // Overlong inputs saturate instead of failing.
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if neg { -value } else { value })
}

/// Leading-float parse: the longest numeric prefix of the trimmed input.
///
/// Accepts `Infinity` as a prefix; callers decide what to do with
/// non-finite values.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let t = s.trim();
    let bytes = t.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    if t[i..].starts_with("Infinity") {
        let inf = if t.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Some(inf);
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        if mantissa_digits > 0 {
            i = j;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    // exponent, only when followed by at least one digit
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    t[..i].parse::<f64>().ok()
}

/// Strict decimal parse used for stored durations; `,` is accepted as the
/// decimal separator.
pub fn parse_decimal(s: &str) -> Option<f64> {
    let t = s.trim().replace(',', ".");
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Shortest plain rendering of a float: `5.75`, `3`, `-1.5`.
pub fn plain_number(value: f64) -> String {
    // avoid "-0"
    let v = if value == 0.0 { 0.0 } else { value };
    format!("{v}")
}

/// First run of ASCII digits in a raw week value (`"W30"` → 30).
pub fn week_digits(raw: &str) -> Option<u32> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let digits: String = raw[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_ignores_trailing_text() {
        assert_eq!(parse_leading_int("30"), Some(30));
        assert_eq!(parse_leading_int(" 30.0"), Some(30));
        assert_eq!(parse_leading_int("-4x"), Some(-4));
        assert_eq!(parse_leading_int("W30"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn leading_float_takes_numeric_prefix() {
        assert_eq!(parse_leading_float("2.5 min"), Some(2.5));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("1e3x"), Some(1000.0));
        assert_eq!(parse_leading_float("1e"), Some(1.0));
        assert_eq!(parse_leading_float("abc"), None);
        assert_eq!(parse_leading_float("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn decimal_accepts_comma() {
        assert_eq!(parse_decimal("2,5"), Some(2.5));
        assert_eq!(parse_decimal("  "), None);
        assert_eq!(parse_decimal("12 min"), None);
        assert_eq!(week_digits("W30"), Some(30));
        assert_eq!(plain_number(-0.0), "0");
    }
}
