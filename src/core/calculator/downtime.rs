//! Total downtime ("tiempo muerto") from wait and solution times.

use crate::utils::number::{parse_leading_float, plain_number};

/// Value for the total-downtime form field.
///
/// Non-numeric operands count as absent: both absent gives `""`, otherwise
/// absent counts as 0. The sum is rounded to two decimals, half away from
/// zero.
pub fn compute_total(wait: &str, solve: &str) -> String {
    let wait = parse_leading_float(wait);
    let solve = parse_leading_float(solve);

    if wait.is_none() && solve.is_none() {
        return String::new();
    }

    let total = wait.unwrap_or(0.0) + solve.unwrap_or(0.0);
    if !total.is_finite() {
        return String::new();
    }

    let rounded = (total * 100.0).round() / 100.0;
    if !rounded.is_finite() {
        return String::new();
    }

    plain_number(rounded)
}

/// Storage format for durations: integral values without decimals,
/// otherwise two decimals with trailing zeros trimmed.
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        return plain_number(value);
    }
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
