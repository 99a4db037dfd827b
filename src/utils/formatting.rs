//! Formatting utilities used for CLI and report outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = unicode_width::UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible)))
}

/// Minutes for humans: `"12 min"` when whole, `"12.5 min"` otherwise.
pub fn format_minutes(value: f64) -> String {
    if !value.is_finite() {
        return "0 min".to_string();
    }
    if (value - value.round()).abs() < 1e-6 {
        return format!("{} min", value.round() as i64);
    }
    format!("{value:.1} min")
}
