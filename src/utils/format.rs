use rust_decimal::Decimal;
use unicode_width::UnicodeWidthStr;

/// Format a decimal without trailing zeros ("12.50" -> "12.5", "3.00" -> "3").
pub fn format_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}

/// A decimal followed by its unit, or the bare decimal when there is no unit.
pub fn format_quantity(value: Decimal, unit: &str) -> String {
    if unit.is_empty() {
        format_decimal(value)
    } else {
        format!("{} {}", format_decimal(value), unit)
    }
}

/// Format a per-day pace to two decimals.
pub fn format_pace(pace: f64, unit: &str) -> String {
    if unit.is_empty() {
        format!("{:.2}/day", pace)
    } else {
        format!("{:.2} {}/day", pace, unit)
    }
}

/// Create a simple ASCII progress bar for a 0-100 percentage
pub fn progress_bar(pct: f64, width: usize) -> String {
    let ratio = (pct / 100.0).clamp(0.0, 1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// Left-align `s` to `width` terminal columns; emoji count as two.
pub fn pad_display(s: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(used)))
}
