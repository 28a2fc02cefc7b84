//! Terminal output formatting for Focus Flow
//!
//! Formatting helpers shared by the view modules. The view layer is
//! purely presentational: every number it prints is re-derived from the
//! models on each invocation.

pub mod habits;
pub mod history;
pub mod money;

use crate::models::{AlertLevel, Amount};

/// Format an amount with the configured currency symbol
pub fn format_amount(amount: Amount, symbol: &str) -> String {
    if amount.is_negative() {
        format!("-{}{}", symbol, -(amount.units()))
    } else {
        format!("{}{}", symbol, amount)
    }
}

/// Format an amount with color hints for terminal display
pub fn format_amount_colored(amount: Amount, symbol: &str) -> String {
    let plain = format_amount(amount, symbol);
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", plain) // Red for negative
    } else {
        plain
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: i64, max_value: i64, width: usize) -> String {
    if max_value <= 0 || value <= 0 {
        return "░".repeat(width);
    }

    let filled = ((value as f64 / max_value as f64) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Alert level with its terminal color code
pub fn format_alert(level: AlertLevel) -> String {
    let (color, label) = match level {
        AlertLevel::Safe => ("\x1b[32m", "safe"),
        AlertLevel::Warning => ("\x1b[33m", "warning"),
        AlertLevel::Danger => ("\x1b[31m", "danger"),
        AlertLevel::Exceeded => ("\x1b[1;31m", "exceeded"),
    };
    format!("{}{}\x1b[0m", color, label)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        chars.into_iter().take(max_len).collect()
    } else {
        let head: String = chars.into_iter().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
