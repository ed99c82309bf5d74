//! Common helper functions for output formatting.

use card_search::Constraint;
use owo_colors::OwoColorize;

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Formats an inclusive numeric range for display.
pub fn format_range(min: Option<i64>, max: Option<i64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) if min == max => format!("= {min}"),
        (Some(min), Some(max)) => format!("{min}..={max}"),
        (Some(min), None) => format!(">= {min}"),
        (None, Some(max)) => format!("<= {max}"),
        (None, None) => "any".to_string(),
    }
}

/// Formats a constraint value for display.
pub fn format_constraint(constraint: &Constraint) -> String {
    match constraint {
        Constraint::List(values) => values.join(", "),
        Constraint::Range { min, max } => format_range(*min, *max),
        Constraint::Flag(true) => "yes".to_string(),
        Constraint::Flag(false) => "no".to_string(),
        Constraint::Legality { format, statuses } => {
            format!("{} in {}", statuses.join("/"), format)
        }
    }
}

/// Renders a table header line, dimmed when colors are on.
pub fn header_line(header: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{}\n", header.dimmed())
    } else {
        format!("{header}\n")
    }
}
