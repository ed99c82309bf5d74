//! Compiled filter output formatting.

use card_search::CompiledFilter;
use owo_colors::OwoColorize;

use super::helpers::{format_constraint, header_line};

/// Formats a compiled filter as JSON.
pub fn format_filter_json(filter: &CompiledFilter) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(filter)
}

/// Formats a compiled filter as a table.
pub fn format_filter_table(filter: &CompiledFilter, use_colors: bool) -> String {
    if filter.is_empty() {
        return "No restrictions (matches every card).\n".to_string();
    }

    let mut output = String::new();

    let text = if filter.text.is_empty() {
        "(none)".to_string()
    } else if use_colors {
        filter.text.bold().to_string()
    } else {
        filter.text.clone()
    };
    output.push_str(&format!("Text: {text}\n"));

    if filter.constraints.is_empty() {
        return output;
    }

    output.push('\n');
    output.push_str(&header_line(&format!("{:<16} {}", "Key", "Value"), use_colors));
    for (key, constraint) in &filter.constraints {
        output.push_str(&format!("{:<16} {}\n", key.as_str(), format_constraint(constraint)));
    }

    output
}
