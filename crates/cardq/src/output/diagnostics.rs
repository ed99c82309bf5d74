//! Diagnostic output formatting.

use card_search::Diagnostic;
use owo_colors::OwoColorize;
use serde::Serialize;

/// JSON output structure for the check command.
#[derive(Serialize)]
pub struct DiagnosticsOutput<'a> {
    pub expression: &'a str,
    pub diagnostics: &'a [Diagnostic],
}

/// Formats diagnostics as JSON.
pub fn format_diagnostics_json(
    expression: &str,
    diagnostics: &[Diagnostic],
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&DiagnosticsOutput {
        expression,
        diagnostics,
    })
}

/// Formats diagnostics as one warning per line.
pub fn format_diagnostics_table(diagnostics: &[Diagnostic], use_colors: bool) -> String {
    if diagnostics.is_empty() {
        return "No ignored terms.\n".to_string();
    }

    let label = if use_colors {
        "warning".yellow().to_string()
    } else {
        "warning".to_string()
    };

    diagnostics
        .iter()
        .map(|d| format!("{label}: {d}\n"))
        .collect()
}
