//! Field reference output formatting.

use card_search::{NumericField, FIELD_ALIASES};
use serde::Serialize;

use super::helpers::header_line;

/// JSON output structure for one alias.
#[derive(Serialize)]
pub struct AliasOutput {
    pub alias: &'static str,
    pub field: &'static str,
}

/// JSON output structure for the fields command.
#[derive(Serialize)]
pub struct FieldsOutput {
    pub aliases: Vec<AliasOutput>,
    pub numeric_fields: Vec<&'static str>,
}

fn fields_output() -> FieldsOutput {
    FieldsOutput {
        aliases: FIELD_ALIASES
            .iter()
            .map(|&(alias, field)| AliasOutput { alias, field })
            .collect(),
        numeric_fields: NumericField::ALL.iter().map(|f| f.as_str()).collect(),
    }
}

/// Formats the alias table and numeric fields as JSON.
pub fn format_fields_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&fields_output())
}

/// Formats the alias table and numeric fields as text.
pub fn format_fields_table(use_colors: bool) -> String {
    let mut output = header_line(&format!("{:<16} {}", "Alias", "Field"), use_colors);
    for (alias, field) in FIELD_ALIASES {
        output.push_str(&format!("{:<16} {}\n", alias, field));
    }

    output.push('\n');
    output.push_str(&header_line("Numeric fields", use_colors));
    for field in NumericField::ALL {
        output.push_str(&format!("  {field}\n"));
    }
    output
}
