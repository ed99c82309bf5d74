//! Parsed term and token output formatting.

use card_search::{ParsedQuery, PositionedToken};
use serde::Serialize;

use super::helpers::{header_line, truncate_str};

/// Column width for token and value cells.
const VALUE_WIDTH: usize = 40;

/// Formats a parsed query as JSON.
pub fn format_terms_json(query: &ParsedQuery) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(query)
}

/// Formats a parsed query as a table.
pub fn format_terms_table(query: &ParsedQuery, use_colors: bool) -> String {
    if query.is_empty() {
        return "No terms.\n".to_string();
    }

    let mut output = format!("Combinator: {}\n\n", query.combinator);
    output.push_str(&header_line(
        &format!("{:<3} {:<3} {:<16} {:<3} {}", "#", "Neg", "Field", "Op", "Value"),
        use_colors,
    ));

    for (index, term) in query.terms.iter().enumerate() {
        let field = term
            .field
            .as_ref()
            .map(|f| f.as_str().to_string())
            .unwrap_or_else(|| "(text)".to_string());
        let negated = if term.negated { "-" } else { "" };
        output.push_str(&format!(
            "{:<3} {:<3} {:<16} {:<3} {}\n",
            index + 1,
            negated,
            field,
            term.operator.symbol(),
            truncate_str(&term.value, VALUE_WIDTH)
        ));
    }

    output
}

/// JSON output structure for the tokens command.
#[derive(Serialize)]
pub struct TokensOutput<'a> {
    pub tokens: &'a [PositionedToken],
}

/// Formats tokens as JSON.
pub fn format_tokens_json(tokens: &[PositionedToken]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&TokensOutput { tokens })
}

/// Formats tokens as a table of byte offsets and text.
pub fn format_tokens_table(tokens: &[PositionedToken], use_colors: bool) -> String {
    if tokens.is_empty() {
        return "No tokens.\n".to_string();
    }

    let mut output = header_line(&format!("{:<6} {}", "Offset", "Token"), use_colors);
    for token in tokens {
        output.push_str(&format!(
            "{:<6} {}\n",
            token.position,
            truncate_str(&token.text, VALUE_WIDTH)
        ));
    }
    output
}
