//! Reports on terms the compiler accepts but ignores.
//!
//! Compilation never rejects input, so a typo such as `clna:Crane` silently
//! produces no constraint. [`diagnose`] lists such terms so a front end can
//! explain why a search matched more than expected.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use strsim::levenshtein;

use crate::ast::{ParsedQuery, SearchTerm};
use crate::compiler::parse_integer;
use crate::fields::{known_field_names, Field};

/// Maximum Levenshtein distance to consider a name as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// A term that contributes nothing (or less than it appears to) to the
/// compiled filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The field name matches no known attribute.
    UnknownField {
        field: String,
        suggestion: Option<String>,
    },
    /// A negated term, which is dropped (except `-is:unique`).
    IgnoredNegation { term: String },
    /// A numeric comparison whose value is not an integer.
    NonIntegerValue { field: String, value: String },
    /// A `format:` term after the first; only the first is used.
    ExtraFormat { value: String },
    /// A text phrase or keyword list with nothing in it, such as `""` or `is:|`.
    EmptyValue { term: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownField { field, suggestion } => {
                write!(f, "unknown field '{field}' is ignored")?;
                if let Some(suggestion) = suggestion {
                    write!(f, ". Did you mean '{suggestion}'?")?;
                }
                Ok(())
            }
            Diagnostic::IgnoredNegation { term } => {
                write!(f, "negated term '{term}' is ignored")
            }
            Diagnostic::NonIntegerValue { field, value } => {
                write!(f, "'{value}' is not an integer, {field} comparison is ignored")
            }
            Diagnostic::ExtraFormat { value } => {
                write!(f, "only the first format is used, 'format:{value}' is ignored")
            }
            Diagnostic::EmptyValue { term } => {
                write!(f, "'{term}' has an empty value and is ignored")
            }
        }
    }
}

/// Finds the closest known field name or alias.
///
/// Returns the best match if its edit distance is within the threshold,
/// otherwise returns `None`.
pub fn suggest_field(name: &str) -> Option<&'static str> {
    let name_lower = name.to_lowercase();

    let (best_match, best_distance) = known_field_names()
        .map(|candidate| (candidate, levenshtein(&name_lower, candidate)))
        .min_by_key(|(_, distance)| *distance)?;

    if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match)
    } else {
        None
    }
}

fn is_unique_flag(term: &SearchTerm) -> bool {
    term.field == Some(Field::Is) && term.value.eq_ignore_ascii_case("unique")
}

/// True for `is:` values made only of `|`/`&` separators and whitespace.
fn is_empty_keyword_list(value: &str) -> bool {
    value.contains(['|', '&'])
        && value
            .split(['|', '&'])
            .all(|piece| piece.trim().is_empty())
}

/// Lists the terms of `query` that the compiler ignores, in term order.
///
/// # Example
///
/// ```
/// use card_search::{diagnose, parse_search_query, Diagnostic};
///
/// let diagnostics = diagnose(&parse_search_query("clna:Crane"));
/// assert_eq!(
///     diagnostics,
///     vec![Diagnostic::UnknownField {
///         field: "clna".to_string(),
///         suggestion: Some("clan".to_string()),
///     }]
/// );
/// ```
pub fn diagnose(query: &ParsedQuery) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut reported_fields = HashSet::new();
    let mut seen_format = false;

    for term in &query.terms {
        if term.negated && !is_unique_flag(term) {
            diagnostics.push(Diagnostic::IgnoredNegation {
                term: term.to_string(),
            });
            continue;
        }

        match &term.field {
            Some(Field::Other(name)) => {
                if reported_fields.insert(name.as_str()) {
                    diagnostics.push(Diagnostic::UnknownField {
                        field: name.clone(),
                        suggestion: suggest_field(name).map(str::to_string),
                    });
                }
            }
            None | Some(Field::Text | Field::Name) if term.value.is_empty() => {
                diagnostics.push(Diagnostic::EmptyValue {
                    term: term.to_string(),
                });
            }
            Some(Field::Is) if is_empty_keyword_list(&term.value) => {
                diagnostics.push(Diagnostic::EmptyValue {
                    term: term.to_string(),
                });
            }
            Some(Field::Numeric(field)) if parse_integer(&term.value).is_none() => {
                diagnostics.push(Diagnostic::NonIntegerValue {
                    field: field.to_string(),
                    value: term.value.clone(),
                });
            }
            Some(Field::Format) => {
                if seen_format {
                    diagnostics.push(Diagnostic::ExtraFormat {
                        value: term.value.clone(),
                    });
                }
                seen_format = true;
            }
            _ => {}
        }
    }

    diagnostics
}
