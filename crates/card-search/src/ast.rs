//! Parsed representation of search expressions.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::fields::Field;

/// Comparison operator of a search term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `:` - substring match, or equality for numeric fields.
    Contains,
    /// `=` - exact match, also produced by quoted phrases.
    Exact,
    /// `>`
    Greater,
    /// `>=` (or `=>`)
    GreaterOrEqual,
    /// `<`
    Less,
    /// `<=` (or `=<`)
    LessOrEqual,
}

impl Operator {
    /// Parses an operator spelling, normalizing `=>` and `=<`.
    ///
    /// Returns `None` for any other run of operator characters.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ":" => Some(Operator::Contains),
            "=" => Some(Operator::Exact),
            ">" => Some(Operator::Greater),
            ">=" | "=>" => Some(Operator::GreaterOrEqual),
            "<" => Some(Operator::Less),
            "<=" | "=<" => Some(Operator::LessOrEqual),
            _ => None,
        }
    }

    /// Returns the normalized spelling.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Contains => ":",
            Operator::Exact => "=",
            Operator::Greater => ">",
            Operator::GreaterOrEqual => ">=",
            Operator::Less => "<",
            Operator::LessOrEqual => "<=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// A single parsed unit of a search expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchTerm {
    /// Canonical field, or `None` for free text.
    pub field: Option<Field>,
    pub operator: Operator,
    pub value: String,
    /// Set by a leading `-`.
    pub negated: bool,
}

impl SearchTerm {
    /// Creates a free-text term.
    pub fn free_text(operator: Operator, value: impl Into<String>, negated: bool) -> Self {
        Self {
            field: None,
            operator,
            value: value.into(),
            negated,
        }
    }

    /// Creates a term on a field.
    pub fn field(field: Field, operator: Operator, value: impl Into<String>, negated: bool) -> Self {
        Self {
            field: Some(field),
            operator,
            value: value.into(),
            negated,
        }
    }

    /// Returns true if the term has no field (searches name and rules text).
    pub fn is_free_text(&self) -> bool {
        self.field.is_none()
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("-")?;
        }
        match (&self.field, self.operator) {
            (None, Operator::Exact) => write!(f, "\"{}\"", self.value),
            (None, _) => f.write_str(&self.value),
            (Some(field), operator) => write!(f, "{field}{operator}{}", self.value),
        }
    }
}

/// Top-level boolean join applied across all terms of one expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Combinator {
    #[default]
    And,
    Or,
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combinator::And => f.write_str("AND"),
            Combinator::Or => f.write_str("OR"),
        }
    }
}

/// A search expression broken into deduplicated terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedQuery {
    pub combinator: Combinator,
    pub terms: Vec<SearchTerm>,
}

impl ParsedQuery {
    /// Creates a query from terms and a combinator.
    pub fn new(terms: Vec<SearchTerm>, combinator: Combinator) -> Self {
        Self { combinator, terms }
    }

    /// Returns true if the query has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::NumericField;

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::from_symbol(":"), Some(Operator::Contains));
        assert_eq!(Operator::from_symbol("="), Some(Operator::Exact));
        assert_eq!(Operator::from_symbol("=>"), Some(Operator::GreaterOrEqual));
        assert_eq!(Operator::from_symbol("=<"), Some(Operator::LessOrEqual));
        assert_eq!(Operator::from_symbol(">>"), None);
        assert_eq!(Operator::from_symbol(":="), None);
        assert_eq!(Operator::GreaterOrEqual.symbol(), ">=");
    }

    #[test]
    fn test_display_terms() {
        let term = SearchTerm::field(
            Field::Numeric(NumericField::Force),
            Operator::GreaterOrEqual,
            "3",
            false,
        );
        assert_eq!(term.to_string(), "force>=3");

        let term = SearchTerm::field(Field::Type, Operator::Contains, "event", true);
        assert_eq!(term.to_string(), "-type:event");

        let term = SearchTerm::free_text(Operator::Exact, "Doji Hoturi", false);
        assert_eq!(term.to_string(), "\"Doji Hoturi\"");

        let term = SearchTerm::free_text(Operator::Contains, "Crane", true);
        assert_eq!(term.to_string(), "-Crane");
    }

    #[test]
    fn test_combinator_default_is_and() {
        assert_eq!(Combinator::default(), Combinator::And);
        assert!(ParsedQuery::default().is_empty());
    }
}
