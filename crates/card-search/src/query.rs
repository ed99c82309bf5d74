//! Query assembly: tokenize, pick the combinator, deduplicate, parse.

use std::collections::HashSet;

use crate::ast::{Combinator, ParsedQuery};
use crate::lexer::tokenize_query;
use crate::parser::parse_token;

/// Bare words that shape the expression instead of becoming terms.
const STRUCTURAL_WORDS: [&str; 3] = ["AND", "OR", "NOT"];

fn is_or(token: &str) -> bool {
    token.eq_ignore_ascii_case("OR")
}

fn is_structural(token: &str) -> bool {
    STRUCTURAL_WORDS
        .iter()
        .any(|word| token.eq_ignore_ascii_case(word))
}

/// Parses a raw search expression into a [`ParsedQuery`].
///
/// Terms are joined with AND unless a bare `OR` token appears anywhere, in
/// which case the whole expression is OR-joined. There is no grouping or
/// precedence: `a b OR c` is a flat OR of all three terms. Tokens that
/// repeat an earlier token verbatim are dropped.
///
/// # Example
///
/// ```
/// use card_search::{parse_search_query, Combinator};
///
/// let query = parse_search_query("clan:Crane OR clan:Lion");
/// assert_eq!(query.combinator, Combinator::Or);
/// assert_eq!(query.terms.len(), 2);
/// ```
pub fn parse_search_query(input: &str) -> ParsedQuery {
    let tokens = tokenize_query(input);
    if tokens.is_empty() {
        return ParsedQuery::default();
    }

    let combinator = if tokens.iter().any(|t| is_or(t)) {
        Combinator::Or
    } else {
        Combinator::And
    };

    let mut seen = HashSet::new();
    let terms = tokens
        .iter()
        .filter(|token| !is_structural(token))
        .filter(|token| seen.insert(token.as_str()))
        .map(|token| parse_token(token))
        .collect::<Vec<_>>();

    log::trace!(
        "parsed {} token(s) into {} {combinator} term(s)",
        tokens.len(),
        terms.len()
    );

    ParsedQuery::new(terms, combinator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Operator;
    use crate::fields::{Field, NumericField};

    #[test]
    fn test_single_term() {
        let parsed = parse_search_query("name:Doji");
        assert_eq!(parsed.terms.len(), 1);
        assert_eq!(parsed.combinator, Combinator::And);
        assert_eq!(parsed.terms[0].field, Some(Field::Name));
        assert_eq!(parsed.terms[0].value, "Doji");
    }

    #[test]
    fn test_multiple_terms_implicit_and() {
        let parsed = parse_search_query("name:Doji type:personality");
        assert_eq!(parsed.terms.len(), 2);
        assert_eq!(parsed.combinator, Combinator::And);
    }

    #[test]
    fn test_explicit_and() {
        let parsed = parse_search_query("name:Doji AND type:personality");
        assert_eq!(parsed.terms.len(), 2);
        assert_eq!(parsed.combinator, Combinator::And);
    }

    #[test]
    fn test_structural_words_case_insensitive() {
        let parsed = parse_search_query("name:Doji and not type:event");
        assert_eq!(parsed.terms.len(), 2);
        assert_eq!(parsed.combinator, Combinator::And);
    }

    #[test]
    fn test_or_logic() {
        let parsed = parse_search_query("clan:Crane OR clan:Lion");
        assert_eq!(parsed.terms.len(), 2);
        assert_eq!(parsed.combinator, Combinator::Or);
    }

    #[test]
    fn test_lowercase_or() {
        let parsed = parse_search_query("clan:Crane or clan:Lion");
        assert_eq!(parsed.combinator, Combinator::Or);
        assert_eq!(parsed.terms.len(), 2);
    }

    #[test]
    fn test_or_flattens_groups() {
        let parsed = parse_search_query("clan:Crane type:personality OR clan:Lion force>3");
        assert_eq!(parsed.combinator, Combinator::Or);
        let rendered: Vec<String> = parsed.terms.iter().map(|t| t.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["clan:Crane", "type:personality", "clan:Lion", "force>3"]
        );
    }

    #[test]
    fn test_or_mode_drops_and_not() {
        let parsed = parse_search_query("clan:Crane AND is:unique OR NOT clan:Lion");
        assert_eq!(parsed.combinator, Combinator::Or);
        assert_eq!(parsed.terms.len(), 3);
    }

    #[test]
    fn test_leading_and_trailing_or() {
        let parsed = parse_search_query("OR clan:Crane OR");
        assert_eq!(parsed.combinator, Combinator::Or);
        assert_eq!(parsed.terms.len(), 1);
    }

    #[test]
    fn test_quoted_or_is_not_structural() {
        let parsed = parse_search_query("\"Crane OR Lion\"");
        assert_eq!(parsed.combinator, Combinator::And);
        assert_eq!(parsed.terms.len(), 1);
        assert_eq!(parsed.terms[0].value, "Crane OR Lion");

        let parsed = parse_search_query("\"OR\"");
        assert_eq!(parsed.combinator, Combinator::And);
        assert_eq!(parsed.terms[0].value, "OR");
    }

    #[test]
    fn test_mixed_terms() {
        let parsed = parse_search_query("name:Doji force>3 \"Crane Clan\"");
        assert_eq!(parsed.terms.len(), 3);
        assert_eq!(parsed.terms[0].field, Some(Field::Name));
        assert_eq!(
            parsed.terms[1].field,
            Some(Field::Numeric(NumericField::Force))
        );
        assert_eq!(parsed.terms[2].field, None);
        assert_eq!(parsed.terms[2].operator, Operator::Exact);
        assert_eq!(parsed.terms[2].value, "Crane Clan");
    }

    #[test]
    fn test_empty_query() {
        let parsed = parse_search_query("");
        assert!(parsed.is_empty());
        assert_eq!(parsed.combinator, Combinator::And);

        let parsed = parse_search_query("   \t ");
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_only_structural_words() {
        let parsed = parse_search_query("AND NOT");
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_negated_terms() {
        let parsed = parse_search_query("clan:Crane -type:event");
        assert_eq!(parsed.terms.len(), 2);
        assert!(!parsed.terms[0].negated);
        assert!(parsed.terms[1].negated);
    }

    #[test]
    fn test_duplicates_removed_in_order() {
        let parsed = parse_search_query("clan:Crane Doji clan:Crane Doji force>3");
        let rendered: Vec<String> = parsed.terms.iter().map(|t| t.to_string()).collect();
        assert_eq!(rendered, vec!["clan:Crane", "Doji", "force>3"]);
    }

    #[test]
    fn test_dedup_is_by_exact_token_text() {
        // Same meaning, different spelling: both are kept.
        let parsed = parse_search_query("c:Crane clan:Crane");
        assert_eq!(parsed.terms.len(), 2);
    }
}
