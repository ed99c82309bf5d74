//! Token-to-term parser.

use crate::ast::{Operator, SearchTerm};
use crate::fields::Field;

/// Parses a single token into a [`SearchTerm`].
///
/// Never fails: a token that is neither a quoted phrase nor a well-formed
/// `field<op>value` expression becomes a free-text term.
///
/// # Grammar
///
/// ```text
/// token    ::= ["-"] (phrase | fielded | word)
/// phrase   ::= ["!"] '"' interior '"'
/// fielded  ::= name op value
/// name     ::= [A-Za-z_]+
/// op       ::= ":" | "=" | ">" | ">=" | "=>" | "<" | "<=" | "=<"
/// ```
///
/// # Example
///
/// ```
/// use card_search::{parse_token, Field, Operator};
///
/// let term = parse_token("-type:event");
/// assert_eq!(term.field, Some(Field::Type));
/// assert_eq!(term.operator, Operator::Contains);
/// assert_eq!(term.value, "event");
/// assert!(term.negated);
/// ```
pub fn parse_token(token: &str) -> SearchTerm {
    let (negated, body) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    if let Some(phrase) = quoted_phrase(body) {
        return SearchTerm::free_text(Operator::Exact, phrase, negated);
    }

    if let Some((name, symbol, value)) = split_fielded(body) {
        if let Some(operator) = Operator::from_symbol(symbol) {
            return match Field::canonicalize(name) {
                Field::Is => {
                    SearchTerm::field(Field::Is, Operator::Contains, value.to_lowercase(), negated)
                }
                field => SearchTerm::field(field, operator, value, negated),
            };
        }
        log::trace!("unrecognized operator {symbol:?} in {token:?}, treating as text");
    }

    SearchTerm::free_text(Operator::Contains, body, negated)
}

/// Returns the interior of `"..."` or `!"..."`.
fn quoted_phrase(body: &str) -> Option<&str> {
    let quoted = match body.strip_prefix('!') {
        Some(rest) if rest.starts_with('"') => rest,
        _ => body,
    };
    if !quoted.starts_with('"') || !quoted.ends_with('"') {
        return None;
    }
    // A lone `"` is both the opening and the closing quote.
    Some(quoted.get(1..quoted.len() - 1).unwrap_or(""))
}

fn is_operator_char(c: char) -> bool {
    matches!(c, ':' | '=' | '>' | '<')
}

/// Splits `name<op>value` into its three parts without validating the
/// operator spelling. The value always has at least one character.
fn split_fielded(body: &str) -> Option<(&str, &str, &str)> {
    let name_end = body
        .find(|c: char| !(c.is_ascii_alphabetic() || c == '_'))
        .unwrap_or(body.len());
    if name_end == 0 {
        return None;
    }

    let (name, rest) = body.split_at(name_end);
    let op_len = rest
        .find(|c: char| !is_operator_char(c))
        .unwrap_or(rest.len());
    if op_len == 0 {
        return None;
    }

    let (symbol, value) = rest.split_at(op_len);
    if !value.is_empty() {
        return Some((name, symbol, value));
    }
    if op_len < 2 {
        return None;
    }
    // Operator characters are ASCII, so this split is on a char boundary.
    let (symbol, value) = rest.split_at(op_len - 1);
    Some((name, symbol, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::NumericField;

    #[test]
    fn test_field_colon_value() {
        let term = parse_token("name:Doji");
        assert_eq!(term.field, Some(Field::Name));
        assert_eq!(term.operator, Operator::Contains);
        assert_eq!(term.value, "Doji");
        assert!(!term.negated);
    }

    #[test]
    fn test_numeric_comparison_greater() {
        let term = parse_token("force>3");
        assert_eq!(term.field, Some(Field::Numeric(NumericField::Force)));
        assert_eq!(term.operator, Operator::Greater);
        assert_eq!(term.value, "3");
    }

    #[test]
    fn test_numeric_comparison_greater_equal() {
        let term = parse_token("chi>=2");
        assert_eq!(term.field, Some(Field::Numeric(NumericField::Chi)));
        assert_eq!(term.operator, Operator::GreaterOrEqual);
        assert_eq!(term.value, "2");
    }

    #[test]
    fn test_numeric_comparison_less() {
        let term = parse_token("focus<5");
        assert_eq!(term.field, Some(Field::Numeric(NumericField::Focus)));
        assert_eq!(term.operator, Operator::Less);
        assert_eq!(term.value, "5");
    }

    #[test]
    fn test_numeric_comparison_less_equal() {
        let term = parse_token("gold_cost<=3");
        assert_eq!(term.field, Some(Field::Numeric(NumericField::GoldCost)));
        assert_eq!(term.operator, Operator::LessOrEqual);
        assert_eq!(term.value, "3");
    }

    #[test]
    fn test_reversed_operators_are_normalized() {
        assert_eq!(parse_token("chi=>2").operator, Operator::GreaterOrEqual);
        assert_eq!(parse_token("chi=<2").operator, Operator::LessOrEqual);
    }

    #[test]
    fn test_equals_is_exact() {
        let term = parse_token("focus=2");
        assert_eq!(term.operator, Operator::Exact);
        assert_eq!(term.value, "2");
    }

    #[test]
    fn test_negation() {
        let term = parse_token("-type:event");
        assert_eq!(term.field, Some(Field::Type));
        assert_eq!(term.operator, Operator::Contains);
        assert_eq!(term.value, "event");
        assert!(term.negated);
    }

    #[test]
    fn test_quoted_exact_match() {
        let term = parse_token("\"Doji Hoturi\"");
        assert_eq!(term.field, None);
        assert_eq!(term.operator, Operator::Exact);
        assert_eq!(term.value, "Doji Hoturi");
    }

    #[test]
    fn test_exact_match_with_exclamation() {
        let term = parse_token("!\"exact phrase\"");
        assert_eq!(term.field, None);
        assert_eq!(term.operator, Operator::Exact);
        assert_eq!(term.value, "exact phrase");
    }

    #[test]
    fn test_quoted_phrase_with_colon_stays_text() {
        let term = parse_token("\"clan:Crane\"");
        assert!(term.is_free_text());
        assert_eq!(term.value, "clan:Crane");
    }

    #[test]
    fn test_negated_quoted_phrase() {
        let term = parse_token("-\"Doji Hoturi\"");
        assert!(term.is_free_text());
        assert_eq!(term.operator, Operator::Exact);
        assert!(term.negated);
    }

    #[test]
    fn test_lone_quote_is_empty_phrase() {
        let term = parse_token("\"");
        assert_eq!(term.operator, Operator::Exact);
        assert_eq!(term.value, "");
    }

    #[test]
    fn test_unterminated_quote_is_plain_text() {
        let term = parse_token("\"Doji Hoturi");
        assert!(term.is_free_text());
        assert_eq!(term.operator, Operator::Contains);
        assert_eq!(term.value, "\"Doji Hoturi");
    }

    #[test]
    fn test_plain_text() {
        let term = parse_token("Crane");
        assert_eq!(term.field, None);
        assert_eq!(term.operator, Operator::Contains);
        assert_eq!(term.value, "Crane");
    }

    #[test]
    fn test_is_unique() {
        let term = parse_token("is:unique");
        assert_eq!(term.field, Some(Field::Is));
        assert_eq!(term.operator, Operator::Contains);
        assert_eq!(term.value, "unique");
    }

    #[test]
    fn test_has_lowercases_and_uses_contains() {
        let term = parse_token("HAS>Cavalry");
        assert_eq!(term.field, Some(Field::Is));
        assert_eq!(term.operator, Operator::Contains);
        assert_eq!(term.value, "cavalry");
    }

    #[test]
    fn test_field_alias() {
        let term = parse_token("t:personality");
        assert_eq!(term.field, Some(Field::Type));
        assert_eq!(term.value, "personality");
    }

    #[test]
    fn test_value_keeps_case_and_quotes() {
        let term = parse_token("set:\"Imperial Edition\"");
        assert_eq!(term.field, Some(Field::Set));
        assert_eq!(term.value, "\"Imperial Edition\"");
    }

    #[test]
    fn test_unknown_field_passes_through() {
        let term = parse_token("Artist:Smith");
        assert_eq!(term.field, Some(Field::Other("artist".to_string())));
        assert_eq!(term.value, "Smith");
    }

    #[test]
    fn test_unrecognized_operator_is_free_text() {
        let term = parse_token("force>>3");
        assert!(term.is_free_text());
        assert_eq!(term.value, "force>>3");

        let term = parse_token("name::Doji");
        assert!(term.is_free_text());
    }

    #[test]
    fn test_missing_value_is_free_text() {
        let term = parse_token("name:");
        assert!(term.is_free_text());
        assert_eq!(term.value, "name:");
    }

    #[test]
    fn test_value_borrows_last_operator_char() {
        let term = parse_token("name:=");
        assert_eq!(term.field, Some(Field::Name));
        assert_eq!(term.operator, Operator::Contains);
        assert_eq!(term.value, "=");
    }

    #[test]
    fn test_field_must_lead() {
        assert!(parse_token("3>force").is_free_text());
        assert!(parse_token(":Crane").is_free_text());
    }

    #[test]
    fn test_only_one_dash_is_stripped() {
        let term = parse_token("--clan:Crane");
        assert!(term.negated);
        assert!(term.is_free_text());
        assert_eq!(term.value, "-clan:Crane");
    }
}
