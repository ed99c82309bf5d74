//! Search expression compiler for trading-card catalogs.
//!
//! This crate turns a free-form search expression, as typed into a card
//! browser's search box, into a filter an attribute store can execute.
//! Compilation is a pipeline of pure stages:
//!
//! 1. [`tokenize_query`] splits the input on whitespace, keeping quoted
//!    spans together.
//! 2. [`parse_token`] turns each token into a [`SearchTerm`].
//! 3. [`parse_search_query`] picks the AND/OR combinator, drops structural
//!    words and duplicates, and returns a [`ParsedQuery`].
//! 4. [`compile_filter`] groups terms by field into a [`CompiledFilter`]:
//!    free text plus structured [`Constraint`]s.
//!
//! No stage ever fails. Input that cannot be interpreted degrades to free
//! text or is ignored; [`diagnose`] reports what was ignored.
//!
//! # Supported Syntax
//!
//! - `Doji` - free text, matched against name, id and rules text
//! - `"Doji Hoturi"`, `!"Doji Hoturi"` - exact phrase
//! - `clan:Crane`, `t:personality`, `deck:fate` - categorical fields
//! - `force>3`, `chi<=2`, `gold:5` - numeric ranges
//! - `is:unique`, `is:cavalry`, `is:a|b`, `is:a&b` - flags and keywords
//! - `-term` - negation
//! - `a OR b` - any term may match
//!
//! See [`SYNTAX_HELP`] for the full user-facing guide.
//!
//! # Example
//!
//! ```
//! use card_search::{parse_and_compile, ConstraintKey, NumericField};
//!
//! let filter = parse_and_compile("name:Doji clan:Crane force>3 is:unique");
//! assert_eq!(filter.text, "Doji");
//! assert_eq!(filter.list(ConstraintKey::Clans), Some(&["Crane".to_string()][..]));
//! assert_eq!(filter.range(NumericField::Force), Some((Some(4), None)));
//! assert_eq!(filter.flag(ConstraintKey::IsUnique), Some(true));
//! ```

mod ast;
mod compiler;
mod diagnostics;
mod error;
mod fields;
mod lexer;
mod parser;
mod query;
mod syntax;

pub use ast::{Combinator, Operator, ParsedQuery, SearchTerm};
pub use compiler::{
    compile_filter, BoundPolicy, CompileOptions, CompiledFilter, Constraint, ConstraintKey,
    FilterCompiler,
};
pub use diagnostics::{diagnose, suggest_field, Diagnostic};
pub use error::{SearchError, SearchResult};
pub use fields::{normalize_field_name, Field, NumericField, FIELD_ALIASES};
pub use lexer::{tokenize_query, Lexer, PositionedToken};
pub use parser::parse_token;
pub use query::parse_search_query;
pub use syntax::SYNTAX_HELP;

/// Parses and compiles a search expression with default options.
pub fn parse_and_compile(input: &str) -> CompiledFilter {
    compile_filter(&parse_search_query(input))
}
