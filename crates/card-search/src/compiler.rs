//! Compilation of parsed queries into attribute-store filters.
//!
//! The compiler groups terms by canonical field and turns each group into
//! either free text or a structured [`Constraint`]. Only non-negated terms
//! contribute, with one exception: `-is:unique` sets `is_unique` to false.

use std::collections::BTreeMap;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::ast::{Operator, ParsedQuery, SearchTerm};
use crate::error::{SearchError, SearchResult};
use crate::fields::{Field, NumericField};

/// Legality status requested for `format:` terms.
const LEGAL_STATUS: &str = "legal";

/// Key of a compiled constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstraintKey {
    /// Keywords that must all be present.
    Keywords,
    /// Keywords of which at least one must be present.
    KeywordsOr,
    IsUnique,
    Decks,
    Types,
    Clans,
    Sets,
    Rarities,
    Legality,
    /// Integer range on a numeric attribute.
    Numeric(NumericField),
}

impl ConstraintKey {
    /// Returns the key name understood by the attribute store.
    pub fn as_str(self) -> &'static str {
        match self {
            ConstraintKey::Keywords => "keywords",
            ConstraintKey::KeywordsOr => "keywords_or",
            ConstraintKey::IsUnique => "is_unique",
            ConstraintKey::Decks => "decks",
            ConstraintKey::Types => "types",
            ConstraintKey::Clans => "clans",
            ConstraintKey::Sets => "sets",
            ConstraintKey::Rarities => "rarities",
            ConstraintKey::Legality => "legality",
            ConstraintKey::Numeric(field) => field.as_str(),
        }
    }
}

impl fmt::Display for ConstraintKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ConstraintKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A compiled restriction for the attribute store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Constraint {
    /// Categorical values or keywords.
    List(Vec<String>),
    /// Inclusive integer range; a missing bound is unbounded.
    Range { min: Option<i64>, max: Option<i64> },
    /// Boolean attribute.
    Flag(bool),
    /// Cards with one of `statuses` in `format`.
    Legality { format: String, statuses: Vec<String> },
}

impl Constraint {
    /// Creates a range constraint.
    pub fn range(min: Option<i64>, max: Option<i64>) -> Self {
        Constraint::Range { min, max }
    }
}

/// Output of the compiler: free text plus structured constraints.
///
/// The attribute store is expected to AND every constraint together and to
/// match `text` case-insensitively against name, id and rules text. An empty
/// `text` or a missing key means "no restriction" for that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompiledFilter {
    pub text: String,
    pub constraints: BTreeMap<ConstraintKey, Constraint>,
}

impl CompiledFilter {
    /// Returns true if the filter restricts nothing.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.constraints.is_empty()
    }

    /// Returns the constraint stored under `key`.
    pub fn get(&self, key: ConstraintKey) -> Option<&Constraint> {
        self.constraints.get(&key)
    }

    /// Returns the values of a list constraint.
    pub fn list(&self, key: ConstraintKey) -> Option<&[String]> {
        match self.get(key)? {
            Constraint::List(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the `(min, max)` bounds of a numeric field.
    pub fn range(&self, field: NumericField) -> Option<(Option<i64>, Option<i64>)> {
        match self.get(ConstraintKey::Numeric(field))? {
            Constraint::Range { min, max } => Some((*min, *max)),
            _ => None,
        }
    }

    /// Returns the value of a boolean constraint.
    pub fn flag(&self, key: ConstraintKey) -> Option<bool> {
        match self.get(key)? {
            Constraint::Flag(value) => Some(*value),
            _ => None,
        }
    }
}

/// How repeated bounds on one numeric field are merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundPolicy {
    /// A later term replaces the earlier bound in the same direction.
    #[default]
    #[serde(rename = "last")]
    LastWins,
    /// Keep the largest minimum and the smallest maximum.
    #[serde(rename = "tightest")]
    Tightest,
}

impl BoundPolicy {
    fn merge_min(self, current: Option<i64>, new: i64) -> i64 {
        match (self, current) {
            (BoundPolicy::Tightest, Some(current)) => current.max(new),
            _ => new,
        }
    }

    fn merge_max(self, current: Option<i64>, new: i64) -> i64 {
        match (self, current) {
            (BoundPolicy::Tightest, Some(current)) => current.min(new),
            _ => new,
        }
    }

    /// Returns the configuration spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            BoundPolicy::LastWins => "last",
            BoundPolicy::Tightest => "tightest",
        }
    }
}

impl fmt::Display for BoundPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoundPolicy {
    type Err = SearchError;

    fn from_str(s: &str) -> SearchResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "last" | "last-wins" | "last_wins" => Ok(BoundPolicy::LastWins),
            "tightest" => Ok(BoundPolicy::Tightest),
            _ => Err(SearchError::unknown_bound_policy(s)),
        }
    }
}

/// Options controlling compilation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    pub bounds: BoundPolicy,
}

/// Compiles parsed queries into [`CompiledFilter`]s.
///
/// # Example
///
/// ```
/// use card_search::{parse_search_query, BoundPolicy, CompileOptions, FilterCompiler, NumericField};
///
/// let query = parse_search_query("force>2 force<9 force>5");
/// let compiler = FilterCompiler::new(CompileOptions { bounds: BoundPolicy::Tightest });
/// let filter = compiler.compile(&query);
/// assert_eq!(filter.range(NumericField::Force), Some((Some(6), Some(8))));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterCompiler {
    options: CompileOptions,
}

impl FilterCompiler {
    /// Creates a compiler with the given options.
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    /// Compiles a parsed query.
    pub fn compile(&self, query: &ParsedQuery) -> CompiledFilter {
        let mut text_parts: Vec<&str> = Vec::new();
        let mut constraints = BTreeMap::new();

        for (field, terms) in group_by_field(&query.terms) {
            match field {
                Field::Text | Field::Name => {
                    text_parts.extend(
                        terms
                            .iter()
                            .copied()
                            .filter(|t| !t.negated && !t.value.is_empty())
                            .map(|t| t.value.as_str()),
                    );
                }
                Field::Is => compile_flags(&terms, &mut constraints),
                Field::Deck => {
                    insert_list(&mut constraints, ConstraintKey::Decks, &terms, str::to_uppercase)
                }
                Field::Type => {
                    insert_list(&mut constraints, ConstraintKey::Types, &terms, str::to_lowercase)
                }
                Field::Clan => {
                    insert_list(&mut constraints, ConstraintKey::Clans, &terms, str::to_owned)
                }
                Field::Set => insert_list(&mut constraints, ConstraintKey::Sets, &terms, str::to_owned),
                Field::Rarity => {
                    insert_list(&mut constraints, ConstraintKey::Rarities, &terms, str::to_owned)
                }
                Field::Format => {
                    if let Some(first) = terms.iter().find(|t| !t.negated) {
                        constraints.insert(
                            ConstraintKey::Legality,
                            Constraint::Legality {
                                format: first.value.clone(),
                                statuses: vec![LEGAL_STATUS.to_string()],
                            },
                        );
                    }
                }
                Field::Numeric(numeric) => {
                    if let Some(range) = self.compile_range(numeric, &terms) {
                        constraints.insert(ConstraintKey::Numeric(numeric), range);
                    }
                }
                Field::Other(name) => {
                    log::debug!("ignoring {} term(s) on unknown field {name:?}", terms.len());
                }
            }
        }

        let filter = CompiledFilter {
            text: text_parts.join(" "),
            constraints,
        };
        log::debug!(
            "compiled {} term(s) into text {:?} and {} constraint(s)",
            query.terms.len(),
            filter.text,
            filter.constraints.len()
        );
        filter
    }

    /// Folds the numeric terms of one field into an inclusive range.
    fn compile_range(&self, field: NumericField, terms: &[&SearchTerm]) -> Option<Constraint> {
        let policy = self.options.bounds;
        let mut min: Option<i64> = None;
        let mut max: Option<i64> = None;

        for term in terms.iter().filter(|t| !t.negated) {
            let Some(value) = parse_integer(&term.value) else {
                log::debug!("skipping non-integer value {:?} for {field}", term.value);
                continue;
            };

            let (lower, upper) = match term.operator {
                Operator::Contains | Operator::Exact => (Some(value), Some(value)),
                Operator::Greater => (Some(value.saturating_add(1)), None),
                Operator::GreaterOrEqual => (Some(value), None),
                Operator::Less => (None, Some(value.saturating_sub(1))),
                Operator::LessOrEqual => (None, Some(value)),
            };
            if let Some(lower) = lower {
                min = Some(policy.merge_min(min, lower));
            }
            if let Some(upper) = upper {
                max = Some(policy.merge_max(max, upper));
            }
        }

        (min.is_some() || max.is_some()).then(|| Constraint::range(min, max))
    }
}

/// Parses a numeric-field value. Integers outside `i64` clamp to the
/// nearest end of the range; anything else is not a number.
pub(crate) fn parse_integer(value: &str) -> Option<i64> {
    match value.parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Partitions terms by field in order of first appearance. Free-text terms
/// share the [`Field::Text`] group.
fn group_by_field(terms: &[SearchTerm]) -> Vec<(Field, Vec<&SearchTerm>)> {
    let mut groups: Vec<(Field, Vec<&SearchTerm>)> = Vec::new();
    for term in terms {
        let field = term.field.clone().unwrap_or(Field::Text);
        match groups.iter_mut().find(|(f, _)| *f == field) {
            Some((_, members)) => members.push(term),
            None => groups.push((field, vec![term])),
        }
    }
    groups
}

/// Compiles the `is:`/`has:` group.
///
/// `a|b` adds to the OR list, `a&b` and bare keywords add to the AND list,
/// and `unique` sets the `is_unique` flag.
fn compile_flags(terms: &[&SearchTerm], constraints: &mut BTreeMap<ConstraintKey, Constraint>) {
    let mut keywords: Vec<String> = Vec::new();
    let mut keywords_or: Vec<String> = Vec::new();
    let mut is_unique: Option<bool> = None;

    for term in terms {
        let keyword = term.value.to_lowercase();
        if keyword.contains('|') {
            if !term.negated {
                keywords_or.extend(split_keywords(&keyword, '|'));
            }
        } else if keyword.contains('&') {
            if !term.negated {
                keywords.extend(split_keywords(&keyword, '&'));
            }
        } else if keyword == "unique" {
            is_unique = Some(!term.negated);
        } else if !term.negated {
            keywords.push(keyword);
        }
    }

    if !keywords.is_empty() {
        constraints.insert(ConstraintKey::Keywords, Constraint::List(keywords));
    }
    if !keywords_or.is_empty() {
        constraints.insert(ConstraintKey::KeywordsOr, Constraint::List(keywords_or));
    }
    if let Some(unique) = is_unique {
        constraints.insert(ConstraintKey::IsUnique, Constraint::Flag(unique));
    }
}

fn split_keywords(keyword: &str, separator: char) -> impl Iterator<Item = String> + '_ {
    keyword
        .split(separator)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
}

/// Inserts the mapped values of non-negated terms as a list constraint.
fn insert_list(
    constraints: &mut BTreeMap<ConstraintKey, Constraint>,
    key: ConstraintKey,
    terms: &[&SearchTerm],
    map: impl Fn(&str) -> String,
) {
    let values: Vec<String> = terms
        .iter()
        .filter(|t| !t.negated)
        .map(|t| map(t.value.as_str()))
        .collect();
    if !values.is_empty() {
        constraints.insert(key, Constraint::List(values));
    }
}

/// Compiles a parsed query with default options.
pub fn compile_filter(query: &ParsedQuery) -> CompiledFilter {
    FilterCompiler::default().compile(query)
}
