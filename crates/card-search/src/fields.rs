//! Canonical field names, aliases, and the numeric field set.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Serialize, Serializer};

/// Short aliases accepted in place of canonical field names.
///
/// Keys are lower-case; lookups lower-case the raw field first.
pub const FIELD_ALIASES: &[(&str, &str)] = &[
    ("o", "text"),
    ("oracle", "text"),
    ("t", "type"),
    ("c", "clan"),
    ("s", "set"),
    ("f", "force"),
    ("format", "format"),
    ("r", "rarity"),
    ("side", "deck"),
    ("gold", "gold_cost"),
    ("ph", "personal_honor"),
    ("province", "province_strength"),
    ("startinghonor", "starting_honor"),
    ("has", "is"),
];

static ALIAS_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| FIELD_ALIASES.iter().copied().collect());

/// Integer-ranged card attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumericField {
    Force,
    Chi,
    HonorRequirement,
    GoldCost,
    PersonalHonor,
    GoldProduction,
    ProvinceStrength,
    StartingHonor,
    Focus,
}

impl NumericField {
    /// Every member of the numeric field set.
    pub const ALL: [NumericField; 9] = [
        NumericField::Force,
        NumericField::Chi,
        NumericField::HonorRequirement,
        NumericField::GoldCost,
        NumericField::PersonalHonor,
        NumericField::GoldProduction,
        NumericField::ProvinceStrength,
        NumericField::StartingHonor,
        NumericField::Focus,
    ];

    /// Returns the canonical attribute name.
    pub fn as_str(self) -> &'static str {
        match self {
            NumericField::Force => "force",
            NumericField::Chi => "chi",
            NumericField::HonorRequirement => "honor_requirement",
            NumericField::GoldCost => "gold_cost",
            NumericField::PersonalHonor => "personal_honor",
            NumericField::GoldProduction => "gold_production",
            NumericField::ProvinceStrength => "province_strength",
            NumericField::StartingHonor => "starting_honor",
            NumericField::Focus => "focus",
        }
    }

    /// Looks up a canonical (already lower-cased, alias-resolved) name.
    pub fn from_canonical(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A canonical search field.
///
/// Every raw field name written in an expression resolves to exactly one
/// variant. Names that match no known attribute are kept verbatim
/// (lower-cased) in [`Field::Other`] and are ignored by the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    /// Rules text (`text`, `o`, `oracle`).
    Text,
    /// Card name.
    Name,
    /// Flags and keywords (`is`, `has`).
    Is,
    /// Fate or dynasty deck (`deck`, `side`).
    Deck,
    /// Card type (`type`, `t`).
    Type,
    /// Clan (`clan`, `c`).
    Clan,
    /// Printing set (`set`, `s`).
    Set,
    /// Rarity (`rarity`, `r`).
    Rarity,
    /// Format legality (`format`).
    Format,
    /// One of the integer-ranged attributes.
    Numeric(NumericField),
    /// Any other field name, lower-cased.
    Other(String),
}

impl Field {
    /// Resolves a raw field name to its canonical field.
    ///
    /// Matching is case-insensitive and idempotent: canonicalizing the
    /// result's [`as_str`](Field::as_str) yields the same field.
    ///
    /// # Example
    ///
    /// ```
    /// use card_search::{Field, NumericField};
    ///
    /// assert_eq!(Field::canonicalize("F"), Field::Numeric(NumericField::Force));
    /// assert_eq!(Field::canonicalize("has"), Field::Is);
    /// ```
    pub fn canonicalize(raw: &str) -> Self {
        let canonical = normalize_field_name(raw);
        match canonical.as_str() {
            "text" => Field::Text,
            "name" => Field::Name,
            "is" => Field::Is,
            "deck" => Field::Deck,
            "type" => Field::Type,
            "clan" => Field::Clan,
            "set" => Field::Set,
            "rarity" => Field::Rarity,
            "format" => Field::Format,
            other => match NumericField::from_canonical(other) {
                Some(numeric) => Field::Numeric(numeric),
                None => Field::Other(canonical),
            },
        }
    }

    /// Returns the canonical field name.
    pub fn as_str(&self) -> &str {
        match self {
            Field::Text => "text",
            Field::Name => "name",
            Field::Is => "is",
            Field::Deck => "deck",
            Field::Type => "type",
            Field::Clan => "clan",
            Field::Set => "set",
            Field::Rarity => "rarity",
            Field::Format => "format",
            Field::Numeric(numeric) => numeric.as_str(),
            Field::Other(name) => name,
        }
    }

    /// Returns true if the field is one of the integer-ranged attributes.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::Numeric(_))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Lower-cases a raw field name and resolves it through the alias table.
pub fn normalize_field_name(raw: &str) -> String {
    let lower = raw.to_lowercase();
    match ALIAS_TABLE.get(lower.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => lower,
    }
}

/// Field names with dedicated compilation rules.
pub(crate) const KNOWN_FIELDS: &[&str] = &[
    "text", "name", "is", "deck", "type", "clan", "set", "rarity", "format",
];

/// Every name the user can type that maps to a compiled field, canonical
/// names first, then aliases.
pub(crate) fn known_field_names() -> impl Iterator<Item = &'static str> {
    KNOWN_FIELDS
        .iter()
        .copied()
        .chain(NumericField::ALL.into_iter().map(NumericField::as_str))
        .chain(FIELD_ALIASES.iter().map(|(alias, _)| *alias))
}
