//! Ordered lists of upstream variable names and previous-day expansion.

use std::fmt;

/// Variables for which the previous-runs API offers `_previous_dayN` fields.
pub const EXPANDABLE_VARIABLES: [&str; 2] = ["temperature_2m", "precipitation"];

/// Suffix marking a value taken from an earlier model run.
pub const PREVIOUS_DAY_SUFFIX: &str = "_previous_day";

/// An ordered list of variable or model names.
///
/// Tool arguments arrive comma-joined; this keeps them as separate tokens
/// until the query is serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableList(Vec<String>);

impl VariableList {
    /// Parses a comma-separated list. Tokens are trimmed and empty tokens dropped.
    pub fn parse(input: &str) -> Self {
        let tokens = input
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
        VariableList(tokens)
    }

    /// Parses an optional argument, treating an absent value like an empty one.
    pub fn parse_optional(input: Option<&str>) -> Self {
        input.map(Self::parse).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The comma-joined form sent upstream.
    pub fn to_query_value(&self) -> String {
        self.0.join(",")
    }

    /// Appends previous-day variants after each expandable variable.
    ///
    /// Each base token keeps its position and is immediately followed by
    /// `<token>_previous_day1..=previous_days`. A variable is left alone when
    /// any base token already mentions one of its previous-day variants.
    pub fn with_previous_days(&self, previous_days: u8) -> Self {
        let mut expanded = Vec::with_capacity(self.len());

        for token in &self.0 {
            expanded.push(token.clone());

            if !is_expandable(token) || self.mentions_previous_day_of(token) {
                continue;
            }

            for day in 1..=previous_days {
                expanded.push(previous_day_variant(token, day));
            }
        }

        VariableList(expanded)
    }

    fn mentions_previous_day_of(&self, variable: &str) -> bool {
        let marker = format!("{}{}", variable, PREVIOUS_DAY_SUFFIX);
        self.iter().any(|token| token.contains(&marker))
    }
}

impl fmt::Display for VariableList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query_value())
    }
}

/// Whether the previous-runs API offers previous-day fields for this variable.
pub fn is_expandable(variable: &str) -> bool {
    EXPANDABLE_VARIABLES.contains(&variable)
}

/// Builds the name of a variable's value from `day` days earlier.
pub fn previous_day_variant(variable: &str, day: u8) -> String {
    format!("{}{}{}", variable, PREVIOUS_DAY_SUFFIX, day)
}
