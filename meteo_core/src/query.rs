//! Query parameters sent to an upstream endpoint.

use std::fmt;

use reqwest::Url;

use crate::errors::MeteoError;
use crate::variables::VariableList;

/// A single query-string value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Text(text) => write!(f, "{}", text),
            QueryValue::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Number(value)
    }
}

/// Ordered query parameters for one upstream call.
///
/// Only present values are ever inserted, so every key carries a value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParameters {
    pairs: Vec<(&'static str, QueryValue)>,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, replacing any earlier value for the same key.
    pub fn insert(&mut self, key: &'static str, value: impl Into<QueryValue>) {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Sets a text parameter only if it is non-empty.
    pub fn insert_non_empty(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.insert(key, value);
        }
    }

    /// Sets a list parameter only if the list has entries.
    pub fn insert_list(&mut self, key: &'static str, list: &VariableList) {
        if !list.is_empty() {
            self.insert(key, list.to_query_value());
        }
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Text form of a parameter, as it will appear in the query string.
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| v.to_string())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.pairs.iter().map(|(k, _)| *k).collect()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Appends these parameters to a base endpoint URL.
    pub fn to_url(&self, base: &str) -> Result<Url, MeteoError> {
        let pairs = self.pairs.iter().map(|(k, v)| (*k, v.to_string()));
        Url::parse_with_params(base, pairs).map_err(|e| MeteoError::InvalidUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })
    }
}
