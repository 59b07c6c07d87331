//! ArgBag - 呼び出し側から渡されるキーワード引数の集合
//!
//! Backed by `serde_json::Map` with `preserve_order`, so iteration follows
//! insertion order and a partition keeps the caller's ordering.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::SieveError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArgBag(Map<String, Value>);

impl ArgBag {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Parse one `key=value` command-line argument.
    ///
    /// The value is read as JSON when it parses (`b=5` → `5`, `c=null` → `null`)
    /// and kept as a plain string otherwise (`a=hi` → `"hi"`).
    pub fn parse_pair(raw: &str) -> Result<(String, Value), SieveError> {
        let (key, value) = raw
            .split_once('=')
            .ok_or_else(|| SieveError::InvalidPair(raw.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(SieveError::InvalidPair(raw.to_string()));
        }
        let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
        Ok((key.to_string(), value))
    }
}

impl From<Map<String, Value>> for ArgBag {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<ArgBag> for Value {
    fn from(bag: ArgBag) -> Self {
        bag.into_value()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ArgBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = ArgBag::new();
        for (k, v) in iter {
            bag.insert(k, v);
        }
        bag
    }
}

/// Entries of an `ArgBag` in insertion order.
pub struct Iter<'a>(serde_json::map::Iter<'a>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> IntoIterator for &'a ArgBag {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
