// crates/nomad-core/src/query/mod.rs

//! # URL filter state
//!
//! The query string is the only persisted form of [`crate::FilterParams`].
//! [`QueryString`] is an ordered key/value list with `URLSearchParams`-like
//! editing, [`codec`] maps it to and from filter params, and [`navigator`]
//! binds the codec to a navigation backend.

pub mod codec;
pub mod navigator;

pub use codec::{apply_update, decode, decode_str, encode, reset, FilterUpdate, RECOGNIZED_KEYS};
pub use navigator::{FilterState, MemoryNavigator, NavigateOptions, Navigator};

use std::fmt;
use url::form_urlencoded;

/// Ordered, possibly repeated, decoded query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `a=1&b=2`, with or without a leading `?`. Never fails;
    /// undecodable bytes are replaced.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: form_urlencoded::parse(query.as_bytes()).into_owned().collect(),
        }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Replaces the first occurrence in place and drops any repeats;
    /// appends when the key is absent.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = k != key || index == first;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Percent-encoded form without the leading `?`.
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query())
    }
}

impl From<&str> for QueryString {
    fn from(query: &str) -> Self {
        Self::parse(query)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryString {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_question_mark() {
        assert_eq!(QueryString::parse("?a=1&b=2"), QueryString::parse("a=1&b=2"));
        assert_eq!(QueryString::parse("?").len(), 0);
        assert_eq!(QueryString::parse("").len(), 0);
    }

    #[test]
    fn decodes_percent_and_plus() {
        let q = QueryString::parse("search=jeju+si&regions=seoul%2Cjeju");
        assert_eq!(q.get("search"), Some("jeju si"));
        assert_eq!(q.get("regions"), Some("seoul,jeju"));
    }

    #[test]
    fn set_replaces_in_place_and_drops_repeats() {
        let mut q = QueryString::parse("a=1&b=2&a=3&c=4");
        q.set("a", "9");
        assert_eq!(q.to_query(), "a=9&b=2&c=4");
        q.set("d", "5");
        assert_eq!(q.to_query(), "a=9&b=2&c=4&d=5");
    }

    #[test]
    fn remove_drops_every_occurrence() {
        let mut q = QueryString::parse("a=1&b=2&a=3");
        q.remove("a");
        assert_eq!(q.to_query(), "b=2");
        assert!(!q.contains_key("a"));
    }

    #[test]
    fn serializes_with_percent_encoding() {
        let q: QueryString = [("search", "강릉 city"), ("regions", "a,b")].into_iter().collect();
        let text = q.to_string();
        assert_eq!(QueryString::parse(&text), q);
        assert!(text.contains("regions=a%2Cb"));
    }
}
