//! Ordered multi-map view of a query string.
//!
//! A query string is a sequence of form-encoded `key=value` pairs in which
//! keys may repeat. `QueryMap` preserves that sequence exactly, so pairs the
//! library does not manage survive a read/modify/write cycle byte-for-byte
//! in their original positions.

use std::fmt;

/// An ordered string multi-map parsed from a query string.
///
/// Lookup and mutation follow the conventional query-parameter semantics:
/// [`get`] returns the first match, [`set`] replaces the first occurrence in
/// place and drops any later duplicates (appending at the tail when the key
/// is new), and [`delete`] removes every occurrence.
///
/// Parsing never fails; malformed escape sequences decode lossily.
///
/// [`get`]: QueryMap::get
/// [`set`]: QueryMap::set
/// [`delete`]: QueryMap::delete
///
/// # Examples
///
/// ```
/// use uri_state::QueryMap;
///
/// let mut params = QueryMap::parse("a=1&b=2&a=3");
/// assert_eq!(params.get("a"), Some("1"));
///
/// params.set("a", "9");
/// params.delete("b");
/// assert_eq!(params.to_query_string(), "a=9");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    pairs: Vec<(String, String)>,
}

impl QueryMap {
    /// Create an empty query map.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string into its ordered pairs.
    ///
    /// Accepts the bare query component with or without a single leading
    /// `?`. Percent-escapes and `+` (space) are decoded; empty segments are
    /// skipped; a pair without `=` yields an empty value.
    pub fn parse(query: &str) -> Self {
        let raw = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: form_urlencoded::parse(raw.as_bytes()).into_owned().collect(),
        }
    }

    /// Get the value of the first pair with the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether any pair has the given key.
    pub fn has(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Set the value for a key, collapsing duplicates.
    ///
    /// The first occurrence keeps its position and receives the new value;
    /// later occurrences are removed. A key not yet present is appended at
    /// the tail.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        let Some(first) = self.pairs.iter().position(|(k, _)| *k == key) else {
            self.pairs.push((key, value));
            return;
        };
        self.pairs[first].1 = value;
        let mut index = 0;
        self.pairs.retain(|(k, _)| {
            let keep = index == first || *k != key;
            index += 1;
            keep
        });
    }

    /// Remove every pair with the given key.
    pub fn delete(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    /// Append a pair at the tail without touching existing occurrences.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Number of pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if the map has no pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize back to a form-encoded query string (no leading `?`).
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.pairs {
            serializer.append_pair(k, v);
        }
        serializer.finish()
    }
}

impl fmt::Display for QueryMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl FromIterator<(String, String)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let params = QueryMap::parse("a=1&b=2");
        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.get("b"), Some("2"));
        assert_eq!(params.get("c"), None);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_parse_leading_question_mark() {
        let params = QueryMap::parse("?a=1");
        assert_eq!(params.get("a"), Some("1"));
    }

    #[test]
    fn test_parse_empty() {
        assert!(QueryMap::parse("").is_empty());
        assert!(QueryMap::parse("?").is_empty());
    }

    #[test]
    fn test_parse_missing_value() {
        let params = QueryMap::parse("a&b=");
        assert_eq!(params.get("a"), Some(""));
        assert_eq!(params.get("b"), Some(""));
    }

    #[test]
    fn test_parse_decodes_escapes() {
        let params = QueryMap::parse("q=hello+world&r=a%26b");
        assert_eq!(params.get("q"), Some("hello world"));
        assert_eq!(params.get("r"), Some("a&b"));
    }

    #[test]
    fn test_get_first_match() {
        let params = QueryMap::parse("a=1&a=2");
        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_set_replaces_in_place_and_dedupes() {
        let mut params = QueryMap::parse("a=1&b=2&a=3");
        params.set("a", "9");
        assert_eq!(params.to_query_string(), "a=9&b=2");
    }

    #[test]
    fn test_set_appends_new_key() {
        let mut params = QueryMap::parse("a=1");
        params.set("b", "2");
        assert_eq!(params.to_query_string(), "a=1&b=2");
    }

    #[test]
    fn test_delete_removes_all() {
        let mut params = QueryMap::parse("a=1&b=2&a=3");
        params.delete("a");
        assert_eq!(params.to_query_string(), "b=2");
    }

    #[test]
    fn test_append_keeps_duplicates() {
        let mut params = QueryMap::new();
        params.append("a", "1");
        params.append("a", "2");
        assert_eq!(params.to_query_string(), "a=1&a=2");
    }

    #[test]
    fn test_serialize_encodes() {
        let mut params = QueryMap::new();
        params.set("q", "hello world");
        params.set("r", "a&b");
        assert_eq!(params.to_query_string(), "q=hello+world&r=a%26b");
    }

    #[test]
    fn test_roundtrip_preserves_order() {
        let query = "z=1&m=2&a=3";
        assert_eq!(QueryMap::parse(query).to_query_string(), query);
    }
}
