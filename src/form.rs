//! URL-encoded request parameters.
//!
//! Write requests send `application/x-www-form-urlencoded` bodies and list
//! requests send the same encoding as a query string. Parameters keep their
//! insertion order, and absent values are never written as empty strings.

use std::fmt::Display;
use url::form_urlencoded;

/// An ordered set of form parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormParams {
    pairs: Vec<(String, String)>,
}

impl FormParams {
    /// An empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing an earlier value for the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Display) -> &mut Self {
        let key = key.into();
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
        self
    }

    /// Set `key` only when `value` is present.
    pub fn set_opt<V: Display>(&mut self, key: impl Into<String>, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.set(key, value);
        }
        self
    }

    /// Set `key` only when `value` is a non-empty string.
    pub fn set_str(&mut self, key: impl Into<String>, value: Option<&str>) -> &mut Self {
        self.set_opt(key, value.filter(|v| !v.is_empty()))
    }

    /// The unencoded value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All pairs in insertion order, unencoded.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Encode as `k1=v1&k2=v2`.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Append as a query string to `path`, or return `path` unchanged when empty.
    pub fn to_query(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{}", self.encode())
        }
    }
}

/// Paging for list endpoints.
///
/// The server defaults to 10 items from offset 0. Negative values select that
/// default and are never sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    count: Option<u64>,
    offset: Option<u64>,
}

impl ListOptions {
    /// Server defaults for both count and offset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items to return. Negative means default.
    ///
    /// The server caps pages at 100 items; larger values are sent unchanged.
    pub fn count(mut self, count: i64) -> Self {
        self.count = u64::try_from(count).ok();
        self
    }

    /// Number of most recent items to skip. Negative means default.
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = u64::try_from(offset).ok();
        self
    }

    pub(crate) fn apply(&self, params: &mut FormParams) {
        params.set_opt("count", self.count);
        params.set_opt("offset", self.offset);
    }

    pub(crate) fn to_params(self) -> FormParams {
        let mut params = FormParams::new();
        self.apply(&mut params);
        params
    }
}
