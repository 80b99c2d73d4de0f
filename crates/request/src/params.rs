//! The typed parameter bag carried by every request.
//!
//! A [`ParameterBag`] holds query-string parameters keyed by name, plus the
//! request headers those parameters imply. Keys are unique and the last write
//! wins.
//!
//! ## Side effects
//!
//! The `format` key is coupled to the `accept` header: storing a recognised
//! [`Format`] token also stores its MIME type as `accept`, and removing or
//! replacing it with an unrecognised value clears the derived header. Tokens
//! are matched case-insensitively. A deserialized bag re-derives `accept` from
//! its stored `format`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::RequestError;
use crate::identifiers::{Fields, Indices, Names, NodeIds};
use crate::types::{
    Bytes, Conflicts, DefaultOperator, ExpandWildcards, Format, GroupBy, Health, OpType, Refresh,
    SearchType, Time, VersionType,
};

const FORMAT_KEY: &str = "format";
const ACCEPT_HEADER: &str = "accept";

// ---------------------------------------------------------------------------
// Parameter values
// ---------------------------------------------------------------------------

/// One query parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ParamValue {
    /// `true` / `false`.
    Bool(bool),
    /// A 64-bit integer.
    Integer(i64),
    /// A double.
    Number(f64),
    /// Free text, including time values such as `30s`.
    Text(String),
    /// Several strings, rendered comma-joined.
    List(Vec<String>),
    /// A token from a closed domain, e.g. `wait_for`.
    Token(String),
}

impl ParamValue {
    /// Returns the stored boolean, if this is a [`ParamValue::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the text of a [`ParamValue::Text`] or [`ParamValue::Token`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) | ParamValue::Token(s) => Some(s),
            _ => None,
        }
    }

    /// Unencoded wire form.
    pub fn render(&self) -> String {
        match self {
            ParamValue::Bool(b) => b.to_string(),
            ParamValue::Integer(n) => n.to_string(),
            ParamValue::Number(n) => n.to_string(),
            ParamValue::Text(s) | ParamValue::Token(s) => s.clone(),
            ParamValue::List(items) => items.join(","),
        }
    }

    fn encode(&self) -> String {
        match self {
            ParamValue::List(items) => items
                .iter()
                .map(|item| urlencoding::encode(item))
                .collect::<Vec<_>>()
                .join(","),
            other => urlencoding::encode(&other.render()).into_owned(),
        }
    }

    /// Infers a value from untyped input: booleans and integers are
    /// recognised, everything else is text.
    pub fn infer(raw: &str) -> Self {
        match raw {
            "true" => ParamValue::Bool(true),
            "false" => ParamValue::Bool(false),
            _ => raw
                .parse::<i64>()
                .map(ParamValue::Integer)
                .unwrap_or_else(|_| ParamValue::Text(raw.to_owned())),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Integer(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Integer(value.into())
    }
}

/// Values above `i64::MAX` are kept exact as decimal text.
impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(ParamValue::Integer)
            .unwrap_or_else(|_| ParamValue::Text(value.to_string()))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::List(values)
    }
}

impl From<Time> for ParamValue {
    fn from(value: Time) -> Self {
        ParamValue::Text(value.into())
    }
}

macro_rules! token_params {
    ($($token:ty),+ $(,)?) => {
        $(
            impl From<$token> for ParamValue {
                fn from(value: $token) -> Self {
                    ParamValue::Token(value.as_str().to_owned())
                }
            }
        )+
    };
}

token_params!(
    Refresh,
    VersionType,
    OpType,
    ExpandWildcards,
    Bytes,
    GroupBy,
    Health,
    Conflicts,
    DefaultOperator,
    SearchType,
    Format,
);

macro_rules! list_params {
    ($($list:ty),+ $(,)?) => {
        $(
            impl From<$list> for ParamValue {
                fn from(value: $list) -> Self {
                    ParamValue::List(value.as_slice().to_vec())
                }
            }
        )+
    };
}

list_params!(Indices, Names, NodeIds, Fields);

// ---------------------------------------------------------------------------
// The bag
// ---------------------------------------------------------------------------

/// Query parameters and derived headers of one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredBag")]
pub struct ParameterBag {
    query: BTreeMap<String, ParamValue>,
    headers: BTreeMap<String, String>,
}

/// Serialized shape of a [`ParameterBag`], before derived headers are restored.
#[derive(Default, Deserialize)]
#[serde(default)]
struct StoredBag {
    query: BTreeMap<String, ParamValue>,
    headers: BTreeMap<String, String>,
}

impl From<StoredBag> for ParameterBag {
    fn from(stored: StoredBag) -> Self {
        let mut bag = ParameterBag {
            query: stored.query,
            headers: stored.headers,
        };
        if let Some(format) = bag.query.get(FORMAT_KEY).cloned() {
            bag.sync_accept(Some(&format));
        }
        bag
    }
}

impl ParameterBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        if key == FORMAT_KEY {
            self.sync_accept(Some(&value));
        }
        self.query.insert(key, value);
    }

    /// Stores `value` when it is `Some`, removes `key` when it is `None`.
    pub fn set_opt<V: Into<ParamValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        let key = key.into();
        match value {
            Some(value) => self.set(key, value),
            None => {
                self.remove(&key);
            }
        }
    }

    /// Parses untyped input and stores it under `key`.
    ///
    /// `format` is parsed strictly, ignoring case, into a [`Format`]; other
    /// keys go through [`ParamValue::infer`].
    pub fn set_raw(&mut self, key: impl Into<String>, raw: &str) -> Result<(), RequestError> {
        let key = key.into();
        if key == FORMAT_KEY {
            let format: Format = raw
                .to_ascii_lowercase()
                .parse()
                .map_err(|_| RequestError::InvalidParameterValue {
                    value: raw.to_owned(),
                    expected: format!(
                        "one of {}",
                        Format::ALL.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", ")
                    ),
                })?;
            self.set(key, format);
        } else {
            self.set(key, ParamValue::infer(raw));
        }
        Ok(())
    }

    /// Removes `key`, returning its value. Removing `format` also clears the
    /// derived `accept` header.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let removed = self.query.remove(key);
        if key == FORMAT_KEY && removed.is_some() {
            self.sync_accept(None);
        }
        removed
    }

    /// Returns the value stored under `key`; `None` if the key was never set.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.query.get(key)
    }

    /// Returns `true` if `key` has a value.
    pub fn contains(&self, key: &str) -> bool {
        self.query.contains_key(key)
    }

    /// Iterates over the query parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.query.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of query parameters.
    pub fn len(&self) -> usize {
        self.query.len()
    }

    /// Returns `true` if no query parameter is set.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Unencoded `(key, value)` pairs in key order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query
            .iter()
            .map(|(k, v)| (k.clone(), v.render()))
            .collect()
    }

    /// The percent-encoded query string without a leading `?`; empty when no
    /// parameter is set.
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), v.encode()))
            .collect::<Vec<_>>()
            .join("&")
    }

    // -- headers -------------------------------------------------------------

    /// Sets a request header. Names are stored lowercase.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
    }

    /// Removes a request header.
    pub fn remove_header(&mut self, name: &str) -> Option<String> {
        self.headers.remove(&name.to_ascii_lowercase())
    }

    /// Returns the value of a request header.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Iterates over request headers in name order.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The `accept` header derived from `format`, if any.
    pub fn accept(&self) -> Option<&str> {
        self.header(ACCEPT_HEADER)
    }

    fn sync_accept(&mut self, format: Option<&ParamValue>) {
        let mime = format
            .and_then(ParamValue::as_str)
            .and_then(|token| token.to_ascii_lowercase().parse::<Format>().ok())
            .map(Format::mime_type);
        match mime {
            Some(mime) => {
                self.headers.insert(ACCEPT_HEADER.to_owned(), mime.to_owned());
            }
            None => {
                self.headers.remove(ACCEPT_HEADER);
            }
        }
    }
}
