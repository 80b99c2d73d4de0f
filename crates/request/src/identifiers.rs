//! Newtype route identifiers.
//!
//! Every value that can be bound into a path segment is a distinct newtype so
//! an index name cannot be passed where a document id is expected, even though
//! both are strings on the wire.
//!
//! Two shapes exist:
//!
//! - single identifiers (`string_id!`), bound as one path segment value;
//! - identifier lists (`list_id!`), bound as a comma-joined segment value.
//!
//! Empty values are representable through the `From` conversions; a route
//! value that is empty counts as unbound when a request is resolved.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RequestError;
use crate::route::RouteValue;

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display,
// From<&str>/From<String> and the RouteValue conversion.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$name> for RouteValue {
            fn from(value: $name) -> Self {
                RouteValue::Single(value.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Macro for comma-joined identifier lists.
// Generates: struct, new() from any iterator, as_slice(), Display (joined),
// From<&str> splitting on ',', FromIterator and the RouteValue conversion.
// ---------------------------------------------------------------------------
macro_rules! list_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Vec<String>);

        impl $name {
            /// Creates a list from any sequence of names. Empty names are dropped.
            pub fn new<I, S>(values: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                Self(
                    values
                        .into_iter()
                        .map(Into::into)
                        .filter(|v: &String| !v.is_empty())
                        .collect(),
                )
            }

            /// Returns the names in insertion order.
            pub fn as_slice(&self) -> &[String] {
                &self.0
            }

            /// Returns `true` if the list holds no names.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Returns the number of names in the list.
            pub fn len(&self) -> usize {
                self.0.len()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0.join(","))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value.split(',').map(str::trim))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl From<Vec<String>> for $name {
            fn from(values: Vec<String>) -> Self {
                Self::new(values)
            }
        }

        impl<const N: usize> From<[&str; N]> for $name {
            fn from(values: [&str; N]) -> Self {
                Self::new(values)
            }
        }

        impl<S: Into<String>> FromIterator<S> for $name {
            fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
                Self::new(iter)
            }
        }

        impl From<$name> for RouteValue {
            fn from(value: $name) -> Self {
                RouteValue::List(value.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Single identifiers
// ---------------------------------------------------------------------------

string_id! {
    /// Name of one index, alias or data stream.
    IndexName
}

string_id! {
    /// Document identifier.
    ///
    /// Numeric ids are accepted through `From<u64>` and rendered in decimal.
    Id
}

impl From<u64> for Id {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

string_id! {
    /// Generic resource name: snapshot repository, snapshot, stored script,
    /// ingest pipeline, feature, grok pattern set.
    Name
}

string_id! {
    /// Identifier of one cluster node, as reported by the nodes API.
    NodeId
}

string_id! {
    /// UUID of an index, used by the dangling-indices endpoints.
    IndexUuid
}

string_id! {
    /// Logical kind of a domain document.
    ///
    /// Kinds are mapped to default index names through
    /// `IndexMappings`; no type metadata is inspected at runtime.
    DocumentKind
}

// ---------------------------------------------------------------------------
// Identifier lists
// ---------------------------------------------------------------------------

list_id! {
    /// One or more index names, bound comma-joined. Use [`Indices::all`] for
    /// the `_all` wildcard.
    Indices
}

impl Indices {
    /// The `_all` wildcard that targets every index.
    pub fn all() -> Self {
        Self(vec!["_all".to_owned()])
    }
}

impl From<IndexName> for Indices {
    fn from(value: IndexName) -> Self {
        Self::new([value.0])
    }
}

list_id! {
    /// One or more resource names (snapshots, repositories, pipelines, aliases).
    Names
}

impl From<Name> for Names {
    fn from(value: Name) -> Self {
        Self::new([value.0])
    }
}

list_id! {
    /// One or more node ids.
    NodeIds
}

list_id! {
    /// One or more field names or wildcard patterns.
    Fields
}

// ---------------------------------------------------------------------------
// Task identifiers
// ---------------------------------------------------------------------------

/// Identifies a running task as `node:number`.
///
/// Parsing is strict: both halves must be present and the number must be a
/// non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId {
    node: NodeId,
    number: u64,
}

impl TaskId {
    /// Creates a task id from its node and sequence number.
    pub fn new(node: impl Into<NodeId>, number: u64) -> Self {
        Self {
            node: node.into(),
            number,
        }
    }

    /// Node the task runs on.
    pub fn node(&self) -> &NodeId {
        &self.node
    }

    /// Per-node task sequence number.
    pub fn number(&self) -> u64 {
        self.number
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.node, self.number)
    }
}

impl FromStr for TaskId {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RequestError::InvalidParameterValue {
            value: s.to_owned(),
            expected: "a task id of the form `node:number`".to_owned(),
        };
        let (node, number) = s.split_once(':').ok_or_else(invalid)?;
        let node = NodeId::new(node).ok_or_else(invalid)?;
        let number = number.parse::<u64>().map_err(|_| invalid())?;
        Ok(Self { node, number })
    }
}

impl TryFrom<String> for TaskId {
    type Error = RequestError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TaskId> for String {
    fn from(value: TaskId) -> Self {
        value.to_string()
    }
}

impl From<TaskId> for RouteValue {
    fn from(value: TaskId) -> Self {
        RouteValue::Single(value.to_string())
    }
}
