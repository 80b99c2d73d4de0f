//! Typed parameter values.
//!
//! Query parameters whose server-side domain is a closed set of tokens are
//! modelled as enums, so a typed setter can never produce an out-of-domain
//! value. Parsing from strings (the CLI, raw requests) is strict and fails with
//! [`RequestError::InvalidParameterValue`].

use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::RequestError;

// ---------------------------------------------------------------------------
// Macro for wire-token enums.
// Generates: enum with serde renames, ALL, as_str(), Display and a strict
// FromStr over the listed tokens.
// ---------------------------------------------------------------------------
macro_rules! token_enum {
    (
        $(#[$attr:meta])*
        $name:ident {
            $(
                $(#[$vattr:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vattr])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the wire token.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = RequestError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    _ => Err(RequestError::InvalidParameterValue {
                        value: s.to_owned(),
                        expected: format!(
                            "one of {}",
                            [$($token),+].join(", ")
                        ),
                    }),
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Token enums
// ---------------------------------------------------------------------------

token_enum! {
    /// When changes made by a write become visible to search.
    Refresh {
        /// Refresh the affected shards immediately.
        True => "true",
        /// Do not refresh.
        False => "false",
        /// Block until a scheduled refresh makes the change visible.
        WaitFor => "wait_for",
    }
}

impl From<bool> for Refresh {
    fn from(value: bool) -> Self {
        if value { Refresh::True } else { Refresh::False }
    }
}

token_enum! {
    /// Versioning scheme for optimistic concurrency.
    VersionType {
        Internal => "internal",
        External => "external",
        ExternalGte => "external_gte",
        Force => "force",
    }
}

token_enum! {
    /// Behaviour of an index call when the id already exists.
    OpType {
        Index => "index",
        Create => "create",
    }
}

token_enum! {
    /// Which kinds of indices a wildcard expression may expand to.
    ExpandWildcards {
        All => "all",
        Open => "open",
        Closed => "closed",
        Hidden => "hidden",
        None => "none",
    }
}

token_enum! {
    /// Unit used by cat APIs to display byte values.
    Bytes {
        B => "b",
        K => "k",
        Kb => "kb",
        M => "m",
        Mb => "mb",
        G => "g",
        Gb => "gb",
        T => "t",
        Tb => "tb",
        P => "p",
        Pb => "pb",
    }
}

token_enum! {
    /// Grouping applied by the task list API.
    GroupBy {
        Nodes => "nodes",
        Parents => "parents",
        None => "none",
    }
}

token_enum! {
    /// Index health filter for `cat.indices`.
    Health {
        Green => "green",
        Yellow => "yellow",
        Red => "red",
    }
}

token_enum! {
    /// What a by-query operation does on version conflicts.
    Conflicts {
        Abort => "abort",
        Proceed => "proceed",
    }
}

token_enum! {
    /// Default boolean operator for query-string queries.
    DefaultOperator {
        And => "AND",
        Or => "OR",
    }
}

token_enum! {
    /// Scoring mode of a search.
    SearchType {
        QueryThenFetch => "query_then_fetch",
        DfsQueryThenFetch => "dfs_query_then_fetch",
    }
}

token_enum! {
    /// Response format requested from the server.
    ///
    /// Setting the `format` parameter also selects the matching `Accept` header,
    /// see [`Format::mime_type`].
    Format {
        Json => "json",
        Yaml => "yaml",
        Cbor => "cbor",
        Smile => "smile",
        Txt => "txt",
    }
}

impl Format {
    /// MIME type sent as `Accept` when this format is selected.
    pub fn mime_type(self) -> &'static str {
        match self {
            Format::Json => "application/json",
            Format::Yaml => "application/yaml",
            Format::Cbor => "application/cbor",
            Format::Smile => "application/smile",
            Format::Txt => "text/plain",
        }
    }
}

// ---------------------------------------------------------------------------
// Time values
// ---------------------------------------------------------------------------

const TIME_UNITS: &[&str] = &["nanos", "micros", "ms", "s", "m", "h", "d"];

/// A server time value such as `30s`, `1m` or `-1`.
///
/// Valid forms are a non-negative integer followed by one of the units
/// `d`, `h`, `m`, `s`, `ms`, `micros`, `nanos`, or the bare values `-1`
/// (no timeout / infinite) and `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Time(String);

impl Time {
    /// `n` seconds.
    pub fn seconds(n: u64) -> Self {
        Self(format!("{n}s"))
    }

    /// `n` milliseconds.
    pub fn millis(n: u64) -> Self {
        Self(format!("{n}ms"))
    }

    /// `n` minutes.
    pub fn minutes(n: u64) -> Self {
        Self(format!("{n}m"))
    }

    /// `n` hours.
    pub fn hours(n: u64) -> Self {
        Self(format!("{n}h"))
    }

    /// `n` days.
    pub fn days(n: u64) -> Self {
        Self(format!("{n}d"))
    }

    /// The `-1` sentinel.
    pub fn minus_one() -> Self {
        Self("-1".to_owned())
    }

    /// The `0` sentinel.
    pub fn zero() -> Self {
        Self("0".to_owned())
    }

    /// Returns the wire form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Time {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-1" || s == "0" {
            return Ok(Self(s.to_owned()));
        }
        let digits = s.chars().take_while(char::is_ascii_digit).count();
        let (number, unit) = s.split_at(digits);
        if !number.is_empty() && TIME_UNITS.contains(&unit) {
            Ok(Self(s.to_owned()))
        } else {
            Err(RequestError::InvalidParameterValue {
                value: s.to_owned(),
                expected: format!(
                    "a time value such as `30s` (units: {}) or `-1`/`0`",
                    TIME_UNITS.join(", ")
                ),
            })
        }
    }
}

impl TryFrom<String> for Time {
    type Error = RequestError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Time> for String {
    fn from(value: Time) -> Self {
        value.0
    }
}

impl From<Duration> for Time {
    /// Uses the largest unit that represents the duration exactly.
    fn from(value: Duration) -> Self {
        let nanos = value.as_nanos();
        if nanos == 0 {
            return Self::zero();
        }
        const UNITS: &[(u128, &str)] = &[
            (86_400_000_000_000, "d"),
            (3_600_000_000_000, "h"),
            (60_000_000_000, "m"),
            (1_000_000_000, "s"),
            (1_000_000, "ms"),
            (1_000, "micros"),
        ];
        for (size, unit) in UNITS {
            if nanos % size == 0 {
                return Self(format!("{}{unit}", nanos / size));
            }
        }
        Self(format!("{nanos}nanos"))
    }
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// A UTC wall-clock timestamp.
///
/// Wraps [`chrono::DateTime<Utc>`] so callers never depend on `chrono` types
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current UTC time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a [`Timestamp`] from a [`DateTime<Utc>`].
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the underlying [`DateTime<Utc>`].
    pub fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("30s")]
    #[case("1m")]
    #[case("250ms")]
    #[case("2d")]
    #[case("10micros")]
    #[case("-1")]
    #[case("0")]
    fn accepts_server_time_values(#[case] input: &str) {
        assert_eq!(input.parse::<Time>().unwrap().as_str(), input);
    }

    #[rstest]
    #[case("")]
    #[case("s")]
    #[case("30")]
    #[case("30 s")]
    #[case("1.5s")]
    #[case("-2")]
    #[case("10y")]
    fn rejects_malformed_time_values(#[case] input: &str) {
        assert!(matches!(
            input.parse::<Time>(),
            Err(RequestError::InvalidParameterValue { .. })
        ));
    }

    #[rstest]
    #[case(Duration::from_secs(90), "90s")]
    #[case(Duration::from_secs(120), "2m")]
    #[case(Duration::from_secs(7200), "2h")]
    #[case(Duration::from_millis(1500), "1500ms")]
    #[case(Duration::ZERO, "0")]
    fn durations_use_the_largest_exact_unit(#[case] input: Duration, #[case] expected: &str) {
        assert_eq!(Time::from(input).as_str(), expected);
    }

    #[test]
    fn formats_map_to_accept_mime_types() {
        assert_eq!(Format::Yaml.mime_type(), "application/yaml");
        assert_eq!(Format::Txt.mime_type(), "text/plain");
        assert_eq!(Format::ALL.len(), 5);
    }

    #[test]
    fn token_parsing_is_case_sensitive_and_lists_the_domain() {
        assert_eq!("wait_for".parse::<Refresh>().unwrap(), Refresh::WaitFor);
        let err = "WAIT_FOR".parse::<Refresh>().unwrap_err();
        assert_eq!(
            err,
            RequestError::InvalidParameterValue {
                value: "WAIT_FOR".into(),
                expected: "one of true, false, wait_for".into(),
            }
        );
    }

    #[test]
    fn tokens_serialize_as_wire_strings() {
        let json = serde_json::to_string(&DefaultOperator::And).unwrap();
        assert_eq!(json, "\"AND\"");
    }
}
