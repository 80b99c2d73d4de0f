//! Path templates and route resolution.
//!
//! An endpoint declares one or more path templates such as
//! `/{repository}/{snapshot}/_restore`, ordered most specific first. A request
//! binds route values by segment name; [`resolve`] picks the template those
//! values fit and substitutes them, percent-encoding each value.
//!
//! ## Selection rules
//!
//! 1. The first template whose every parameter is bound, and which uses every
//!    bound value, is selected.
//! 2. Otherwise, if some template uses every bound value, resolution fails with
//!    [`RequestError::MissingRouteValue`] naming the first unbound segment of
//!    the template with the fewest unbound segments.
//! 3. Otherwise a bound value fits no template and resolution fails with
//!    [`RequestError::UnexpectedRouteValue`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::errors::RequestError;

// ---------------------------------------------------------------------------
// Route values
// ---------------------------------------------------------------------------

/// A value bound to one path segment: a single scalar or a list rendered
/// comma-joined.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteValue {
    /// One value, e.g. a document id.
    Single(String),
    /// Several values, e.g. a list of indices.
    List(Vec<String>),
}

impl RouteValue {
    /// Returns `true` if the value would render as an empty segment.
    pub fn is_empty(&self) -> bool {
        match self {
            RouteValue::Single(v) => v.is_empty(),
            RouteValue::List(vs) => vs.iter().all(String::is_empty),
        }
    }

    /// Renders the value for substitution into a path: each element is
    /// percent-encoded, list elements are joined with `,`.
    pub fn encode(&self) -> String {
        match self {
            RouteValue::Single(v) => urlencoding::encode(v).into_owned(),
            RouteValue::List(vs) => vs
                .iter()
                .filter(|v| !v.is_empty())
                .map(|v| urlencoding::encode(v))
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl std::fmt::Display for RouteValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteValue::Single(v) => f.write_str(v),
            RouteValue::List(vs) => f.write_str(&vs.join(",")),
        }
    }
}

impl From<&str> for RouteValue {
    fn from(value: &str) -> Self {
        RouteValue::Single(value.to_owned())
    }
}

impl From<String> for RouteValue {
    fn from(value: String) -> Self {
        RouteValue::Single(value)
    }
}

impl From<Vec<String>> for RouteValue {
    fn from(values: Vec<String>) -> Self {
        RouteValue::List(values)
    }
}

// ---------------------------------------------------------------------------

/// The route values bound on one request, keyed by segment name.
///
/// Binding the same name twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteValues(BTreeMap<String, RouteValue>);

impl RouteValues {
    /// Creates an empty set of route values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `value` to the segment `name`, replacing any previous value.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<RouteValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Removes the value bound to `name`.
    pub fn unbind(&mut self, name: &str) -> Option<RouteValue> {
        self.0.remove(name)
    }

    /// Returns the value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&RouteValue> {
        self.0.get(name)
    }

    /// Returns `true` if `name` holds a non-empty value.
    pub fn is_bound(&self, name: &str) -> bool {
        self.0.get(name).is_some_and(|v| !v.is_empty())
    }

    /// Iterates over the names holding non-empty values, in name order.
    pub fn bound_names(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, _)| k.as_str())
    }

    /// Iterates over every binding, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns `true` if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

/// One `/`-separated piece of a path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Static text such as `_doc`.
    Literal(&'a str),
    /// A `{name}` placeholder.
    Param(&'a str),
}

/// Classifies one piece of a template.
fn classify_segment(piece: &str) -> Segment<'_> {
    match piece.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        Some(name) => Segment::Param(name),
        None => Segment::Literal(piece),
    }
}

/// A parsed path template.
///
/// Parsing never fails: anything that is not a `{name}` placeholder is
/// literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate<'a> {
    source: &'a str,
    segments: Vec<Segment<'a>>,
}

impl<'a> RouteTemplate<'a> {
    /// Parses `source`, e.g. `"/{index}/_doc/{id}"`.
    pub fn parse(source: &'a str) -> Self {
        let segments = source
            .split('/')
            .filter(|piece| !piece.is_empty())
            .map(classify_segment)
            .collect();
        Self { source, segments }
    }

    /// The template text as declared.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The parsed segments, in path order.
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Names of the placeholders, in path order.
    pub fn params(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(*name),
            Segment::Literal(_) => None,
        })
    }

    /// Returns `true` if the template has a `{name}` placeholder.
    pub fn has_param(&self, name: &str) -> bool {
        self.params().any(|p| p == name)
    }

    /// Substitutes bound values into the template.
    ///
    /// Returns the first placeholder with no bound value as the error.
    pub fn render(&self, values: &RouteValues) -> Result<String, &'a str> {
        if self.segments.is_empty() {
            return Ok("/".to_owned());
        }
        let mut path = String::with_capacity(self.source.len());
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Param(name) => match values.get(name) {
                    Some(value) if !value.is_empty() => path.push_str(&value.encode()),
                    _ => return Err(*name),
                },
            }
        }
        Ok(path)
    }

    fn missing<'v>(&'v self, values: &'v RouteValues) -> impl Iterator<Item = &'a str> + 'v {
        self.params().filter(|p| !values.is_bound(p))
    }
}

impl std::fmt::Display for RouteTemplate<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.source)
    }
}

/// A named route segment of an endpoint and whether every template needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSegment {
    /// Placeholder name, e.g. `"index"`.
    pub name: &'static str,
    /// `true` if the segment appears in every template of the endpoint.
    pub required: bool,
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Picks the template of `endpoint` that `values` fit and renders it.
///
/// `templates` must be ordered most specific first.
pub fn resolve(
    endpoint: &'static str,
    templates: &[RouteTemplate<'_>],
    values: &RouteValues,
) -> Result<String, RequestError> {
    let fits_all_bound = |template: &RouteTemplate<'_>| {
        values.bound_names().all(|name| template.has_param(name))
    };

    for template in templates.iter().filter(|t| fits_all_bound(*t)) {
        if let Ok(path) = template.render(values) {
            trace!(endpoint, template = template.source(), path = %path, "Selected route template");
            return Ok(path);
        }
    }

    let closest = templates
        .iter()
        .filter(|t| fits_all_bound(*t))
        .min_by_key(|t| t.missing(values).count());

    match closest {
        Some(template) => {
            let segment = template.missing(values).next().unwrap_or_default();
            Err(RequestError::MissingRouteValue {
                endpoint,
                segment: segment.to_owned(),
            })
        }
        None => {
            let segment = values
                .bound_names()
                .find(|name| !templates.iter().any(|t| t.has_param(name)))
                .or_else(|| values.bound_names().next())
                .unwrap_or_default();
            Err(RequestError::UnexpectedRouteValue {
                endpoint,
                segment: segment.to_owned(),
            })
        }
    }
}
