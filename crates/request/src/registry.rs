//! Static endpoint metadata.
//!
//! Every endpoint is described once by an [`EndpointSpec`]: its dotted name,
//! HTTP verb, path templates (most specific first) and whether it accepts a
//! body. Specs are `'static` data; an [`EndpointRegistry`] indexes a set of
//! them by name for tooling that only knows the endpoint as a string.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::RequestError;
use crate::route::{RouteSegment, RouteTemplate};

// ---------------------------------------------------------------------------
// HTTP verbs
// ---------------------------------------------------------------------------

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// Reads and searches.
    Get,
    /// Writes, and searches that carry a body.
    Post,
    /// Creates or replaces a resource at a known path.
    Put,
    /// Removes a resource.
    Delete,
    /// Existence checks; the response has no body.
    Head,
}

impl HttpMethod {
    /// The method as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Endpoint specs
// ---------------------------------------------------------------------------

/// Immutable description of one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointSpec {
    /// Dotted logical name, e.g. `"snapshot.restore"`.
    pub name: &'static str,
    /// Verb used for every call.
    pub method: HttpMethod,
    /// Path templates, most specific first.
    pub paths: &'static [&'static str],
    /// Whether a request body may be attached.
    pub supports_body: bool,
}

impl EndpointSpec {
    /// Declares an endpoint.
    pub const fn new(
        name: &'static str,
        method: HttpMethod,
        paths: &'static [&'static str],
        supports_body: bool,
    ) -> Self {
        Self {
            name,
            method,
            paths,
            supports_body,
        }
    }

    /// Parses the declared path templates.
    pub fn templates(&self) -> Vec<RouteTemplate<'static>> {
        self.paths.iter().copied().map(RouteTemplate::parse).collect()
    }

    /// Every route segment the endpoint knows, in first-seen order, with
    /// `required` set when the segment appears in all templates.
    pub fn segments(&self) -> Vec<RouteSegment> {
        let templates = self.templates();
        let mut segments: Vec<RouteSegment> = Vec::new();
        for template in &templates {
            for name in template.params() {
                if segments.iter().all(|s| s.name != name) {
                    segments.push(RouteSegment {
                        name,
                        required: templates.iter().all(|t| t.has_param(name)),
                    });
                }
            }
        }
        segments
    }

    /// Returns `true` if `segment` appears in every template.
    pub fn is_required(&self, segment: &str) -> bool {
        self.segments()
            .iter()
            .any(|s| s.name == segment && s.required)
    }
}

/// Implemented by endpoint marker types to expose their spec.
pub trait Endpoint: 'static {
    /// The endpoint's static description.
    fn spec() -> &'static EndpointSpec;
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Name-indexed set of endpoint specs.
#[derive(Debug, Clone, Default)]
pub struct EndpointRegistry {
    by_name: BTreeMap<&'static str, &'static EndpointSpec>,
}

impl EndpointRegistry {
    /// Builds a registry. A later spec with a duplicate name replaces the
    /// earlier one.
    pub fn from_specs(specs: impl IntoIterator<Item = &'static EndpointSpec>) -> Self {
        Self {
            by_name: specs.into_iter().map(|spec| (spec.name, spec)).collect(),
        }
    }

    /// Looks up an endpoint by name.
    pub fn get(&self, name: &str) -> Result<&'static EndpointSpec, RequestError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| RequestError::UnknownEndpoint {
                name: name.to_owned(),
            })
    }

    /// Iterates over every spec in name order.
    pub fn iter(&self) -> impl Iterator<Item = &'static EndpointSpec> + '_ {
        self.by_name.values().copied()
    }

    /// Number of registered endpoints.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns `true` if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    static SNAPSHOT_GET: EndpointSpec = EndpointSpec::new(
        "snapshot.get",
        HttpMethod::Get,
        &["/_snapshot/{repository}/{snapshot}"],
        false,
    );

    static SNAPSHOT_STATUS: EndpointSpec = EndpointSpec::new(
        "snapshot.status",
        HttpMethod::Get,
        &[
            "/_snapshot/{repository}/{snapshot}/_status",
            "/_snapshot/{repository}/_status",
            "/_snapshot/_status",
        ],
        false,
    );

    #[test]
    fn segments_are_required_only_when_every_template_has_them() {
        assert_eq!(
            SNAPSHOT_STATUS.segments(),
            [
                RouteSegment { name: "repository", required: false },
                RouteSegment { name: "snapshot", required: false },
            ]
        );
        assert!(SNAPSHOT_GET.is_required("repository"));
        assert!(SNAPSHOT_GET.is_required("snapshot"));
        assert!(!SNAPSHOT_GET.is_required("index"));
    }

    #[test]
    fn lookups_by_name() {
        let registry = EndpointRegistry::from_specs([&SNAPSHOT_GET, &SNAPSHOT_STATUS]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("snapshot.status").unwrap().name, "snapshot.status");
        assert_eq!(
            registry.get("snapshot.nope"),
            Err(RequestError::UnknownEndpoint { name: "snapshot.nope".into() })
        );
        assert_eq!(
            registry.iter().map(|s| s.name).collect::<Vec<_>>(),
            ["snapshot.get", "snapshot.status"]
        );
    }
}
