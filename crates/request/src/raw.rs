//! Requests built from strings.
//!
//! [`RawRequest`] binds route values and parameters by name against an
//! endpoint spec looked up at runtime. It is the untyped counterpart of the
//! per-endpoint descriptors and exists for tooling such as the command line.

use crate::errors::RequestError;
use crate::params::ParameterBag;
use crate::registry::EndpointSpec;
use crate::route::{RouteValue, RouteValues};
use crate::transport::{Body, ResolvedRequest};

/// An untyped request against one endpoint spec.
#[derive(Debug, Clone)]
pub struct RawRequest {
    spec: &'static EndpointSpec,
    route: RouteValues,
    parameters: ParameterBag,
    body: Option<Body>,
}

impl RawRequest {
    /// Starts a request against `spec` with nothing bound.
    pub fn new(spec: &'static EndpointSpec) -> Self {
        Self {
            spec,
            route: RouteValues::new(),
            parameters: ParameterBag::new(),
            body: None,
        }
    }

    /// The endpoint this request targets.
    pub fn spec(&self) -> &'static EndpointSpec {
        self.spec
    }

    /// Binds a route value. Names the endpoint does not know are reported
    /// when the request is resolved.
    pub fn route(mut self, name: &str, value: impl Into<RouteValue>) -> Self {
        self.route.bind(name, value);
        self
    }

    /// Stores a parameter parsed from `raw`.
    pub fn param(mut self, key: &str, raw: &str) -> Result<Self, RequestError> {
        self.parameters.set_raw(key, raw)?;
        Ok(self)
    }

    /// Sets a request header.
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parameters.set_header(name, value);
        self
    }

    /// Attaches a body.
    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Resolves the request against its spec.
    pub fn resolve(&self) -> Result<ResolvedRequest, RequestError> {
        ResolvedRequest::resolve(self.spec, &self.route, &self.parameters, self.body.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::HttpMethod;
    use pretty_assertions::assert_eq;

    static CAT_INDICES: EndpointSpec = EndpointSpec::new(
        "cat.indices",
        HttpMethod::Get,
        &["/_cat/indices/{index}", "/_cat/indices"],
        false,
    );

    #[test]
    fn binds_routes_and_parses_parameters() {
        let request = RawRequest::new(&CAT_INDICES)
            .route("index", RouteValue::List(vec!["a".into(), "b".into()]))
            .param("format", "yaml")
            .unwrap()
            .param("v", "true")
            .unwrap()
            .resolve()
            .unwrap();
        assert_eq!(request.path_and_query(), "/_cat/indices/a,b?format=yaml&v=true");
        assert_eq!(request.parameters.accept(), Some("application/yaml"));
    }

    #[test]
    fn unknown_route_names_fail_at_resolve_time() {
        let request = RawRequest::new(&CAT_INDICES).route("repository", "backups");
        assert_eq!(
            request.resolve(),
            Err(RequestError::UnexpectedRouteValue {
                endpoint: "cat.indices",
                segment: "repository".into(),
            })
        );
    }
}
