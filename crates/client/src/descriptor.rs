//! The generic request descriptor.
//!
//! [`Descriptor<E>`] is the single builder type behind every endpoint. `E` is a
//! zero-sized marker implementing [`Endpoint`]; it selects the endpoint's
//! static spec and, through inherent impls on `Descriptor<Marker>`, the
//! setters that endpoint exposes. Each setter consumes the descriptor, touches
//! exactly one route value or one parameter, and returns it for chaining.
//!
//! ## Lifecycle
//!
//! A descriptor is created by an endpoint constructor with the route values
//! that constructor requires, customised through setters, then
//! [resolved](Descriptor::resolve) into a [`ResolvedRequest`]. Resolution does
//! not consume the descriptor and yields the same output every time.
//!
//! Descriptors deserialize without any validation so that stored requests can
//! be rehydrated; missing route values surface when the rehydrated request is
//! resolved.

use std::marker::PhantomData;

use request::{
    Body, Endpoint, EndpointSpec, ParamValue, ParameterBag, RequestError, ResolvedRequest,
    RouteValue, RouteValues,
};
use serde::{Deserialize, Serialize};

use crate::document::RouteBindings;

/// Fluent builder for one call to the endpoint `E`.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Descriptor<E> {
    #[serde(default)]
    route: RouteValues,
    #[serde(default)]
    parameters: ParameterBag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<Body>,
    #[serde(skip)]
    endpoint: PhantomData<fn() -> E>,
}

impl<E: Endpoint> Descriptor<E> {
    /// A descriptor with nothing bound. Endpoint constructors start here.
    pub(crate) fn unbound() -> Self {
        Self {
            route: RouteValues::new(),
            parameters: ParameterBag::new(),
            body: None,
            endpoint: PhantomData,
        }
    }

    pub(crate) fn bind(mut self, name: &'static str, value: impl Into<RouteValue>) -> Self {
        self.route.bind(name, value);
        self
    }

    pub(crate) fn query(mut self, key: &'static str, value: impl Into<ParamValue>) -> Self {
        self.parameters.set(key, value);
        self
    }

    pub(crate) fn query_opt<V: Into<ParamValue>>(mut self, key: &'static str, value: Option<V>) -> Self {
        self.parameters.set_opt(key, value);
        self
    }

    pub(crate) fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parameters.set_header(name, value);
        self
    }

    pub(crate) fn with_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    pub(crate) fn apply(mut self, bindings: RouteBindings) -> Self {
        let (route, parameters) = bindings.into_parts();
        for (name, value) in route {
            self.route.bind(name, value);
        }
        for (key, value) in parameters {
            self.parameters.set(key, value);
        }
        self
    }

    // -- common parameters --------------------------------------------------

    /// Pretty-prints the JSON response.
    pub fn pretty(self) -> Self {
        self.query("pretty", true)
    }

    /// Sets or clears `pretty`.
    pub fn set_pretty(self, value: impl Into<Option<bool>>) -> Self {
        self.query_opt::<bool>("pretty", value.into())
    }

    /// Returns statistics in human-readable units.
    pub fn human(self) -> Self {
        self.query("human", true)
    }

    /// Sets or clears `human`.
    pub fn set_human(self, value: impl Into<Option<bool>>) -> Self {
        self.query_opt::<bool>("human", value.into())
    }

    /// Includes the stack trace of returned errors.
    pub fn error_trace(self) -> Self {
        self.query("error_trace", true)
    }

    /// Sets or clears `error_trace`.
    pub fn set_error_trace(self, value: impl Into<Option<bool>>) -> Self {
        self.query_opt::<bool>("error_trace", value.into())
    }

    /// Filters the response down to the listed paths.
    pub fn filter_path<I, S>(self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query("filter_path", paths.into_iter().map(Into::into).collect::<Vec<String>>())
    }

    /// Sends the request body in the `source` query parameter instead, for
    /// clients that cannot send a body with GET.
    pub fn source_query(self, source: impl Into<String>) -> Self {
        self.query("source", source.into())
    }

    /// Tags the request with an `X-Opaque-Id` header for tracing on the server.
    pub fn opaque_id(self, id: impl Into<String>) -> Self {
        self.header("x-opaque-id", id)
    }

    // -- accessors ----------------------------------------------------------

    /// The endpoint's static spec.
    pub fn spec(&self) -> &'static EndpointSpec {
        E::spec()
    }

    /// Route values bound so far.
    pub fn route_values(&self) -> &RouteValues {
        &self.route
    }

    /// Query parameters and headers set so far.
    pub fn parameters(&self) -> &ParameterBag {
        &self.parameters
    }

    /// The attached body, if any.
    pub fn attached_body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Resolves the descriptor into a sendable request.
    pub fn resolve(&self) -> Result<ResolvedRequest, RequestError> {
        ResolvedRequest::resolve(E::spec(), &self.route, &self.parameters, self.body.as_ref())
    }
}

impl<E> Clone for Descriptor<E> {
    fn clone(&self) -> Self {
        Self {
            route: self.route.clone(),
            parameters: self.parameters.clone(),
            body: self.body.clone(),
            endpoint: PhantomData,
        }
    }
}

impl<E> PartialEq for Descriptor<E> {
    fn eq(&self, other: &Self) -> bool {
        self.route == other.route && self.parameters == other.parameters && self.body == other.body
    }
}

impl<E: Endpoint> std::fmt::Debug for Descriptor<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Descriptor")
            .field("endpoint", &E::spec().name)
            .field("route", &self.route)
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .finish()
    }
}
