//! The transport port and the values that cross it.
//!
//! A [`ResolvedRequest`] is the only thing a [`Transport`] ever sees: verb,
//! concrete path, parameter bag (query string plus headers), optional body and
//! the supports-body flag of the endpoint. The transport returns a
//! [`Response`] for every status the server produced; only failures to
//! complete the exchange are errors.
//!
//! ## Architectural Layer
//!
//! Port. Implementations live in infrastructure crates (the reqwest-backed
//! transport, in-memory transports in tests).

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::errors::{RequestError, TransportError};
use crate::params::ParameterBag;
use crate::registry::{EndpointSpec, HttpMethod};
use crate::route::{self, RouteValues};
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Bodies
// ---------------------------------------------------------------------------

/// A request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Body {
    /// One JSON document.
    Json(Value),
    /// Newline-delimited JSON, as used by bulk and multi-search.
    NdJson(Vec<Value>),
    /// Raw text sent as-is.
    Text(String),
}

impl Body {
    /// `Content-Type` sent with the body.
    pub fn content_type(&self) -> &'static str {
        match self {
            Body::Json(_) => "application/json",
            Body::NdJson(_) => "application/x-ndjson",
            Body::Text(_) => "text/plain",
        }
    }

    /// Encodes the body for the wire. NDJSON bodies end with a newline.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TransportError> {
        let encoding = |e: serde_json::Error| TransportError::Body {
            message: e.to_string(),
        };
        match self {
            Body::Json(value) => serde_json::to_vec(value).map_err(encoding),
            Body::NdJson(lines) => {
                let mut out = Vec::new();
                for line in lines {
                    serde_json::to_writer(&mut out, line).map_err(encoding)?;
                    out.push(b'\n');
                }
                Ok(out)
            }
            Body::Text(text) => Ok(text.as_bytes().to_vec()),
        }
    }
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        Body::Json(value)
    }
}

impl From<Vec<Value>> for Body {
    fn from(lines: Vec<Value>) -> Self {
        Body::NdJson(lines)
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Text(text)
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Text(text.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Resolved requests
// ---------------------------------------------------------------------------

/// A request ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    /// Registry name of the endpoint.
    pub endpoint: &'static str,
    /// HTTP verb from the registry.
    pub method: HttpMethod,
    /// Concrete path, percent-encoded, starting with `/`.
    pub path: String,
    /// Query parameters and headers.
    pub parameters: ParameterBag,
    /// Body, if one was attached.
    pub body: Option<Body>,
    /// Whether the endpoint accepts a body.
    pub supports_body: bool,
}

impl ResolvedRequest {
    /// Resolves bound state against an endpoint spec.
    ///
    /// Fails when the route values fit no template or when a body is attached
    /// to an endpoint that takes none.
    pub fn resolve(
        spec: &'static EndpointSpec,
        values: &RouteValues,
        parameters: &ParameterBag,
        body: Option<&Body>,
    ) -> Result<Self, RequestError> {
        let path = route::resolve(spec.name, &spec.templates(), values)?;
        if body.is_some() && !spec.supports_body {
            return Err(RequestError::BodyNotAllowed {
                endpoint: spec.name,
            });
        }
        Ok(Self {
            endpoint: spec.name,
            method: spec.method,
            path,
            parameters: parameters.clone(),
            body: body.cloned(),
            supports_body: spec.supports_body,
        })
    }

    /// Path plus `?query` when any parameter is set.
    pub fn path_and_query(&self) -> String {
        let query = self.parameters.query_string();
        if query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, query)
        }
    }

    /// Headers to send: the bag's headers plus the body's content type.
    pub fn headers(&self) -> BTreeMap<String, String> {
        let mut headers: BTreeMap<String, String> = self
            .parameters
            .headers()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        if let Some(body) = &self.body {
            headers.insert("content-type".to_owned(), body.content_type().to_owned());
        }
        headers
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// What the server sent back.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, names lowercase.
    pub headers: BTreeMap<String, String>,
    /// Raw body bytes.
    pub body: Vec<u8>,
    /// When the response was received.
    pub received_at: Timestamp,
}

impl Response {
    /// Creates a response stamped with the current time.
    pub fn new(status: u16, headers: BTreeMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
            received_at: Timestamp::now(),
        }
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// The body decoded as UTF-8, with invalid sequences replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

// ---------------------------------------------------------------------------
// The port
// ---------------------------------------------------------------------------

/// Executes resolved requests.
///
/// Implementations own connection handling, retries, authentication and node
/// selection. Cancellation of [`Transport::execute_async`] is signalled
/// through the token; an implementation observing it returns
/// [`TransportError::Cancelled`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Executes `request` on the calling thread.
    fn execute(&self, request: &ResolvedRequest) -> Result<Response, TransportError>;

    /// Executes `request` asynchronously.
    async fn execute_async(
        &self,
        request: &ResolvedRequest,
        cancel: CancellationToken,
    ) -> Result<Response, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    static INDEX: EndpointSpec = EndpointSpec::new(
        "index",
        HttpMethod::Post,
        &["/{index}/_doc/{id}", "/{index}/_doc"],
        true,
    );

    static GET: EndpointSpec =
        EndpointSpec::new("get", HttpMethod::Get, &["/{index}/_doc/{id}"], false);

    #[test]
    fn resolves_verb_path_and_flags_from_the_spec() {
        let mut route = RouteValues::new();
        route.bind("index", "orders");
        let mut parameters = ParameterBag::new();
        parameters.set("refresh", true);
        let body = Body::from(json!({"sku": "A-1"}));

        let request = ResolvedRequest::resolve(&INDEX, &route, &parameters, Some(&body)).unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path_and_query(), "/orders/_doc?refresh=true");
        assert!(request.supports_body);
        assert_eq!(
            request.headers().get("content-type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn bodies_on_bodiless_endpoints_are_rejected() {
        let mut route = RouteValues::new();
        route.bind("index", "orders");
        route.bind("id", "1");
        let body = Body::from("ignored");
        assert_eq!(
            ResolvedRequest::resolve(&GET, &route, &ParameterBag::new(), Some(&body)),
            Err(RequestError::BodyNotAllowed { endpoint: "get" })
        );
    }

    #[test]
    fn ndjson_bodies_end_every_line_with_a_newline() {
        let body = Body::from(vec![json!({"index": {}}), json!({"a": 1})]);
        assert_eq!(body.to_bytes().unwrap(), b"{\"index\":{}}\n{\"a\":1}\n");
        assert_eq!(body.content_type(), "application/x-ndjson");
    }

    #[test]
    fn every_status_is_a_response() {
        let response = Response::new(404, BTreeMap::new(), br#"{"found":false}"#.to_vec());
        assert!(!response.is_success());
        let parsed: Value = response.json().unwrap();
        assert_eq!(parsed["found"], json!(false));
    }
}
