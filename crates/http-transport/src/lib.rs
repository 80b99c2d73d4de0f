//! HTTP transport for the OpenSearch REST client.
//!
//! Implements [`request::Transport`] over `reqwest`. The asynchronous path
//! uses a shared `reqwest::Client`; the synchronous path uses a blocking
//! client built on first use. A synchronous call made on a Tokio runtime thread
//! runs on a dedicated worker thread, since the blocking client may not be
//! built, used or dropped there.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** URL building, header merging, body encoding and error
//! mapping live here. The `client` crate sees only [`request::Transport`].
//!
//! Every HTTP status the server returns becomes a [`Response`]; only failures
//! to exchange a request at all become a [`TransportError`]. Retries are left
//! to the caller, guided by [`TransportError::retry_policy`].

use std::collections::BTreeMap;
use std::sync::OnceLock;

use async_trait::async_trait;
use request::{HttpMethod, ResolvedRequest, Response, Transport, TransportError};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn, Span};

mod config;

pub use config::{ConfigError, HttpTransportConfig};

/// A [`Transport`] talking HTTP to one cluster endpoint.
pub struct HttpTransport {
    config: HttpTransportConfig,
    base_url: reqwest::Url,
    client: reqwest::Client,
    blocking: OnceLock<reqwest::blocking::Client>,
}

impl HttpTransport {
    /// Creates a transport from `config`.
    ///
    /// Fails when the base URL is invalid or the client cannot be built.
    pub fn new(config: HttpTransportConfig) -> Result<Self, ConfigError> {
        let base_url = config.parsed_base_url()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        debug!(base_url = %base_url, "HTTP transport created");

        Ok(Self {
            config,
            base_url,
            client,
            blocking: OnceLock::new(),
        })
    }

    /// The configuration this transport was built from.
    pub fn config(&self) -> &HttpTransportConfig {
        &self.config
    }

    /// Full URL for `request`: the base URL with its path prefix, followed by
    /// the request's path and query.
    pub fn url_for(&self, request: &ResolvedRequest) -> Result<reqwest::Url, TransportError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let url = format!("{}{}", base, request.path_and_query());
        reqwest::Url::parse(&url).map_err(|e| TransportError::InvalidRequest {
            message: format!("'{url}' is not a valid URL: {e}"),
        })
    }

    /// Default headers overlaid with the request's own headers.
    fn headers_for(&self, request: &ResolvedRequest) -> BTreeMap<String, String> {
        let mut headers: BTreeMap<String, String> = self
            .config
            .default_headers
            .iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v.clone()))
            .collect();
        headers.extend(request.headers());
        headers
    }

    fn body_for(request: &ResolvedRequest) -> Result<Option<Vec<u8>>, TransportError> {
        request.body.as_ref().map(|body| body.to_bytes()).transpose()
    }

    /// Must only be called off runtime threads.
    fn blocking_client(&self) -> Result<reqwest::blocking::Client, TransportError> {
        if let Some(client) = self.blocking.get() {
            return Ok(client.clone());
        }

        let client = reqwest::blocking::Client::builder()
            .user_agent(self.config.user_agent.clone())
            // The blocking builder applies a 30s default; `None` disables it.
            .timeout(self.config.timeout())
            .build()
            .map_err(map_error)?;
        // A concurrent first call may have stored its client already.
        Ok(self.blocking.get_or_init(|| client).clone())
    }

    /// The synchronous exchange. Must only be called off runtime threads.
    fn exchange_blocking(&self, request: &ResolvedRequest) -> Result<Response, TransportError> {
        let url = self.url_for(request)?;
        let client = self.blocking_client()?;

        let mut builder = client.request(method(request.method), url);
        for (name, value) in self.headers_for(request) {
            builder = builder.header(name, value);
        }
        if let Some(body) = Self::body_for(request)? {
            builder = builder.body(body);
        }

        let response = builder.send().map_err(map_error).inspect_err(log_failure)?;
        let status = response.status().as_u16();
        let headers = response_headers(response.headers());
        let body = response.bytes().map_err(map_error)?.to_vec();

        debug!(status, body_len = body.len(), "Received response");
        Ok(Response::new(status, headers, body))
    }
}

impl Drop for HttpTransport {
    fn drop(&mut self) {
        let Some(client) = self.blocking.take() else {
            return;
        };
        if tokio::runtime::Handle::try_current().is_ok()
            && std::thread::spawn(move || drop(client)).join().is_err()
        {
            warn!("Blocking client shutdown failed");
        }
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    /// Blocks the calling thread. On a Tokio runtime thread the exchange runs
    /// on a dedicated worker thread; prefer [`Transport::execute_async`] there.
    #[instrument(skip(self, request), fields(endpoint = request.endpoint, method = %request.method, path = %request.path))]
    fn execute(&self, request: &ResolvedRequest) -> Result<Response, TransportError> {
        if tokio::runtime::Handle::try_current().is_err() {
            return self.exchange_blocking(request);
        }

        let span = Span::current();
        std::thread::scope(|scope| {
            scope
                .spawn(|| span.in_scope(|| self.exchange_blocking(request)))
                .join()
                .unwrap_or_else(|_| {
                    Err(TransportError::Internal {
                        message: "blocking worker thread panicked".to_owned(),
                    })
                })
        })
    }

    #[instrument(skip(self, request, cancel), fields(endpoint = request.endpoint, method = %request.method, path = %request.path))]
    async fn execute_async(
        &self,
        request: &ResolvedRequest,
        cancel: CancellationToken,
    ) -> Result<Response, TransportError> {
        let url = self.url_for(request)?;

        let mut builder = self.client.request(method(request.method), url);
        for (name, value) in self.headers_for(request) {
            builder = builder.header(name, value);
        }
        if let Some(body) = Self::body_for(request)? {
            builder = builder.body(body);
        }

        let exchange = async {
            let response = builder.send().await.map_err(map_error)?;
            let status = response.status().as_u16();
            let headers = response_headers(response.headers());
            let body = response.bytes().await.map_err(map_error)?.to_vec();
            Ok::<_, TransportError>(Response::new(status, headers, body))
        };

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Request cancelled by caller");
                Err(TransportError::Cancelled)
            }
            result = exchange => result,
        };

        match &result {
            Ok(response) => debug!(status = response.status, body_len = response.body.len(), "Received response"),
            Err(TransportError::Cancelled) => {}
            Err(e) => log_failure(e),
        }
        result
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

fn method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
        HttpMethod::Head => reqwest::Method::HEAD,
    }
}

fn response_headers(headers: &reqwest::header::HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_ascii_lowercase(), v.to_owned()))
        })
        .collect()
}

fn map_error(error: reqwest::Error) -> TransportError {
    let message = error.to_string();
    if error.is_timeout() {
        TransportError::Timeout { message }
    } else if error.is_builder() {
        TransportError::InvalidRequest { message }
    } else if error.is_body() || error.is_decode() {
        TransportError::Body { message }
    } else {
        TransportError::Connection { message }
    }
}

fn log_failure(error: &TransportError) {
    warn!(error = %error, retry = ?error.retry_policy(), "Request failed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use request::{Body, EndpointSpec, ParameterBag, RouteValues};
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    static GET: EndpointSpec = EndpointSpec::new("get", HttpMethod::Get, &["/{index}/_doc/{id}"], false);
    static SEARCH: EndpointSpec =
        EndpointSpec::new("search", HttpMethod::Post, &["/{index}/_search", "/_search"], true);

    fn transport(base_url: &str) -> HttpTransport {
        HttpTransport::new(HttpTransportConfig {
            base_url: base_url.to_owned(),
            timeout_secs: 5,
            ..Default::default()
        })
        .unwrap()
    }

    fn get_request() -> ResolvedRequest {
        let mut route = RouteValues::new();
        route.bind("index", "orders");
        route.bind("id", "42");
        let mut parameters = ParameterBag::new();
        parameters.set("realtime", true);
        ResolvedRequest::resolve(&GET, &route, &parameters, None).unwrap()
    }

    /// Accepts one connection, captures the raw request head and answers with
    /// `reply`.
    async fn serve_once(reply: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buffer = vec![0u8; 8192];
            let read = socket.read(&mut buffer).await.unwrap();
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&buffer[..read]).into_owned()
        });
        (base_url, handle)
    }

    #[test]
    fn test_url_keeps_base_path_prefix() {
        let transport = transport("http://localhost:9200/opensearch/");

        let url = transport.url_for(&get_request()).unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:9200/opensearch/orders/_doc/42?realtime=true"
        );
    }

    #[test]
    fn test_request_headers_override_defaults() {
        let mut config = HttpTransportConfig::default();
        config
            .default_headers
            .insert("X-Opaque-Id".into(), "default".into());
        config
            .default_headers
            .insert("Authorization".into(), "Basic abc".into());
        let transport = HttpTransport::new(config).unwrap();
        let mut request = get_request();
        request.parameters.set_header("x-opaque-id", "call-7");

        let headers = transport.headers_for(&request);

        assert_eq!(headers.get("x-opaque-id").map(String::as_str), Some("call-7"));
        assert_eq!(headers.get("authorization").map(String::as_str), Some("Basic abc"));
    }

    #[test]
    fn test_invalid_base_url_fails_construction() {
        let err = HttpTransport::new(HttpTransportConfig {
            base_url: "not a url".into(),
            ..Default::default()
        })
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[tokio::test]
    async fn test_error_status_is_returned_as_response() {
        let (base_url, server) = serve_once(
            "HTTP/1.1 404 Not Found\r\ncontent-type: application/json\r\ncontent-length: 15\r\nconnection: close\r\n\r\n{\"found\":false}",
        )
        .await;
        let transport = transport(&base_url);

        let response = transport
            .execute_async(&get_request(), CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(response.status, 404);
        assert_eq!(
            response.headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(response.json::<serde_json::Value>().unwrap(), json!({ "found": false }));
        let head = server.await.unwrap();
        assert!(head.starts_with("GET /orders/_doc/42?realtime=true HTTP/1.1"), "{head}");
    }

    #[tokio::test]
    async fn test_body_is_sent_with_its_content_type() {
        let (base_url, server) = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\n{}",
        )
        .await;
        let transport = transport(&base_url);
        let body = Body::from(json!({ "query": { "match_all": {} } }));
        let request =
            ResolvedRequest::resolve(&SEARCH, &RouteValues::new(), &ParameterBag::new(), Some(&body))
                .unwrap();

        let response = transport
            .execute_async(&request, CancellationToken::new())
            .await
            .unwrap();

        assert!(response.is_success());
        let head = server.await.unwrap().to_ascii_lowercase();
        assert!(head.starts_with("post /_search http/1.1"), "{head}");
        assert!(head.contains("content-type: application/json"), "{head}");
    }

    #[tokio::test]
    async fn test_cancelled_token_wins() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let transport = transport(&format!("http://{}", listener.local_addr().unwrap()));
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = transport
            .execute_async(&get_request(), cancel)
            .await
            .unwrap_err();

        assert_eq!(err, TransportError::Cancelled);
    }

    #[tokio::test]
    async fn test_refused_connection_is_a_connection_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let transport = transport(&base_url);

        let err = transport
            .execute_async(&get_request(), CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Connection { .. }), "{err:?}");
    }

    /// Answers `connections` requests on a plain thread with a `200 true`
    /// response, returning each request head.
    fn serve_blocking(connections: usize) -> (String, std::thread::JoinHandle<Vec<String>>) {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let server = std::thread::spawn(move || {
            use std::io::{Read, Write};
            (0..connections)
                .map(|_| {
                    let (mut socket, _) = listener.accept().unwrap();
                    let mut buffer = vec![0u8; 8192];
                    let read = socket.read(&mut buffer).unwrap();
                    socket
                        .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 4\r\nconnection: close\r\n\r\ntrue")
                        .unwrap();
                    String::from_utf8_lossy(&buffer[..read]).into_owned()
                })
                .collect()
        });
        (base_url, server)
    }

    #[test]
    fn test_blocking_execute_returns_response() {
        let (base_url, server) = serve_blocking(1);
        let transport = transport(&base_url);

        let response = transport.execute(&get_request()).unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.text(), "true");
        assert!(server.join().unwrap()[0].starts_with("GET /orders/_doc/42"));
    }

    #[tokio::test]
    async fn test_blocking_execute_on_runtime_thread_returns_response() {
        let (base_url, server) = serve_blocking(2);
        let transport = transport(&base_url);

        let on_runtime = transport.execute(&get_request()).unwrap();
        let off_runtime = std::thread::scope(|scope| {
            scope.spawn(|| transport.execute(&get_request())).join().unwrap()
        })
        .unwrap();

        assert_eq!(on_runtime.status, 200);
        assert_eq!(off_runtime.status, 200);
        assert_eq!(server.join().unwrap().len(), 2);
        // Dropping here, on the runtime thread, must not panic.
        drop(transport);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_blocking_execute_on_multi_thread_runtime() {
        let (base_url, server) = serve_blocking(1);
        let transport = transport(&base_url);

        let response = transport.execute(&get_request()).unwrap();

        assert_eq!(response.text(), "true");
        server.join().unwrap();
    }

    #[test]
    fn test_transport_built_off_runtime_is_usable_and_droppable_on_one() {
        let (base_url, server) = serve_blocking(2);
        let transport = transport(&base_url);
        assert_eq!(transport.execute(&get_request()).unwrap().status, 200);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            assert_eq!(transport.execute(&get_request()).unwrap().status, 200);
            drop(transport);
        });

        assert_eq!(server.join().unwrap().len(), 2);
    }
}
