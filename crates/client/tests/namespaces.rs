use std::collections::BTreeMap;
use std::convert::identity;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use client::api::*;
use client::Client;
use pretty_assertions::assert_eq;
use request::{
    ClientError, HttpMethod, RequestError, ResolvedRequest, Response, TaskId, Transport,
    TransportError,
};
use tokio_util::sync::CancellationToken;

// ---------------------------------------------------------------------------
// Test double
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
struct Call {
    method: HttpMethod,
    path_and_query: String,
    asynchronous: bool,
    cancelled: bool,
}

#[derive(Default)]
struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
    fail_with: Option<TransportError>,
}

impl RecordingTransport {
    fn failing(error: TransportError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(error),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, request: &ResolvedRequest, asynchronous: bool, cancelled: bool) -> Result<Response, TransportError> {
        self.calls.lock().unwrap().push(Call {
            method: request.method,
            path_and_query: request.path_and_query(),
            asynchronous,
            cancelled,
        });
        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(Response::new(200, BTreeMap::new(), b"{}".to_vec())),
        }
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    fn execute(&self, request: &ResolvedRequest) -> Result<Response, TransportError> {
        self.record(request, false, false)
    }

    async fn execute_async(
        &self,
        request: &ResolvedRequest,
        cancel: CancellationToken,
    ) -> Result<Response, TransportError> {
        self.record(request, true, cancel.is_cancelled())
    }
}

fn client() -> (Client, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::default());
    (Client::new(transport.clone()), transport)
}

fn call(method: HttpMethod, path_and_query: &str, asynchronous: bool) -> Call {
    Call {
        method,
        path_and_query: path_and_query.to_owned(),
        asynchronous,
        cancelled: false,
    }
}

// ---------------------------------------------------------------------------
// Call shapes
// ---------------------------------------------------------------------------

#[test]
fn test_seeded_call_with_identity_sends_defaults() {
    let (client, transport) = client();

    let response = client.get("orders", "42", identity).unwrap();

    assert!(response.is_success());
    assert_eq!(transport.calls(), vec![call(HttpMethod::Get, "/orders/_doc/42", false)]);
}

#[test]
fn test_seeded_call_applies_selector() {
    let (client, transport) = client();

    client
        .snapshot()
        .restore("backups", "nightly", |r| r.wait_for_completion())
        .unwrap();

    assert_eq!(
        transport.calls(),
        vec![call(
            HttpMethod::Post,
            "/_snapshot/backups/nightly/_restore?wait_for_completion=true",
            false
        )]
    );
}

#[test]
fn test_selector_may_replace_the_request() {
    let (client, transport) = client();

    client
        .snapshot()
        .status(|_| SnapshotStatusRequest::for_repository("backups"))
        .unwrap();

    assert_eq!(
        transport.calls(),
        vec![call(HttpMethod::Get, "/_snapshot/backups/_status", false)]
    );
}

#[test]
fn test_prebuilt_call_matches_seeded_call() {
    let (client, transport) = client();

    client.tasks().list(|r| r.detailed()).unwrap();
    client
        .tasks()
        .list_request(ListTasksRequest::new().detailed())
        .unwrap();

    let calls = transport.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
}

#[tokio::test]
async fn test_async_seeded_call() {
    let (client, transport) = client();

    client
        .ingest()
        .get_pipeline_async(|r| r.master_timeout(request::Time::seconds(30)), None)
        .await
        .unwrap();

    assert_eq!(
        transport.calls(),
        vec![call(HttpMethod::Get, "/_ingest/pipeline?master_timeout=30s", true)]
    );
}

#[tokio::test]
async fn test_async_prebuilt_call() {
    let (client, transport) = client();

    client
        .tasks()
        .get_request_async(GetTaskRequest::new(TaskId::new("n1", 9)), None)
        .await
        .unwrap();

    assert_eq!(transport.calls(), vec![call(HttpMethod::Get, "/_tasks/n1%3A9", true)]);
}

#[tokio::test]
async fn test_cancellation_token_is_passed_through() {
    let (client, transport) = client();
    let token = CancellationToken::new();
    token.cancel();

    client
        .cat()
        .health_async(identity, Some(token))
        .await
        .unwrap();

    assert!(transport.calls()[0].cancelled);
}

#[tokio::test]
async fn test_missing_token_is_never_cancelled() {
    let (client, transport) = client();

    client.ping_async(identity, None).await.unwrap();

    assert!(!transport.calls()[0].cancelled);
}

#[test]
fn test_every_namespace_reaches_the_transport() {
    let (client, transport) = client();

    client.info(identity).unwrap();
    client.snapshot().get_repository(identity).unwrap();
    client.tasks().cancel(identity).unwrap();
    client.ingest().processor_grok(identity).unwrap();
    client.dangling_indices().list_dangling_indices(identity).unwrap();
    client.features().get_features(identity).unwrap();
    client.cat().help(identity).unwrap();

    let paths: Vec<String> = transport
        .calls()
        .into_iter()
        .map(|c| c.path_and_query)
        .collect();
    assert_eq!(
        paths,
        vec![
            "/",
            "/_snapshot",
            "/_tasks/_cancel",
            "/_ingest/processor/grok",
            "/_dangling",
            "/_features",
            "/_cat",
        ]
    );
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn test_resolution_failure_never_reaches_transport() {
    let (client, transport) = client();

    let err = client
        .snapshot()
        .delete_repository(Vec::<String>::new(), identity)
        .unwrap_err();

    assert_eq!(
        err,
        ClientError::Request(RequestError::MissingRouteValue {
            endpoint: "snapshot.delete_repository",
            segment: "repository".into(),
        })
    );
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_transport_error_is_passed_through_unchanged() {
    let transport = Arc::new(RecordingTransport::failing(TransportError::Timeout {
        message: "30s elapsed".into(),
    }));
    let client = Client::new(transport.clone());

    let sync_err = client.count(identity).unwrap_err();
    let async_err = client.count_async(identity, None).await.unwrap_err();

    let expected = ClientError::Transport(TransportError::Timeout {
        message: "30s elapsed".into(),
    });
    assert_eq!(sync_err, expected);
    assert_eq!(async_err, expected);
    assert_eq!(transport.calls().len(), 2);
}

#[test]
fn test_http_error_status_is_a_response() {
    struct NotFound;

    #[async_trait]
    impl Transport for NotFound {
        fn execute(&self, _: &ResolvedRequest) -> Result<Response, TransportError> {
            Ok(Response::new(404, BTreeMap::new(), br#"{"found":false}"#.to_vec()))
        }

        async fn execute_async(
            &self,
            request: &ResolvedRequest,
            _: CancellationToken,
        ) -> Result<Response, TransportError> {
            self.execute(request)
        }
    }

    let client = Client::new(Arc::new(NotFound));

    let response = client.get("orders", "missing", identity).unwrap();

    assert_eq!(response.status, 404);
    assert!(!response.is_success());
    assert_eq!(response.json::<serde_json::Value>().unwrap()["found"], false);
}
