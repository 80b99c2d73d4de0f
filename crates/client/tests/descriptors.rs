use client::api::*;
use client::{Document, IndexMappings, RouteBindings};
use pretty_assertions::assert_eq;
use request::{
    DocumentKind, Id, Names, ParamValue, Refresh, RequestError, ResolvedRequest, TaskId, Time,
};
use rstest::rstest;
use serde_json::json;

struct Order {
    id: Option<u64>,
    region: &'static str,
}

impl Document for Order {
    fn kind() -> DocumentKind {
        DocumentKind::from("Order")
    }

    fn id(&self) -> Option<Id> {
        self.id.map(Id::from)
    }
}

fn path(resolved: Result<ResolvedRequest, RequestError>) -> String {
    match resolved {
        Ok(request) => request.path,
        Err(e) => panic!("resolution failed: {e}"),
    }
}

// ---------------------------------------------------------------------------
// Constructors resolve to their templates
// ---------------------------------------------------------------------------

#[rstest]
#[case::get(GetRequest::new("orders", "42").resolve(), "/orders/_doc/42")]
#[case::exists(ExistsRequest::new("orders", "42").resolve(), "/orders/_doc/42")]
#[case::source(SourceRequest::new("orders", "42").resolve(), "/orders/_source/42")]
#[case::create(CreateRequest::new("orders", "42").resolve(), "/orders/_create/42")]
#[case::index_without_id(IndexRequest::new("orders").resolve(), "/orders/_doc")]
#[case::index_with_id(IndexRequest::with_id("orders", 7u64).resolve(), "/orders/_doc/7")]
#[case::update(UpdateRequest::new("orders", "42").resolve(), "/orders/_update/42")]
#[case::delete(DeleteRequest::new("orders", "42").resolve(), "/orders/_doc/42")]
#[case::search_all(SearchRequest::new().resolve(), "/_search")]
#[case::search_indices(SearchRequest::for_indices(["orders", "returns"]).resolve(), "/orders,returns/_search")]
#[case::count_indices(CountRequest::for_indices("orders").resolve(), "/orders/_count")]
#[case::bulk(BulkRequest::new().resolve(), "/_bulk")]
#[case::delete_by_query(DeleteByQueryRequest::new("orders").resolve(), "/orders/_delete_by_query")]
#[case::rethrottle(
    ReindexRethrottleRequest::new(TaskId::new("node-1", 17)).resolve(),
    "/_reindex/node-1%3A17/_rethrottle"
)]
#[case::put_script(PutScriptRequest::new("calc").resolve(), "/_scripts/calc")]
#[case::put_script_in_context(PutScriptRequest::in_context("calc", "score").resolve(), "/_scripts/calc/score")]
#[case::ping(PingRequest::new().resolve(), "/")]
#[case::snapshot_status_all(SnapshotStatusRequest::new().resolve(), "/_snapshot/_status")]
#[case::snapshot_status_repository(
    SnapshotStatusRequest::for_repository("backups").resolve(),
    "/_snapshot/backups/_status"
)]
#[case::snapshot_status_snapshots(
    SnapshotStatusRequest::for_snapshots("backups", ["nightly", "weekly"]).resolve(),
    "/_snapshot/backups/nightly,weekly/_status"
)]
#[case::restore(RestoreRequest::new("backups", "nightly").resolve(), "/_snapshot/backups/nightly/_restore")]
#[case::clone(
    CloneSnapshotRequest::new("backups", "nightly", "copy").resolve(),
    "/_snapshot/backups/nightly/_clone/copy"
)]
#[case::get_repository(GetRepositoryRequest::new().resolve(), "/_snapshot")]
#[case::tasks_get(GetTaskRequest::new(TaskId::new("n1", 3)).resolve(), "/_tasks/n1%3A3")]
#[case::tasks_cancel_all(CancelTasksRequest::new().resolve(), "/_tasks/_cancel")]
#[case::pipeline_simulate(SimulatePipelineRequest::for_pipeline("enrich").resolve(), "/_ingest/pipeline/enrich/_simulate")]
#[case::pipeline_simulate_inline(SimulatePipelineRequest::new().resolve(), "/_ingest/pipeline/_simulate")]
#[case::dangling(DeleteDanglingIndexRequest::new("zmM4e0JtBkeUjiHD-MihPQ").resolve(), "/_dangling/zmM4e0JtBkeUjiHD-MihPQ")]
#[case::features(GetFeaturesRequest::new().resolve(), "/_features")]
#[case::cat_help(CatHelpRequest::new().resolve(), "/_cat")]
#[case::cat_indices(CatIndicesRequest::for_indices("orders").resolve(), "/_cat/indices/orders")]
#[case::cat_snapshots(CatSnapshotsRequest::for_repositories("backups").resolve(), "/_cat/snapshots/backups")]
fn test_constructor_resolves_to_its_template(
    #[case] resolved: Result<ResolvedRequest, RequestError>,
    #[case] expected: &str,
) {
    assert_eq!(path(resolved), expected);
}

#[test]
fn test_route_values_are_percent_encoded() {
    let resolved = GetRequest::new("logs 2024/01", "a?b").resolve();

    assert_eq!(path(resolved), "/logs%202024%2F01/_doc/a%3Fb");
}

// ---------------------------------------------------------------------------
// Setters
// ---------------------------------------------------------------------------

#[test]
fn test_setter_leaves_other_values_untouched() {
    let before = GetRequest::new("orders", "42")
        .routing("eu")
        .preference("_local");

    let after = before.clone().realtime();

    assert_eq!(after.route_values(), before.route_values());
    assert_eq!(
        after.parameters().get("routing"),
        before.parameters().get("routing")
    );
    assert_eq!(
        after.parameters().get("preference"),
        before.parameters().get("preference")
    );
    assert_eq!(
        after.parameters().get("realtime"),
        Some(&ParamValue::Bool(true))
    );
}

#[test]
fn test_last_write_wins_for_parameters() {
    let request = SearchRequest::new().q("a").q("b").size(10).size(20);

    assert_eq!(request.parameters().get("q"), Some(&ParamValue::Text("b".into())));
    assert_eq!(request.parameters().get("size"), Some(&ParamValue::Integer(20)));
    assert_eq!(request.parameters().len(), 2);
}

#[test]
fn test_last_write_wins_for_route_values() {
    let request = GetRequest::new("orders", "1").id("2").index("archive");

    assert_eq!(path(request.resolve()), "/archive/_doc/2");
}

#[test]
fn test_boolean_setter_without_argument_stores_true() {
    let shorthand = GetRequest::new("orders", "42").refresh();
    let explicit = GetRequest::new("orders", "42").set_refresh(true);

    assert_eq!(shorthand.parameters().get("refresh"), Some(&ParamValue::Bool(true)));
    assert_eq!(shorthand, explicit);
}

#[test]
fn test_set_flag_with_none_removes_it() {
    let request = GetRequest::new("orders", "42").refresh().set_refresh(None);

    assert!(!request.parameters().contains("refresh"));
}

#[test]
fn test_refresh_token_on_write_endpoints() {
    let request = IndexRequest::new("orders").refresh(Refresh::WaitFor);

    let resolved = request.resolve().unwrap();

    assert_eq!(resolved.path_and_query(), "/orders/_doc?refresh=wait_for");
}

#[test]
fn test_query_string_is_sorted_and_encoded() {
    let request = SearchRequest::new()
        .q("title:rust & go")
        .timeout(Time::seconds(5))
        .source_includes(["title", "author"]);

    let resolved = request.resolve().unwrap();

    assert_eq!(
        resolved.path_and_query(),
        "/_search?_source_includes=title,author&q=title%3Arust%20%26%20go&timeout=5s"
    );
}

#[test]
fn test_format_selects_accept_header() {
    let request = CatIndicesRequest::new().format(request::Format::Yaml);

    assert_eq!(
        request.parameters().get("format"),
        Some(&ParamValue::Token("yaml".into()))
    );
    assert_eq!(request.parameters().accept(), Some("application/yaml"));
}

#[test]
fn test_opaque_id_is_sent_as_header() {
    let resolved = PingRequest::new().opaque_id("trace-1").resolve().unwrap();

    assert_eq!(resolved.headers().get("x-opaque-id").map(String::as_str), Some("trace-1"));
}

// ---------------------------------------------------------------------------
// Missing route values
// ---------------------------------------------------------------------------

#[test]
fn test_bound_required_value_resolves() {
    let resolved = DeleteRepositoryRequest::new(Names::from(["backups"])).resolve();

    assert_eq!(path(resolved), "/_snapshot/backups");
}

#[test]
fn test_empty_required_value_is_missing() {
    let err = DeleteRepositoryRequest::new(Names::from(Vec::<String>::new()))
        .resolve()
        .unwrap_err();

    assert_eq!(
        err,
        RequestError::MissingRouteValue {
            endpoint: "snapshot.delete_repository",
            segment: "repository".into(),
        }
    );
}

#[test]
fn test_rehydrated_request_without_route_reports_missing_value() {
    let request: GetRequest = serde_json::from_value(json!({})).unwrap();

    let err = request.resolve().unwrap_err();

    assert_eq!(
        err,
        RequestError::MissingRouteValue {
            endpoint: "get",
            segment: "index".into(),
        }
    );
}

#[test]
fn test_body_on_bodiless_endpoint_is_rejected() {
    let mut value = serde_json::to_value(GetRequest::new("orders", "1")).unwrap();
    value["body"] = json!({ "kind": "text", "value": "x" });
    let request: GetRequest = serde_json::from_value(value).unwrap();

    assert_eq!(
        request.resolve().unwrap_err(),
        RequestError::BodyNotAllowed { endpoint: "get" }
    );
}

// ---------------------------------------------------------------------------
// Document-derived routes
// ---------------------------------------------------------------------------

#[test]
fn test_create_for_document_id_uses_derived_index() {
    let mappings = IndexMappings::new();

    let request = CreateRequest::for_document_id::<Order>(&mappings, "42");

    assert_eq!(path(request.resolve()), "/order/_create/42");
}

#[test]
fn test_mapped_kind_uses_configured_index() {
    let mappings = IndexMappings::new().map("Order", "orders-v2");

    let request = CreateRequest::for_document_id::<Order>(&mappings, 9u64);

    assert_eq!(path(request.resolve()), "/orders-v2/_create/9");
}

#[test]
fn test_index_of_matches_instance_setter() {
    let mappings = IndexMappings::new().with_default_index("shop");

    let derived = SearchRequest::new().index_of::<Order>(&mappings);
    let explicit = SearchRequest::new().index("shop");

    assert_eq!(derived.resolve().unwrap(), explicit.resolve().unwrap());
}

#[test]
fn test_from_document_takes_id_from_instance() {
    let mappings = IndexMappings::new().map("Order", "orders");
    let order = Order {
        id: Some(5),
        region: "eu",
    };

    let request = IndexRequest::from_document(&mappings, &order);

    assert_eq!(path(request.resolve()), "/orders/_doc/5");
}

#[test]
fn test_from_document_without_id_uses_shorter_template() {
    let mappings = IndexMappings::new().map("Order", "orders");
    let order = Order {
        id: None,
        region: "eu",
    };

    let request = IndexRequest::from_document(&mappings, &order);

    assert_eq!(path(request.resolve()), "/orders/_doc");
}

#[test]
fn test_from_document_with_applies_hook() {
    let mappings = IndexMappings::new().map("Order", "orders");
    let order = Order {
        id: Some(5),
        region: "eu",
    };

    let request = GetRequest::from_document_with(&mappings, &order, |o| {
        RouteBindings::none().param("routing", o.region)
    });

    let resolved = request.resolve().unwrap();
    assert_eq!(resolved.path_and_query(), "/orders/_doc/5?routing=eu");
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn test_descriptor_survives_serialization() {
    let original = UpdateRequest::new("orders", "42")
        .retry_on_conflict(3)
        .body(json!({ "doc": { "status": "shipped" } }));

    let stored = serde_json::to_string(&original).unwrap();
    let restored: UpdateRequest = serde_json::from_str(&stored).unwrap();

    assert_eq!(restored, original);
    assert_eq!(restored.resolve().unwrap(), original.resolve().unwrap());
}

#[test]
fn test_rehydrated_format_still_selects_accept_header() {
    let request: CatIndicesRequest = serde_json::from_value(json!({
        "parameters": { "query": { "format": { "kind": "token", "value": "yaml" } } }
    }))
    .unwrap();

    let resolved = request.resolve().unwrap();

    assert_eq!(resolved.path_and_query(), "/_cat/indices?format=yaml");
    assert_eq!(
        resolved.headers().get("accept").map(String::as_str),
        Some("application/yaml")
    );
}

// ---------------------------------------------------------------------------
// Index-scoped cat endpoints
// ---------------------------------------------------------------------------

#[rstest]
#[case::count(CatCountRequest::new().index_of::<Order>(&IndexMappings::new()).resolve(), "/_cat/count/order")]
#[case::indices(CatIndicesRequest::new().index_of::<Order>(&IndexMappings::new()).resolve(), "/_cat/indices/order")]
#[case::recovery(CatRecoveryRequest::new().index_of::<Order>(&IndexMappings::new()).resolve(), "/_cat/recovery/order")]
#[case::segments(CatSegmentsRequest::new().index_of::<Order>(&IndexMappings::new()).resolve(), "/_cat/segments/order")]
#[case::shards(CatShardsRequest::new().index_of::<Order>(&IndexMappings::new()).resolve(), "/_cat/shards/order")]
fn test_cat_index_derived_from_document_type(
    #[case] resolved: Result<ResolvedRequest, RequestError>,
    #[case] expected: &str,
) {
    assert_eq!(path(resolved), expected);
}

#[test]
fn test_cat_index_for_matches_instance_setter() {
    let mappings = IndexMappings::new().map("Order", "orders-v2");

    let derived = CatShardsRequest::new().index_for(&mappings, &DocumentKind::from("Order"));
    let explicit = CatShardsRequest::for_indices("orders-v2");

    assert_eq!(derived.resolve().unwrap(), explicit.resolve().unwrap());
}

#[rstest]
#[case::search(SearchRequest::new().all_indices().resolve(), "/_all/_search")]
#[case::count(CountRequest::new().all_indices().resolve(), "/_all/_count")]
#[case::delete_by_query(DeleteByQueryRequest::new("orders").all_indices().resolve(), "/_all/_delete_by_query")]
#[case::cat_indices(CatIndicesRequest::new().all_indices().resolve(), "/_cat/indices/_all")]
#[case::cat_segments(CatSegmentsRequest::new().all_indices().resolve(), "/_cat/segments/_all")]
fn test_all_indices_binds_the_wildcard(
    #[case] resolved: Result<ResolvedRequest, RequestError>,
    #[case] expected: &str,
) {
    assert_eq!(path(resolved), expected);
}
