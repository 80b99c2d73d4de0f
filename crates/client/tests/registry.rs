use client::api::*;
use client::{registry, Descriptor, Tabular};
use pretty_assertions::assert_eq;
use request::{Format, HttpMethod, ParamValue, RawRequest, RequestError};
use rstest::rstest;

#[test]
fn test_every_endpoint_resolves_with_its_registry_shape() {
    for spec in registry().iter() {
        let request = spec
            .segments()
            .iter()
            .fold(RawRequest::new(spec), |request, segment| {
                request.route(segment.name, "x")
            });

        let resolved = request
            .resolve()
            .unwrap_or_else(|e| panic!("{} failed to resolve: {e}", spec.name));

        assert_eq!(resolved.endpoint, spec.name);
        assert_eq!(resolved.method, spec.method, "{}", spec.name);
        assert_eq!(resolved.supports_body, spec.supports_body, "{}", spec.name);
        assert!(resolved.path.starts_with('/'), "{}", spec.name);
        assert!(!resolved.path.contains('{'), "{}", spec.name);
    }
}

#[test]
fn test_every_required_segment_is_reported_when_missing() {
    for spec in registry().iter() {
        for missing in spec.segments().iter().filter(|s| s.required) {
            let request = spec
                .segments()
                .iter()
                .filter(|s| s.name != missing.name)
                .fold(RawRequest::new(spec), |request, segment| {
                    request.route(segment.name, "x")
                });

            let err = request.resolve().unwrap_err();

            assert!(
                matches!(err, RequestError::MissingRouteValue { .. }),
                "{} without {}: {err}",
                spec.name,
                missing.name
            );
        }
    }
}

#[rstest]
#[case("get", HttpMethod::Get, false)]
#[case("exists", HttpMethod::Head, false)]
#[case("create", HttpMethod::Put, true)]
#[case("index", HttpMethod::Post, true)]
#[case("delete", HttpMethod::Delete, false)]
#[case("bulk", HttpMethod::Post, true)]
#[case("clear_scroll", HttpMethod::Delete, true)]
#[case("snapshot.restore", HttpMethod::Post, true)]
#[case("snapshot.status", HttpMethod::Get, false)]
#[case("tasks.cancel", HttpMethod::Post, false)]
#[case("ingest.put_pipeline", HttpMethod::Put, true)]
#[case("dangling_indices.import_dangling_index", HttpMethod::Post, false)]
#[case("features.get_features", HttpMethod::Get, false)]
#[case("cat.indices", HttpMethod::Get, false)]
fn test_registry_entry(#[case] name: &str, #[case] method: HttpMethod, #[case] body: bool) {
    let spec = registry().get(name).unwrap();

    assert_eq!(spec.method, method);
    assert_eq!(spec.supports_body, body);
}

#[test]
fn test_unknown_endpoint_is_reported() {
    assert_eq!(
        registry().get("indices.frobnicate").unwrap_err(),
        RequestError::UnknownEndpoint {
            name: "indices.frobnicate".into()
        }
    );
}

#[test]
fn test_descriptor_spec_is_the_registered_spec() {
    let descriptor = SnapshotStatusRequest::new();

    assert!(std::ptr::eq(
        descriptor.spec(),
        registry().get("snapshot.status").unwrap()
    ));
}

#[test]
fn test_snapshot_status_segments() {
    let spec = registry().get("snapshot.status").unwrap();

    let segments: Vec<(&str, bool)> = spec
        .segments()
        .into_iter()
        .map(|s| (s.name, s.required))
        .collect();

    assert_eq!(segments, vec![("repository", false), ("snapshot", false)]);
}

// ---------------------------------------------------------------------------
// Format side effect on every tabular cat endpoint
// ---------------------------------------------------------------------------

fn assert_yaml<E: Tabular>(request: Descriptor<E>) {
    let name = request.spec().name;
    let request = request.format(Format::Yaml);

    assert_eq!(
        request.parameters().get("format"),
        Some(&ParamValue::Token("yaml".into())),
        "{name}"
    );
    assert_eq!(request.parameters().accept(), Some("application/yaml"), "{name}");

    let resolved = request.resolve().unwrap();
    assert_eq!(
        resolved.headers().get("accept").map(String::as_str),
        Some("application/yaml"),
        "{name}"
    );
}

#[test]
fn test_format_yaml_selects_accept_for_every_tabular_endpoint() {
    assert_yaml(CatAliasesRequest::new());
    assert_yaml(CatAllocationRequest::new());
    assert_yaml(CatClusterManagerRequest::new());
    assert_yaml(CatCountRequest::new());
    assert_yaml(CatFielddataRequest::new());
    assert_yaml(CatHealthRequest::new());
    assert_yaml(CatIndicesRequest::new());
    assert_yaml(CatMasterRequest::new());
    assert_yaml(CatNodeAttributesRequest::new());
    assert_yaml(CatNodesRequest::new());
    assert_yaml(CatPendingTasksRequest::new());
    assert_yaml(CatPluginsRequest::new());
    assert_yaml(CatRecoveryRequest::new());
    assert_yaml(CatRepositoriesRequest::new());
    assert_yaml(CatSegmentsRequest::new());
    assert_yaml(CatShardsRequest::new());
    assert_yaml(CatSnapshotsRequest::new());
    assert_yaml(CatTasksRequest::new());
    assert_yaml(CatTemplatesRequest::new());
    assert_yaml(CatThreadPoolRequest::new());
}

#[test]
fn test_changing_format_replaces_accept() {
    let request = CatNodesRequest::new()
        .format(Format::Yaml)
        .format(Format::Json);

    assert_eq!(request.parameters().accept(), Some("application/json"));
}

#[test]
fn test_cat_common_parameters() {
    let request = CatShardsRequest::for_indices("orders")
        .verbose()
        .headers(["index", "shard", "state"])
        .sort_by_columns(["index:asc"])
        .set_help(false);

    let resolved = request.resolve().unwrap();

    assert_eq!(
        resolved.path_and_query(),
        "/_cat/shards/orders?h=index,shard,state&help=false&s=index%3Aasc&v=true"
    );
}

// ---------------------------------------------------------------------------
// Boolean shorthand
// ---------------------------------------------------------------------------

#[rstest]
#[case::delete_by_query(DeleteByQueryRequest::new("orders").refresh().parameters().clone(), "refresh")]
#[case::get(GetRequest::new("orders", "1").realtime().parameters().clone(), "realtime")]
#[case::restore(RestoreRequest::new("b", "s").wait_for_completion().parameters().clone(), "wait_for_completion")]
#[case::cat_health(CatHealthRequest::new().include_timestamp().parameters().clone(), "ts")]
#[case::dangling(DeleteDanglingIndexRequest::new("u").accept_data_loss().parameters().clone(), "accept_data_loss")]
#[case::common(PingRequest::new().pretty().parameters().clone(), "pretty")]
fn test_flag_without_argument_stores_true(
    #[case] parameters: request::ParameterBag,
    #[case] key: &str,
) {
    assert_eq!(parameters.get(key), Some(&ParamValue::Bool(true)));
}
