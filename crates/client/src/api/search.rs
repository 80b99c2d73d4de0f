//! Search-side endpoints: search, count, multi-get, multi-search, field
//! capabilities and scrolling.

use request::{DefaultOperator, ExpandWildcards, IndexName, Indices, SearchType, Time};

use crate::document::{IndexRoute, MultiIndexRoute};

endpoint! {
    /// Runs a search.
    Search => SearchRequest {
        name: "search",
        method: Post,
        paths: ["/{index}/_search", "/_search"],
        body: true,
        marks: [IndexRoute, MultiIndexRoute],
        route {
            index: Indices => "index",
        }
        flags {
            allow_no_indices / set_allow_no_indices => "allow_no_indices",
            allow_partial_search_results / set_allow_partial_search_results => "allow_partial_search_results",
            analyze_wildcard / set_analyze_wildcard => "analyze_wildcard",
            ccs_minimize_roundtrips / set_ccs_minimize_roundtrips => "ccs_minimize_roundtrips",
            ignore_throttled / set_ignore_throttled => "ignore_throttled",
            ignore_unavailable / set_ignore_unavailable => "ignore_unavailable",
            lenient / set_lenient => "lenient",
            request_cache / set_request_cache => "request_cache",
            seq_no_primary_term / set_seq_no_primary_term => "seq_no_primary_term",
            source_enabled / set_source_enabled => "_source",
            explain / set_explain => "explain",
            total_hits_as_integer / set_total_hits_as_integer => "rest_total_hits_as_int",
            track_scores / set_track_scores => "track_scores",
            typed_keys / set_typed_keys => "typed_keys",
            version / set_version => "version",
        }
        values {
            analyzer: String => "analyzer",
            batched_reduce_size: i64 => "batched_reduce_size",
            default_operator: DefaultOperator => "default_operator",
            df: String => "df",
            expand_wildcards: ExpandWildcards => "expand_wildcards",
            from: i64 => "from",
            max_concurrent_shard_requests: i64 => "max_concurrent_shard_requests",
            pre_filter_shard_size: i64 => "pre_filter_shard_size",
            preference: String => "preference",
            q: String => "q",
            routing: String => "routing",
            scroll: Time => "scroll",
            search_type: SearchType => "search_type",
            size: i64 => "size",
            suggest_field: String => "suggest_field",
            suggest_mode: String => "suggest_mode",
            suggest_size: i64 => "suggest_size",
            suggest_text: String => "suggest_text",
            terminate_after: i64 => "terminate_after",
            timeout: Time => "timeout",
            track_total_hits: String => "track_total_hits",
        }
        lists {
            docvalue_fields => "docvalue_fields",
            sort => "sort",
            source_excludes => "_source_excludes",
            source_includes => "_source_includes",
            stats => "stats",
            stored_fields => "stored_fields",
        }
    }
}

impl SearchRequest {
    /// Searches every index.
    pub fn new() -> Self {
        Self::unbound()
    }

    /// Searches `indices`.
    pub fn for_indices(indices: impl Into<Indices>) -> Self {
        Self::unbound().index(indices)
    }
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self::new()
    }
}

endpoint! {
    /// Counts the documents matching a query.
    Count => CountRequest {
        name: "count",
        method: Post,
        paths: ["/{index}/_count", "/_count"],
        body: true,
        marks: [IndexRoute, MultiIndexRoute],
        route {
            index: Indices => "index",
        }
        flags {
            allow_no_indices / set_allow_no_indices => "allow_no_indices",
            analyze_wildcard / set_analyze_wildcard => "analyze_wildcard",
            ignore_throttled / set_ignore_throttled => "ignore_throttled",
            ignore_unavailable / set_ignore_unavailable => "ignore_unavailable",
            lenient / set_lenient => "lenient",
        }
        values {
            analyzer: String => "analyzer",
            default_operator: DefaultOperator => "default_operator",
            df: String => "df",
            expand_wildcards: ExpandWildcards => "expand_wildcards",
            min_score: f64 => "min_score",
            preference: String => "preference",
            q: String => "q",
            routing: String => "routing",
            terminate_after: i64 => "terminate_after",
        }
    }
}

impl CountRequest {
    /// Counts across every index.
    pub fn new() -> Self {
        Self::unbound()
    }

    /// Counts within `indices`.
    pub fn for_indices(indices: impl Into<Indices>) -> Self {
        Self::unbound().index(indices)
    }
}

impl Default for CountRequest {
    fn default() -> Self {
        Self::new()
    }
}

endpoint! {
    /// Retrieves several documents in one round trip.
    MultiGet => MultiGetRequest {
        name: "mget",
        method: Post,
        paths: ["/{index}/_mget", "/_mget"],
        body: true,
        marks: [IndexRoute],
        route {
            index: IndexName => "index",
        }
        flags {
            realtime / set_realtime => "realtime",
            refresh / set_refresh => "refresh",
            source_enabled / set_source_enabled => "_source",
        }
        values {
            preference: String => "preference",
            routing: String => "routing",
        }
        lists {
            source_excludes => "_source_excludes",
            source_includes => "_source_includes",
            stored_fields => "stored_fields",
        }
    }
}

impl MultiGetRequest {
    /// Every document names its own index in the body.
    pub fn new() -> Self {
        Self::unbound()
    }

    /// Documents without an explicit index are read from `index`.
    pub fn for_index(index: impl Into<IndexName>) -> Self {
        Self::unbound().index(index)
    }
}

impl Default for MultiGetRequest {
    fn default() -> Self {
        Self::new()
    }
}

endpoint! {
    /// Runs several searches from one NDJSON body.
    MultiSearch => MultiSearchRequest {
        name: "msearch",
        method: Post,
        paths: ["/{index}/_msearch", "/_msearch"],
        body: true,
        marks: [IndexRoute, MultiIndexRoute],
        route {
            index: Indices => "index",
        }
        flags {
            ccs_minimize_roundtrips / set_ccs_minimize_roundtrips => "ccs_minimize_roundtrips",
            total_hits_as_integer / set_total_hits_as_integer => "rest_total_hits_as_int",
            typed_keys / set_typed_keys => "typed_keys",
        }
        values {
            max_concurrent_searches: i64 => "max_concurrent_searches",
            max_concurrent_shard_requests: i64 => "max_concurrent_shard_requests",
            pre_filter_shard_size: i64 => "pre_filter_shard_size",
            search_type: SearchType => "search_type",
        }
    }
}

impl MultiSearchRequest {
    /// Every search names its own indices.
    pub fn new() -> Self {
        Self::unbound()
    }

    /// Searches without explicit indices run against `indices`.
    pub fn for_indices(indices: impl Into<Indices>) -> Self {
        Self::unbound().index(indices)
    }
}

impl Default for MultiSearchRequest {
    fn default() -> Self {
        Self::new()
    }
}

endpoint! {
    /// Reports the capabilities of fields across indices.
    FieldCapabilities => FieldCapabilitiesRequest {
        name: "field_caps",
        method: Post,
        paths: ["/{index}/_field_caps", "/_field_caps"],
        body: true,
        marks: [IndexRoute, MultiIndexRoute],
        route {
            index: Indices => "index",
        }
        flags {
            allow_no_indices / set_allow_no_indices => "allow_no_indices",
            ignore_unavailable / set_ignore_unavailable => "ignore_unavailable",
            include_unmapped / set_include_unmapped => "include_unmapped",
        }
        values {
            expand_wildcards: ExpandWildcards => "expand_wildcards",
        }
        lists {
            fields => "fields",
        }
    }
}

impl FieldCapabilitiesRequest {
    /// Field capabilities across every index.
    pub fn new() -> Self {
        Self::unbound()
    }

    /// Field capabilities within `indices`.
    pub fn for_indices(indices: impl Into<Indices>) -> Self {
        Self::unbound().index(indices)
    }
}

impl Default for FieldCapabilitiesRequest {
    fn default() -> Self {
        Self::new()
    }
}

endpoint! {
    /// Fetches the next page of a scrolled search.
    Scroll => ScrollRequest {
        name: "scroll",
        method: Post,
        paths: ["/_search/scroll"],
        body: true,
        flags {
            total_hits_as_integer / set_total_hits_as_integer => "rest_total_hits_as_int",
        }
        values {
            scroll: Time => "scroll",
        }
    }
}

impl ScrollRequest {
    /// Continues a scroll; the scroll id travels in the body.
    pub fn new() -> Self {
        Self::unbound()
    }
}

impl Default for ScrollRequest {
    fn default() -> Self {
        Self::new()
    }
}

endpoint! {
    /// Releases the resources held by scroll contexts.
    ClearScroll => ClearScrollRequest {
        name: "clear_scroll",
        method: Delete,
        paths: ["/_search/scroll"],
        body: true,
    }
}

impl ClearScrollRequest {
    /// Clears the scroll ids listed in the body.
    pub fn new() -> Self {
        Self::unbound()
    }
}

impl Default for ClearScrollRequest {
    fn default() -> Self {
        Self::new()
    }
}
