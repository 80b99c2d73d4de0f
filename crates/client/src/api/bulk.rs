//! Multi-document writes: bulk, by-query operations, reindex and their
//! rethrottle endpoints.

use request::{Conflicts, DefaultOperator, ExpandWildcards, IndexName, Indices, Refresh, SearchType, TaskId, Time};

use crate::document::{IndexRoute, MultiIndexRoute};

endpoint! {
    /// Runs many index, create, update and delete operations from one NDJSON body.
    Bulk => BulkRequest {
        name: "bulk",
        method: Post,
        paths: ["/{index}/_bulk", "/_bulk"],
        body: true,
        marks: [IndexRoute],
        route {
            index: IndexName => "index",
        }
        flags {
            require_alias / set_require_alias => "require_alias",
            source_enabled / set_source_enabled => "_source",
        }
        values {
            pipeline: String => "pipeline",
            refresh: Refresh => "refresh",
            routing: String => "routing",
            timeout: Time => "timeout",
            wait_for_active_shards: String => "wait_for_active_shards",
        }
        lists {
            source_excludes => "_source_excludes",
            source_includes => "_source_includes",
        }
    }
}

impl BulkRequest {
    /// Every operation names its own index.
    pub fn new() -> Self {
        Self::unbound()
    }

    /// Operations without an explicit index go to `index`.
    pub fn for_index(index: impl Into<IndexName>) -> Self {
        Self::unbound().index(index)
    }
}

impl Default for BulkRequest {
    fn default() -> Self {
        Self::new()
    }
}

endpoint! {
    /// Deletes every document matching a query.
    DeleteByQuery => DeleteByQueryRequest {
        name: "delete_by_query",
        method: Post,
        paths: ["/{index}/_delete_by_query"],
        body: true,
        marks: [IndexRoute, MultiIndexRoute],
        route {
            index: Indices => "index",
        }
        flags {
            allow_no_indices / set_allow_no_indices => "allow_no_indices",
            analyze_wildcard / set_analyze_wildcard => "analyze_wildcard",
            ignore_unavailable / set_ignore_unavailable => "ignore_unavailable",
            lenient / set_lenient => "lenient",
            refresh / set_refresh => "refresh",
            request_cache / set_request_cache => "request_cache",
            source_enabled / set_source_enabled => "_source",
            version / set_version => "version",
            wait_for_completion / set_wait_for_completion => "wait_for_completion",
        }
        values {
            analyzer: String => "analyzer",
            conflicts: Conflicts => "conflicts",
            default_operator: DefaultOperator => "default_operator",
            df: String => "df",
            expand_wildcards: ExpandWildcards => "expand_wildcards",
            from: i64 => "from",
            preference: String => "preference",
            q: String => "q",
            requests_per_second: i64 => "requests_per_second",
            routing: String => "routing",
            scroll: Time => "scroll",
            scroll_size: i64 => "scroll_size",
            search_timeout: Time => "search_timeout",
            search_type: SearchType => "search_type",
            slices: i64 => "slices",
            terminate_after: i64 => "terminate_after",
            timeout: Time => "timeout",
            wait_for_active_shards: String => "wait_for_active_shards",
        }
        lists {
            sort => "sort",
            source_excludes => "_source_excludes",
            source_includes => "_source_includes",
            stats => "stats",
        }
    }
}

impl DeleteByQueryRequest {
    /// Deletes matching documents from `indices`.
    pub fn new(indices: impl Into<Indices>) -> Self {
        Self::unbound().index(indices)
    }
}

endpoint! {
    /// Updates every document matching a query.
    UpdateByQuery => UpdateByQueryRequest {
        name: "update_by_query",
        method: Post,
        paths: ["/{index}/_update_by_query"],
        body: true,
        marks: [IndexRoute, MultiIndexRoute],
        route {
            index: Indices => "index",
        }
        flags {
            allow_no_indices / set_allow_no_indices => "allow_no_indices",
            analyze_wildcard / set_analyze_wildcard => "analyze_wildcard",
            ignore_unavailable / set_ignore_unavailable => "ignore_unavailable",
            lenient / set_lenient => "lenient",
            refresh / set_refresh => "refresh",
            request_cache / set_request_cache => "request_cache",
            source_enabled / set_source_enabled => "_source",
            version / set_version => "version",
            version_type / set_version_type => "version_type",
            wait_for_completion / set_wait_for_completion => "wait_for_completion",
        }
        values {
            analyzer: String => "analyzer",
            conflicts: Conflicts => "conflicts",
            default_operator: DefaultOperator => "default_operator",
            df: String => "df",
            expand_wildcards: ExpandWildcards => "expand_wildcards",
            from: i64 => "from",
            pipeline: String => "pipeline",
            preference: String => "preference",
            q: String => "q",
            requests_per_second: i64 => "requests_per_second",
            routing: String => "routing",
            scroll: Time => "scroll",
            scroll_size: i64 => "scroll_size",
            search_timeout: Time => "search_timeout",
            search_type: SearchType => "search_type",
            slices: i64 => "slices",
            terminate_after: i64 => "terminate_after",
            timeout: Time => "timeout",
            wait_for_active_shards: String => "wait_for_active_shards",
        }
        lists {
            sort => "sort",
            source_excludes => "_source_excludes",
            source_includes => "_source_includes",
            stats => "stats",
        }
    }
}

impl UpdateByQueryRequest {
    /// Updates matching documents in `indices`.
    pub fn new(indices: impl Into<Indices>) -> Self {
        Self::unbound().index(indices)
    }
}

endpoint! {
    /// Copies documents from one index to another.
    Reindex => ReindexRequest {
        name: "reindex",
        method: Post,
        paths: ["/_reindex"],
        body: true,
        flags {
            refresh / set_refresh => "refresh",
            wait_for_completion / set_wait_for_completion => "wait_for_completion",
        }
        values {
            requests_per_second: i64 => "requests_per_second",
            scroll: Time => "scroll",
            slices: i64 => "slices",
            timeout: Time => "timeout",
            wait_for_active_shards: String => "wait_for_active_shards",
        }
    }
}

impl ReindexRequest {
    /// Source and destination travel in the body.
    pub fn new() -> Self {
        Self::unbound()
    }
}

impl Default for ReindexRequest {
    fn default() -> Self {
        Self::new()
    }
}

endpoint! {
    /// Changes the throttle of a running delete-by-query.
    DeleteByQueryRethrottle => DeleteByQueryRethrottleRequest {
        name: "delete_by_query_rethrottle",
        method: Post,
        paths: ["/_delete_by_query/{task_id}/_rethrottle"],
        body: false,
        route {
            task_id: TaskId => "task_id",
        }
        values {
            requests_per_second: i64 => "requests_per_second",
        }
    }
}

impl DeleteByQueryRethrottleRequest {
    /// Rethrottles `task_id`.
    pub fn new(task_id: TaskId) -> Self {
        Self::unbound().task_id(task_id)
    }
}

endpoint! {
    /// Changes the throttle of a running update-by-query.
    UpdateByQueryRethrottle => UpdateByQueryRethrottleRequest {
        name: "update_by_query_rethrottle",
        method: Post,
        paths: ["/_update_by_query/{task_id}/_rethrottle"],
        body: false,
        route {
            task_id: TaskId => "task_id",
        }
        values {
            requests_per_second: i64 => "requests_per_second",
        }
    }
}

impl UpdateByQueryRethrottleRequest {
    /// Rethrottles `task_id`.
    pub fn new(task_id: TaskId) -> Self {
        Self::unbound().task_id(task_id)
    }
}

endpoint! {
    /// Changes the throttle of a running reindex.
    ReindexRethrottle => ReindexRethrottleRequest {
        name: "reindex_rethrottle",
        method: Post,
        paths: ["/_reindex/{task_id}/_rethrottle"],
        body: false,
        route {
            task_id: TaskId => "task_id",
        }
        values {
            requests_per_second: i64 => "requests_per_second",
        }
    }
}

impl ReindexRethrottleRequest {
    /// Rethrottles `task_id`.
    pub fn new(task_id: TaskId) -> Self {
        Self::unbound().task_id(task_id)
    }
}
