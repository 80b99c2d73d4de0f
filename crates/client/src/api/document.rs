//! Single-document endpoints: get, exists, source, create, index, update,
//! delete, explain, term vectors.

use request::{
    DefaultOperator, Id, IndexName, OpType, Refresh, Time, VersionType,
};

use crate::document::{DocumentRoute, IndexRoute};

endpoint! {
    /// Retrieves one document by id.
    Get => GetRequest {
        name: "get",
        method: Get,
        paths: ["/{index}/_doc/{id}"],
        body: false,
        marks: [IndexRoute, DocumentRoute],
        route {
            index: IndexName => "index",
            id: Id => "id",
        }
        flags {
            realtime / set_realtime => "realtime",
            refresh / set_refresh => "refresh",
            source_enabled / set_source_enabled => "_source",
        }
        values {
            preference: String => "preference",
            routing: String => "routing",
            version: i64 => "version",
            version_type: VersionType => "version_type",
        }
        lists {
            source_excludes => "_source_excludes",
            source_includes => "_source_includes",
            stored_fields => "stored_fields",
        }
    }
}

impl GetRequest {
    /// Targets document `id` in `index`.
    pub fn new(index: impl Into<IndexName>, id: impl Into<Id>) -> Self {
        Self::unbound().index(index).id(id)
    }
}

endpoint! {
    /// Checks whether a document exists.
    Exists => ExistsRequest {
        name: "exists",
        method: Head,
        paths: ["/{index}/_doc/{id}"],
        body: false,
        marks: [IndexRoute, DocumentRoute],
        route {
            index: IndexName => "index",
            id: Id => "id",
        }
        flags {
            realtime / set_realtime => "realtime",
            refresh / set_refresh => "refresh",
            source_enabled / set_source_enabled => "_source",
        }
        values {
            preference: String => "preference",
            routing: String => "routing",
            version: i64 => "version",
            version_type: VersionType => "version_type",
        }
        lists {
            source_excludes => "_source_excludes",
            source_includes => "_source_includes",
            stored_fields => "stored_fields",
        }
    }
}

impl ExistsRequest {
    /// Targets document `id` in `index`.
    pub fn new(index: impl Into<IndexName>, id: impl Into<Id>) -> Self {
        Self::unbound().index(index).id(id)
    }
}

endpoint! {
    /// Retrieves only the `_source` of a document.
    Source => SourceRequest {
        name: "source",
        method: Get,
        paths: ["/{index}/_source/{id}"],
        body: false,
        marks: [IndexRoute, DocumentRoute],
        route {
            index: IndexName => "index",
            id: Id => "id",
        }
        flags {
            realtime / set_realtime => "realtime",
            refresh / set_refresh => "refresh",
            source_enabled / set_source_enabled => "_source",
        }
        values {
            preference: String => "preference",
            routing: String => "routing",
            version: i64 => "version",
            version_type: VersionType => "version_type",
        }
        lists {
            source_excludes => "_source_excludes",
            source_includes => "_source_includes",
        }
    }
}

impl SourceRequest {
    /// Targets document `id` in `index`.
    pub fn new(index: impl Into<IndexName>, id: impl Into<Id>) -> Self {
        Self::unbound().index(index).id(id)
    }
}

endpoint! {
    /// Checks whether a document has a stored `_source`.
    SourceExists => SourceExistsRequest {
        name: "source_exists",
        method: Head,
        paths: ["/{index}/_source/{id}"],
        body: false,
        marks: [IndexRoute, DocumentRoute],
        route {
            index: IndexName => "index",
            id: Id => "id",
        }
        flags {
            realtime / set_realtime => "realtime",
            refresh / set_refresh => "refresh",
            source_enabled / set_source_enabled => "_source",
        }
        values {
            preference: String => "preference",
            routing: String => "routing",
            version: i64 => "version",
            version_type: VersionType => "version_type",
        }
        lists {
            source_excludes => "_source_excludes",
            source_includes => "_source_includes",
        }
    }
}

impl SourceExistsRequest {
    /// Targets document `id` in `index`.
    pub fn new(index: impl Into<IndexName>, id: impl Into<Id>) -> Self {
        Self::unbound().index(index).id(id)
    }
}

endpoint! {
    /// Indexes a document, failing if the id already exists.
    Create => CreateRequest {
        name: "create",
        method: Put,
        paths: ["/{index}/_create/{id}"],
        body: true,
        marks: [IndexRoute, DocumentRoute],
        route {
            index: IndexName => "index",
            id: Id => "id",
        }
        values {
            pipeline: String => "pipeline",
            refresh: Refresh => "refresh",
            routing: String => "routing",
            timeout: Time => "timeout",
            version: i64 => "version",
            version_type: VersionType => "version_type",
            wait_for_active_shards: String => "wait_for_active_shards",
        }
    }
}

impl CreateRequest {
    /// Creates document `id` in `index`.
    pub fn new(index: impl Into<IndexName>, id: impl Into<Id>) -> Self {
        Self::unbound().index(index).id(id)
    }
}

endpoint! {
    /// Indexes a document, with or without a caller-chosen id.
    Index => IndexRequest {
        name: "index",
        method: Post,
        paths: ["/{index}/_doc/{id}", "/{index}/_doc"],
        body: true,
        marks: [IndexRoute, DocumentRoute],
        route {
            index: IndexName => "index",
            id: Id => "id",
        }
        flags {
            require_alias / set_require_alias => "require_alias",
        }
        values {
            if_primary_term: i64 => "if_primary_term",
            if_seq_no: i64 => "if_seq_no",
            op_type: OpType => "op_type",
            pipeline: String => "pipeline",
            refresh: Refresh => "refresh",
            routing: String => "routing",
            timeout: Time => "timeout",
            version: i64 => "version",
            version_type: VersionType => "version_type",
            wait_for_active_shards: String => "wait_for_active_shards",
        }
    }
}

impl IndexRequest {
    /// Indexes into `index` and lets the server assign the id.
    pub fn new(index: impl Into<IndexName>) -> Self {
        Self::unbound().index(index)
    }

    /// Indexes document `id` into `index`.
    pub fn with_id(index: impl Into<IndexName>, id: impl Into<Id>) -> Self {
        Self::unbound().index(index).id(id)
    }
}

endpoint! {
    /// Partially updates a document with a script or a partial document.
    Update => UpdateRequest {
        name: "update",
        method: Post,
        paths: ["/{index}/_update/{id}"],
        body: true,
        marks: [IndexRoute, DocumentRoute],
        route {
            index: IndexName => "index",
            id: Id => "id",
        }
        flags {
            require_alias / set_require_alias => "require_alias",
            source_enabled / set_source_enabled => "_source",
        }
        values {
            if_primary_term: i64 => "if_primary_term",
            if_seq_no: i64 => "if_seq_no",
            lang: String => "lang",
            refresh: Refresh => "refresh",
            retry_on_conflict: i64 => "retry_on_conflict",
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

impl UpdateRequest {
    /// Updates document `id` in `index`.
    pub fn new(index: impl Into<IndexName>, id: impl Into<Id>) -> Self {
        Self::unbound().index(index).id(id)
    }
}

endpoint! {
    /// Deletes one document.
    Delete => DeleteRequest {
        name: "delete",
        method: Delete,
        paths: ["/{index}/_doc/{id}"],
        body: false,
        marks: [IndexRoute, DocumentRoute],
        route {
            index: IndexName => "index",
            id: Id => "id",
        }
        values {
            if_primary_term: i64 => "if_primary_term",
            if_seq_no: i64 => "if_seq_no",
            refresh: Refresh => "refresh",
            routing: String => "routing",
            timeout: Time => "timeout",
            version: i64 => "version",
            version_type: VersionType => "version_type",
            wait_for_active_shards: String => "wait_for_active_shards",
        }
    }
}

impl DeleteRequest {
    /// Deletes document `id` from `index`.
    pub fn new(index: impl Into<IndexName>, id: impl Into<Id>) -> Self {
        Self::unbound().index(index).id(id)
    }
}

endpoint! {
    /// Explains how a document scores against a query.
    Explain => ExplainRequest {
        name: "explain",
        method: Post,
        paths: ["/{index}/_explain/{id}"],
        body: true,
        marks: [IndexRoute, DocumentRoute],
        route {
            index: IndexName => "index",
            id: Id => "id",
        }
        flags {
            analyze_wildcard / set_analyze_wildcard => "analyze_wildcard",
            lenient / set_lenient => "lenient",
            source_enabled / set_source_enabled => "_source",
        }
        values {
            analyzer: String => "analyzer",
            default_operator: DefaultOperator => "default_operator",
            df: String => "df",
            preference: String => "preference",
            q: String => "q",
            routing: String => "routing",
        }
        lists {
            source_excludes => "_source_excludes",
            source_includes => "_source_includes",
            stored_fields => "stored_fields",
        }
    }
}

impl ExplainRequest {
    /// Explains document `id` in `index`.
    pub fn new(index: impl Into<IndexName>, id: impl Into<Id>) -> Self {
        Self::unbound().index(index).id(id)
    }
}

endpoint! {
    /// Returns term statistics for a stored or an artificial document.
    TermVectors => TermVectorsRequest {
        name: "termvectors",
        method: Post,
        paths: ["/{index}/_termvectors/{id}", "/{index}/_termvectors"],
        body: true,
        marks: [IndexRoute, DocumentRoute],
        route {
            index: IndexName => "index",
            id: Id => "id",
        }
        flags {
            field_statistics / set_field_statistics => "field_statistics",
            offsets / set_offsets => "offsets",
            payloads / set_payloads => "payloads",
            positions / set_positions => "positions",
            realtime / set_realtime => "realtime",
            term_statistics / set_term_statistics => "term_statistics",
        }
        values {
            preference: String => "preference",
            routing: String => "routing",
            version: i64 => "version",
            version_type: VersionType => "version_type",
        }
        lists {
            fields => "fields",
        }
    }
}

impl TermVectorsRequest {
    /// Term vectors for an artificial document supplied in the body.
    pub fn new(index: impl Into<IndexName>) -> Self {
        Self::unbound().index(index)
    }

    /// Term vectors for stored document `id`.
    pub fn with_id(index: impl Into<IndexName>, id: impl Into<Id>) -> Self {
        Self::unbound().index(index).id(id)
    }
}
