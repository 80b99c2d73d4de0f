//! Endpoints that live at the top level of the API.

use request::{Id, IndexName, Indices, TaskId};

use crate::api::*;
use crate::client::Client;

impl Client {
    namespace_methods! {
        /// Retrieves a document.
        get, get_async, get_request, get_request_async
            (index: impl Into<IndexName>, id: impl Into<Id>) -> GetRequest = GetRequest::new(index, id);

        /// Checks whether a document exists.
        exists, exists_async, exists_request, exists_request_async
            (index: impl Into<IndexName>, id: impl Into<Id>) -> ExistsRequest = ExistsRequest::new(index, id);

        /// Retrieves a document's source.
        source, source_async, source_request, source_request_async
            (index: impl Into<IndexName>, id: impl Into<Id>) -> SourceRequest = SourceRequest::new(index, id);

        /// Checks whether a document's source exists.
        source_exists, source_exists_async, source_exists_request, source_exists_request_async
            (index: impl Into<IndexName>, id: impl Into<Id>) -> SourceExistsRequest =
            SourceExistsRequest::new(index, id);

        /// Creates a document, failing if the id is taken.
        create, create_async, create_request, create_request_async
            (index: impl Into<IndexName>, id: impl Into<Id>) -> CreateRequest = CreateRequest::new(index, id);

        /// Indexes a document under a server-generated id.
        index, index_async, index_request, index_request_async
            (index: impl Into<IndexName>) -> IndexRequest = IndexRequest::new(index);

        /// Partially updates a document.
        update, update_async, update_request, update_request_async
            (index: impl Into<IndexName>, id: impl Into<Id>) -> UpdateRequest = UpdateRequest::new(index, id);

        /// Deletes a document.
        delete, delete_async, delete_request, delete_request_async
            (index: impl Into<IndexName>, id: impl Into<Id>) -> DeleteRequest = DeleteRequest::new(index, id);

        /// Counts matching documents across every index.
        count, count_async, count_request, count_request_async
            () -> CountRequest = CountRequest::new();

        /// Searches every index.
        search, search_async, search_request, search_request_async
            () -> SearchRequest = SearchRequest::new();

        /// Explains how a document scores against a query.
        explain, explain_async, explain_request, explain_request_async
            (index: impl Into<IndexName>, id: impl Into<Id>) -> ExplainRequest = ExplainRequest::new(index, id);

        /// Describes field capabilities across every index.
        field_caps, field_caps_async, field_caps_request, field_caps_request_async
            () -> FieldCapabilitiesRequest = FieldCapabilitiesRequest::new();

        /// Returns term vectors for a document supplied in the body.
        termvectors, termvectors_async, termvectors_request, termvectors_request_async
            (index: impl Into<IndexName>) -> TermVectorsRequest = TermVectorsRequest::new(index);

        /// Retrieves several documents.
        mget, mget_async, mget_request, mget_request_async
            () -> MultiGetRequest = MultiGetRequest::new();

        /// Runs several searches.
        msearch, msearch_async, msearch_request, msearch_request_async
            () -> MultiSearchRequest = MultiSearchRequest::new();

        /// Runs a batch of index, create, update and delete operations.
        bulk, bulk_async, bulk_request, bulk_request_async
            () -> BulkRequest = BulkRequest::new();

        /// Deletes documents matching a query.
        delete_by_query, delete_by_query_async, delete_by_query_request, delete_by_query_request_async
            (indices: impl Into<Indices>) -> DeleteByQueryRequest = DeleteByQueryRequest::new(indices);

        /// Updates documents matching a query.
        update_by_query, update_by_query_async, update_by_query_request, update_by_query_request_async
            (indices: impl Into<Indices>) -> UpdateByQueryRequest = UpdateByQueryRequest::new(indices);

        /// Changes the throttle of a running delete-by-query.
        delete_by_query_rethrottle, delete_by_query_rethrottle_async,
        delete_by_query_rethrottle_request, delete_by_query_rethrottle_request_async
            (task_id: TaskId) -> DeleteByQueryRethrottleRequest = DeleteByQueryRethrottleRequest::new(task_id);

        /// Changes the throttle of a running update-by-query.
        update_by_query_rethrottle, update_by_query_rethrottle_async,
        update_by_query_rethrottle_request, update_by_query_rethrottle_request_async
            (task_id: TaskId) -> UpdateByQueryRethrottleRequest = UpdateByQueryRethrottleRequest::new(task_id);

        /// Changes the throttle of a running reindex.
        reindex_rethrottle, reindex_rethrottle_async, reindex_rethrottle_request, reindex_rethrottle_request_async
            (task_id: TaskId) -> ReindexRethrottleRequest = ReindexRethrottleRequest::new(task_id);

        /// Copies documents from one index to another.
        reindex, reindex_async, reindex_request, reindex_request_async
            () -> ReindexRequest = ReindexRequest::new();

        /// Fetches the next batch of a scroll.
        scroll, scroll_async, scroll_request, scroll_request_async
            () -> ScrollRequest = ScrollRequest::new();

        /// Releases scroll contexts.
        clear_scroll, clear_scroll_async, clear_scroll_request, clear_scroll_request_async
            () -> ClearScrollRequest = ClearScrollRequest::new();

        /// Retrieves a stored script.
        get_script, get_script_async, get_script_request, get_script_request_async
            (id: impl Into<Id>) -> GetScriptRequest = GetScriptRequest::new(id);

        /// Stores a script.
        put_script, put_script_async, put_script_request, put_script_request_async
            (id: impl Into<Id>) -> PutScriptRequest = PutScriptRequest::new(id);

        /// Deletes a stored script.
        delete_script, delete_script_async, delete_script_request, delete_script_request_async
            (id: impl Into<Id>) -> DeleteScriptRequest = DeleteScriptRequest::new(id);

        /// Checks that the cluster answers.
        ping, ping_async, ping_request, ping_request_async
            () -> PingRequest = PingRequest::new();

        /// Basic information about the cluster.
        info, info_async, info_request, info_request_async
            () -> InfoRequest = InfoRequest::new();
    }
}
