//! The `cat` namespace.

use crate::api::*;
use crate::dispatch::Dispatch;

/// Compact tabular endpoints. Obtained from [`Client::cat`](crate::Client::cat).
#[derive(Clone)]
pub struct CatNamespace {
    dispatch: Dispatch,
}

impl CatNamespace {
    pub(crate) fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    namespace_methods! {
        /// Lists aliases.
        aliases, aliases_async, aliases_request, aliases_request_async
            () -> CatAliasesRequest = CatAliasesRequest::new();

        /// Shard allocation and disk use per node.
        allocation, allocation_async, allocation_request, allocation_request_async
            () -> CatAllocationRequest = CatAllocationRequest::new();

        /// The elected cluster manager.
        cluster_manager, cluster_manager_async, cluster_manager_request, cluster_manager_request_async
            () -> CatClusterManagerRequest = CatClusterManagerRequest::new();

        /// Document counts.
        count, count_async, count_request, count_request_async
            () -> CatCountRequest = CatCountRequest::new();

        /// Fielddata memory per node.
        fielddata, fielddata_async, fielddata_request, fielddata_request_async
            () -> CatFielddataRequest = CatFielddataRequest::new();

        /// Cluster health.
        health, health_async, health_request, health_request_async
            () -> CatHealthRequest = CatHealthRequest::new();

        /// Lists the cat endpoints.
        help, help_async, help_request, help_request_async
            () -> CatHelpRequest = CatHelpRequest::new();

        /// Index statistics.
        indices, indices_async, indices_request, indices_request_async
            () -> CatIndicesRequest = CatIndicesRequest::new();

        /// The elected master node.
        master, master_async, master_request, master_request_async
            () -> CatMasterRequest = CatMasterRequest::new();

        /// Custom node attributes.
        nodeattrs, nodeattrs_async, nodeattrs_request, nodeattrs_request_async
            () -> CatNodeAttributesRequest = CatNodeAttributesRequest::new();

        /// Node statistics.
        nodes, nodes_async, nodes_request, nodes_request_async
            () -> CatNodesRequest = CatNodesRequest::new();

        /// Cluster tasks not yet executed.
        pending_tasks, pending_tasks_async, pending_tasks_request, pending_tasks_request_async
            () -> CatPendingTasksRequest = CatPendingTasksRequest::new();

        /// Installed plugins per node.
        plugins, plugins_async, plugins_request, plugins_request_async
            () -> CatPluginsRequest = CatPluginsRequest::new();

        /// Shard recoveries.
        recovery, recovery_async, recovery_request, recovery_request_async
            () -> CatRecoveryRequest = CatRecoveryRequest::new();

        /// Registered snapshot repositories.
        repositories, repositories_async, repositories_request, repositories_request_async
            () -> CatRepositoriesRequest = CatRepositoriesRequest::new();

        /// Lucene segments per shard.
        segments, segments_async, segments_request, segments_request_async
            () -> CatSegmentsRequest = CatSegmentsRequest::new();

        /// Shard placement.
        shards, shards_async, shards_request, shards_request_async
            () -> CatShardsRequest = CatShardsRequest::new();

        /// Snapshots in every repository.
        snapshots, snapshots_async, snapshots_request, snapshots_request_async
            () -> CatSnapshotsRequest = CatSnapshotsRequest::new();

        /// Running tasks.
        tasks, tasks_async, tasks_request, tasks_request_async
            () -> CatTasksRequest = CatTasksRequest::new();

        /// Index templates.
        templates, templates_async, templates_request, templates_request_async
            () -> CatTemplatesRequest = CatTemplatesRequest::new();

        /// Thread pool statistics per node.
        thread_pool, thread_pool_async, thread_pool_request, thread_pool_request_async
            () -> CatThreadPoolRequest = CatThreadPoolRequest::new();
    }
}
