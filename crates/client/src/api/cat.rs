//! Compact, human-oriented `_cat` endpoints.
//!
//! Every cat endpoint accepts `help` and `s` (sort columns). All but
//! `cat.help` also return tables in a selectable [`Format`] and accept `h`
//! (column selection) and `v` (header row); those are [`Tabular`].

use request::{Bytes, Endpoint, ExpandWildcards, Fields, Format, Health, Indices, Name, Names, NodeIds, Time};

use crate::descriptor::Descriptor;
use crate::document::{IndexRoute, MultiIndexRoute};

/// Endpoints under `/_cat`.
pub trait CatEndpoint: Endpoint {}

/// Cat endpoints that render a table.
pub trait Tabular: CatEndpoint {}

impl<E: CatEndpoint> Descriptor<E> {
    /// Returns help text for the endpoint instead of data.
    pub fn help(self) -> Self {
        self.query("help", true)
    }

    /// Sets `help`, or removes it for `None`.
    pub fn set_help(self, value: impl Into<Option<bool>>) -> Self {
        self.query_opt::<bool>("help", value.into())
    }

    /// Sorts the table by the given columns (`column:asc`, `column:desc`).
    pub fn sort_by_columns<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query("s", columns.into_iter().map(Into::into).collect::<Vec<String>>())
    }
}

impl<E: Tabular> Descriptor<E> {
    /// Selects the response format. Also selects the matching `Accept` header.
    pub fn format(self, format: Format) -> Self {
        self.query("format", format)
    }

    /// Restricts the table to the given columns.
    pub fn headers<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query("h", columns.into_iter().map(Into::into).collect::<Vec<String>>())
    }

    /// Includes the column header row.
    pub fn verbose(self) -> Self {
        self.query("v", true)
    }

    /// Sets `v`, or removes it for `None`.
    pub fn set_verbose(self, value: impl Into<Option<bool>>) -> Self {
        self.query_opt::<bool>("v", value.into())
    }
}

endpoint! {
    /// Lists index aliases, optionally filtered by name.
    CatAliases => CatAliasesRequest {
        name: "cat.aliases",
        method: Get,
        paths: ["/_cat/aliases/{name}", "/_cat/aliases"],
        body: false,
        marks: [CatEndpoint, Tabular],
        route {
            name: Names => "name",
        }
        flags {
            local / set_local => "local",
        }
        values {
            expand_wildcards: ExpandWildcards => "expand_wildcards",
        }
    }
}

endpoint! {
    /// Shows shard counts and disk use per data node.
    CatAllocation => CatAllocationRequest {
        name: "cat.allocation",
        method: Get,
        paths: ["/_cat/allocation/{node_id}", "/_cat/allocation"],
        body: false,
        marks: [CatEndpoint, Tabular],
        route {
            node_id: NodeIds => "node_id",
        }
        flags {
            local / set_local => "local",
        }
        values {
            bytes: Bytes => "bytes",
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
        }
    }
}

endpoint! {
    /// Shows the elected cluster manager node.
    CatClusterManager => CatClusterManagerRequest {
        name: "cat.cluster_manager",
        method: Get,
        paths: ["/_cat/cluster_manager"],
        body: false,
        marks: [CatEndpoint, Tabular],
        flags {
            local / set_local => "local",
        }
        values {
            cluster_manager_timeout: Time => "cluster_manager_timeout",
        }
    }
}

endpoint! {
    /// Document count of the whole cluster or of the given indices.
    CatCount => CatCountRequest {
        name: "cat.count",
        method: Get,
        paths: ["/_cat/count/{index}", "/_cat/count"],
        body: false,
        marks: [CatEndpoint, Tabular, IndexRoute, MultiIndexRoute],
        route {
            index: Indices => "index",
        }
    }
}

endpoint! {
    /// Heap used by fielddata per node, optionally per field.
    CatFielddata => CatFielddataRequest {
        name: "cat.fielddata",
        method: Get,
        paths: ["/_cat/fielddata/{fields}", "/_cat/fielddata"],
        body: false,
        marks: [CatEndpoint, Tabular],
        route {
            fields: Fields => "fields",
        }
        values {
            bytes: Bytes => "bytes",
        }
    }
}

endpoint! {
    /// One-line cluster health summary.
    CatHealth => CatHealthRequest {
        name: "cat.health",
        method: Get,
        paths: ["/_cat/health"],
        body: false,
        marks: [CatEndpoint, Tabular],
        flags {
            include_timestamp / set_include_timestamp => "ts",
        }
    }
}

endpoint! {
    /// Lists the cat endpoints. Plain text only; has no format setter.
    CatHelp => CatHelpRequest {
        name: "cat.help",
        method: Get,
        paths: ["/_cat"],
        body: false,
        marks: [CatEndpoint],
    }
}

endpoint! {
    /// Per-index health, document counts and store size.
    CatIndices => CatIndicesRequest {
        name: "cat.indices",
        method: Get,
        paths: ["/_cat/indices/{index}", "/_cat/indices"],
        body: false,
        marks: [CatEndpoint, Tabular, IndexRoute, MultiIndexRoute],
        route {
            index: Indices => "index",
        }
        flags {
            include_unloaded_segments / set_include_unloaded_segments => "include_unloaded_segments",
            local / set_local => "local",
            primaries_only / set_primaries_only => "pri",
        }
        values {
            bytes: Bytes => "bytes",
            expand_wildcards: ExpandWildcards => "expand_wildcards",
            health: Health => "health",
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
        }
    }
}

endpoint! {
    /// Shows the elected master node.
    ///
    /// Superseded by `cat.cluster_manager`; both are served.
    CatMaster => CatMasterRequest {
        name: "cat.master",
        method: Get,
        paths: ["/_cat/master"],
        body: false,
        marks: [CatEndpoint, Tabular],
        flags {
            local / set_local => "local",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
        }
    }
}

endpoint! {
    /// Lists custom node attributes.
    CatNodeAttributes => CatNodeAttributesRequest {
        name: "cat.nodeattrs",
        method: Get,
        paths: ["/_cat/nodeattrs"],
        body: false,
        marks: [CatEndpoint, Tabular],
        flags {
            local / set_local => "local",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
        }
    }
}

endpoint! {
    /// Per-node heap, load and roles.
    CatNodes => CatNodesRequest {
        name: "cat.nodes",
        method: Get,
        paths: ["/_cat/nodes"],
        body: false,
        marks: [CatEndpoint, Tabular],
        flags {
            full_id / set_full_id => "full_id",
        }
        values {
            bytes: Bytes => "bytes",
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
        }
    }
}

endpoint! {
    /// Cluster-level changes not yet executed.
    CatPendingTasks => CatPendingTasksRequest {
        name: "cat.pending_tasks",
        method: Get,
        paths: ["/_cat/pending_tasks"],
        body: false,
        marks: [CatEndpoint, Tabular],
        flags {
            local / set_local => "local",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
        }
    }
}

endpoint! {
    /// Plugins installed on each node.
    CatPlugins => CatPluginsRequest {
        name: "cat.plugins",
        method: Get,
        paths: ["/_cat/plugins"],
        body: false,
        marks: [CatEndpoint, Tabular],
        flags {
            include_bootstrap / set_include_bootstrap => "include_bootstrap",
            local / set_local => "local",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
        }
    }
}

endpoint! {
    /// Ongoing and completed shard recoveries.
    CatRecovery => CatRecoveryRequest {
        name: "cat.recovery",
        method: Get,
        paths: ["/_cat/recovery/{index}", "/_cat/recovery"],
        body: false,
        marks: [CatEndpoint, Tabular, IndexRoute, MultiIndexRoute],
        route {
            index: Indices => "index",
        }
        flags {
            active_only / set_active_only => "active_only",
            detailed / set_detailed => "detailed",
        }
        values {
            bytes: Bytes => "bytes",
        }
    }
}

endpoint! {
    /// Registered snapshot repositories.
    CatRepositories => CatRepositoriesRequest {
        name: "cat.repositories",
        method: Get,
        paths: ["/_cat/repositories"],
        body: false,
        marks: [CatEndpoint, Tabular],
        flags {
            local / set_local => "local",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
        }
    }
}

endpoint! {
    /// Lucene segments of the given indices.
    CatSegments => CatSegmentsRequest {
        name: "cat.segments",
        method: Get,
        paths: ["/_cat/segments/{index}", "/_cat/segments"],
        body: false,
        marks: [CatEndpoint, Tabular, IndexRoute, MultiIndexRoute],
        route {
            index: Indices => "index",
        }
        values {
            bytes: Bytes => "bytes",
        }
    }
}

endpoint! {
    /// Shard placement and state.
    CatShards => CatShardsRequest {
        name: "cat.shards",
        method: Get,
        paths: ["/_cat/shards/{index}", "/_cat/shards"],
        body: false,
        marks: [CatEndpoint, Tabular, IndexRoute, MultiIndexRoute],
        route {
            index: Indices => "index",
        }
        flags {
            local / set_local => "local",
        }
        values {
            bytes: Bytes => "bytes",
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
        }
    }
}

endpoint! {
    /// Snapshots stored in the given repositories.
    CatSnapshots => CatSnapshotsRequest {
        name: "cat.snapshots",
        method: Get,
        paths: ["/_cat/snapshots/{repository}", "/_cat/snapshots"],
        body: false,
        marks: [CatEndpoint, Tabular],
        route {
            repository: Names => "repository",
        }
        flags {
            ignore_unavailable / set_ignore_unavailable => "ignore_unavailable",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
        }
    }
}

endpoint! {
    /// Tasks currently running in the cluster.
    CatTasks => CatTasksRequest {
        name: "cat.tasks",
        method: Get,
        paths: ["/_cat/tasks"],
        body: false,
        marks: [CatEndpoint, Tabular],
        flags {
            detailed / set_detailed => "detailed",
        }
        values {
            parent_task_id: String => "parent_task_id",
        }
        lists {
            actions => "actions",
            nodes => "nodes",
        }
    }
}

endpoint! {
    /// Index templates, optionally filtered by name.
    CatTemplates => CatTemplatesRequest {
        name: "cat.templates",
        method: Get,
        paths: ["/_cat/templates/{name}", "/_cat/templates"],
        body: false,
        marks: [CatEndpoint, Tabular],
        route {
            name: Name => "name",
        }
        flags {
            local / set_local => "local",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
        }
    }
}

endpoint! {
    /// Thread pool usage per node.
    CatThreadPool => CatThreadPoolRequest {
        name: "cat.thread_pool",
        method: Get,
        paths: ["/_cat/thread_pool/{thread_pool_patterns}", "/_cat/thread_pool"],
        body: false,
        marks: [CatEndpoint, Tabular],
        route {
            thread_pool_patterns: Names => "thread_pool_patterns",
        }
        flags {
            local / set_local => "local",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
        }
    }
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

// Every cat endpoint can be called with nothing bound.
macro_rules! unbound_constructors {
    ($($alias:ident),+ $(,)?) => {
        $(
            impl $alias {
                /// Starts a request with no route values bound.
                pub fn new() -> Self {
                    Self::unbound()
                }
            }

            impl Default for $alias {
                fn default() -> Self {
                    Self::new()
                }
            }
        )+
    };
}

unbound_constructors!(
    CatAliasesRequest,
    CatAllocationRequest,
    CatClusterManagerRequest,
    CatCountRequest,
    CatFielddataRequest,
    CatHealthRequest,
    CatHelpRequest,
    CatIndicesRequest,
    CatMasterRequest,
    CatNodeAttributesRequest,
    CatNodesRequest,
    CatPendingTasksRequest,
    CatPluginsRequest,
    CatRecoveryRequest,
    CatRepositoriesRequest,
    CatSegmentsRequest,
    CatShardsRequest,
    CatSnapshotsRequest,
    CatTasksRequest,
    CatTemplatesRequest,
    CatThreadPoolRequest,
);

impl CatIndicesRequest {
    /// Lists `indices` only.
    pub fn for_indices(indices: impl Into<Indices>) -> Self {
        Self::unbound().index(indices)
    }
}

impl CatShardsRequest {
    /// Lists the shards of `indices` only.
    pub fn for_indices(indices: impl Into<Indices>) -> Self {
        Self::unbound().index(indices)
    }
}

impl CatSnapshotsRequest {
    /// Lists the snapshots of `repositories`.
    pub fn for_repositories(repositories: impl Into<Names>) -> Self {
        Self::unbound().repository(repositories)
    }
}
