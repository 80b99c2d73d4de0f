//! The registry of every endpoint this crate declares.

use std::sync::LazyLock;

use request::{Endpoint, EndpointRegistry};

use crate::api::*;

static REGISTRY: LazyLock<EndpointRegistry> = LazyLock::new(|| {
    EndpointRegistry::from_specs([
        Bulk::spec(),
        DeleteByQuery::spec(),
        UpdateByQuery::spec(),
        Reindex::spec(),
        DeleteByQueryRethrottle::spec(),
        UpdateByQueryRethrottle::spec(),
        ReindexRethrottle::spec(),
        CatAliases::spec(),
        CatAllocation::spec(),
        CatClusterManager::spec(),
        CatCount::spec(),
        CatFielddata::spec(),
        CatHealth::spec(),
        CatHelp::spec(),
        CatIndices::spec(),
        CatMaster::spec(),
        CatNodeAttributes::spec(),
        CatNodes::spec(),
        CatPendingTasks::spec(),
        CatPlugins::spec(),
        CatRecovery::spec(),
        CatRepositories::spec(),
        CatSegments::spec(),
        CatShards::spec(),
        CatSnapshots::spec(),
        CatTasks::spec(),
        CatTemplates::spec(),
        CatThreadPool::spec(),
        DeleteDanglingIndex::spec(),
        ImportDanglingIndex::spec(),
        ListDanglingIndices::spec(),
        Get::spec(),
        Exists::spec(),
        Source::spec(),
        SourceExists::spec(),
        Create::spec(),
        Index::spec(),
        Update::spec(),
        Delete::spec(),
        Explain::spec(),
        TermVectors::spec(),
        GetFeatures::spec(),
        DeletePipeline::spec(),
        GetPipeline::spec(),
        GrokProcessorPatterns::spec(),
        PutPipeline::spec(),
        SimulatePipeline::spec(),
        GetScript::spec(),
        PutScript::spec(),
        DeleteScript::spec(),
        Ping::spec(),
        Info::spec(),
        Search::spec(),
        Count::spec(),
        MultiGet::spec(),
        MultiSearch::spec(),
        FieldCapabilities::spec(),
        Scroll::spec(),
        ClearScroll::spec(),
        CleanupRepository::spec(),
        CloneSnapshot::spec(),
        CreateSnapshot::spec(),
        CreateRepository::spec(),
        DeleteSnapshot::spec(),
        DeleteRepository::spec(),
        GetSnapshot::spec(),
        GetRepository::spec(),
        Restore::spec(),
        SnapshotStatus::spec(),
        VerifyRepository::spec(),
        CancelTasks::spec(),
        GetTask::spec(),
        ListTasks::spec(),
    ])
});

/// Every endpoint declared in [`crate::api`], keyed by registry name.
///
/// Built on first use and shared for the life of the process.
pub fn registry() -> &'static EndpointRegistry {
    &REGISTRY
}
