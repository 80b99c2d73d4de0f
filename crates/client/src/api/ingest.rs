//! Ingest pipeline endpoints.

use request::{Id, Time};

endpoint! {
    /// Deletes a pipeline.
    DeletePipeline => DeletePipelineRequest {
        name: "ingest.delete_pipeline",
        method: Delete,
        paths: ["/_ingest/pipeline/{id}"],
        body: false,
        route {
            id: Id => "id",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
            timeout: Time => "timeout",
        }
    }
}

impl DeletePipelineRequest {
    /// Deletes pipeline `id`.
    pub fn new(id: impl Into<Id>) -> Self {
        Self::unbound().id(id)
    }
}

endpoint! {
    /// Retrieves one or every pipeline.
    GetPipeline => GetPipelineRequest {
        name: "ingest.get_pipeline",
        method: Get,
        paths: ["/_ingest/pipeline/{id}", "/_ingest/pipeline"],
        body: false,
        route {
            id: Id => "id",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
        }
    }
}

impl GetPipelineRequest {
    /// Retrieves every pipeline.
    pub fn new() -> Self {
        Self::unbound()
    }

    /// Retrieves pipeline `id`.
    pub fn for_pipeline(id: impl Into<Id>) -> Self {
        Self::unbound().id(id)
    }
}

impl Default for GetPipelineRequest {
    fn default() -> Self {
        Self::new()
    }
}

endpoint! {
    /// Lists the built-in grok patterns.
    GrokProcessorPatterns => GrokProcessorPatternsRequest {
        name: "ingest.processor_grok",
        method: Get,
        paths: ["/_ingest/processor/grok"],
        body: false,
    }
}

impl GrokProcessorPatternsRequest {
    pub fn new() -> Self {
        Self::unbound()
    }
}

impl Default for GrokProcessorPatternsRequest {
    fn default() -> Self {
        Self::new()
    }
}

endpoint! {
    /// Creates or replaces a pipeline.
    PutPipeline => PutPipelineRequest {
        name: "ingest.put_pipeline",
        method: Put,
        paths: ["/_ingest/pipeline/{id}"],
        body: true,
        route {
            id: Id => "id",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
            timeout: Time => "timeout",
        }
    }
}

impl PutPipelineRequest {
    /// Stores pipeline `id`; processors travel in the body.
    pub fn new(id: impl Into<Id>) -> Self {
        Self::unbound().id(id)
    }
}

endpoint! {
    /// Runs a stored or an inline pipeline against sample documents.
    SimulatePipeline => SimulatePipelineRequest {
        name: "ingest.simulate",
        method: Post,
        paths: ["/_ingest/pipeline/{id}/_simulate", "/_ingest/pipeline/_simulate"],
        body: true,
        route {
            id: Id => "id",
        }
        flags {
            verbose / set_verbose => "verbose",
        }
    }
}

impl SimulatePipelineRequest {
    /// Simulates the pipeline defined inline in the body.
    pub fn new() -> Self {
        Self::unbound()
    }

    /// Simulates stored pipeline `id`.
    pub fn for_pipeline(id: impl Into<Id>) -> Self {
        Self::unbound().id(id)
    }
}

impl Default for SimulatePipelineRequest {
    fn default() -> Self {
        Self::new()
    }
}
