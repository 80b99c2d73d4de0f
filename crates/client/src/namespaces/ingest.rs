//! The `ingest` namespace.

use request::Id;

use crate::api::*;
use crate::dispatch::Dispatch;

/// Ingest pipeline endpoints. Obtained from [`Client::ingest`](crate::Client::ingest).
#[derive(Clone)]
pub struct IngestNamespace {
    dispatch: Dispatch,
}

impl IngestNamespace {
    pub(crate) fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    namespace_methods! {
        /// Deletes a pipeline.
        delete_pipeline, delete_pipeline_async, delete_pipeline_request, delete_pipeline_request_async
            (id: impl Into<Id>) -> DeletePipelineRequest = DeletePipelineRequest::new(id);

        /// Retrieves every pipeline.
        get_pipeline, get_pipeline_async, get_pipeline_request, get_pipeline_request_async
            () -> GetPipelineRequest = GetPipelineRequest::new();

        /// Lists the built-in grok patterns.
        processor_grok, processor_grok_async, processor_grok_request, processor_grok_request_async
            () -> GrokProcessorPatternsRequest = GrokProcessorPatternsRequest::new();

        /// Creates or replaces a pipeline.
        put_pipeline, put_pipeline_async, put_pipeline_request, put_pipeline_request_async
            (id: impl Into<Id>) -> PutPipelineRequest = PutPipelineRequest::new(id);

        /// Runs a pipeline against sample documents.
        simulate, simulate_async, simulate_request, simulate_request_async
            () -> SimulatePipelineRequest = SimulatePipelineRequest::new();
    }
}
