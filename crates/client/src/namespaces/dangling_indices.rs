//! The `dangling_indices` namespace.

use request::IndexUuid;

use crate::api::*;
use crate::dispatch::Dispatch;

/// Dangling index endpoints. Obtained from
/// [`Client::dangling_indices`](crate::Client::dangling_indices).
#[derive(Clone)]
pub struct DanglingIndicesNamespace {
    dispatch: Dispatch,
}

impl DanglingIndicesNamespace {
    pub(crate) fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    namespace_methods! {
        /// Deletes a dangling index.
        delete_dangling_index, delete_dangling_index_async,
        delete_dangling_index_request, delete_dangling_index_request_async
            (index_uuid: impl Into<IndexUuid>) -> DeleteDanglingIndexRequest =
            DeleteDanglingIndexRequest::new(index_uuid);

        /// Imports a dangling index.
        import_dangling_index, import_dangling_index_async,
        import_dangling_index_request, import_dangling_index_request_async
            (index_uuid: impl Into<IndexUuid>) -> ImportDanglingIndexRequest =
            ImportDanglingIndexRequest::new(index_uuid);

        /// Lists dangling indices.
        list_dangling_indices, list_dangling_indices_async,
        list_dangling_indices_request, list_dangling_indices_request_async
            () -> ListDanglingIndicesRequest = ListDanglingIndicesRequest::new();
    }
}
