//! The `tasks` namespace.

use request::TaskId;

use crate::api::*;
use crate::dispatch::Dispatch;

/// Task management endpoints. Obtained from [`Client::tasks`](crate::Client::tasks).
#[derive(Clone)]
pub struct TasksNamespace {
    dispatch: Dispatch,
}

impl TasksNamespace {
    pub(crate) fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    namespace_methods! {
        /// Cancels the tasks selected by the request's filters.
        cancel, cancel_async, cancel_request, cancel_request_async
            () -> CancelTasksRequest = CancelTasksRequest::new();

        /// Retrieves one task.
        get, get_async, get_request, get_request_async
            (task_id: TaskId) -> GetTaskRequest = GetTaskRequest::new(task_id);

        /// Lists running tasks.
        list, list_async, list_request, list_request_async
            () -> ListTasksRequest = ListTasksRequest::new();
    }
}
