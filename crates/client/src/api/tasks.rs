//! Task management endpoints.

use request::{GroupBy, TaskId, Time};

endpoint! {
    /// Cancels one task, or every task matching the filters.
    CancelTasks => CancelTasksRequest {
        name: "tasks.cancel",
        method: Post,
        paths: ["/_tasks/{task_id}/_cancel", "/_tasks/_cancel"],
        body: false,
        route {
            task_id: TaskId => "task_id",
        }
        flags {
            wait_for_completion / set_wait_for_completion => "wait_for_completion",
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

impl CancelTasksRequest {
    /// Cancels every task selected by the `actions`, `nodes` and
    /// `parent_task_id` filters.
    pub fn new() -> Self {
        Self::unbound()
    }

    /// Cancels `task_id`.
    pub fn for_task(task_id: TaskId) -> Self {
        Self::unbound().task_id(task_id)
    }
}

impl Default for CancelTasksRequest {
    fn default() -> Self {
        Self::new()
    }
}

endpoint! {
    /// Retrieves one task.
    GetTask => GetTaskRequest {
        name: "tasks.get",
        method: Get,
        paths: ["/_tasks/{task_id}"],
        body: false,
        route {
            task_id: TaskId => "task_id",
        }
        flags {
            wait_for_completion / set_wait_for_completion => "wait_for_completion",
        }
        values {
            timeout: Time => "timeout",
        }
    }
}

impl GetTaskRequest {
    /// Retrieves `task_id`.
    pub fn new(task_id: TaskId) -> Self {
        Self::unbound().task_id(task_id)
    }
}

endpoint! {
    /// Lists running tasks.
    ListTasks => ListTasksRequest {
        name: "tasks.list",
        method: Get,
        paths: ["/_tasks"],
        body: false,
        flags {
            detailed / set_detailed => "detailed",
            wait_for_completion / set_wait_for_completion => "wait_for_completion",
        }
        values {
            group_by: GroupBy => "group_by",
            parent_task_id: String => "parent_task_id",
            timeout: Time => "timeout",
        }
        lists {
            actions => "actions",
            nodes => "nodes",
        }
    }
}

impl ListTasksRequest {
    pub fn new() -> Self {
        Self::unbound()
    }
}

impl Default for ListTasksRequest {
    fn default() -> Self {
        Self::new()
    }
}
