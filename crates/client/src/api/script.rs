//! Stored scripts, plus the root `ping` and `info` endpoints.

use request::{Id, Name, Time};

endpoint! {
    /// Retrieves a stored script.
    GetScript => GetScriptRequest {
        name: "get_script",
        method: Get,
        paths: ["/_scripts/{id}"],
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

impl GetScriptRequest {
    /// Retrieves script `id`.
    pub fn new(id: impl Into<Id>) -> Self {
        Self::unbound().id(id)
    }
}

endpoint! {
    /// Stores a script or search template.
    PutScript => PutScriptRequest {
        name: "put_script",
        method: Put,
        paths: ["/_scripts/{id}/{context}", "/_scripts/{id}"],
        body: true,
        route {
            id: Id => "id",
            context: Name => "context",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
            timeout: Time => "timeout",
        }
    }
}

impl PutScriptRequest {
    /// Stores script `id`.
    pub fn new(id: impl Into<Id>) -> Self {
        Self::unbound().id(id)
    }

    /// Stores script `id` compiled for `context`.
    pub fn in_context(id: impl Into<Id>, context: impl Into<Name>) -> Self {
        Self::unbound().id(id).context(context)
    }
}

endpoint! {
    /// Deletes a stored script.
    DeleteScript => DeleteScriptRequest {
        name: "delete_script",
        method: Delete,
        paths: ["/_scripts/{id}"],
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

impl DeleteScriptRequest {
    /// Deletes script `id`.
    pub fn new(id: impl Into<Id>) -> Self {
        Self::unbound().id(id)
    }
}

endpoint! {
    /// Checks that the cluster answers.
    Ping => PingRequest {
        name: "ping",
        method: Head,
        paths: ["/"],
        body: false,
    }
}

impl PingRequest {
    pub fn new() -> Self {
        Self::unbound()
    }
}

impl Default for PingRequest {
    fn default() -> Self {
        Self::new()
    }
}

endpoint! {
    /// Basic information about the cluster and the node answering.
    Info => InfoRequest {
        name: "info",
        method: Get,
        paths: ["/"],
        body: false,
    }
}

impl InfoRequest {
    pub fn new() -> Self {
        Self::unbound()
    }
}

impl Default for InfoRequest {
    fn default() -> Self {
        Self::new()
    }
}
