//! Dangling index endpoints.

use request::{IndexUuid, Time};

endpoint! {
    /// Deletes a dangling index.
    DeleteDanglingIndex => DeleteDanglingIndexRequest {
        name: "dangling_indices.delete_dangling_index",
        method: Delete,
        paths: ["/_dangling/{index_uuid}"],
        body: false,
        route {
            index_uuid: IndexUuid => "index_uuid",
        }
        flags {
            accept_data_loss / set_accept_data_loss => "accept_data_loss",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
            timeout: Time => "timeout",
        }
    }
}

impl DeleteDanglingIndexRequest {
    /// Deletes the dangling index `index_uuid`.
    pub fn new(index_uuid: impl Into<IndexUuid>) -> Self {
        Self::unbound().index_uuid(index_uuid)
    }
}

endpoint! {
    /// Imports a dangling index into the cluster.
    ImportDanglingIndex => ImportDanglingIndexRequest {
        name: "dangling_indices.import_dangling_index",
        method: Post,
        paths: ["/_dangling/{index_uuid}"],
        body: false,
        route {
            index_uuid: IndexUuid => "index_uuid",
        }
        flags {
            accept_data_loss / set_accept_data_loss => "accept_data_loss",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
            timeout: Time => "timeout",
        }
    }
}

impl ImportDanglingIndexRequest {
    /// Imports the dangling index `index_uuid`.
    pub fn new(index_uuid: impl Into<IndexUuid>) -> Self {
        Self::unbound().index_uuid(index_uuid)
    }
}

endpoint! {
    /// Lists dangling indices.
    ListDanglingIndices => ListDanglingIndicesRequest {
        name: "dangling_indices.list_dangling_indices",
        method: Get,
        paths: ["/_dangling"],
        body: false,
    }
}

impl ListDanglingIndicesRequest {
    pub fn new() -> Self {
        Self::unbound()
    }
}

impl Default for ListDanglingIndicesRequest {
    fn default() -> Self {
        Self::new()
    }
}
