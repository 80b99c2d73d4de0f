//! Snapshot and repository endpoints.
//!
//! Every endpoint here accepts both `master_timeout` and
//! `cluster_manager_timeout`. They are independent parameters; when both are
//! set both are sent and the server decides which one applies.

use request::{Name, Names, Time};

endpoint! {
    /// Removes stale data from a repository.
    CleanupRepository => CleanupRepositoryRequest {
        name: "snapshot.cleanup_repository",
        method: Post,
        paths: ["/_snapshot/{repository}/_cleanup"],
        body: false,
        route {
            repository: Name => "repository",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
            timeout: Time => "timeout",
        }
    }
}

impl CleanupRepositoryRequest {
    /// Cleans up `repository`.
    pub fn new(repository: impl Into<Name>) -> Self {
        Self::unbound().repository(repository)
    }
}

endpoint! {
    /// Clones indices from a snapshot into a new snapshot in the same repository.
    CloneSnapshot => CloneSnapshotRequest {
        name: "snapshot.clone",
        method: Put,
        paths: ["/_snapshot/{repository}/{snapshot}/_clone/{target_snapshot}"],
        body: true,
        route {
            repository: Name => "repository",
            snapshot: Name => "snapshot",
            target_snapshot: Name => "target_snapshot",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
        }
    }
}

impl CloneSnapshotRequest {
    /// Clones `snapshot` of `repository` into `target_snapshot`.
    pub fn new(
        repository: impl Into<Name>,
        snapshot: impl Into<Name>,
        target_snapshot: impl Into<Name>,
    ) -> Self {
        Self::unbound()
            .repository(repository)
            .snapshot(snapshot)
            .target_snapshot(target_snapshot)
    }
}

endpoint! {
    /// Takes a snapshot.
    CreateSnapshot => CreateSnapshotRequest {
        name: "snapshot.create",
        method: Put,
        paths: ["/_snapshot/{repository}/{snapshot}"],
        body: true,
        route {
            repository: Name => "repository",
            snapshot: Name => "snapshot",
        }
        flags {
            wait_for_completion / set_wait_for_completion => "wait_for_completion",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
        }
    }
}

impl CreateSnapshotRequest {
    /// Snapshots into `repository` under the name `snapshot`.
    pub fn new(repository: impl Into<Name>, snapshot: impl Into<Name>) -> Self {
        Self::unbound().repository(repository).snapshot(snapshot)
    }
}

endpoint! {
    /// Registers a snapshot repository.
    CreateRepository => CreateRepositoryRequest {
        name: "snapshot.create_repository",
        method: Put,
        paths: ["/_snapshot/{repository}"],
        body: true,
        route {
            repository: Name => "repository",
        }
        flags {
            verify / set_verify => "verify",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
            timeout: Time => "timeout",
        }
    }
}

impl CreateRepositoryRequest {
    /// Registers `repository`; its settings travel in the body.
    pub fn new(repository: impl Into<Name>) -> Self {
        Self::unbound().repository(repository)
    }
}

endpoint! {
    /// Deletes a snapshot.
    DeleteSnapshot => DeleteSnapshotRequest {
        name: "snapshot.delete",
        method: Delete,
        paths: ["/_snapshot/{repository}/{snapshot}"],
        body: false,
        route {
            repository: Name => "repository",
            snapshot: Name => "snapshot",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
        }
    }
}

impl DeleteSnapshotRequest {
    /// Deletes `snapshot` from `repository`.
    pub fn new(repository: impl Into<Name>, snapshot: impl Into<Name>) -> Self {
        Self::unbound().repository(repository).snapshot(snapshot)
    }
}

endpoint! {
    /// Unregisters one or more repositories.
    DeleteRepository => DeleteRepositoryRequest {
        name: "snapshot.delete_repository",
        method: Delete,
        paths: ["/_snapshot/{repository}"],
        body: false,
        route {
            repository: Names => "repository",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
            timeout: Time => "timeout",
        }
    }
}

impl DeleteRepositoryRequest {
    /// Unregisters `repositories`.
    pub fn new(repositories: impl Into<Names>) -> Self {
        Self::unbound().repository(repositories)
    }
}

endpoint! {
    /// Describes one or more snapshots.
    GetSnapshot => GetSnapshotRequest {
        name: "snapshot.get",
        method: Get,
        paths: ["/_snapshot/{repository}/{snapshot}"],
        body: false,
        route {
            repository: Name => "repository",
            snapshot: Names => "snapshot",
        }
        flags {
            ignore_unavailable / set_ignore_unavailable => "ignore_unavailable",
            verbose / set_verbose => "verbose",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
        }
    }
}

impl GetSnapshotRequest {
    /// Describes `snapshots` in `repository`.
    pub fn new(repository: impl Into<Name>, snapshots: impl Into<Names>) -> Self {
        Self::unbound().repository(repository).snapshot(snapshots)
    }
}

endpoint! {
    /// Describes registered repositories.
    GetRepository => GetRepositoryRequest {
        name: "snapshot.get_repository",
        method: Get,
        paths: ["/_snapshot/{repository}", "/_snapshot"],
        body: false,
        route {
            repository: Names => "repository",
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

impl GetRepositoryRequest {
    /// Describes every repository.
    pub fn new() -> Self {
        Self::unbound()
    }

    /// Describes `repositories`.
    pub fn for_repositories(repositories: impl Into<Names>) -> Self {
        Self::unbound().repository(repositories)
    }
}

impl Default for GetRepositoryRequest {
    fn default() -> Self {
        Self::new()
    }
}

endpoint! {
    /// Restores a snapshot.
    Restore => RestoreRequest {
        name: "snapshot.restore",
        method: Post,
        paths: ["/_snapshot/{repository}/{snapshot}/_restore"],
        body: true,
        route {
            repository: Name => "repository",
            snapshot: Name => "snapshot",
        }
        flags {
            wait_for_completion / set_wait_for_completion => "wait_for_completion",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
        }
    }
}

impl RestoreRequest {
    /// Restores `snapshot` from `repository`.
    pub fn new(repository: impl Into<Name>, snapshot: impl Into<Name>) -> Self {
        Self::unbound().repository(repository).snapshot(snapshot)
    }
}

endpoint! {
    /// Reports the status of running or named snapshots.
    SnapshotStatus => SnapshotStatusRequest {
        name: "snapshot.status",
        method: Get,
        paths: [
            "/_snapshot/{repository}/{snapshot}/_status",
            "/_snapshot/{repository}/_status",
            "/_snapshot/_status",
        ],
        body: false,
        route {
            repository: Name => "repository",
            snapshot: Names => "snapshot",
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

impl SnapshotStatusRequest {
    /// Status of every running snapshot.
    pub fn new() -> Self {
        Self::unbound()
    }

    /// Status of running snapshots in `repository`.
    pub fn for_repository(repository: impl Into<Name>) -> Self {
        Self::unbound().repository(repository)
    }

    /// Status of `snapshots` in `repository`.
    pub fn for_snapshots(repository: impl Into<Name>, snapshots: impl Into<Names>) -> Self {
        Self::unbound().repository(repository).snapshot(snapshots)
    }
}

impl Default for SnapshotStatusRequest {
    fn default() -> Self {
        Self::new()
    }
}

endpoint! {
    /// Checks that every node can reach a repository.
    VerifyRepository => VerifyRepositoryRequest {
        name: "snapshot.verify_repository",
        method: Post,
        paths: ["/_snapshot/{repository}/_verify"],
        body: false,
        route {
            repository: Name => "repository",
        }
        values {
            master_timeout: Time => "master_timeout",
            cluster_manager_timeout: Time => "cluster_manager_timeout",
            timeout: Time => "timeout",
        }
    }
}

impl VerifyRepositoryRequest {
    /// Verifies `repository`.
    pub fn new(repository: impl Into<Name>) -> Self {
        Self::unbound().repository(repository)
    }
}
