//! The `snapshot` namespace.

use request::{Name, Names};

use crate::api::*;
use crate::dispatch::Dispatch;

/// Snapshot and repository endpoints. Obtained from
/// [`Client::snapshot`](crate::Client::snapshot).
#[derive(Clone)]
pub struct SnapshotNamespace {
    dispatch: Dispatch,
}

impl SnapshotNamespace {
    pub(crate) fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    namespace_methods! {
        /// Removes stale data from a repository.
        cleanup_repository, cleanup_repository_async, cleanup_repository_request, cleanup_repository_request_async
            (repository: impl Into<Name>) -> CleanupRepositoryRequest = CleanupRepositoryRequest::new(repository);

        /// Clones a snapshot within its repository.
        clone_snapshot, clone_snapshot_async, clone_snapshot_request, clone_snapshot_request_async
            (repository: impl Into<Name>, snapshot: impl Into<Name>, target_snapshot: impl Into<Name>)
            -> CloneSnapshotRequest = CloneSnapshotRequest::new(repository, snapshot, target_snapshot);

        /// Takes a snapshot.
        create, create_async, create_request, create_request_async
            (repository: impl Into<Name>, snapshot: impl Into<Name>) -> CreateSnapshotRequest =
            CreateSnapshotRequest::new(repository, snapshot);

        /// Registers a repository.
        create_repository, create_repository_async, create_repository_request, create_repository_request_async
            (repository: impl Into<Name>) -> CreateRepositoryRequest = CreateRepositoryRequest::new(repository);

        /// Deletes a snapshot.
        delete, delete_async, delete_request, delete_request_async
            (repository: impl Into<Name>, snapshot: impl Into<Name>) -> DeleteSnapshotRequest =
            DeleteSnapshotRequest::new(repository, snapshot);

        /// Unregisters repositories.
        delete_repository, delete_repository_async, delete_repository_request, delete_repository_request_async
            (repositories: impl Into<Names>) -> DeleteRepositoryRequest = DeleteRepositoryRequest::new(repositories);

        /// Describes snapshots.
        get, get_async, get_request, get_request_async
            (repository: impl Into<Name>, snapshots: impl Into<Names>) -> GetSnapshotRequest =
            GetSnapshotRequest::new(repository, snapshots);

        /// Describes every registered repository.
        get_repository, get_repository_async, get_repository_request, get_repository_request_async
            () -> GetRepositoryRequest = GetRepositoryRequest::new();

        /// Restores a snapshot.
        restore, restore_async, restore_request, restore_request_async
            (repository: impl Into<Name>, snapshot: impl Into<Name>) -> RestoreRequest =
            RestoreRequest::new(repository, snapshot);

        /// Status of every running snapshot.
        status, status_async, status_request, status_request_async
            () -> SnapshotStatusRequest = SnapshotStatusRequest::new();

        /// Checks that every node can reach a repository.
        verify_repository, verify_repository_async, verify_repository_request, verify_repository_request_async
            (repository: impl Into<Name>) -> VerifyRepositoryRequest = VerifyRepositoryRequest::new(repository);
    }
}
