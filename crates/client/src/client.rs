//! The top-level client.

use std::sync::Arc;

use request::Transport;

use crate::dispatch::Dispatch;
use crate::namespaces::{
    CatNamespace, DanglingIndicesNamespace, FeaturesNamespace, IngestNamespace,
    SnapshotNamespace, TasksNamespace,
};

/// Entry point to every endpoint.
///
/// Root endpoints (`get`, `search`, `bulk`, ...) are methods on the client
/// itself; the others are grouped into namespaces returned by the accessors.
/// Cloning is cheap and every clone shares the same transport.
#[derive(Clone)]
pub struct Client {
    dispatch: Dispatch,
}

impl Client {
    /// Creates a client sending every request through `transport`.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            dispatch: Dispatch::new(transport),
        }
    }

    pub(crate) fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Snapshot and repository endpoints.
    pub fn snapshot(&self) -> SnapshotNamespace {
        SnapshotNamespace::new(self.dispatch.clone())
    }

    /// Task management endpoints.
    pub fn tasks(&self) -> TasksNamespace {
        TasksNamespace::new(self.dispatch.clone())
    }

    /// Ingest pipeline endpoints.
    pub fn ingest(&self) -> IngestNamespace {
        IngestNamespace::new(self.dispatch.clone())
    }

    /// Dangling index endpoints.
    pub fn dangling_indices(&self) -> DanglingIndicesNamespace {
        DanglingIndicesNamespace::new(self.dispatch.clone())
    }

    /// Snapshot feature endpoints.
    pub fn features(&self) -> FeaturesNamespace {
        FeaturesNamespace::new(self.dispatch.clone())
    }

    /// `_cat` endpoints.
    pub fn cat(&self) -> CatNamespace {
        CatNamespace::new(self.dispatch.clone())
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}
