//! Namespace facades.
//!
//! Each facade groups the endpoints of one API area and exposes four call
//! shapes per endpoint: seeded sync and async calls taking the required route
//! values and a selector, and sync and async calls taking a prebuilt request.
//! Facades hold only the shared dispatch and are cheap to clone.

mod cat;
mod dangling_indices;
mod features;
mod ingest;
mod root;
mod snapshot;
mod tasks;

pub use cat::CatNamespace;
pub use dangling_indices::DanglingIndicesNamespace;
pub use features::FeaturesNamespace;
pub use ingest::IngestNamespace;
pub use snapshot::SnapshotNamespace;
pub use tasks::TasksNamespace;
