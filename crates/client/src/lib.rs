//! # client
//!
//! Typed request descriptors and namespace facades for the OpenSearch REST
//! API.
//!
//! Every endpoint is a marker type in [`api`] plus a descriptor alias such as
//! [`api::GetRequest`]. Descriptors are built fluently and resolved against
//! the endpoint's static spec. [`Client`] and its namespaces send them through
//! a [`request::Transport`].
//!
//! ```ignore
//! let response = client.get("orders", "42", |r| r.realtime().routing("eu"))?;
//! let response = client
//!     .snapshot()
//!     .status_request_async(SnapshotStatusRequest::for_repository("backups"), None)
//!     .await?;
//! ```
//!
//! ## Architectural Layer
//!
//! **Application.** No I/O happens here; the transport is injected into
//! [`Client::new`].

#[macro_use]
mod macros;

pub mod api;
mod client;
pub mod descriptor;
mod dispatch;
pub mod document;
pub mod namespaces;
mod registry;

pub use client::Client;
pub use descriptor::Descriptor;
pub use document::{
    Document, DocumentRoute, IndexMappings, IndexRoute, MultiIndexRoute, RouteBindings,
};
pub use registry::registry;

pub use api::cat::{CatEndpoint, Tabular};
