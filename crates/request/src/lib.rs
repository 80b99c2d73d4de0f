//! # request
//!
//! Request model for the OpenSearch REST surface.
//!
//! This crate contains no I/O. It defines:
//!
//! - [`RouteTemplate`] parsing and [`route::resolve`], which turns bound route
//!   values into a concrete path;
//! - [`ParameterBag`], the typed query-string store with its header side
//!   effects;
//! - [`EndpointSpec`] / [`EndpointRegistry`], the static description of every
//!   endpoint;
//! - the [`Transport`] port and the [`ResolvedRequest`] / [`Response`] values
//!   that cross it;
//! - typed identifiers and parameter values.
//!
//! Per-endpoint builders and namespace facades live in the `client` crate; the
//! HTTP implementation of [`Transport`] lives in `http-transport`.

pub mod errors;
pub mod identifiers;
pub mod params;
pub mod raw;
pub mod registry;
pub mod route;
pub mod transport;
pub mod types;

pub use errors::{ClientError, RequestError, RetryPolicy, TransportError};
pub use identifiers::{
    DocumentKind, Fields, Id, IndexName, IndexUuid, Indices, Name, Names, NodeId, NodeIds, TaskId,
};
pub use params::{ParamValue, ParameterBag};
pub use raw::RawRequest;
pub use registry::{Endpoint, EndpointRegistry, EndpointSpec, HttpMethod};
pub use route::{RouteSegment, RouteTemplate, RouteValue, RouteValues};
pub use transport::{Body, ResolvedRequest, Response, Transport};
pub use types::{
    Bytes, Conflicts, DefaultOperator, ExpandWildcards, Format, GroupBy, Health, OpType, Refresh,
    SearchType, Time, Timestamp, VersionType,
};

pub use tokio_util::sync::CancellationToken;
