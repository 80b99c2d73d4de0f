//! Endpoint declarations.
//!
//! One module per API area. Each endpoint contributes a marker type (e.g.
//! [`Get`]) implementing [`request::Endpoint`] and a descriptor alias (e.g.
//! [`GetRequest`]) carrying its constructors and setters.

pub mod bulk;
pub mod cat;
pub mod dangling_indices;
pub mod document;
pub mod features;
pub mod ingest;
pub mod script;
pub mod search;
pub mod snapshot;
pub mod tasks;

pub use bulk::*;
pub use cat::*;
pub use dangling_indices::*;
pub use document::*;
pub use features::*;
pub use ingest::*;
pub use script::*;
pub use search::*;
pub use snapshot::*;
pub use tasks::*;
