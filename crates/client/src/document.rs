//! Route values derived from domain documents.
//!
//! Callers that store their own types in the cluster implement [`Document`]:
//! a stable [`DocumentKind`] for the type and an optional id per instance.
//! [`IndexMappings`] turns a kind into an index name, so a route can be bound
//! from a type (`index_of::<Order>()`) and produce exactly the path the
//! instance-based setter would (`index("orders")`).
//!
//! Endpoints that address a single document also accept a route hook: a
//! function `(&D) -> RouteBindings` run after the id and index have been
//! derived, which may bind further route values or parameters (typically
//! `routing`). The default hook binds nothing.

use std::collections::HashMap;

use request::{DocumentKind, Endpoint, Id, IndexName, Indices, ParamValue, RouteValue};

use crate::descriptor::Descriptor;

/// A domain type stored as a document.
pub trait Document {
    /// The kind shared by every instance of the type.
    fn kind() -> DocumentKind;

    /// The instance's id, when it has one.
    fn id(&self) -> Option<Id>;
}

// ---------------------------------------------------------------------------
// Index name derivation
// ---------------------------------------------------------------------------

/// Maps document kinds to index names.
///
/// Lookup order: an explicit mapping for the kind, then the default index,
/// then the kind's own name lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexMappings {
    default_index: Option<IndexName>,
    by_kind: HashMap<DocumentKind, IndexName>,
}

impl IndexMappings {
    /// Creates mappings with no default index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the index used for kinds with no explicit mapping.
    pub fn with_default_index(mut self, index: impl Into<IndexName>) -> Self {
        self.default_index = Some(index.into());
        self
    }

    /// Maps `kind` to `index`.
    pub fn map(mut self, kind: impl Into<DocumentKind>, index: impl Into<IndexName>) -> Self {
        self.by_kind.insert(kind.into(), index.into());
        self
    }

    /// The index name for `kind`.
    pub fn index_for(&self, kind: &DocumentKind) -> IndexName {
        self.by_kind
            .get(kind)
            .or(self.default_index.as_ref())
            .cloned()
            .unwrap_or_else(|| IndexName::from(kind.as_str().to_lowercase()))
    }

    /// The index name for documents of type `D`.
    pub fn index_of<D: Document>(&self) -> IndexName {
        self.index_for(&D::kind())
    }
}

// ---------------------------------------------------------------------------
// Route hooks
// ---------------------------------------------------------------------------

/// Extra route values and parameters contributed by a route hook.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteBindings {
    route: Vec<(&'static str, RouteValue)>,
    parameters: Vec<(&'static str, ParamValue)>,
}

impl RouteBindings {
    /// Binds nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Adds a route value.
    pub fn route(mut self, name: &'static str, value: impl Into<RouteValue>) -> Self {
        self.route.push((name, value.into()));
        self
    }

    /// Adds a query parameter.
    pub fn param(mut self, key: &'static str, value: impl Into<ParamValue>) -> Self {
        self.parameters.push((key, value.into()));
        self
    }

    /// Returns `true` if the hook contributed nothing.
    pub fn is_empty(&self) -> bool {
        self.route.is_empty() && self.parameters.is_empty()
    }

    #[allow(clippy::type_complexity)]
    pub(crate) fn into_parts(
        self,
    ) -> (Vec<(&'static str, RouteValue)>, Vec<(&'static str, ParamValue)>) {
        (self.route, self.parameters)
    }
}

// ---------------------------------------------------------------------------
// Marker traits
// ---------------------------------------------------------------------------

/// Endpoints with an `{index}` route segment.
pub trait IndexRoute: Endpoint {}

/// Endpoints whose `{index}` segment takes a list of indices.
pub trait MultiIndexRoute: IndexRoute {}

/// Endpoints addressing one document by `{index}` and `{id}`.
pub trait DocumentRoute: IndexRoute {}

impl<E: IndexRoute> Descriptor<E> {
    /// Binds `index` to the name `mappings` derives for `kind`.
    pub fn index_for(self, mappings: &IndexMappings, kind: &DocumentKind) -> Self {
        self.bind("index", mappings.index_for(kind))
    }

    /// Binds `index` to the name `mappings` derives for `D`.
    pub fn index_of<D: Document>(self, mappings: &IndexMappings) -> Self {
        self.index_for(mappings, &D::kind())
    }
}

impl<E: MultiIndexRoute> Descriptor<E> {
    /// Targets every index through `_all`.
    pub fn all_indices(self) -> Self {
        self.bind("index", Indices::all())
    }
}

impl<E: DocumentRoute> Descriptor<E> {
    /// Addresses the document `id` of type `D`.
    pub fn for_document_id<D: Document>(mappings: &IndexMappings, id: impl Into<Id>) -> Self {
        Self::unbound()
            .index_of::<D>(mappings)
            .bind("id", id.into())
    }

    /// Addresses `document`: index from its kind, id from the instance.
    pub fn from_document<D: Document>(mappings: &IndexMappings, document: &D) -> Self {
        Self::from_document_with(mappings, document, |_| RouteBindings::none())
    }

    /// Like [`Descriptor::from_document`], then applies what `hook` returns
    /// for the same document.
    pub fn from_document_with<D, H>(mappings: &IndexMappings, document: &D, hook: H) -> Self
    where
        D: Document,
        H: FnOnce(&D) -> RouteBindings,
    {
        let mut descriptor = Self::unbound().index_of::<D>(mappings);
        if let Some(id) = document.id() {
            descriptor = descriptor.bind("id", id);
        }
        descriptor.apply(hook(document))
    }
}
