//! The `features` namespace.

use crate::api::*;
use crate::dispatch::Dispatch;

/// Obtained from [`Client::features`](crate::Client::features).
#[derive(Clone)]
pub struct FeaturesNamespace {
    dispatch: Dispatch,
}

impl FeaturesNamespace {
    pub(crate) fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    namespace_methods! {
        /// Lists the features that can be included in snapshots.
        get_features, get_features_async, get_features_request, get_features_request_async
            () -> GetFeaturesRequest = GetFeaturesRequest::new();
    }
}
