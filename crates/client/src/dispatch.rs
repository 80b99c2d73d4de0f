//! Hands resolved descriptors to the transport.

use std::sync::Arc;

use request::{ClientError, Endpoint, Response, Transport};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::descriptor::Descriptor;

/// The shared path from a descriptor to the [`Transport`].
///
/// Cloned into every namespace. Holds no per-call state.
#[derive(Clone)]
pub(crate) struct Dispatch {
    transport: Arc<dyn Transport>,
}

impl Dispatch {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Resolves `request` and executes it on the calling thread.
    ///
    /// Resolution failures return before the transport is called.
    pub(crate) fn send<E: Endpoint>(&self, request: &Descriptor<E>) -> Result<Response, ClientError> {
        let resolved = request.resolve()?;
        debug!(
            endpoint = resolved.endpoint,
            method = %resolved.method,
            path = %resolved.path,
            "Sending request"
        );
        Ok(self.transport.execute(&resolved)?)
    }

    /// Resolves `request` and executes it asynchronously.
    ///
    /// Without a token the call runs with a fresh one nobody else holds, so it
    /// cannot be cancelled.
    pub(crate) async fn send_async<E: Endpoint>(
        &self,
        request: &Descriptor<E>,
        cancel: Option<CancellationToken>,
    ) -> Result<Response, ClientError> {
        let resolved = request.resolve()?;
        debug!(
            endpoint = resolved.endpoint,
            method = %resolved.method,
            path = %resolved.path,
            "Sending request asynchronously"
        );
        let cancel = cancel.unwrap_or_default();
        Ok(self.transport.execute_async(&resolved, cancel).await?)
    }
}
