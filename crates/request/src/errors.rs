//! Error and retry-policy types for the request model.
//!
//! [`RequestError`] covers everything that can go wrong while a request is
//! being built or resolved: unbound route segments, values no template
//! accepts, strings that do not parse into a typed parameter, unknown endpoint
//! names. [`TransportError`] is what a [`crate::Transport`] reports; it is
//! carried through this crate untouched. [`ClientError`] is the union a caller
//! sees from a namespace call.
//!
//! [`RetryPolicy`] is informational: this layer never retries, but callers that
//! do can ask a [`TransportError`] whether retrying makes sense.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Retry semantics
// ---------------------------------------------------------------------------

/// Whether an error condition is safe to retry and, if so, after what delay.
///
/// ## Rules
///
/// - `Retryable` errors: connection failures, timeouts.
/// - `NonRetryable` errors: cancellation, malformed requests, body encoding
///   failures, internal transport failures. Resolve-time [`RequestError`]s never reach the transport and
///   are never retryable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RetryPolicy {
    /// The operation may be retried.
    Retryable {
        /// Minimum back-off before the next attempt. `None` means retry
        /// immediately or apply the caller's own back-off schedule.
        after: Option<Duration>,
    },
    /// The operation must not be retried.
    NonRetryable,
}

// ---------------------------------------------------------------------------
// Build / resolve errors
// ---------------------------------------------------------------------------

/// Errors raised while building or resolving a request.
///
/// All of these are raised synchronously, before the transport is involved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// A route segment needed by the selected path template was never bound.
    ///
    /// Produced at resolve time, never at construction time.
    #[error("Endpoint '{endpoint}' cannot be resolved: route value '{segment}' is not set")]
    MissingRouteValue {
        /// Registry name of the endpoint (e.g. `"snapshot.restore"`).
        endpoint: &'static str,
        /// Name of the unbound segment (e.g. `"repository"`).
        segment: String,
    },

    /// A route value was bound that none of the endpoint's templates accept.
    #[error("Endpoint '{endpoint}' has no path template taking route value '{segment}'")]
    UnexpectedRouteValue {
        /// Registry name of the endpoint.
        endpoint: &'static str,
        /// Name of the offending route value.
        segment: String,
    },

    /// A string could not be parsed into the typed value a parameter expects.
    #[error("Invalid parameter value '{value}': expected {expected}")]
    InvalidParameterValue {
        /// The rejected input.
        value: String,
        /// Human-readable description of the accepted domain.
        expected: String,
    },

    /// A body was attached to an endpoint whose registry entry does not allow one.
    #[error("Endpoint '{endpoint}' does not accept a request body")]
    BodyNotAllowed {
        /// Registry name of the endpoint.
        endpoint: &'static str,
    },

    /// No endpoint is registered under the requested name.
    #[error("Unknown endpoint '{name}'")]
    UnknownEndpoint {
        /// The name that was looked up.
        name: String,
    },
}

// ---------------------------------------------------------------------------
// Transport errors
// ---------------------------------------------------------------------------

/// Failures reported by a [`crate::Transport`] implementation.
///
/// HTTP error statuses are *not* transport failures: the transport returns a
/// [`crate::Response`] for every status the server produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The connection could not be established or was lost mid-request.
    #[error("Connection failed: {message}")]
    Connection {
        /// Description from the underlying client.
        message: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request timed out: {message}")]
    Timeout {
        /// Description from the underlying client.
        message: String,
    },

    /// The caller cancelled the request through its cancellation token.
    #[error("Request was cancelled")]
    Cancelled,

    /// The request could not be turned into a valid wire request
    /// (bad base URL, invalid header value).
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Description of the problem.
        message: String,
    },

    /// The request body could not be encoded.
    #[error("Request body could not be encoded: {message}")]
    Body {
        /// Description of the encoding failure.
        message: String,
    },

    /// The transport itself failed while handling the call, for example a
    /// worker thread that did not finish.
    #[error("Transport failure: {message}")]
    Internal {
        /// Description of the failure.
        message: String,
    },
}

impl TransportError {
    /// Returns whether a caller may retry the failed call.
    pub fn retry_policy(&self) -> RetryPolicy {
        match self {
            TransportError::Connection { .. } | TransportError::Timeout { .. } => {
                RetryPolicy::Retryable { after: None }
            }
            TransportError::Cancelled
            | TransportError::InvalidRequest { .. }
            | TransportError::Body { .. }
            | TransportError::Internal { .. } => RetryPolicy::NonRetryable,
        }
    }
}

// ---------------------------------------------------------------------------
// Caller-facing union
// ---------------------------------------------------------------------------

/// Everything a namespace call can fail with.
///
/// No translation happens on the way up: the inner error is exactly what the
/// descriptor or the transport produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request could not be resolved; the transport was not called.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The transport failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
