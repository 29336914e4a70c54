//! Request transport
//!
//! A [`Transport`] delivers one [`HttpRequest`] and returns the server's
//! [`HttpResponse`], whatever its status. Only failures to get a response at
//! all are [`TransportError`]s; status handling lives in [`crate::api`].

use featureboard_executor::http::{self, HttpRequest, HttpResponse};
use featureboard_executor::Executor;
use thiserror::Error;

/// The request did not produce a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct TransportError {
    /// What went wrong
    pub reason: String,
}

impl TransportError {
    /// Create a transport error.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Delivers requests to a featureboard server.
pub trait Transport {
    /// Send one request and wait for its response.
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}

/// In-process transport that routes requests straight into an [`Executor`].
///
/// Bodies still pass through JSON in both directions, exactly as they would
/// over a socket.
#[derive(Debug, Clone)]
pub struct LocalTransport {
    executor: Executor,
}

impl LocalTransport {
    /// Wrap an executor.
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }

    /// The wrapped executor
    pub fn executor(&self) -> &Executor {
        &self.executor
    }
}

impl Transport for LocalTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        Ok(http::handle(&self.executor, &request))
    }
}
