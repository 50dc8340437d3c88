use thiserror::Error;

/// Failure of the underlying HTTP transport: the request never produced an
/// HTTP response at all (network unreachable, DNS failure, aborted fetch).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

/// Classified failure of an authenticated request.
///
/// The client handles each kind locally (message and/or navigation); these
/// variants exist so the handling code branches on one classification
/// instead of raw status numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never reached the server.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// 401: the access token was rejected.
    #[error("session expired")]
    AuthExpired,
    /// 404: the resource does not exist.
    #[error("resource not found")]
    NotFound,
    /// 403: the session lacks permission for the resource.
    #[error("access forbidden")]
    Forbidden,
    /// Any other non-2xx status.
    #[error("request failed with status {0}")]
    Http(u16),
}

impl FetchError {
    /// Classifies a non-2xx HTTP status code.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::AuthExpired,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            other => Self::Http(other),
        }
    }
}
