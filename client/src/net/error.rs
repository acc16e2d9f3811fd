//! Error type shared by every REST helper.

use thiserror::Error;

/// A failed API call.
///
/// The UI collapses all variants into one message per call site; the
/// variants exist so logs and tests can tell them apart.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{status} {status_text}")]
    Status { status: u16, status_text: String },
    /// The body was not the JSON shape we expected.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// HTTP is only performed in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, falling back to a generic label when the server
    /// sent no reason phrase.
    pub fn status(status: u16, status_text: &str) -> Self {
        let status_text = if status_text.trim().is_empty() {
            "Request Failed".to_owned()
        } else {
            status_text.trim().to_owned()
        };
        Self::Status { status, status_text }
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Network(err.to_string())
    }
}
