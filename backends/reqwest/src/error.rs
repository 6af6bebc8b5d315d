use std::io;

use fluent_request_interface::Error as FluentError;
use thiserror::Error;

/// Failures specific to the reqwest backend.
///
/// Converted into [`FluentError`] before leaving the backend; the original error is kept as
/// the source of [`FluentError::Transport`].
#[derive(Error, Debug)]
pub enum ReqwestBackendError {
    /// An error reported by reqwest.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// A header name the caller set is not valid.
    #[error("invalid header name: {0}")]
    InvalidHeaderName(String),
    /// A header value the caller set is not valid.
    #[error("invalid header value for {0}")]
    InvalidHeaderValue(String),
    /// Reading the response body failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<ReqwestBackendError> for FluentError {
    fn from(err: ReqwestBackendError) -> Self {
        match err {
            ReqwestBackendError::Io(e) => FluentError::Body(e),
            other => FluentError::transport(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReqwestBackendError>;
