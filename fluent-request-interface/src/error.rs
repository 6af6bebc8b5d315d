//! Error types for fluent-request operations.

use std::io;

use thiserror::Error;

/// Errors produced while executing a request or reading its response.
///
/// Every variant carries the underlying failure untouched as its source. No variant is ever
/// retried by the library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The target URL could not be parsed. No I/O was attempted.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[source] url::ParseError),
    /// The target URL contains an ASCII control character, or starts or ends with a space.
    /// No I/O was attempted.
    #[error("Invalid URL: unexpected character {byte:#04x} at byte {position}")]
    InvalidUrlCharacter {
        /// Byte offset of the offending character.
        position: usize,
        /// The offending byte.
        byte: u8,
    },
    /// The configured proxy URL could not be parsed.
    #[error("Invalid proxy URL {proxy:?}: {source}")]
    InvalidProxy {
        /// The proxy string as configured.
        proxy: String,
        /// The parse failure.
        #[source]
        source: url::ParseError,
    },
    /// The backend failed to deliver the request or receive the response.
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The request context was cancelled before the call finished.
    #[error("Request cancelled")]
    Cancelled,
    /// The request context's deadline passed before the call finished.
    #[error("Request deadline exceeded")]
    DeadlineExceeded,
    /// Reading the response body failed after the response head was received.
    #[error("Error reading response body: {0}")]
    Body(#[source] io::Error),
    /// No backend is available to execute the request.
    #[error("No backend available. Enable the `reqwest` feature or call `Client::with_backend`.")]
    NoBackend,
}

impl Error {
    /// Wraps any backend failure into [`Error::Transport`].
    pub fn transport(e: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Transport(e.into())
    }

    /// Returns `true` for failures of the network call itself, including context
    /// cancellation and deadline expiry.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Cancelled | Self::DeadlineExceeded
        )
    }

    /// Returns `true` if the target or proxy URL was malformed.
    pub fn is_url(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl(_) | Self::InvalidUrlCharacter { .. } | Self::InvalidProxy { .. }
        )
    }
}

/// Result type for fluent-request operations.
pub type Result<T> = std::result::Result<T, Error>;
